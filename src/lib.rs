//! # Introduction
//!
//! `mjava` is the front end of a compiler for MJava, a small Java-like
//! teaching language. It scans source text into tokens and parses them into
//! an abstract syntax tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Token → Parser → AST → display string → format_nested
//! ```
//!
//! 1. [`parser::scanner`] pulls one [`parser::token::Token`] at a time.
//! 2. [`parser::parse`] drives the scanner with one token of lookahead and
//!    builds a [`parser::ast::Program`].
//! 3. [`parser::diagnostics`] collects token and syntax errors; neither stage
//!    stops on the first error.
//! 4. [`format`] re-indents the AST display string for the `mjava` binary.
//!
//! ```
//! use mjava::parser::parse::Parser;
//! use mjava::parser::scanner::Scanner;
//!
//! let source = "class Main { public static void main(String[] a) { System.out.println(1 + 2); } }";
//! let mut scanner = Scanner::from_source("Main.mj", source);
//! let program = Parser::new(&mut scanner).parse();
//!
//! assert!(scanner.diagnostics().is_empty());
//! assert_eq!(program.classes.len(), 1);
//! ```
//!
//! Type checking, semantic analysis and code generation are not part of
//! this crate.

pub mod format;
pub mod parser;

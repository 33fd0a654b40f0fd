//! MJava source code parser
//!
//! This module transforms MJava source text into an Abstract Syntax Tree (AST):
//! - [`token`]: token and source-location value types
//! - [`dictionary`]: keyword/operator table
//! - [`scanner`]: tokenization (source text → tokens), one token per call
//! - [`parse`]: parsing (tokens → AST), with productions split over
//!   `declarations`, `statements` and `expressions`
//! - [`ast`]: AST node definitions
//! - [`diagnostics`]: token and syntax errors collected along the way
//!
//! # Supported MJava
//!
//! - A main class with `public static void main(String[] args)`, then classes
//!   with an optional `extends`, member variables and `public` methods
//! - Types: `int`, `boolean`, `char`, `String`, `double`, class names, `T[]`
//! - Statements: declarations, `if`/`else`, `while`, `for`, blocks,
//!   `System.out.println`, `return`
//! - Expressions: `=`, `&&`, `<`, `+`, `-`, `*`, `!`, member access, indexing,
//!   method calls, `new`, `length`, `this`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
mod declarations;
pub mod diagnostics;
pub mod dictionary;
mod expressions;
pub mod parse;
pub mod scanner;
mod statements;
pub mod token;

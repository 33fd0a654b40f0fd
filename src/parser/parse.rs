//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, resynchronization, `parse()`
//! - `declarations`: main class, class, method and variable declarations
//! - `statements`: if, while, for, print, return and blocks
//! - `expressions`: primary dispatch and precedence climbing
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! The parser never owns a token buffer: it holds the [`Scanner`] by exclusive
//! borrow and reads one token of lookahead from it. Every production returns
//! [`PResult`]; a failed production yields no node, and the list loops in
//! [`Parser::parse`], class bodies, method bodies and blocks record the error
//! and resynchronize so that one bad statement never hides the rest of the file.

use crate::parser::ast::*;
use crate::parser::diagnostics::Diagnostics;
use crate::parser::dictionary::Dictionary;
use crate::parser::scanner::Scanner;
use crate::parser::token::{Token, TokenKind, TokenLocation, TokenValue};
use thiserror::Error;

/// Failure of a single production
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("{location}: {message}")]
    Syntax {
        location: TokenLocation,
        message: String,
    },
    /// A token that no production of the grammar handles
    #[error("{location}: unsupported construct: {construct}")]
    Unsupported {
        location: TokenLocation,
        construct: String,
    },
}

impl ParseError {
    pub fn location(&self) -> &TokenLocation {
        match self {
            ParseError::Syntax { location, .. } => location,
            ParseError::Unsupported { location, .. } => location,
        }
    }

    /// The message without the location prefix.
    pub fn message(&self) -> String {
        match self {
            ParseError::Syntax { message, .. } => message.clone(),
            ParseError::Unsupported { construct, .. } => {
                format!("unsupported construct: {}", construct)
            }
        }
    }
}

pub type PResult<T> = Result<T, ParseError>;

/// Recursive descent parser for MJava
pub struct Parser<'s> {
    pub(crate) scanner: &'s mut Scanner,
    syntax_errors: usize,
}

impl<'s> Parser<'s> {
    /// Wrap `scanner` and pull the first token of lookahead.
    pub fn new(scanner: &'s mut Scanner) -> Self {
        scanner.next_token();
        Self {
            scanner,
            syntax_errors: 0,
        }
    }

    /// Parse a whole compilation unit.
    ///
    /// Never fails: syntax errors are recorded in [`Parser::diagnostics`] and
    /// the returned [`Program`] holds every class that parsed.
    pub fn parse(&mut self) -> Program {
        let mut program = Program::new(self.current_location());

        if self.is_at_end() {
            let location = self.current_location();
            self.report(ParseError::Syntax {
                location,
                message: "The file is empty.".to_string(),
            });
            return program;
        }

        log::trace!("parsing program {}", self.scanner.source_name());

        let start = self.scanner.tokens_emitted();
        match self.parse_main_class() {
            Ok(main_class) => program.classes.push(main_class),
            Err(err) => {
                self.report(err);
                self.recover(start);
            }
        }

        while !self.is_at_end() {
            if self.match_value(TokenValue::Semicolon) {
                continue;
            }

            let start = self.scanner.tokens_emitted();
            let item = if self.check(TokenValue::Class) {
                self.parse_class_declaration()
            } else {
                self.parse_statement()
            };

            match item {
                Ok(node) => {
                    if let Some(class) = self.expect_ast_kind(node, AstKind::ClassDeclaration) {
                        program.classes.push(class);
                    }
                }
                Err(err) => {
                    self.report(err);
                    self.recover(start);
                }
            }
        }

        program
    }

    /// Every diagnostic recorded so far, token errors included.
    pub fn diagnostics(&self) -> &Diagnostics {
        self.scanner.diagnostics()
    }

    /// Whether any syntax error has been recorded.
    pub fn had_error(&self) -> bool {
        self.syntax_errors > 0
    }

    // ===== Helper methods =====

    pub(crate) fn current(&self) -> &Token {
        self.scanner.current_token()
    }

    pub(crate) fn current_location(&self) -> TokenLocation {
        self.current().location().clone()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    /// Consume the current token and return it.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !token.is_eof() {
            self.scanner.next_token();
        }
        token
    }

    pub(crate) fn check(&self, value: TokenValue) -> bool {
        self.current().is(value)
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.current().is_kind(kind)
    }

    /// Consume the current token if it is `value`.
    pub(crate) fn match_value(&mut self, value: TokenValue) -> bool {
        if self.check(value) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_value(&mut self, value: TokenValue) -> PResult<Token> {
        if self.check(value) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(Dictionary::spelling(value)))
        }
    }

    pub(crate) fn expect_kind(&mut self, kind: TokenKind) -> PResult<Token> {
        if self.check_kind(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.description()))
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> PResult<String> {
        Ok(self.expect_kind(TokenKind::Identifier)?.lexeme().to_string())
    }

    /// Syntax error for finding the current token where `expected` belongs.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::Syntax {
            location: self.current_location(),
            message: format!("Expected ' {} ', but find {}", expected, self.current()),
        }
    }

    /// Keep `node` if it is of `kind`; otherwise diagnose and drop it.
    pub(crate) fn expect_ast_kind(&mut self, node: AstNode, kind: AstKind) -> Option<AstNode> {
        if node.kind() == kind {
            return Some(node);
        }

        self.report(ParseError::Syntax {
            location: node.location().clone(),
            message: format!("Expected ' {} ', but find {}", kind, node.kind()),
        });
        None
    }

    /// Record a failed production in the shared diagnostics.
    pub(crate) fn report(&mut self, err: ParseError) {
        log::debug!("syntax error: {}", err);
        self.syntax_errors += 1;
        let location = err.location().clone();
        self.scanner
            .diagnostics_mut()
            .syntax_error(location, err.message());
    }

    /// Skip to a point where a list loop can try again after a failed item
    /// that started when `start` tokens had been emitted.
    ///
    /// At least one token is consumed overall. Skipping then runs up to and
    /// including the next `;`, and stops before `}`, end of file, or a token
    /// that begins a statement or declaration.
    pub(crate) fn recover(&mut self, start: usize) {
        if self.scanner.tokens_emitted() == start && !self.is_at_end() {
            self.advance();
        }

        loop {
            if self.is_at_end() || self.check(TokenValue::RBrace) {
                break;
            }
            if self.match_value(TokenValue::Semicolon) {
                break;
            }
            if self.starts_statement() {
                break;
            }
            self.advance();
        }

        log::debug!("resynchronized at {}", self.current().location());
    }

    /// Skip past a failed member method that started when `start` tokens had
    /// been emitted.
    ///
    /// At least one token is consumed overall. Braces are counted from the
    /// failure point so a method body is skipped whole; skipping stops before
    /// the next `public` or the class's closing `}` at depth zero, or at end
    /// of file.
    pub(crate) fn recover_member(&mut self, start: usize) {
        if self.scanner.tokens_emitted() == start && !self.is_at_end() {
            self.advance();
        }

        let mut depth = 0usize;
        while !self.is_at_end() {
            if depth == 0 && (self.check(TokenValue::Public) || self.check(TokenValue::RBrace)) {
                break;
            }
            if self.check(TokenValue::LBrace) {
                depth += 1;
            } else if self.check(TokenValue::RBrace) {
                depth -= 1;
            }
            self.advance();
        }

        log::debug!("resynchronized member at {}", self.current().location());
    }

    fn starts_statement(&self) -> bool {
        matches!(
            self.current().value(),
            TokenValue::Class
                | TokenValue::Public
                | TokenValue::If
                | TokenValue::While
                | TokenValue::For
                | TokenValue::Print
                | TokenValue::Return
                | TokenValue::LBrace
        ) || self.check_kind(TokenKind::Type)
    }
}

//! Statement parsing implementation
//!
//! This module handles parsing of all MJava statement types:
//!
//! - Variable declarations: `int x;`, `int[] xs;`, `Foo f;`
//! - Control flow: `if`, `while`, `for`
//! - `System.out.println(expr);` and `return expr;`
//! - Compound statements: `{ ... }`
//! - Expression statements: assignments, method calls, `new`
//!
//! # Grammar
//!
//! ```text
//! statement  ::= var_decl | if_stmt | while_stmt | for_stmt
//!              | print_stmt | return_stmt | block | expression ";"?
//! if_stmt    ::= "if" "(" expression ")" statement ("else" statement)?
//! while_stmt ::= "while" "(" expression ")" statement
//! for_stmt   ::= "for" "(" expression? ";" expression? ";" expression? ")" statement
//! print_stmt ::= "System.out.println" "(" expression ")" ";"
//! return_stmt ::= "return" expression ";"
//! block      ::= "{" statement* "}"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{PResult, Parser};
use crate::parser::token::{TokenKind, TokenValue};

impl Parser<'_> {
    /// Parse a statement
    pub fn parse_statement(&mut self) -> PResult<AstNode> {
        match self.current().value() {
            TokenValue::If => self.parse_if_statement(),
            TokenValue::While => self.parse_while_statement(),
            TokenValue::For => self.parse_for_statement(),
            TokenValue::Print => self.parse_print_statement(),
            TokenValue::Return => self.parse_return_statement(),
            TokenValue::LBrace => self.parse_block(),
            _ if self.check_kind(TokenKind::Type) => {
                let decl = self.parse_variable_declaration()?;
                self.expect_value(TokenValue::Semicolon)?;
                Ok(decl)
            }
            _ => {
                let expr = self.parse_expression()?;
                self.match_value(TokenValue::Semicolon);
                Ok(expr)
            }
        }
    }

    /// Parse if statement: if (cond) stmt (else stmt)?
    pub(crate) fn parse_if_statement(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::If)?.location().clone();
        let condition = Box::new(self.parse_condition()?);
        let then_branch = Box::new(self.parse_statement()?);

        let else_branch = if self.match_value(TokenValue::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(AstNode::IfStatement {
            condition,
            then_branch,
            else_branch,
            location,
        })
    }

    /// Parse while statement: while (cond) stmt
    pub(crate) fn parse_while_statement(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::While)?.location().clone();
        let condition = Box::new(self.parse_condition()?);
        let body = Box::new(self.parse_statement()?);

        Ok(AstNode::WhileStatement {
            condition,
            body,
            location,
        })
    }

    /// Parse for statement: for (init; cond; update) stmt, every clause optional
    pub(crate) fn parse_for_statement(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::For)?.location().clone();
        self.expect_value(TokenValue::LParen)?;

        let init = self.parse_optional_clause(TokenValue::Semicolon)?;
        self.expect_value(TokenValue::Semicolon)?;

        let condition = self.parse_optional_clause(TokenValue::Semicolon)?;
        self.expect_value(TokenValue::Semicolon)?;

        let update = self.parse_optional_clause(TokenValue::RParen)?;
        self.expect_value(TokenValue::RParen)?;

        let body = Box::new(self.parse_statement()?);

        Ok(AstNode::ForStatement {
            init,
            condition,
            update,
            body,
            location,
        })
    }

    fn parse_optional_clause(&mut self, terminator: TokenValue) -> PResult<Option<Box<AstNode>>> {
        if self.check(terminator) {
            Ok(None)
        } else {
            Ok(Some(Box::new(self.parse_expression()?)))
        }
    }

    /// Parse print statement: System.out.println(expr);
    pub(crate) fn parse_print_statement(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::Print)?.location().clone();
        let expression = Box::new(self.parse_condition()?);
        self.expect_value(TokenValue::Semicolon)?;

        Ok(AstNode::PrintStatement {
            expression,
            location,
        })
    }

    /// Parse return statement: return expr;
    pub(crate) fn parse_return_statement(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::Return)?.location().clone();
        let expression = Box::new(self.parse_expression()?);
        self.expect_value(TokenValue::Semicolon)?;

        Ok(AstNode::ReturnStatement {
            expression,
            location,
        })
    }

    /// Parse block: { statement* }
    pub(crate) fn parse_block(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::LBrace)?.location().clone();

        let mut statements = Vec::new();
        while !self.check(TokenValue::RBrace) && !self.is_at_end() {
            let start = self.scanner.tokens_emitted();
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.report(err);
                    self.recover(start);
                }
            }
        }

        self.expect_value(TokenValue::RBrace)?;

        Ok(AstNode::Block {
            statements,
            location,
        })
    }

    /// Parenthesized expression after `if`, `while` and the print keyword
    fn parse_condition(&mut self) -> PResult<AstNode> {
        self.expect_value(TokenValue::LParen)?;
        let expr = self.parse_expression()?;
        self.expect_value(TokenValue::RParen)?;
        Ok(expr)
    }
}

//! Expression parsing implementation
//!
//! This module handles parsing of MJava expressions using precedence climbing
//! for binary operators and recursive descent for everything else.
//!
//! # Supported Expressions
//!
//! - Literals: integers, reals, characters, strings, `true` / `false`
//! - Variables, `this`, indexed variables `a[i]`
//! - Method calls `f(x, y)` and member access `obj.f(x)`, `arr.length`
//! - Binary operators: `=`, `&&`, `<`, `+`, `-`, `*`
//! - Unary `!`
//! - Allocation: `new Foo()`, `new int[n]`
//!
//! # Precedence
//!
//! Binary precedence comes from the token table (`=` lowest, `*` highest).
//! Operators of equal precedence associate to the left. Member access binds
//! tighter than any binary operator and is handled while parsing an operand.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{PResult, ParseError, Parser};
use crate::parser::token::{Literal, TokenKind, TokenValue};

impl Parser<'_> {
    /// Parse expression (top-level entry point)
    pub fn parse_expression(&mut self) -> PResult<AstNode> {
        let lhs = self.parse_operand()?;
        self.parse_bin_op_rhs(0, lhs)
    }

    /// Precedence climbing over binary operators with precedence >= `min_prec`
    fn parse_bin_op_rhs(&mut self, min_prec: i32, mut lhs: AstNode) -> PResult<AstNode> {
        loop {
            let prec = self.current().precedence();
            if prec < min_prec || prec < 0 {
                return Ok(lhs);
            }

            let op_token = self.advance();
            let op = binary_op(op_token.value()).ok_or_else(|| ParseError::Unsupported {
                location: op_token.location().clone(),
                construct: format!("binary {}", op_token),
            })?;

            let mut rhs = self.parse_operand()?;

            // A tighter operator after the rhs takes the rhs as its own lhs.
            if prec < self.current().precedence() {
                rhs = self.parse_bin_op_rhs(prec + 1, rhs)?;
            }

            lhs = AstNode::BinaryOpExpression {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                location: op_token.location().clone(),
            };
        }
    }

    /// Parse a primary followed by any number of `.member` accesses
    fn parse_operand(&mut self) -> PResult<AstNode> {
        let mut expr = self.parse_primary()?;

        while self.check(TokenValue::Dot) {
            let location = self.advance().location().clone();
            let member = match self.current().value() {
                TokenValue::Length => self.parse_length()?,
                _ if self.check_kind(TokenKind::Identifier) => self.parse_identifier_expression()?,
                _ => return Err(self.unexpected("member name")),
            };

            expr = AstNode::BinaryOpExpression {
                op: BinOp::Member,
                lhs: Box::new(expr),
                rhs: Box::new(member),
                location,
            };
        }

        Ok(expr)
    }

    /// Dispatch on the current token to the production that starts with it
    pub(crate) fn parse_primary(&mut self) -> PResult<AstNode> {
        let token = self.current().clone();

        match token.kind() {
            TokenKind::Integer
            | TokenKind::Real
            | TokenKind::CharLiteral
            | TokenKind::StringLiteral
            | TokenKind::Boolean => self.parse_literal(),
            TokenKind::Identifier => self.parse_identifier_expression(),
            TokenKind::Keyword => match token.value() {
                TokenValue::This => {
                    self.advance();
                    Ok(AstNode::Variable {
                        name: "this".to_string(),
                        index: None,
                        location: token.location().clone(),
                    })
                }
                TokenValue::New => self.parse_new_expression(),
                TokenValue::Length => self.parse_length(),
                _ => Err(ParseError::Unsupported {
                    location: token.location().clone(),
                    construct: format!("{} in an expression", token),
                }),
            },
            TokenKind::Operator if token.is(TokenValue::Not) => self.parse_unary(),
            TokenKind::Delimiter if token.is(TokenValue::LParen) => self.parse_paren(),
            TokenKind::Operator | TokenKind::Delimiter | TokenKind::Type => {
                Err(ParseError::Syntax {
                    location: token.location().clone(),
                    message: format!(
                        "unknown token when expecting an expression, find {}",
                        token
                    ),
                })
            }
            TokenKind::EndOfFile => Err(ParseError::Syntax {
                location: token.location().clone(),
                message: format!("Find unexpected {}", token),
            }),
            TokenKind::Unknown => Err(ParseError::Unsupported {
                location: token.location().clone(),
                construct: token.to_string(),
            }),
        }
    }

    /// Parse literal token into the matching literal node
    fn parse_literal(&mut self) -> PResult<AstNode> {
        let token = self.advance();
        let location = token.location().clone();

        let node = match (token.kind(), token.literal_value()) {
            (TokenKind::Integer, Literal::Int(n)) => AstNode::IntegerLiteral(*n, location),
            (TokenKind::Real, Literal::Real(r)) => AstNode::RealLiteral(*r, location),
            (TokenKind::CharLiteral, Literal::Int(code)) => {
                let ch = char::from_u32(*code as u32).unwrap_or_default();
                AstNode::CharLiteral(ch, location)
            }
            (TokenKind::StringLiteral, Literal::Str(s)) => AstNode::StringLiteral(s.clone(), location),
            (TokenKind::Boolean, _) => AstNode::BooleanLiteral(token.is(TokenValue::True), location),
            _ => {
                return Err(ParseError::Unsupported {
                    location,
                    construct: format!("literal {}", token),
                })
            }
        };

        Ok(node)
    }

    /// Parse an expression that starts with an identifier:
    ///
    /// - `Foo x` declares a variable of class type
    /// - `f(args)` calls a method
    /// - `a[i]` indexes an array, `Foo[] x` declares an array variable
    /// - anything else is a plain variable
    fn parse_identifier_expression(&mut self) -> PResult<AstNode> {
        let token = self.expect_kind(TokenKind::Identifier)?;
        let name = token.lexeme().to_string();
        let location = token.location().clone();

        if self.check_kind(TokenKind::Identifier) {
            let var_name = self.advance().lexeme().to_string();
            return Ok(AstNode::VariableDeclaration {
                type_name: name,
                name: var_name,
                location,
            });
        }

        if self.check(TokenValue::LParen) {
            let arguments = self.parse_call_arguments()?;
            return Ok(AstNode::MethodCall {
                name,
                arguments,
                location,
            });
        }

        if self.match_value(TokenValue::LBrack) {
            if self.match_value(TokenValue::RBrack) {
                let var_name = self.expect_identifier()?;
                return Ok(AstNode::VariableDeclaration {
                    type_name: format!("{}[]", name),
                    name: var_name,
                    location,
                });
            }

            let index = self.parse_expression()?;
            self.expect_value(TokenValue::RBrack)?;
            return Ok(AstNode::Variable {
                name,
                index: Some(Box::new(index)),
                location,
            });
        }

        Ok(AstNode::Variable {
            name,
            index: None,
            location,
        })
    }

    /// Parse call arguments including the parentheses: (expr, expr, ...)
    fn parse_call_arguments(&mut self) -> PResult<Vec<AstNode>> {
        self.expect_value(TokenValue::LParen)?;

        let mut arguments = Vec::new();
        if self.match_value(TokenValue::RParen) {
            return Ok(arguments);
        }

        loop {
            arguments.push(self.parse_expression()?);
            if !self.match_value(TokenValue::Comma) {
                break;
            }
        }

        self.expect_value(TokenValue::RParen)?;
        Ok(arguments)
    }

    /// `length` is treated as a call of a built-in method with no arguments
    fn parse_length(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::Length)?.location().clone();
        Ok(AstNode::MethodCall {
            name: "length".to_string(),
            arguments: Vec::new(),
            location,
        })
    }

    /// Parse allocation: new T[len] or new Foo(args)
    fn parse_new_expression(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::New)?.location().clone();

        let type_token = if self.check_kind(TokenKind::Type) {
            self.advance()
        } else {
            self.expect_kind(TokenKind::Identifier)?
        };
        let type_name = type_token.lexeme().to_string();

        if self.match_value(TokenValue::LBrack) {
            let length = self.parse_expression()?;
            self.expect_value(TokenValue::RBrack)?;
            return Ok(AstNode::NewStatement {
                type_name: format!("{}[]", type_name),
                allocation: Allocation::Array {
                    length: Box::new(length),
                },
                location,
            });
        }

        // Only class types have constructors.
        if type_token.is_kind(TokenKind::Type) {
            return Err(self.unexpected("["));
        }

        let arguments = self.parse_call_arguments()?;
        Ok(AstNode::NewStatement {
            type_name: type_name.clone(),
            allocation: Allocation::Object {
                constructor: Box::new(AstNode::MethodCall {
                    name: type_name,
                    arguments,
                    location: type_token.location().clone(),
                }),
            },
            location,
        })
    }

    /// Parse unary not: ! operand
    fn parse_unary(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::Not)?.location().clone();
        let operand = self.parse_operand()?;
        Ok(AstNode::UnaryOpExpression {
            op: UnOp::Not,
            operand: Box::new(operand),
            location,
        })
    }

    /// Parse parenthesized expression: ( expr )
    fn parse_paren(&mut self) -> PResult<AstNode> {
        self.expect_value(TokenValue::LParen)?;
        let expr = self.parse_expression()?;
        self.expect_value(TokenValue::RParen)?;
        Ok(expr)
    }
}

fn binary_op(value: TokenValue) -> Option<BinOp> {
    match value {
        TokenValue::Assign => Some(BinOp::Assign),
        TokenValue::And => Some(BinOp::And),
        TokenValue::Lt => Some(BinOp::Lt),
        TokenValue::Add => Some(BinOp::Add),
        TokenValue::Sub => Some(BinOp::Sub),
        TokenValue::Multi => Some(BinOp::Mul),
        _ => None,
    }
}

//! Declaration parsing implementation
//!
//! This module handles parsing of MJava declarations:
//!
//! - The main class holding `public static void main(String[] args)`
//! - Class declarations with an optional base class
//! - Member variables, methods, parameters and method bodies
//! - Type names: primitive types, class names, one array dimension
//!
//! # Grammar
//!
//! ```text
//! main_class  ::= "class" identifier "{" main_method "}"
//! main_method ::= "public" "static" "void" "main" "(" "String" "[" "]" identifier ")" method_body
//! class_decl  ::= "class" identifier ("extends" identifier)? "{" var_decl* method_decl* "}"
//! method_decl ::= "public" keyword* ("void" | type) (identifier | "main") "(" params? ")" method_body
//! params      ::= type identifier ("," type identifier)*
//! method_body ::= "{" var_decl* statement* "return" expression ";" "}"
//! var_decl    ::= type identifier ";"
//! type        ::= (data_type | identifier) ("[" "]")?
//! ```
//!
//! The main method body has no trailing `return`. Method attributes are any
//! run of keywords other than `void`; they are recorded as written.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{PResult, Parser};
use crate::parser::token::{TokenKind, TokenValue};

impl Parser<'_> {
    /// Parse the main class: class Name { public static void main(...) { ... } }
    pub(crate) fn parse_main_class(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::Class)?.location().clone();
        let name = self.expect_identifier()?;
        log::trace!("main class {}", name);

        self.expect_value(TokenValue::LBrace)?;
        let main_method = Box::new(self.parse_main_method()?);
        self.expect_value(TokenValue::RBrace)?;

        Ok(AstNode::MainClass {
            name,
            main_method,
            location,
        })
    }

    fn parse_main_method(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::Public)?.location().clone();
        self.expect_value(TokenValue::Static)?;
        self.expect_value(TokenValue::Void)?;
        self.expect_value(TokenValue::Main)?;
        self.expect_value(TokenValue::LParen)?;

        let param_location = self.expect_value(TokenValue::String)?.location().clone();
        self.expect_value(TokenValue::LBrack)?;
        self.expect_value(TokenValue::RBrack)?;
        let param_name = self.expect_identifier()?;
        self.expect_value(TokenValue::RParen)?;

        let body = Box::new(self.parse_method_body(false)?);

        Ok(AstNode::MethodDeclaration {
            attributes: vec!["public".to_string(), "static".to_string()],
            return_type: "void".to_string(),
            name: "main".to_string(),
            parameters: vec![AstNode::VariableDeclaration {
                type_name: "String[]".to_string(),
                name: param_name,
                location: param_location,
            }],
            body,
            location,
        })
    }

    /// Parse class declaration: class Name (extends Base)? { members }
    pub(crate) fn parse_class_declaration(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::Class)?.location().clone();
        let name = self.expect_identifier()?;
        log::trace!("class {}", name);

        let base_class = if self.match_value(TokenValue::Extends) {
            Some(self.expect_identifier()?)
        } else {
            None
        };

        self.expect_value(TokenValue::LBrace)?;

        // Member variables come first; the first `public` starts the methods.
        let mut member_variables = Vec::new();
        while !self.check(TokenValue::Public)
            && !self.check(TokenValue::RBrace)
            && !self.is_at_end()
        {
            let start = self.scanner.tokens_emitted();
            match self.parse_statement() {
                Ok(node) => {
                    if let Some(var) = self.expect_ast_kind(node, AstKind::VariableDeclaration) {
                        member_variables.push(var);
                    }
                }
                Err(err) => {
                    self.report(err);
                    self.recover(start);
                }
            }
        }

        let mut member_methods = Vec::new();
        while !self.check(TokenValue::RBrace) && !self.is_at_end() {
            let start = self.scanner.tokens_emitted();
            match self.parse_method_declaration() {
                Ok(method) => member_methods.push(method),
                Err(err) => {
                    self.report(err);
                    self.recover_member(start);
                }
            }
        }

        self.expect_value(TokenValue::RBrace)?;

        Ok(AstNode::ClassDeclaration {
            name,
            base_class,
            member_variables,
            member_methods,
            location,
        })
    }

    /// Parse method declaration: public keyword* (void | type) name(params) body
    pub(crate) fn parse_method_declaration(&mut self) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::Public)?.location().clone();

        let mut attributes = vec!["public".to_string()];
        while self.check_kind(TokenKind::Keyword) && !self.check(TokenValue::Void) {
            attributes.push(self.advance().lexeme().to_string());
        }

        let return_type = if self.match_value(TokenValue::Void) {
            "void".to_string()
        } else {
            self.parse_type()?
        };
        let name = if self.match_value(TokenValue::Main) {
            "main".to_string()
        } else {
            self.expect_identifier()?
        };
        log::trace!("method {}", name);

        let parameters = self.parse_parameters()?;
        let body = Box::new(self.parse_method_body(true)?);

        Ok(AstNode::MethodDeclaration {
            attributes,
            return_type,
            name,
            parameters,
            body,
            location,
        })
    }

    /// Parse parameter list including the parentheses
    fn parse_parameters(&mut self) -> PResult<Vec<AstNode>> {
        self.expect_value(TokenValue::LParen)?;

        let mut parameters = Vec::new();
        if self.match_value(TokenValue::RParen) {
            return Ok(parameters);
        }

        loop {
            let location = self.current_location();
            let type_name = self.parse_type()?;
            let name = self.expect_identifier()?;
            parameters.push(AstNode::VariableDeclaration {
                type_name,
                name,
                location,
            });

            if !self.match_value(TokenValue::Comma) {
                break;
            }
        }

        self.expect_value(TokenValue::RParen)?;
        Ok(parameters)
    }

    /// Parse method body: { var_decl* statement* return expr; }
    ///
    /// Variable declarations before the first statement are collected as
    /// local variables. A body that needs a `return` but has none is
    /// diagnosed and kept.
    pub(crate) fn parse_method_body(&mut self, requires_return: bool) -> PResult<AstNode> {
        let location = self.expect_value(TokenValue::LBrace)?.location().clone();

        let mut local_variables = Vec::new();
        let mut statements = Vec::new();

        while !self.check(TokenValue::RBrace)
            && !self.is_at_end()
            && !(requires_return && self.check(TokenValue::Return))
        {
            let start = self.scanner.tokens_emitted();
            match self.parse_statement() {
                Ok(node) if node.kind() == AstKind::VariableDeclaration && statements.is_empty() => {
                    local_variables.push(node)
                }
                Ok(node) => statements.push(node),
                Err(err) => {
                    self.report(err);
                    self.recover(start);
                }
            }
        }

        let return_statement = if !requires_return {
            None
        } else if self.check(TokenValue::Return) {
            let start = self.scanner.tokens_emitted();
            match self.parse_return_statement() {
                Ok(ret) => Some(Box::new(ret)),
                Err(err) => {
                    self.report(err);
                    self.recover(start);
                    None
                }
            }
        } else {
            let err = self.unexpected("return");
            self.report(err);
            None
        };

        self.expect_value(TokenValue::RBrace)?;

        Ok(AstNode::MethodBody {
            local_variables,
            statements,
            return_statement,
            location,
        })
    }

    /// Parse variable declaration starting at a data type: type name
    pub(crate) fn parse_variable_declaration(&mut self) -> PResult<AstNode> {
        let location = self.current_location();
        let type_name = self.parse_type()?;
        let name = self.expect_identifier()?;

        Ok(AstNode::VariableDeclaration {
            type_name,
            name,
            location,
        })
    }

    /// Parse a type name: data type or class name, optionally followed by `[]`
    pub(crate) fn parse_type(&mut self) -> PResult<String> {
        let mut type_name = if self.check_kind(TokenKind::Type) {
            self.advance().lexeme().to_string()
        } else if self.check_kind(TokenKind::Identifier) {
            self.advance().lexeme().to_string()
        } else {
            return Err(self.unexpected(TokenKind::Type.description()));
        };

        if self.match_value(TokenValue::LBrack) {
            self.expect_value(TokenValue::RBrack)?;
            type_name.push_str("[]");
        }

        Ok(type_name)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::Parser;
    use crate::parser::scanner::Scanner;

    const MAIN: &str = "class Main { public static void main(String[] a) { } }\n";

    fn parse(source: &str) -> (Program, usize) {
        let mut scanner = Scanner::from_source("test.mj", source);
        let program = Parser::new(&mut scanner).parse();
        let errors = scanner.diagnostics().len();
        (program, errors)
    }

    #[test]
    fn test_class_with_members() {
        let source = format!(
            "{}class Point extends Shape {{ int x; int[] ys; Point next; \
             public int getX(int scale, boolean flag) {{ return x; }} }}",
            MAIN
        );
        let (program, errors) = parse(&source);
        assert_eq!(errors, 0);

        match &program.classes[1] {
            AstNode::ClassDeclaration {
                name,
                base_class,
                member_variables,
                member_methods,
                ..
            } => {
                assert_eq!(name, "Point");
                assert_eq!(base_class.as_deref(), Some("Shape"));
                assert_eq!(member_variables.len(), 3);
                assert!(matches!(
                    &member_variables[1],
                    AstNode::VariableDeclaration { type_name, .. } if type_name == "int[]"
                ));
                assert!(matches!(
                    &member_variables[2],
                    AstNode::VariableDeclaration { type_name, name, .. }
                        if type_name == "Point" && name == "next"
                ));
                assert_eq!(member_methods.len(), 1);
                match &member_methods[0] {
                    AstNode::MethodDeclaration {
                        return_type,
                        parameters,
                        body,
                        ..
                    } => {
                        assert_eq!(return_type, "int");
                        assert_eq!(parameters.len(), 2);
                        assert!(matches!(
                            body.as_ref(),
                            AstNode::MethodBody { return_statement: Some(_), .. }
                        ));
                    }
                    _ => panic!("Expected method declaration"),
                }
            }
            _ => panic!("Expected class declaration"),
        }
    }

    #[test]
    fn test_method_body_locals_then_statements() {
        let source = format!(
            "{}class A {{ public int f() {{ int a; Foo b; a = 1; int c; return a; }} }}",
            MAIN
        );
        let (program, errors) = parse(&source);
        assert_eq!(errors, 0);

        let AstNode::ClassDeclaration { member_methods, .. } = &program.classes[1] else {
            panic!("Expected class declaration");
        };
        let AstNode::MethodDeclaration { body, .. } = &member_methods[0] else {
            panic!("Expected method declaration");
        };
        match body.as_ref() {
            AstNode::MethodBody {
                local_variables,
                statements,
                ..
            } => {
                assert_eq!(local_variables.len(), 2);
                // `int c` after a statement stays in statement order
                assert_eq!(statements.len(), 2);
            }
            _ => panic!("Expected method body"),
        }
    }

    #[test]
    fn test_missing_return_is_diagnosed() {
        let source = format!("{}class A {{ public int f() {{ x = 1; }} }}", MAIN);
        let (program, errors) = parse(&source);
        assert_eq!(errors, 1);
        assert_eq!(program.classes.len(), 2);
    }

    #[test]
    fn test_bad_member_recovers() {
        let source = format!(
            "{}class A {{ int ; int y; public int f() {{ return 1; }} }}",
            MAIN
        );
        let (program, errors) = parse(&source);
        assert_eq!(errors, 1);
        let AstNode::ClassDeclaration {
            member_variables,
            member_methods,
            ..
        } = &program.classes[1]
        else {
            panic!("Expected class declaration");
        };
        assert_eq!(member_variables.len(), 1);
        assert_eq!(member_methods.len(), 1);
    }

    #[test]
    fn test_void_method_and_keyword_attributes() {
        let source = format!(
            "{}class A {{ public void f() {{ return 0; }} \
             public static static int[] main(int n) {{ return n; }} }}",
            MAIN
        );
        let (program, errors) = parse(&source);
        assert_eq!(errors, 0);

        let AstNode::ClassDeclaration { member_methods, .. } = &program.classes[1] else {
            panic!("Expected class declaration");
        };
        assert_eq!(member_methods.len(), 2);
        assert!(matches!(
            &member_methods[0],
            AstNode::MethodDeclaration { return_type, name, attributes, .. }
                if return_type == "void" && name == "f" && attributes == &["public"]
        ));
        assert!(matches!(
            &member_methods[1],
            AstNode::MethodDeclaration { return_type, name, attributes, .. }
                if return_type == "int[]"
                    && name == "main"
                    && attributes == &["public", "static", "static"]
        ));
    }

    #[test]
    fn test_method_after_broken_header_survives() {
        let source = format!(
            "{}class A {{ public int f(int x {{ int y; y = 1; return y; }} \
             public int g() {{ return 2; }} }}",
            MAIN
        );
        let (program, errors) = parse(&source);
        assert_eq!(errors, 1);
        assert_eq!(program.classes.len(), 2);

        let AstNode::ClassDeclaration { member_methods, .. } = &program.classes[1] else {
            panic!("Expected class declaration");
        };
        assert_eq!(member_methods.len(), 1);
        assert!(matches!(
            &member_methods[0],
            AstNode::MethodDeclaration { name, .. } if name == "g"
        ));
    }

    #[test]
    fn test_bad_return_keeps_method() {
        let source = format!("{}class A {{ public int f() {{ return 1 + ; }} }}", MAIN);
        let (program, errors) = parse(&source);
        assert_eq!(errors, 1);

        let AstNode::ClassDeclaration { member_methods, .. } = &program.classes[1] else {
            panic!("Expected class declaration");
        };
        assert_eq!(member_methods.len(), 1);
    }
}

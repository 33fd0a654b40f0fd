// AST (Abstract Syntax Tree) definitions for MJava programs

use super::token::TokenLocation;
use std::fmt;

/// Tag for each node kind, used when a production needs a node of a specific kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AstKind {
    Program,
    Block,
    ClassDeclaration,
    MainClass,
    MethodDeclaration,
    MethodBody,
    MethodCall,
    VariableDeclaration,
    Variable,
    IfStatement,
    WhileStatement,
    ForStatement,
    ReturnStatement,
    PrintStatement,
    NewStatement,
    BinaryOpExpression,
    UnaryOpExpression,
    RealLiteral,
    IntegerLiteral,
    CharLiteral,
    StringLiteral,
    BooleanLiteral,
}

impl AstKind {
    pub fn description(self) -> &'static str {
        match self {
            AstKind::Program => "program",
            AstKind::Block => "block",
            AstKind::ClassDeclaration => "class declaration",
            AstKind::MainClass => "main class",
            AstKind::MethodDeclaration => "method declaration",
            AstKind::MethodBody => "method body",
            AstKind::MethodCall => "method call",
            AstKind::VariableDeclaration => "variable declaration",
            AstKind::Variable => "variable",
            AstKind::IfStatement => "if statement",
            AstKind::WhileStatement => "while statement",
            AstKind::ForStatement => "for statement",
            AstKind::ReturnStatement => "return statement",
            AstKind::PrintStatement => "print statement",
            AstKind::NewStatement => "new statement",
            AstKind::BinaryOpExpression => "binary expression",
            AstKind::UnaryOpExpression => "unary expression",
            AstKind::RealLiteral => "real literal",
            AstKind::IntegerLiteral => "integer literal",
            AstKind::CharLiteral => "char literal",
            AstKind::StringLiteral => "string literal",
            AstKind::BooleanLiteral => "boolean literal",
        }
    }
}

impl fmt::Display for AstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Assign, // =
    And,    // &&
    Lt,     // <
    Add,    // +
    Sub,    // -
    Mul,    // *
    Member, // .
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Assign => "=",
            BinOp::And => "&&",
            BinOp::Lt => "<",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Member => ".",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Not, // !x
}

impl UnOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Not => "!",
        }
    }
}

/// What a `new` expression allocates
#[derive(Debug, Clone, PartialEq)]
pub enum Allocation {
    /// `new Foo(args)`; the constructor is a `MethodCall` node
    Object { constructor: Box<AstNode> },
    /// `new int[len]`
    Array { length: Box<AstNode> },
}

/// AST nodes representing declarations, statements and expressions
///
/// Children are owned through `Box`/`Vec`, so every node has exactly one parent
/// and dropping a node drops its whole subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    // Declarations
    MainClass {
        name: String,
        main_method: Box<AstNode>,
        location: TokenLocation,
    },
    ClassDeclaration {
        name: String,
        base_class: Option<String>,
        member_variables: Vec<AstNode>,
        member_methods: Vec<AstNode>,
        location: TokenLocation,
    },
    MethodDeclaration {
        attributes: Vec<String>,
        return_type: String,
        name: String,
        parameters: Vec<AstNode>,
        body: Box<AstNode>,
        location: TokenLocation,
    },
    MethodBody {
        local_variables: Vec<AstNode>,
        statements: Vec<AstNode>,
        return_statement: Option<Box<AstNode>>,
        location: TokenLocation,
    },
    VariableDeclaration {
        type_name: String,
        name: String,
        location: TokenLocation,
    },

    // Statements
    Block {
        statements: Vec<AstNode>,
        location: TokenLocation,
    },
    IfStatement {
        condition: Box<AstNode>,
        then_branch: Box<AstNode>,
        else_branch: Option<Box<AstNode>>,
        location: TokenLocation,
    },
    WhileStatement {
        condition: Box<AstNode>,
        body: Box<AstNode>,
        location: TokenLocation,
    },
    ForStatement {
        init: Option<Box<AstNode>>,
        condition: Option<Box<AstNode>>,
        update: Option<Box<AstNode>>,
        body: Box<AstNode>,
        location: TokenLocation,
    },
    ReturnStatement {
        expression: Box<AstNode>,
        location: TokenLocation,
    },
    PrintStatement {
        expression: Box<AstNode>,
        location: TokenLocation,
    },

    // Expressions
    NewStatement {
        type_name: String,
        allocation: Allocation,
        location: TokenLocation,
    },
    MethodCall {
        name: String,
        arguments: Vec<AstNode>,
        location: TokenLocation,
    },
    Variable {
        name: String,
        index: Option<Box<AstNode>>,
        location: TokenLocation,
    },
    BinaryOpExpression {
        op: BinOp,
        lhs: Box<AstNode>,
        rhs: Box<AstNode>,
        location: TokenLocation,
    },
    UnaryOpExpression {
        op: UnOp,
        operand: Box<AstNode>,
        location: TokenLocation,
    },
    RealLiteral(f64, TokenLocation),
    IntegerLiteral(i32, TokenLocation),
    CharLiteral(char, TokenLocation),
    StringLiteral(String, TokenLocation),
    BooleanLiteral(bool, TokenLocation),
}

impl AstNode {
    /// Get the source location of this node
    pub fn location(&self) -> &TokenLocation {
        match self {
            AstNode::MainClass { location, .. } => location,
            AstNode::ClassDeclaration { location, .. } => location,
            AstNode::MethodDeclaration { location, .. } => location,
            AstNode::MethodBody { location, .. } => location,
            AstNode::VariableDeclaration { location, .. } => location,
            AstNode::Block { location, .. } => location,
            AstNode::IfStatement { location, .. } => location,
            AstNode::WhileStatement { location, .. } => location,
            AstNode::ForStatement { location, .. } => location,
            AstNode::ReturnStatement { location, .. } => location,
            AstNode::PrintStatement { location, .. } => location,
            AstNode::NewStatement { location, .. } => location,
            AstNode::MethodCall { location, .. } => location,
            AstNode::Variable { location, .. } => location,
            AstNode::BinaryOpExpression { location, .. } => location,
            AstNode::UnaryOpExpression { location, .. } => location,
            AstNode::RealLiteral(_, loc) => loc,
            AstNode::IntegerLiteral(_, loc) => loc,
            AstNode::CharLiteral(_, loc) => loc,
            AstNode::StringLiteral(_, loc) => loc,
            AstNode::BooleanLiteral(_, loc) => loc,
        }
    }

    pub fn kind(&self) -> AstKind {
        match self {
            AstNode::MainClass { .. } => AstKind::MainClass,
            AstNode::ClassDeclaration { .. } => AstKind::ClassDeclaration,
            AstNode::MethodDeclaration { .. } => AstKind::MethodDeclaration,
            AstNode::MethodBody { .. } => AstKind::MethodBody,
            AstNode::VariableDeclaration { .. } => AstKind::VariableDeclaration,
            AstNode::Block { .. } => AstKind::Block,
            AstNode::IfStatement { .. } => AstKind::IfStatement,
            AstNode::WhileStatement { .. } => AstKind::WhileStatement,
            AstNode::ForStatement { .. } => AstKind::ForStatement,
            AstNode::ReturnStatement { .. } => AstKind::ReturnStatement,
            AstNode::PrintStatement { .. } => AstKind::PrintStatement,
            AstNode::NewStatement { .. } => AstKind::NewStatement,
            AstNode::MethodCall { .. } => AstKind::MethodCall,
            AstNode::Variable { .. } => AstKind::Variable,
            AstNode::BinaryOpExpression { .. } => AstKind::BinaryOpExpression,
            AstNode::UnaryOpExpression { .. } => AstKind::UnaryOpExpression,
            AstNode::RealLiteral(..) => AstKind::RealLiteral,
            AstNode::IntegerLiteral(..) => AstKind::IntegerLiteral,
            AstNode::CharLiteral(..) => AstKind::CharLiteral,
            AstNode::StringLiteral(..) => AstKind::StringLiteral,
            AstNode::BooleanLiteral(..) => AstKind::BooleanLiteral,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<&AstNode> {
        let mut out = Vec::new();
        match self {
            AstNode::MainClass { main_method, .. } => out.push(main_method.as_ref()),
            AstNode::ClassDeclaration {
                member_variables,
                member_methods,
                ..
            } => {
                out.extend(member_variables);
                out.extend(member_methods);
            }
            AstNode::MethodDeclaration {
                parameters, body, ..
            } => {
                out.extend(parameters);
                out.push(body.as_ref());
            }
            AstNode::MethodBody {
                local_variables,
                statements,
                return_statement,
                ..
            } => {
                out.extend(local_variables);
                out.extend(statements);
                out.extend(return_statement.as_deref());
            }
            AstNode::Block { statements, .. } => out.extend(statements),
            AstNode::IfStatement {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                out.push(condition.as_ref());
                out.push(then_branch.as_ref());
                out.extend(else_branch.as_deref());
            }
            AstNode::WhileStatement {
                condition, body, ..
            } => {
                out.push(condition.as_ref());
                out.push(body.as_ref());
            }
            AstNode::ForStatement {
                init,
                condition,
                update,
                body,
                ..
            } => {
                out.extend(init.as_deref());
                out.extend(condition.as_deref());
                out.extend(update.as_deref());
                out.push(body.as_ref());
            }
            AstNode::ReturnStatement { expression, .. }
            | AstNode::PrintStatement { expression, .. } => out.push(expression.as_ref()),
            AstNode::NewStatement { allocation, .. } => match allocation {
                Allocation::Object { constructor } => out.push(constructor.as_ref()),
                Allocation::Array { length } => out.push(length.as_ref()),
            },
            AstNode::MethodCall { arguments, .. } => out.extend(arguments),
            AstNode::Variable { index, .. } => out.extend(index.as_deref()),
            AstNode::BinaryOpExpression { lhs, rhs, .. } => {
                out.push(lhs.as_ref());
                out.push(rhs.as_ref());
            }
            AstNode::UnaryOpExpression { operand, .. } => out.push(operand.as_ref()),
            AstNode::VariableDeclaration { .. }
            | AstNode::RealLiteral(..)
            | AstNode::IntegerLiteral(..)
            | AstNode::CharLiteral(..)
            | AstNode::StringLiteral(..)
            | AstNode::BooleanLiteral(..) => {}
        }
        out
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(AstNode::subtree_size)
            .sum::<usize>()
    }

    /// Nested `{"type": ...}` text form of this subtree.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::MainClass {
                name, main_method, ..
            } => {
                write!(f, "{{\"type\": \"MainClass\", \"class name\": ")?;
                write_str(f, name)?;
                write!(f, ", \"main method\": {}}}", main_method)
            }
            AstNode::ClassDeclaration {
                name,
                base_class,
                member_variables,
                member_methods,
                ..
            } => {
                write!(f, "{{\"type\": \"ClassDeclaration\", \"class name\": ")?;
                write_str(f, name)?;
                write!(f, ", \"base class\": ")?;
                match base_class {
                    Some(base) => write_str(f, base)?,
                    None => f.write_str("null")?,
                }
                write!(f, ", \"member variables\": ")?;
                write_list(f, member_variables)?;
                write!(f, ", \"member methods\": ")?;
                write_list(f, member_methods)?;
                f.write_str("}")
            }
            AstNode::MethodDeclaration {
                attributes,
                return_type,
                name,
                parameters,
                body,
                ..
            } => {
                write!(f, "{{\"type\": \"MethodDeclaration\", \"attributes\": [")?;
                for (i, attr) in attributes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_str(f, attr)?;
                }
                write!(f, "], \"return type\": ")?;
                write_str(f, return_type)?;
                write!(f, ", \"method name\": ")?;
                write_str(f, name)?;
                write!(f, ", \"parameters\": ")?;
                write_list(f, parameters)?;
                write!(f, ", \"body\": {}}}", body)
            }
            AstNode::MethodBody {
                local_variables,
                statements,
                return_statement,
                ..
            } => {
                write!(f, "{{\"type\": \"MethodBody\", \"variables\": ")?;
                write_list(f, local_variables)?;
                write!(f, ", \"statements\": ")?;
                write_list(f, statements)?;
                write!(f, ", \"return\": ")?;
                write_opt(f, return_statement.as_deref())?;
                f.write_str("}")
            }
            AstNode::VariableDeclaration {
                type_name, name, ..
            } => {
                write!(f, "{{\"type\": \"VarDeclaration\", \"variable type\": ")?;
                write_str(f, type_name)?;
                write!(f, ", \"variable name\": ")?;
                write_str(f, name)?;
                f.write_str("}")
            }
            AstNode::Block { statements, .. } => {
                write!(f, "{{\"type\": \"Block\", \"statements\": ")?;
                write_list(f, statements)?;
                f.write_str("}")
            }
            AstNode::IfStatement {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                write!(
                    f,
                    "{{\"type\": \"IfStatement\", \"condition\": {}, \"then\": {}, \"else\": ",
                    condition, then_branch
                )?;
                write_opt(f, else_branch.as_deref())?;
                f.write_str("}")
            }
            AstNode::WhileStatement {
                condition, body, ..
            } => write!(
                f,
                "{{\"type\": \"WhileStatement\", \"condition\": {}, \"body\": {}}}",
                condition, body
            ),
            AstNode::ForStatement {
                init,
                condition,
                update,
                body,
                ..
            } => {
                write!(f, "{{\"type\": \"ForStatement\", \"init\": ")?;
                write_opt(f, init.as_deref())?;
                write!(f, ", \"condition\": ")?;
                write_opt(f, condition.as_deref())?;
                write!(f, ", \"update\": ")?;
                write_opt(f, update.as_deref())?;
                write!(f, ", \"body\": {}}}", body)
            }
            AstNode::ReturnStatement { expression, .. } => write!(
                f,
                "{{\"type\": \"ReturnStatement\", \"expression\": {}}}",
                expression
            ),
            AstNode::PrintStatement { expression, .. } => write!(
                f,
                "{{\"type\": \"PrintStatement\", \"expression\": {}}}",
                expression
            ),
            AstNode::NewStatement {
                type_name,
                allocation,
                ..
            } => {
                write!(f, "{{\"type\": \"NewStatement\", \"new type\": ")?;
                write_str(f, type_name)?;
                match allocation {
                    Allocation::Object { constructor } => {
                        write!(f, ", \"constructor\": {}}}", constructor)
                    }
                    Allocation::Array { length } => write!(f, ", \"length\": {}}}", length),
                }
            }
            AstNode::MethodCall {
                name, arguments, ..
            } => {
                write!(f, "{{\"type\": \"MethodCall\", \"method name\": ")?;
                write_str(f, name)?;
                write!(f, ", \"arguments\": ")?;
                write_list(f, arguments)?;
                f.write_str("}")
            }
            AstNode::Variable { name, index, .. } => {
                write!(f, "{{\"type\": \"Variable\", \"name\": ")?;
                write_str(f, name)?;
                write!(f, ", \"index\": ")?;
                write_opt(f, index.as_deref())?;
                f.write_str("}")
            }
            AstNode::BinaryOpExpression { op, lhs, rhs, .. } => write!(
                f,
                "{{\"type\": \"BinaryOpExpression\", \"operator\": \"{}\", \"lhs\": {}, \"rhs\": {}}}",
                op.symbol(),
                lhs,
                rhs
            ),
            AstNode::UnaryOpExpression { op, operand, .. } => write!(
                f,
                "{{\"type\": \"UnaryOpExpression\", \"operator\": \"{}\", \"operand\": {}}}",
                op.symbol(),
                operand
            ),
            AstNode::RealLiteral(value, _) => {
                write!(f, "{{\"type\": \"RealLiteral\", \"value\": {:?}}}", value)
            }
            AstNode::IntegerLiteral(value, _) => {
                write!(f, "{{\"type\": \"IntegerLiteral\", \"value\": {}}}", value)
            }
            AstNode::CharLiteral(value, _) => {
                write!(f, "{{\"type\": \"CharLiteral\", \"value\": ")?;
                write_str(f, &value.to_string())?;
                f.write_str("}")
            }
            AstNode::StringLiteral(value, _) => {
                write!(f, "{{\"type\": \"StringLiteral\", \"value\": ")?;
                write_str(f, value)?;
                f.write_str("}")
            }
            AstNode::BooleanLiteral(value, _) => {
                write!(f, "{{\"type\": \"BooleanLiteral\", \"value\": {}}}", value)
            }
        }
    }
}

/// Write `s` as a quoted, escaped JSON string.
fn write_str(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[AstNode]) -> fmt::Result {
    f.write_str("[")?;
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", node)?;
    }
    f.write_str("]")
}

fn write_opt(f: &mut fmt::Formatter<'_>, node: Option<&AstNode>) -> fmt::Result {
    match node {
        Some(node) => write!(f, "{}", node),
        None => f.write_str("null"),
    }
}

/// Top-level program structure
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub location: TokenLocation,
    /// The main class followed by every other class declaration
    pub classes: Vec<AstNode>,
}

impl Program {
    pub fn new(location: TokenLocation) -> Self {
        Program {
            location,
            classes: Vec::new(),
        }
    }

    pub fn kind(&self) -> AstKind {
        AstKind::Program
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Nodes in the whole tree, the root included.
    pub fn node_count(&self) -> usize {
        1 + self.classes.iter().map(AstNode::subtree_size).sum::<usize>()
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"type\": \"Program\", \"classes\": ")?;
        write_list(f, &self.classes)?;
        f.write_str("}")
    }
}

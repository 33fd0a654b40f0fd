//! Token and source-location value types
//!
//! Every [`Token`] carries a [`TokenLocation`] so that diagnostics raised by the
//! parser can point at the exact line and column without a separate lookup
//! table. Tokens are immutable once the scanner has built them.

use std::fmt;
use std::rc::Rc;

/// Position of a token or AST node in a source file.
///
/// `line` and `column` are 1-based. The source name is shared between all
/// locations produced by one scanner, so cloning a location is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLocation {
    source_name: Rc<str>,
    pub line: usize,
    pub column: usize,
}

impl TokenLocation {
    pub fn new(source_name: Rc<str>, line: usize, column: usize) -> Self {
        Self {
            source_name,
            line,
            column,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

impl fmt::Display for TokenLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source_name, self.line, self.column)
    }
}

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Boolean,
    Real,
    CharLiteral,
    StringLiteral,
    Identifier,
    Keyword,
    Type,
    Operator,
    Delimiter,
    EndOfFile,
    Unknown,
}

impl TokenKind {
    /// Human-readable name used in diagnostics and token dumps.
    pub fn description(self) -> &'static str {
        match self {
            TokenKind::Integer => "integer",
            TokenKind::Boolean => "boolean",
            TokenKind::Real => "real",
            TokenKind::CharLiteral => "char literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Type => "data type",
            TokenKind::Operator => "operator",
            TokenKind::Delimiter => "delimiter",
            TokenKind::EndOfFile => "eof",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Subtype of a token: which keyword, type, operator or delimiter it is.
///
/// Identifiers and literals use [`TokenValue::Unreserved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenValue {
    // Keywords
    Class,
    Public,
    Static,
    Void,
    Main,
    Extends,
    Return,
    If,
    Else,
    While,
    For,
    Print,
    Length,
    This,
    New,

    // Types
    Double,
    Int,
    Char,
    String,
    Bool,

    // Boolean literals
    True,
    False,

    // Symbols
    LParen,    // (
    RParen,    // )
    LBrack,    // [
    RBrack,    // ]
    LBrace,    // {
    RBrace,    // }
    Comma,     // ,
    Semicolon, // ;
    Assign,    // =
    And,       // &&
    Lt,        // <
    Add,       // +
    Sub,       // -
    Multi,     // *
    Dot,       // .
    Not,       // !

    Unreserved,
}

/// Literal payload of a token. Only literal kinds carry anything but `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Int(i32),
    Real(f64),
    Str(String),
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    value: TokenValue,
    location: TokenLocation,
    lexeme: String,
    literal: Literal,
    precedence: i32,
}

impl Token {
    /// Build a non-literal token (keyword, identifier, operator, delimiter, EOF).
    pub fn new(
        kind: TokenKind,
        value: TokenValue,
        location: TokenLocation,
        lexeme: impl Into<String>,
        precedence: i32,
    ) -> Self {
        Self {
            kind,
            value,
            location,
            lexeme: lexeme.into(),
            literal: Literal::None,
            precedence,
        }
    }

    /// Build a literal token. Literals never act as binary operators.
    pub fn literal(
        kind: TokenKind,
        location: TokenLocation,
        lexeme: impl Into<String>,
        literal: Literal,
    ) -> Self {
        Self {
            kind,
            value: TokenValue::Unreserved,
            location,
            lexeme: lexeme.into(),
            literal,
            precedence: -1,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> TokenValue {
        self.value
    }

    pub fn location(&self) -> &TokenLocation {
        &self.location
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn literal_value(&self) -> &Literal {
        &self.literal
    }

    /// Binary-operator precedence, `-1` for anything that is not a binary operator.
    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    pub fn int_value(&self) -> Option<i32> {
        match self.literal {
            Literal::Int(n) => Some(n),
            _ => None,
        }
    }

    pub fn real_value(&self) -> Option<f64> {
        match self.literal {
            Literal::Real(r) => Some(r),
            _ => None,
        }
    }

    pub fn string_value(&self) -> Option<&str> {
        match &self.literal {
            Literal::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is(&self, value: TokenValue) -> bool {
        self.value == value
    }

    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// One line of the token listing written by `mjava --tokens`.
    pub fn dump(&self) -> String {
        format!(
            "{}:\t{}\t{}\t\t{}",
            self.location,
            self.kind.description(),
            self.lexeme,
            self.precedence
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfFile => write!(f, "end of file"),
            kind => write!(f, "{} '{}'", kind, self.lexeme),
        }
    }
}

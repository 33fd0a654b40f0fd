//! Keyword, type, operator and delimiter table
//!
//! Maps reserved lexemes to their [`TokenKind`], [`TokenValue`] and binary
//! precedence. Anything not in the table is an identifier.

use super::token::{TokenKind, TokenValue};
use rustc_hash::FxHashMap;

/// Full text of the print keyword; the scanner matches it specially because it
/// contains dots.
pub const PRINT_KEYWORD: &str = "System.out.println";

/// Leading identifier segment of [`PRINT_KEYWORD`].
pub const PRINT_PREFIX: &str = "System";

/// Entry of the table: kind, subtype and binary precedence (`-1` if none).
pub type TokenMeta = (TokenKind, TokenValue, i32);

const ENTRIES: &[(&str, TokenKind, TokenValue, i32)] = &[
    // Operators
    ("=", TokenKind::Operator, TokenValue::Assign, 0),
    ("&&", TokenKind::Operator, TokenValue::And, 1),
    ("<", TokenKind::Operator, TokenValue::Lt, 2),
    ("+", TokenKind::Operator, TokenValue::Add, 10),
    ("-", TokenKind::Operator, TokenValue::Sub, 10),
    ("*", TokenKind::Operator, TokenValue::Multi, 20),
    // `!` is prefix only and never takes part in precedence climbing
    ("!", TokenKind::Operator, TokenValue::Not, -1),
    // Delimiters
    ("(", TokenKind::Delimiter, TokenValue::LParen, -1),
    (")", TokenKind::Delimiter, TokenValue::RParen, -1),
    ("[", TokenKind::Delimiter, TokenValue::LBrack, -1),
    ("]", TokenKind::Delimiter, TokenValue::RBrack, -1),
    ("{", TokenKind::Delimiter, TokenValue::LBrace, -1),
    ("}", TokenKind::Delimiter, TokenValue::RBrace, -1),
    (",", TokenKind::Delimiter, TokenValue::Comma, -1),
    (";", TokenKind::Delimiter, TokenValue::Semicolon, -1),
    (".", TokenKind::Delimiter, TokenValue::Dot, -1),
    // Keywords
    ("class", TokenKind::Keyword, TokenValue::Class, -1),
    ("public", TokenKind::Keyword, TokenValue::Public, -1),
    ("static", TokenKind::Keyword, TokenValue::Static, -1),
    ("void", TokenKind::Keyword, TokenValue::Void, -1),
    ("main", TokenKind::Keyword, TokenValue::Main, -1),
    ("extends", TokenKind::Keyword, TokenValue::Extends, -1),
    ("return", TokenKind::Keyword, TokenValue::Return, -1),
    ("if", TokenKind::Keyword, TokenValue::If, -1),
    ("else", TokenKind::Keyword, TokenValue::Else, -1),
    ("while", TokenKind::Keyword, TokenValue::While, -1),
    ("for", TokenKind::Keyword, TokenValue::For, -1),
    (PRINT_KEYWORD, TokenKind::Keyword, TokenValue::Print, -1),
    ("length", TokenKind::Keyword, TokenValue::Length, -1),
    ("this", TokenKind::Keyword, TokenValue::This, -1),
    ("new", TokenKind::Keyword, TokenValue::New, -1),
    // Boolean literals
    ("true", TokenKind::Boolean, TokenValue::True, -1),
    ("false", TokenKind::Boolean, TokenValue::False, -1),
    // Types
    ("int", TokenKind::Type, TokenValue::Int, -1),
    ("boolean", TokenKind::Type, TokenValue::Bool, -1),
    ("char", TokenKind::Type, TokenValue::Char, -1),
    ("String", TokenKind::Type, TokenValue::String, -1),
    ("double", TokenKind::Type, TokenValue::Double, -1),
];

/// Lookup table from lexeme text to token metadata.
pub struct Dictionary {
    entries: FxHashMap<&'static str, TokenMeta>,
}

impl Dictionary {
    pub fn new() -> Self {
        let entries = ENTRIES
            .iter()
            .map(|&(name, kind, value, precedence)| (name, (kind, value, precedence)))
            .collect();
        Self { entries }
    }

    /// Classify `name`; unknown text is an unreserved identifier.
    pub fn lookup(&self, name: &str) -> TokenMeta {
        self.entries
            .get(name)
            .copied()
            .unwrap_or((TokenKind::Identifier, TokenValue::Unreserved, -1))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Source spelling of a reserved token value, `"identifier"` for anything
    /// that is not in the table.
    pub fn spelling(value: TokenValue) -> &'static str {
        ENTRIES
            .iter()
            .find(|entry| entry.2 == value)
            .map(|entry| entry.0)
            .unwrap_or("identifier")
    }

    /// Every reserved lexeme with its metadata, in table order.
    pub fn entries() -> impl Iterator<Item = (&'static str, TokenMeta)> {
        ENTRIES
            .iter()
            .map(|&(name, kind, value, precedence)| (name, (kind, value, precedence)))
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_reserved() {
        let dict = Dictionary::new();
        assert_eq!(
            dict.lookup("class"),
            (TokenKind::Keyword, TokenValue::Class, -1)
        );
        assert_eq!(dict.lookup("&&"), (TokenKind::Operator, TokenValue::And, 1));
        assert_eq!(
            dict.lookup(PRINT_KEYWORD),
            (TokenKind::Keyword, TokenValue::Print, -1)
        );
        assert_eq!(dict.lookup("String"), (TokenKind::Type, TokenValue::String, -1));
    }

    #[test]
    fn test_lookup_unknown_is_identifier() {
        let dict = Dictionary::new();
        assert_eq!(
            dict.lookup("counter"),
            (TokenKind::Identifier, TokenValue::Unreserved, -1)
        );
        assert!(!dict.contains("&"));
        assert!(!dict.contains(PRINT_PREFIX));
    }

    #[test]
    fn test_spelling() {
        assert_eq!(Dictionary::spelling(TokenValue::Semicolon), ";");
        assert_eq!(Dictionary::spelling(TokenValue::Print), PRINT_KEYWORD);
        assert_eq!(Dictionary::spelling(TokenValue::Unreserved), "identifier");
    }

    #[test]
    fn test_operator_precedence_order() {
        let dict = Dictionary::new();
        let prec = |s: &str| dict.lookup(s).2;
        assert!(prec("=") < prec("&&"));
        assert!(prec("&&") < prec("<"));
        assert!(prec("<") < prec("+"));
        assert_eq!(prec("+"), prec("-"));
        assert!(prec("-") < prec("*"));
        assert_eq!(prec("!"), -1);
    }
}

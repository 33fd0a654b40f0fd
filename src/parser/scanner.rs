//! Scanner (tokenizer) for MJava source code
//!
//! The scanner is pull-based: [`Scanner::next_token`] classifies the next run of
//! characters and returns exactly one [`Token`]. Whitespace and comments are
//! skipped before every token.
//!
//! # State machine
//!
//! Between tokens the scanner is in [`State::None`]. The first character of the
//! next run selects the state that consumes it:
//!
//! ```text
//! letter or '_' → Identifier      digit → Number
//! '\''          → SingleChar      '"'   → String
//! end of input  → EndOfFile       other → Operation
//! ```
//!
//! Each state consumes one whole token and falls back to `None`.
//!
//! # Token errors
//!
//! Malformed literals, unknown characters and malformed identifiers are
//! recorded in the scanner's [`Diagnostics`] and skipped. `next_token` keeps
//! going until it has a well-formed token, so a bad token never stops the scan;
//! [`Scanner::had_error`] tells the caller whether the last call skipped one.

use super::diagnostics::{Diagnostic, Diagnostics};
use super::dictionary::{Dictionary, PRINT_KEYWORD, PRINT_PREFIX};
use super::token::{Literal, Token, TokenKind, TokenLocation, TokenValue};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

/// Failure to load the source text.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("When trying to open file {}, occurred error: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Scanner states. Every state except `None` is terminal for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    None,
    EndOfFile,
    Identifier,
    Number,
    SingleChar,
    String,
    Operation,
}

/// Sub-states of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Integer,
    Fraction,
    Exponent,
    Done,
}

pub struct Scanner {
    source_name: Rc<str>,
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    state: State,
    token: Token,
    dictionary: Dictionary,
    diagnostics: Diagnostics,
    /// Set when the current attempt hit a token error
    attempt_failed: bool,
    /// Set when any attempt of the last `next_token` call hit a token error
    call_had_error: bool,
    emitted: usize,
}

impl Scanner {
    /// Open and read `path`; the path becomes the source name in locations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_source(&path.display().to_string(), &text))
    }

    /// Scan in-memory text, reporting locations against `source_name`.
    pub fn from_source(source_name: &str, text: &str) -> Self {
        let source_name: Rc<str> = Rc::from(source_name);
        let token = Token::new(
            TokenKind::Unknown,
            TokenValue::Unreserved,
            TokenLocation::new(source_name.clone(), 1, 1),
            "",
            -1,
        );
        Self {
            source_name,
            input: text.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            state: State::None,
            token,
            dictionary: Dictionary::new(),
            diagnostics: Diagnostics::new(),
            attempt_failed: false,
            call_had_error: false,
            emitted: 0,
        }
    }

    /// The most recently produced token (the parser's lookahead).
    pub fn current_token(&self) -> &Token {
        &self.token
    }

    /// Whether the last `next_token` call skipped over at least one bad token.
    pub fn had_error(&self) -> bool {
        self.call_had_error
    }

    /// Number of tokens produced so far, EndOfFile tokens included.
    pub fn tokens_emitted(&self) -> usize {
        self.emitted
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub(crate) fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Move out every diagnostic recorded so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Scan and return the next token. At end of input this keeps returning
    /// an EndOfFile token.
    pub fn next_token(&mut self) -> Token {
        self.call_had_error = false;

        loop {
            self.attempt_failed = false;
            self.preprocess();
            self.state = self.classify();

            let token = match self.state {
                State::None => None,
                State::EndOfFile => Some(self.handle_eof_state()),
                State::Identifier => self.handle_identifier_state(),
                State::Number => self.handle_number_state(),
                State::SingleChar => self.handle_char_state(),
                State::String => self.handle_string_state(),
                State::Operation => self.handle_operation_state(),
            };
            self.state = State::None;

            match token {
                Some(token) if !self.attempt_failed => {
                    log::trace!(
                        "{}: {} {:?}",
                        token.location(),
                        token.kind(),
                        token.lexeme()
                    );
                    self.emitted += 1;
                    self.token = token.clone();
                    return token;
                }
                _ => continue,
            }
        }
    }

    /// Pick the state for the character at the current position.
    fn classify(&self) -> State {
        match self.peek() {
            None => State::EndOfFile,
            Some(c) if c.is_ascii_alphabetic() || c == '_' => State::Identifier,
            Some(c) if c.is_ascii_digit() => State::Number,
            Some('\'') => State::SingleChar,
            Some('"') => State::String,
            Some(_) => State::Operation,
        }
    }

    // ===== Whitespace and comments =====

    /// Skip whitespace and comments until neither is next.
    fn preprocess(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }

            match (self.peek(), self.peek_ahead(1)) {
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.advance() {
            if ch == '\n' {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) {
        let start = self.current_location();
        self.advance(); // '/'
        self.advance(); // '*'

        loop {
            match (self.peek(), self.peek_ahead(1)) {
                (Some('*'), Some('/')) => {
                    self.advance();
                    self.advance();
                    return;
                }
                (Some(_), _) => {
                    self.advance();
                }
                (None, _) => {
                    // Unterminated comment: report and let the caller see EOF.
                    self.diagnostics.token_error(
                        start,
                        "end of file happened in comment, */ is expected!",
                    );
                    self.call_had_error = true;
                    return;
                }
            }
        }
    }

    // ===== Per-state handlers =====

    fn handle_eof_state(&mut self) -> Token {
        // The source is no longer needed once everything has been consumed.
        if !self.input.is_empty() {
            self.input = Vec::new();
            self.position = 0;
        }
        Token::new(
            TokenKind::EndOfFile,
            TokenValue::Unreserved,
            self.current_location(),
            "END_OF_FILE",
            -1,
        )
    }

    fn handle_identifier_state(&mut self) -> Option<Token> {
        let loc = self.current_location();
        let mut ident = self.take_word();

        if ident.starts_with('_') {
            self.error_at(
                loc,
                format!("Identifiers can not begin with an underscore {}", ident),
            );
            return None;
        }

        // The print keyword is the only reserved word containing dots; it is
        // matched with a fixed-length lookahead after its first segment and
        // must end on a word boundary.
        if ident == PRINT_PREFIX {
            let suffix = &PRINT_KEYWORD[PRINT_PREFIX.len()..];
            let len = suffix.chars().count();
            let boundary = !self
                .peek_ahead(len)
                .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
            if self.lookahead_matches(suffix) && boundary {
                for _ in 0..len {
                    self.advance();
                }
                ident = PRINT_KEYWORD.to_string();
            }
        }

        let (kind, value, precedence) = self.dictionary.lookup(&ident);
        Some(Token::new(kind, value, loc, ident, precedence))
    }

    fn handle_number_state(&mut self) -> Option<Token> {
        let loc = self.current_location();
        let start = self.position;
        let mut digits = String::new();
        let mut base = 10;
        let mut is_float = false;
        let mut is_exponent = false;

        match (self.peek(), self.peek_ahead(1)) {
            (Some('0'), Some('x' | 'X')) => {
                base = 16;
                self.advance();
                self.advance();
            }
            (Some('0'), Some('0'..='7')) => {
                base = 8;
                self.advance();
            }
            _ => {}
        }

        let mut state = NumberState::Integer;
        while state != NumberState::Done {
            match state {
                NumberState::Integer => self.scan_integer_digits(base, &mut digits),
                NumberState::Fraction => {
                    self.scan_fraction(&mut digits);
                    is_float = true;
                }
                NumberState::Exponent => {
                    self.scan_exponent(&mut digits);
                    is_exponent = true;
                }
                NumberState::Done => {}
            }

            state = match self.peek() {
                Some('.') if matches!(self.peek_ahead(1), Some(c) if c.is_ascii_digit()) => {
                    if is_float {
                        self.error("Fraction number can not have more than one dot.");
                    }
                    if is_exponent {
                        self.error("Scientist number representation in MJava can not have dot.");
                    }
                    match base {
                        16 => self.error("Hexadecimal number in MJava can only be integer."),
                        8 => self.error("Octal number in MJava can only be integer."),
                        _ => {}
                    }
                    NumberState::Fraction
                }
                Some('e' | 'E') if base == 10 => {
                    if is_exponent {
                        self.error("Scientist presentation can not have more than one e / E");
                    }
                    NumberState::Exponent
                }
                _ => NumberState::Done,
            };
        }

        // Letters glued to a number: swallow the whole run so scanning resumes
        // at the next token.
        if matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.take_word();
            if !self.attempt_failed {
                let text = self.text_from(start);
                match base {
                    16 => self.error_at(loc.clone(), format!("Hexadecimal number format error: {}", text)),
                    8 => self.error_at(loc.clone(), format!("Octal number format error: {}", text)),
                    _ => self.error_at(
                        loc.clone(),
                        format!("Identifiers can not begin with a number {}", text),
                    ),
                }
            }
        }

        if self.attempt_failed {
            return None;
        }

        let lexeme = self.text_from(start);

        if is_float || is_exponent {
            match digits.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(Token::literal(
                    TokenKind::Real,
                    loc,
                    lexeme,
                    Literal::Real(value),
                )),
                Ok(_) => {
                    self.error_at(
                        loc,
                        format!(
                            "Floating-point number literal: {} is outside the range of the \"double\".",
                            lexeme
                        ),
                    );
                    None
                }
                Err(_) => {
                    self.error_at(
                        loc,
                        format!(
                            "Floating-point number literal: {} can not be converted to the \"double\".",
                            lexeme
                        ),
                    );
                    None
                }
            }
        } else {
            match i32::from_str_radix(&digits, base) {
                Ok(value) => Some(Token::literal(
                    TokenKind::Integer,
                    loc,
                    lexeme,
                    Literal::Int(value),
                )),
                Err(_) => {
                    self.error_at(
                        loc,
                        format!(
                            "Integer literal: {} is outside the range of the \"int\".",
                            lexeme
                        ),
                    );
                    None
                }
            }
        }
    }

    fn handle_char_state(&mut self) -> Option<Token> {
        let loc = self.current_location();
        let text = self.scan_quoted('\'')?;

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(Token::literal(
                TokenKind::CharLiteral,
                loc,
                text,
                Literal::Int(ch as i32),
            )),
            _ => {
                self.error_at(loc, "Char can contain only one character!");
                None
            }
        }
    }

    fn handle_string_state(&mut self) -> Option<Token> {
        let loc = self.current_location();
        let text = self.scan_quoted('"')?;
        Some(Token::literal(
            TokenKind::StringLiteral,
            loc,
            text.clone(),
            Literal::Str(text),
        ))
    }

    fn handle_operation_state(&mut self) -> Option<Token> {
        let loc = self.current_location();
        let first = self.advance()?;

        // Longest match: try the two-character form first.
        if let Some(second) = self.peek() {
            let pair: String = [first, second].iter().collect();
            if self.dictionary.contains(&pair) {
                self.advance();
                let (kind, value, precedence) = self.dictionary.lookup(&pair);
                return Some(Token::new(kind, value, loc, pair, precedence));
            }
        }

        let single = first.to_string();
        if self.dictionary.contains(&single) {
            let (kind, value, precedence) = self.dictionary.lookup(&single);
            return Some(Token::new(kind, value, loc, single, precedence));
        }

        self.error_at(loc, format!("Unknown character {}", first));
        None
    }

    // ===== Literal sub-scanners =====

    fn scan_integer_digits(&mut self, base: u32, digits: &mut String) {
        let before = digits.len();
        while let Some(c) = self.peek() {
            if c.is_digit(base) {
                digits.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if digits.len() == before {
            match base {
                16 => self.error("Hexadecimal number format error."),
                8 => self.error("Octal number format error."),
                _ => {}
            }
        }
    }

    /// Current char is '.' and the next one is a digit.
    fn scan_fraction(&mut self, digits: &mut String) {
        digits.push('.');
        self.advance();
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            digits.push(c);
            self.advance();
        }
    }

    /// Current char is 'e' or 'E'.
    fn scan_exponent(&mut self, digits: &mut String) {
        digits.push('e');
        self.advance();

        if let Some(sign @ ('+' | '-')) = self.peek() {
            digits.push(sign);
            self.advance();
        }

        if !matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            let found = self
                .peek()
                .map(|c| format!("'{}'", c))
                .unwrap_or_else(|| "end of file".to_string());
            self.error(format!(
                "Scientist presentation number after e / E should be + / - or digits but find {}",
                found
            ));
            return;
        }

        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            digits.push(c);
            self.advance();
        }
    }

    /// Consume a quoted literal and return its verbatim contents. A backslash
    /// keeps the next character from closing the literal but is not decoded.
    fn scan_quoted(&mut self, quote: char) -> Option<String> {
        let start = self.current_location();
        self.advance(); // opening quote
        let mut text = String::new();

        loop {
            match self.advance() {
                None => {
                    let what = if quote == '\'' { "char" } else { "string" };
                    self.error_at(
                        start,
                        format!("end of file happened in {}, {} is expected!", what, quote),
                    );
                    return None;
                }
                Some('\\') => {
                    text.push('\\');
                    if let Some(escaped) = self.advance() {
                        text.push(escaped);
                    }
                }
                Some(c) if c == quote => return Some(text),
                Some(c) => text.push(c),
            }
        }
    }

    // ===== Character helpers =====

    /// Consume a maximal run of letters, digits and underscores.
    fn take_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                word.push(c);
                self.advance();
            } else {
                break;
            }
        }
        word
    }

    fn lookahead_matches(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(i, c)| self.peek_ahead(i) == Some(c))
    }

    fn text_from(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn current_location(&self) -> TokenLocation {
        TokenLocation::new(self.source_name.clone(), self.line, self.column)
    }

    fn error(&mut self, message: impl Into<String>) {
        let loc = self.current_location();
        self.error_at(loc, message);
    }

    fn error_at(&mut self, location: TokenLocation, message: impl Into<String>) {
        self.diagnostics.token_error(location, message);
        self.attempt_failed = true;
        self.call_had_error = true;
    }
}

/// Yields every token up to, not including, EndOfFile.
impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Scanner {
        Scanner::from_source("test.mj", source)
    }

    #[test]
    fn test_simple_tokens() {
        let tokens: Vec<Token> = scan("class Main { }").collect();

        assert_eq!(tokens.len(), 4);
        assert!(tokens[0].is(TokenValue::Class));
        assert!(tokens[1].is_kind(TokenKind::Identifier));
        assert_eq!(tokens[1].lexeme(), "Main");
        assert!(tokens[2].is(TokenValue::LBrace));
        assert!(tokens[3].is(TokenValue::RBrace));
    }

    #[test]
    fn test_locations() {
        let mut scanner = scan("int x;\n  x = 1;");
        let int = scanner.next_token();
        assert_eq!((int.location().line, int.location().column), (1, 1));
        let x = scanner.next_token();
        assert_eq!((x.location().line, x.location().column), (1, 5));
        scanner.next_token(); // ;
        let x2 = scanner.next_token();
        assert_eq!((x2.location().line, x2.location().column), (2, 3));
        assert_eq!(x2.location().source_name(), "test.mj");
    }

    #[test]
    fn test_comments() {
        let tokens: Vec<Token> = scan("a // line\n/* block\n comment */ b").collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme(), "a");
        assert_eq!(tokens[1].lexeme(), "b");
        assert_eq!(tokens[1].location().line, 3);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let mut scanner = scan("a /* never closed");
        assert_eq!(scanner.next_token().lexeme(), "a");
        assert!(scanner.next_token().is_eof());
        assert!(scanner.had_error());
        assert_eq!(scanner.diagnostics().len(), 1);
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut scanner = scan("x");
        scanner.next_token();
        for _ in 0..3 {
            assert!(scanner.next_token().is_eof());
        }
        assert!(scanner.current_token().is_eof());
    }

    #[test]
    fn test_print_keyword() {
        let tokens: Vec<Token> = scan("System.out.println(1);").collect();
        assert!(tokens[0].is(TokenValue::Print));
        assert_eq!(tokens[0].lexeme(), PRINT_KEYWORD);
        assert!(tokens[1].is(TokenValue::LParen));
    }

    #[test]
    fn test_print_prefix_without_suffix_is_identifier() {
        let tokens: Vec<Token> = scan("System.out").collect();
        assert!(tokens[0].is_kind(TokenKind::Identifier));
        assert_eq!(tokens[0].lexeme(), "System");
        assert!(tokens[1].is(TokenValue::Dot));
        assert_eq!(tokens[2].lexeme(), "out");
    }

    #[test]
    fn test_print_keyword_needs_word_boundary() {
        let tokens: Vec<Token> = scan("System.out.printlnx(1);").collect();
        assert!(tokens[0].is_kind(TokenKind::Identifier));
        assert_eq!(tokens[0].lexeme(), "System");
        assert!(tokens[1].is(TokenValue::Dot));
        assert_eq!(tokens[2].lexeme(), "out");
        assert!(tokens[3].is(TokenValue::Dot));
        assert_eq!(tokens[4].lexeme(), "printlnx");
        assert!(tokens[4].is_kind(TokenKind::Identifier));
    }

    #[test]
    fn test_numbers() {
        let mut scanner = scan("42 0x1A 017 3.14 1e10 2.5E-3 08");
        assert_eq!(scanner.next_token().int_value(), Some(42));
        assert_eq!(scanner.next_token().int_value(), Some(26));
        assert_eq!(scanner.next_token().int_value(), Some(15));
        assert_eq!(scanner.next_token().real_value(), Some(3.14));
        assert_eq!(scanner.next_token().real_value(), Some(1e10));
        assert_eq!(scanner.next_token().real_value(), Some(2.5e-3));
        assert_eq!(scanner.next_token().int_value(), Some(8));
        assert!(scanner.diagnostics().is_empty());
    }

    #[test]
    fn test_integer_followed_by_dot_member() {
        let tokens: Vec<Token> = scan("1.x").collect();
        assert_eq!(tokens[0].int_value(), Some(1));
        assert!(tokens[1].is(TokenValue::Dot));
    }

    #[test]
    fn test_number_errors_recover() {
        let mut scanner = scan("1.2.3 x");
        let tok = scanner.next_token();
        assert_eq!(tok.lexeme(), "x");
        assert!(scanner.had_error());
        assert_eq!(scanner.diagnostics().len(), 1);

        let mut scanner = scan("0xFF.5 y");
        assert_eq!(scanner.next_token().lexeme(), "y");
        assert_eq!(scanner.diagnostics().len(), 1);

        let mut scanner = scan("1e+ z");
        assert_eq!(scanner.next_token().lexeme(), "z");
        assert_eq!(scanner.diagnostics().len(), 1);
    }

    #[test]
    fn test_integer_overflow() {
        let mut scanner = scan("99999999999 1");
        let tok = scanner.next_token();
        assert_eq!(tok.int_value(), Some(1));
        assert!(scanner.had_error());
        let message = &scanner.diagnostics().iter().next().unwrap().message;
        assert!(message.contains("outside the range"));
    }

    #[test]
    fn test_char_and_string_literals() {
        let mut scanner = scan(r#"'a' "hello \"world\"" "#);
        let ch = scanner.next_token();
        assert!(ch.is_kind(TokenKind::CharLiteral));
        assert_eq!(ch.int_value(), Some('a' as i32));

        let s = scanner.next_token();
        assert!(s.is_kind(TokenKind::StringLiteral));
        assert_eq!(s.string_value(), Some(r#"hello \"world\""#));
        assert!(scanner.next_token().is_eof());
    }

    #[test]
    fn test_bad_char_literals() {
        let mut scanner = scan("'ab' '' x");
        assert_eq!(scanner.next_token().lexeme(), "x");
        assert_eq!(scanner.diagnostics().len(), 2);
    }

    #[test]
    fn test_unterminated_string() {
        let mut scanner = scan("\"abc");
        assert!(scanner.next_token().is_eof());
        assert!(scanner.had_error());
        let diag = scanner.diagnostics().iter().next().unwrap();
        assert_eq!(diag.message, "end of file happened in string, \" is expected!");
    }

    #[test]
    fn test_unterminated_char() {
        let mut scanner = scan("'a");
        assert!(scanner.next_token().is_eof());
        let diag = scanner.diagnostics().iter().next().unwrap();
        assert_eq!(diag.message, "end of file happened in char, ' is expected!");
    }

    #[test]
    fn test_longest_match() {
        let tokens: Vec<Token> = scan("a && b").collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].is(TokenValue::And));
        assert_eq!(tokens[1].precedence(), 1);
    }

    #[test]
    fn test_single_ampersand_is_error() {
        let mut scanner = scan("&");
        assert!(scanner.next_token().is_eof());
        assert!(scanner.had_error());
        assert_eq!(scanner.diagnostics().len(), 1);
    }

    #[test]
    fn test_malformed_identifiers() {
        let mut scanner = scan("_abc next");
        assert_eq!(scanner.next_token().lexeme(), "next");
        assert!(scanner.had_error());
        assert_eq!(scanner.diagnostics().len(), 1);

        let mut scanner = scan("123abc next");
        assert_eq!(scanner.next_token().lexeme(), "next");
        assert_eq!(scanner.diagnostics().len(), 1);
        assert!(scanner.next_token().is_eof());
    }

    #[test]
    fn test_had_error_resets_per_call() {
        let mut scanner = scan("& a b");
        scanner.next_token();
        assert!(scanner.had_error());
        scanner.next_token();
        assert!(!scanner.had_error());
    }

    #[test]
    fn test_open_missing_file() {
        let result = Scanner::open("/definitely/not/here.mj");
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }
}

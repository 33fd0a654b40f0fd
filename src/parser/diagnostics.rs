//! Diagnostics collected while scanning and parsing
//!
//! Token errors and syntax errors never abort the front end. They are recorded
//! here, in source order, and the driver prints them once parsing is done.

use super::token::TokenLocation;
use std::fmt;
use thiserror::Error;

/// Which stage raised a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Raised by the scanner (bad literal, unknown character, ...)
    Token,
    /// Raised by the parser (unexpected token, wrong construct, ...)
    Syntax,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Token => write!(f, "Token Error"),
            DiagnosticKind::Syntax => write!(f, "Syntax Error"),
        }
    }
}

/// A single located message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {location}: {message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: TokenLocation,
    pub message: String,
}

/// Ordered accumulator of diagnostics.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: DiagnosticKind, location: TokenLocation, message: impl Into<String>) {
        self.items.push(Diagnostic {
            kind,
            location,
            message: message.into(),
        });
    }

    pub fn token_error(&mut self, location: TokenLocation, message: impl Into<String>) {
        self.push(DiagnosticKind::Token, location, message);
    }

    pub fn syntax_error(&mut self, location: TokenLocation, message: impl Into<String>) {
        self.push(DiagnosticKind::Syntax, location, message);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of diagnostics of one kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Move every collected diagnostic out, leaving the sink empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_diagnostic_display() {
        let mut diags = Diagnostics::new();
        diags.token_error(
            TokenLocation::new(Rc::from("a.mj"), 2, 7),
            "Unknown character &",
        );
        let first = diags.iter().next().unwrap();
        assert_eq!(first.to_string(), "Token Error: a.mj:2:7: Unknown character &");
    }

    #[test]
    fn test_count_and_take() {
        let mut diags = Diagnostics::new();
        let loc = TokenLocation::new(Rc::from("a.mj"), 1, 1);
        diags.token_error(loc.clone(), "bad literal");
        diags.syntax_error(loc.clone(), "Expected ' ; ', but find }");
        diags.syntax_error(loc, "The file is empty.");

        assert_eq!(diags.len(), 3);
        assert_eq!(diags.count(DiagnosticKind::Token), 1);
        assert_eq!(diags.count(DiagnosticKind::Syntax), 2);

        let taken = diags.take();
        assert_eq!(taken.len(), 3);
        assert!(diags.is_empty());
    }
}

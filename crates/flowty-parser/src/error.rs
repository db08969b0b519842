//! Parse error types

use flowty_ast::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected {found}, expected {}", one_of(.expected))]
    UnexpectedToken { found: String, expected: Vec<String> },

    #[error("unexpected end of input, expected {}", one_of(.expected))]
    UnexpectedEndOfInput { expected: Vec<String> },

    #[error("unrecognized content after the last statement: {found}{}", expecting(.expected))]
    TrailingInput { found: String, expected: Vec<String> },
}

/// A parse failure tagged with the token index and source span it occurred at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {}..{}", .span.start, .span.end)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// Index of the offending token in the token stream.
    pub index: usize,
}

impl ParseError {
    /// What the grammar would have accepted at this position, if known.
    pub fn expected(&self) -> &[String] {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. }
            | ParseErrorKind::UnexpectedEndOfInput { expected }
            | ParseErrorKind::TrailingInput { expected, .. } => expected,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

fn one_of(expected: &[String]) -> String {
    match expected {
        [] => "something else".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

fn expecting(expected: &[String]) -> String {
    if expected.is_empty() {
        String::new()
    } else {
        format!(", expected {}", one_of(expected))
    }
}

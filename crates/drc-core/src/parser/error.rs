//! Parser error types.

use crate::lexer::{Span, TokenKind};
use std::fmt;

/// A syntax error: an unexpected token, premature EOF, or an explicitly
/// empty list where the grammar requires at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        span: Span,
    },
    UnexpectedEof {
        expected: String,
    },
    /// An empty query, empty conjunction, or empty arglist (§9 open
    /// question: made an explicit error rather than left to fall through
    /// to an identifier-expected error).
    EmptyList {
        context: &'static str,
    },
    /// The parse consumed fewer than all tokens.
    TrailingInput {
        found: TokenKind,
        span: Span,
    },
}

impl ParseError {
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found,
            span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                expected,
                found,
                span,
            } => write!(
                f,
                "expected {expected}, found {found:?} at {}..{}",
                span.start, span.end
            ),
            Self::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            Self::EmptyList { context } => write!(f, "empty {context} is not allowed"),
            Self::TrailingInput { found, span } => write!(
                f,
                "trailing input at {}..{}: {found:?}",
                span.start, span.end
            ),
        }
    }
}

impl std::error::Error for ParseError {}

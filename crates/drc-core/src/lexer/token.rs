//! Token types for the DRC lexer.

/// A single lexed token.
///
/// Tokens carry their byte span in the source so error messages can point
/// back at the offending text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// The kind of a token, carrying its verbatim text where relevant.
///
/// There is deliberately no `Error` variant here: a lex failure aborts
/// tokenization immediately rather than being folded into the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Bang,
    Identifier(String),
    Star,
    /// The unquoted content of a `"..."` literal.
    StringLiteral(String),
    Comma,
    And,
    Or,
    LeftParen,
    RightParen,
    Eof,
}

/// A byte-offset span into the original query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

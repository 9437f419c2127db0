//! A one-token-lookahead stream with mark/restore backtracking.
//!
//! The grammar is LL(1) at every decision point, so backtracking never
//! needs to undo more than one `pop()`. Representing the cursor as a plain
//! index (rather than the ad-hoc "undo at most one token" semantics of a
//! peek cache) makes `restore` always valid — there is no wedged state to
//! propagate (§9 design note).

use crate::lexer::Token;

/// An opaque position in a [`TokenStream`], returned by [`TokenStream::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    #[must_use]
    pub fn hasnext(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    /// Non-destructive look at the current token. Always returns a token:
    /// the trailing `Eof` is kept in the stream so `peek` never runs past
    /// the end.
    #[must_use]
    pub fn peek(&self) -> &Token {
        self.tokens
            .get(self.cursor)
            .unwrap_or_else(|| self.tokens.last().expect("tokenizer always emits Eof"))
    }

    /// Advances past the current token and returns it.
    pub fn pop(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
        tok
    }

    #[must_use]
    pub const fn mark(&self) -> Mark {
        Mark(self.cursor)
    }

    pub fn restore(&mut self, mark: Mark) {
        self.cursor = mark.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Span, TokenKind};

    fn stream(kinds: Vec<TokenKind>) -> TokenStream {
        TokenStream::new(
            kinds
                .into_iter()
                .map(|k| Token::new(k, Span::new(0, 0)))
                .collect(),
        )
    }

    #[test]
    fn pop_advances_and_peek_does_not() {
        let mut s = stream(vec![TokenKind::Star, TokenKind::Comma, TokenKind::Eof]);
        assert_eq!(*s.peek(), Token::new(TokenKind::Star, Span::new(0, 0)));
        assert_eq!(*s.peek(), Token::new(TokenKind::Star, Span::new(0, 0)));
        s.pop();
        assert_eq!(*s.peek(), Token::new(TokenKind::Comma, Span::new(0, 0)));
    }

    #[test]
    fn restore_rewinds_to_mark() {
        let mut s = stream(vec![TokenKind::Star, TokenKind::Comma, TokenKind::Eof]);
        let m = s.mark();
        s.pop();
        s.pop();
        s.restore(m);
        assert_eq!(*s.peek(), Token::new(TokenKind::Star, Span::new(0, 0)));
    }

    #[test]
    fn peek_past_end_stays_on_eof() {
        let mut s = stream(vec![TokenKind::Eof]);
        s.pop();
        s.pop();
        assert!(s.peek().is_eof());
    }
}

//! DRC lexer.
//!
//! A single-pass scanner over the query string. Whitespace is stripped
//! before every scan attempt; the first position that matches none of the
//! grammar's nine patterns aborts tokenization with [`LexError`] — no
//! partial token sequence is ever returned.

mod token;

pub use token::{Span, Token, TokenKind};

use std::fmt;

/// A lexical error: no pattern matched at `pos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub pos: usize,
    /// The remaining input starting at `pos`, for diagnostics.
    pub remaining: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no token matched at position {}: {:?}",
            self.pos, self.remaining
        )
    }
}

impl std::error::Error for LexError {}

/// Scans `input` into an ordered token sequence, or fails with a [`LexError`].
///
/// # Errors
///
/// Returns `Err` if some non-whitespace position matches none of the nine
/// token patterns.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    lexer.tokenize()
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let start = self.pos;

            let Some(c) = self.peek() else {
                tokens.push(Token::new(TokenKind::Eof, Span::new(start, start)));
                break;
            };

            let kind = match c {
                '!' => {
                    self.advance();
                    TokenKind::Bang
                }
                '*' => {
                    self.advance();
                    TokenKind::Star
                }
                ',' => {
                    self.advance();
                    TokenKind::Comma
                }
                '(' => {
                    self.advance();
                    TokenKind::LeftParen
                }
                ')' => {
                    self.advance();
                    TokenKind::RightParen
                }
                '&' if self.peek_at(1) == Some('&') => {
                    self.advance();
                    self.advance();
                    TokenKind::And
                }
                '|' if self.peek_at(1) == Some('|') => {
                    self.advance();
                    self.advance();
                    TokenKind::Or
                }
                '"' => self.scan_string(start)?,
                c if c.is_ascii_alphabetic() => self.scan_identifier(start),
                _ => {
                    return Err(LexError {
                        pos: start,
                        remaining: self.input[start..].to_string(),
                    });
                }
            };

            tokens.push(Token::new(kind, Span::new(start, self.pos)));
        }
        Ok(tokens)
    }

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        self.advance(); // first letter, already confirmed alphabetic
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric())
        {
            self.advance();
        }
        TokenKind::Identifier(self.input[start..self.pos].to_string())
    }

    fn scan_string(&mut self, start: usize) -> Result<TokenKind, LexError> {
        self.advance(); // opening quote
        let content_start = self.pos;
        loop {
            match self.peek() {
                Some('"') => {
                    let content = self.input[content_start..self.pos].to_string();
                    self.advance(); // closing quote
                    return Ok(TokenKind::StringLiteral(content));
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    return Err(LexError {
                        pos: start,
                        remaining: self.input[start..].to_string(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn whitespace_only_is_just_eof() {
        assert_eq!(kinds("   \t\n "), vec![TokenKind::Eof]);
    }

    #[test]
    fn predicate_call() {
        assert_eq!(
            kinds(r#"student(S,SD)"#),
            vec![
                TokenKind::Identifier("student".into()),
                TokenKind::LeftParen,
                TokenKind::Identifier("S".into()),
                TokenKind::Comma,
                TokenKind::Identifier("SD".into()),
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn negation_and_wildcard_and_string() {
        assert_eq!(
            kinds(r#"!registered(S,"proglang1") && lecture(L,*)"#),
            vec![
                TokenKind::Bang,
                TokenKind::Identifier("registered".into()),
                TokenKind::LeftParen,
                TokenKind::Identifier("S".into()),
                TokenKind::Comma,
                TokenKind::StringLiteral("proglang1".into()),
                TokenKind::RightParen,
                TokenKind::And,
                TokenKind::Identifier("lecture".into()),
                TokenKind::LeftParen,
                TokenKind::Identifier("L".into()),
                TokenKind::Comma,
                TokenKind::Star,
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn disjunction_operator() {
        assert_eq!(
            kinds("a(X) || b(X)"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::LeftParen,
                TokenKind::Identifier("X".into()),
                TokenKind::RightParen,
                TokenKind::Or,
                TokenKind::Identifier("b".into()),
                TokenKind::LeftParen,
                TokenKind::Identifier("X".into()),
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn alphanumeric_identifier_allows_digits_after_first_letter() {
        assert_eq!(
            kinds("a1(b2c3)"),
            vec![
                TokenKind::Identifier("a1".into()),
                TokenKind::LeftParen,
                TokenKind::Identifier("b2c3".into()),
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unterminated_string_is_a_lex_error() {
        let err = lex(r#"a("x)"#).unwrap_err();
        assert_eq!(err.pos, 2);
    }

    #[test]
    fn lone_ampersand_is_a_lex_error() {
        assert!(lex("a(X) & b(X)").is_err());
    }

    #[test]
    fn lone_pipe_is_a_lex_error() {
        assert!(lex("a(X) | b(X)").is_err());
    }

    #[test]
    fn unexpected_character_is_a_lex_error() {
        let err = lex("a(X) ? b(X)").unwrap_err();
        assert_eq!(err.pos, 5);
    }

    #[test]
    fn identifier_cannot_start_with_a_digit() {
        // a leading digit matches no pattern at all (identifiers must start
        // with a letter, and there is no separate number literal).
        assert!(lex("1abc").is_err());
    }
}

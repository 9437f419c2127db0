//! Recursive-descent grammar:
//!
//! ```text
//! query       := conjunction ( '||' conjunction )*  EOF
//! conjunction := predicate  ( '&&' predicate )*
//! predicate   := [ '!' ] identifier '(' arglist ')'
//! arglist     := arg ( ',' arg )*
//! arg         := identifier | string-literal | '*'
//! ```
//!
//! All combinators are greedy and left-to-right; an unrecognized token at
//! any point is a syntax error, and a successful parse must consume every
//! token (§4.3).

use super::error::ParseError;
use super::stream::TokenStream;
use crate::ast::{is_variable_name, Atom, Conjunction, Query, Sign, Term};
use crate::lexer::TokenKind;

/// Parses a complete token sequence into a [`Query`].
///
/// # Errors
///
/// Returns [`ParseError`] if the tokens don't form a valid query, or if
/// any input remains once the grammar bottoms out.
pub fn parse(tokens: Vec<crate::lexer::Token>) -> Result<Query, ParseError> {
    let mut stream = TokenStream::new(tokens);
    let query = parse_query(&mut stream)?;
    let trailing = stream.peek().clone();
    if !trailing.is_eof() {
        return Err(ParseError::TrailingInput {
            found: trailing.kind,
            span: trailing.span,
        });
    }
    Ok(query)
}

fn parse_query(stream: &mut TokenStream) -> Result<Query, ParseError> {
    if stream.peek().is_eof() {
        return Err(ParseError::EmptyList { context: "query" });
    }

    let mut conjunctions = vec![parse_conjunction(stream)?];
    while matches!(stream.peek().kind, TokenKind::Or) {
        stream.pop();
        conjunctions.push(parse_conjunction(stream)?);
    }
    Ok(Query(conjunctions))
}

fn parse_conjunction(stream: &mut TokenStream) -> Result<Conjunction, ParseError> {
    if !starts_predicate(stream) {
        return Err(ParseError::EmptyList {
            context: "conjunction",
        });
    }

    let mut atoms = vec![parse_predicate(stream)?];
    while matches!(stream.peek().kind, TokenKind::And) {
        stream.pop();
        atoms.push(parse_predicate(stream)?);
    }
    Ok(Conjunction(atoms))
}

fn starts_predicate(stream: &TokenStream) -> bool {
    matches!(
        stream.peek().kind,
        TokenKind::Bang | TokenKind::Identifier(_)
    )
}

fn parse_predicate(stream: &mut TokenStream) -> Result<Atom, ParseError> {
    let sign = if matches!(stream.peek().kind, TokenKind::Bang) {
        stream.pop();
        Sign::Negated
    } else {
        Sign::Positive
    };

    let relation = expect_identifier(stream)?;
    expect(stream, &TokenKind::LeftParen, "'('")?;
    let args = parse_arglist(stream)?;
    expect(stream, &TokenKind::RightParen, "')'")?;

    Ok(Atom {
        sign,
        relation,
        args,
    })
}

fn parse_arglist(stream: &mut TokenStream) -> Result<Vec<Term>, ParseError> {
    if matches!(stream.peek().kind, TokenKind::RightParen) {
        return Err(ParseError::EmptyList {
            context: "argument list",
        });
    }

    let mut args = vec![parse_arg(stream)?];
    while matches!(stream.peek().kind, TokenKind::Comma) {
        stream.pop();
        args.push(parse_arg(stream)?);
    }
    Ok(args)
}

fn parse_arg(stream: &mut TokenStream) -> Result<Term, ParseError> {
    let tok = stream.peek().clone();
    match tok.kind {
        TokenKind::Star => {
            stream.pop();
            Ok(Term::Wildcard)
        }
        TokenKind::StringLiteral(value) => {
            stream.pop();
            Ok(Term::Literal(value))
        }
        TokenKind::Identifier(name) => {
            stream.pop();
            if is_variable_name(&name) {
                Ok(Term::Variable(name))
            } else {
                // An identifier that isn't alphabetic-only (e.g. `a1`)
                // cannot name a variable; the grammar still accepts it as
                // a term, but the analyzer will never find a binding for
                // it since it was never classified as a Variable. Relation
                // names are the only place digits are meaningful, so here
                // we simply reject it as an argument shape.
                Err(ParseError::unexpected(
                    "a variable, string literal, or '*'",
                    TokenKind::Identifier(name),
                    tok.span,
                ))
            }
        }
        other => Err(ParseError::unexpected(
            "a variable, string literal, or '*'",
            other,
            tok.span,
        )),
    }
}

fn expect_identifier(stream: &mut TokenStream) -> Result<String, ParseError> {
    let tok = stream.peek().clone();
    match tok.kind {
        TokenKind::Identifier(name) => {
            stream.pop();
            Ok(name)
        }
        TokenKind::Eof => Err(ParseError::UnexpectedEof {
            expected: "an identifier".to_string(),
        }),
        other => Err(ParseError::unexpected("an identifier", other, tok.span)),
    }
}

fn expect(
    stream: &mut TokenStream,
    kind: &TokenKind,
    expected: &str,
) -> Result<(), ParseError> {
    let tok = stream.peek().clone();
    if &tok.kind == kind {
        stream.pop();
        Ok(())
    } else if tok.is_eof() {
        Err(ParseError::UnexpectedEof {
            expected: expected.to_string(),
        })
    } else {
        Err(ParseError::unexpected(expected, tok.kind, tok.span))
    }
}

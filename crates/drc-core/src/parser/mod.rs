//! DRC parser.
//!
//! Consumes the lexer's token sequence through a one-token-lookahead
//! [`stream::TokenStream`] and yields a [`crate::ast::Query`]: a
//! disjunction of conjunctions of signed predicate atoms. The grammar is
//! LL(1) at every decision point, so no general backtracking is required
//! (§4.2, §9).

mod error;
mod grammar;
mod stream;

pub use error::ParseError;
pub use grammar::parse;
pub use stream::{Mark, TokenStream};

//! The error kinds a compilation can fail with.
//!
//! Every kind is terminal: compilation emits no SQL once any check fails,
//! and there is no retry or partial translation (§4.6, §7).

use crate::lexer::LexError;
use crate::parser::ParseError;

/// Every way `compile` can fail.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// No regex matched at some position in the query string.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// Unexpected token, premature EOF, or an explicitly-empty list.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A relation named in the query is not present in the schema.
    #[error("No such table: {relation}")]
    Schema { relation: String },

    /// An atom's argument count disagrees with the relation's arity.
    #[error("Table {relation} has {expected} columns, but {found} were queried")]
    Arity {
        relation: String,
        expected: usize,
        found: usize,
    },

    /// A `Want` variable never occurs in the conjunction.
    #[error("variable {variable} not bound anywhere")]
    UnboundProjected { variable: String },

    /// A `Want` variable occurs only in a negated atom or only as an
    /// externally bound value, so it has no positive occurrence to select
    /// a column from.
    #[error("variable {variable} is projected but has no positive occurrence to select")]
    ProjectedWithoutColumn { variable: String },

    /// A variable occurs but has neither a positive binding site nor an
    /// external binding.
    #[error("variable {variable} not bound in any positive predicate")]
    UnboundVariable { variable: String },

    /// An externally supplied variable binding was malformed.
    ///
    /// The core never constructs this itself — `BoundVars` arrives
    /// pre-validated as a plain string map — but the variant exists so a
    /// caller-side binding validator has somewhere to report into.
    #[error("malformed binding for {variable}: {reason}")]
    BindingSyntax { variable: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CompileError>;

//! Translates Domain Relational Calculus (DRC) queries into SQL `SELECT`
//! statements.
//!
//! The pipeline is four stages, leaves first: [`lexer`] → [`parser`] →
//! [`analyzer`] → a final `UNION`/`ORDER BY` assembly in [`compile`].
//! Compilation of one query is a pure function of
//! `(query string, Schema, BoundVars, Wants)`; nothing persists across
//! calls and nothing here is out-of-scope for the translator itself —
//! argument parsing, input loading, and the SQL engine that eventually
//! runs the emitted string are external collaborators this crate never
//! touches.

pub mod analyzer;
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod schema;

pub use error::CompileError;
pub use schema::{BoundVars, Schema, Wants};

use tracing::debug;

/// Compiles a DRC query string into a single SQL string.
///
/// `wants` is the ordered projection list (duplicates permitted); the
/// output row shape and the trailing `ORDER BY` both follow its order.
///
/// # Errors
///
/// Returns [`CompileError`] if lexing, parsing, or any analyzer check
/// fails (§7). There is no partial translation: either the whole query
/// compiles or nothing is emitted.
pub fn compile(
    query: &str,
    schema: &Schema,
    bound: &BoundVars,
    wants: &Wants,
) -> Result<String, CompileError> {
    let tokens = lexer::lex(query)?;
    debug!(token_count = tokens.len(), "lexed query");

    let tree = parser::parse(tokens)?;
    debug!(disjuncts = tree.0.len(), "parsed query");

    let selects = tree
        .0
        .iter()
        .map(|conjunction| analyzer::compile_conjunction(conjunction, schema, bound, wants))
        .collect::<Result<Vec<_>, _>>()?;

    let mut sql = selects.join("\nUNION\n");
    sql.push_str("\nORDER BY ");
    sql.push_str(&wants.join(", "));
    sql.push_str(" ASC");

    debug!(select_count = selects.len(), "emitted SQL");
    Ok(sql)
}

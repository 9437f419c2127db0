//! Semantic analysis and SQL code generation for a single conjunction
//! (§4.4). This is the hard subsystem: given one conjunction, the
//! `Schema`, and `BoundVars`, it binds variables, checks arity, classifies
//! every argument occurrence, and emits one SQL `SELECT`.
//!
//! All bookkeeping here lives for the duration of one conjunction and is
//! discarded once the SELECT string is produced (§3 lifecycle).

use std::collections::HashMap;

use tracing::debug;

use crate::ast::{Atom, Conjunction, Sign, Term};
use crate::error::CompileError;
use crate::schema::{BoundVars, Schema};

/// One negated atom, already classified into its equi-joins and value
/// binds against the surrounding positive atoms (§4.4 Step 7).
struct NotExistsClause {
    relation: String,
    alias: String,
    /// `(inner_alias, inner_column, outer_alias, outer_column)`.
    joins: Vec<(String, String, String, String)>,
    /// `(inner_alias, inner_column, sql_literal)`.
    binds: Vec<(String, String, String)>,
}

/// Compiles one conjunction into a single `SELECT DISTINCT` statement.
///
/// # Errors
///
/// See [`CompileError`] for the full list of semantic failures (§7); any
/// one of them aborts compilation of the whole query.
pub fn compile_conjunction(
    conjunction: &Conjunction,
    schema: &Schema,
    bound: &BoundVars,
    wants: &[String],
) -> Result<String, CompileError> {
    let atoms = &conjunction.0;

    // Step 1 — aliasing: R_i for atom i in source order.
    let aliases: Vec<String> = atoms
        .iter()
        .enumerate()
        .map(|(i, atom)| format!("{}_{i}", atom.relation))
        .collect();

    // Step 2 — arity + existence check.
    for (atom, alias) in atoms.iter().zip(&aliases) {
        check_arity(atom, schema)?;
        debug!(relation = %atom.relation, alias = %alias, "aliased atom");
    }

    // Step 3 — variable inventory.
    let mut variables: Vec<String> = Vec::new();
    for atom in atoms {
        for term in &atom.args {
            if let Term::Variable(v) = term {
                if !variables.contains(v) {
                    variables.push(v.clone());
                }
            }
        }
    }

    // Step 4 — binding resolution: first positive occurrence wins.
    let mut colofvar: HashMap<String, (String, String)> = HashMap::new();
    for (atom, alias) in atoms.iter().zip(&aliases) {
        if atom.sign != Sign::Positive {
            continue;
        }
        let columns = &schema[&atom.relation];
        for (j, term) in atom.args.iter().enumerate() {
            if let Term::Variable(v) = term {
                colofvar
                    .entry(v.clone())
                    .or_insert_with(|| (alias.clone(), columns[j].clone()));
            }
        }
    }
    debug!(bindings = colofvar.len(), "resolved binding sites");

    // Step 5 — semantic checks.
    for w in wants {
        if !variables.contains(w) {
            return Err(CompileError::UnboundProjected {
                variable: w.clone(),
            });
        }
        // A projected variable must also have a positive binding site: it's
        // the column `colofvar` selects into the output row. A bound-only
        // or negated-only occurrence passes the check above and the one
        // below (variables/bound), but still has no column to select, so
        // it's rejected here rather than left to panic during Step 8
        // assembly.
        if !colofvar.contains_key(w) {
            return Err(CompileError::ProjectedWithoutColumn {
                variable: w.clone(),
            });
        }
    }
    for v in &variables {
        if !colofvar.contains_key(v) && !bound.contains_key(v) {
            return Err(CompileError::UnboundVariable { variable: v.clone() });
        }
    }

    // Step 6 — classification of positive argument positions.
    let mut value_binds: Vec<(String, String, String)> = Vec::new();
    let mut equalvars_order: Vec<String> = Vec::new();
    let mut equalvars: HashMap<String, Vec<(String, String)>> = HashMap::new();
    for (atom, alias) in atoms.iter().zip(&aliases) {
        if atom.sign != Sign::Positive {
            continue;
        }
        let columns = &schema[&atom.relation];
        for (j, term) in atom.args.iter().enumerate() {
            let column = &columns[j];
            match term {
                Term::Literal(val) => {
                    value_binds.push((alias.clone(), column.clone(), escape_sql_literal(val)));
                }
                Term::Variable(v) if bound.contains_key(v) => {
                    value_binds.push((
                        alias.clone(),
                        column.clone(),
                        escape_sql_literal(&bound[v]),
                    ));
                }
                Term::Variable(v) => {
                    if !equalvars.contains_key(v) {
                        equalvars_order.push(v.clone());
                    }
                    equalvars
                        .entry(v.clone())
                        .or_default()
                        .push((alias.clone(), column.clone()));
                }
                Term::Wildcard => {}
            }
        }
    }

    // Step 7 — classification of negated atoms.
    let mut not_exists: Vec<NotExistsClause> = Vec::new();
    for (atom, alias) in atoms.iter().zip(&aliases) {
        if atom.sign != Sign::Negated {
            continue;
        }
        let columns = &schema[&atom.relation];
        let mut joins = Vec::new();
        let mut binds = Vec::new();
        for (j, term) in atom.args.iter().enumerate() {
            let column = &columns[j];
            match term {
                Term::Literal(val) => binds.push((
                    alias.clone(),
                    column.clone(),
                    escape_sql_literal(val),
                )),
                Term::Variable(v) if bound.contains_key(v) => {
                    binds.push((alias.clone(), column.clone(), escape_sql_literal(&bound[v])));
                }
                Term::Variable(v) => {
                    // Guaranteed present: step 5 already rejected any
                    // variable with neither a binding site nor an
                    // external binding, so every variable reaching here
                    // that isn't bound must have a positive binding site.
                    let (outer_alias, outer_column) = &colofvar[v];
                    joins.push((
                        alias.clone(),
                        column.clone(),
                        outer_alias.clone(),
                        outer_column.clone(),
                    ));
                }
                Term::Wildcard => {}
            }
        }
        debug!(relation = %atom.relation, alias = %alias, "classified negated atom");
        not_exists.push(NotExistsClause {
            relation: atom.relation.clone(),
            alias: alias.clone(),
            joins,
            binds,
        });
    }

    // Step 8 — SQL assembly.
    let select_list = wants
        .iter()
        .map(|w| {
            let (alias, column) = &colofvar[w];
            format!("    {alias}.{column} AS {w}")
        })
        .collect::<Vec<_>>()
        .join(",\n");

    let positive_atoms: Vec<(&str, &str)> = atoms
        .iter()
        .zip(&aliases)
        .filter(|(atom, _)| atom.sign == Sign::Positive)
        .map(|(atom, alias)| (atom.relation.as_str(), alias.as_str()))
        .collect();
    let from_list = positive_atoms
        .iter()
        .map(|(relation, alias)| format!("    {relation} {alias}"))
        .collect::<Vec<_>>()
        .join(",\n");

    let mut sql = format!("SELECT DISTINCT\n{select_list}\nFROM\n{from_list}\nWHERE 1\n");

    for (alias, column, literal) in &value_binds {
        sql.push_str(&format!("    AND {alias}.{column} = {literal}\n"));
    }

    // Every subsequent positive occurrence is joined back to the first
    // (the binding site), not chained consecutively — n occurrences give
    // n-1 equalities, all anchored at occurrences[0].
    for var in &equalvars_order {
        let occurrences = &equalvars[var];
        if let Some((a1, c1)) = occurrences.first() {
            for (a2, c2) in &occurrences[1..] {
                sql.push_str(&format!("    AND {a1}.{c1} = {a2}.{c2}\n"));
            }
        }
    }

    for clause in &not_exists {
        sql.push_str(&format!(
            "    AND NOT EXISTS (SELECT 1 FROM {} {} WHERE 1",
            clause.relation, clause.alias
        ));
        for (inner_alias, inner_column, outer_alias, outer_column) in &clause.joins {
            sql.push_str(&format!(
                " AND {inner_alias}.{inner_column} = {outer_alias}.{outer_column}"
            ));
        }
        for (inner_alias, inner_column, literal) in &clause.binds {
            sql.push_str(&format!(" AND {inner_alias}.{inner_column} = {literal}"));
        }
        sql.push_str(")\n");
    }

    while sql.ends_with('\n') {
        sql.pop();
    }
    Ok(sql)
}

fn check_arity(atom: &Atom, schema: &Schema) -> Result<(), CompileError> {
    let Some(columns) = schema.get(&atom.relation) else {
        return Err(CompileError::Schema {
            relation: atom.relation.clone(),
        });
    };
    if atom.args.len() != columns.len() {
        return Err(CompileError::Arity {
            relation: atom.relation.clone(),
            expected: columns.len(),
            found: atom.args.len(),
        });
    }
    Ok(())
}

/// Escapes a raw string for embedding as a SQL literal: duplicate every
/// `\` to `\\`, then escape every `"` to `\"`, then wrap in double quotes.
/// Order matters — escaping backslashes first avoids double-escaping the
/// backslash introduced by the quote-escaping step (§4.4 Step 8, §9).
#[must_use]
pub fn escape_sql_literal(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

//! Black-box tests for every way `compile` can fail (§7), plus the
//! error propagation across lex/parse/analyze stage boundaries.

mod common;
use common::example_schema;

use std::collections::HashMap;

use drc_core::CompileError;

#[test]
fn unbound_projected_variable_is_an_error() {
    let schema = example_schema();
    let bound = HashMap::new();
    let wants = vec!["X".to_string()];
    let err = drc_core::compile("student(S,SD)", &schema, &bound, &wants).unwrap_err();
    assert!(matches!(
        err,
        CompileError::UnboundProjected { variable } if variable == "X"
    ));
}

#[test]
fn arity_mismatch_is_an_error() {
    let schema = example_schema();
    let bound = HashMap::new();
    let wants = vec!["S".to_string()];
    let err = drc_core::compile("student(S)", &schema, &bound, &wants).unwrap_err();
    assert!(matches!(
        err,
        CompileError::Arity { relation, expected: 2, found: 1 } if relation == "student"
    ));
}

#[test]
fn projecting_a_variable_with_no_positive_occurrence_is_an_error() {
    let schema = example_schema();
    let bound = HashMap::from([("L".to_string(), "proglang1".to_string())]);
    let wants = vec!["L".to_string()];
    let err = drc_core::compile(
        "student(S,*) && !registered(S,L)",
        &schema,
        &bound,
        &wants,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CompileError::ProjectedWithoutColumn { variable } if variable == "L"
    ));
}

#[test]
fn unbound_variable_in_negated_only_atom_is_an_error() {
    let mut schema = example_schema();
    schema.insert(
        "other".to_string(),
        vec!["_1_".to_string(), "_2_".to_string()],
    );
    let bound = HashMap::new();
    let wants = vec!["S".to_string()];
    let err =
        drc_core::compile("student(S,SD) && !other(X,Y)", &schema, &bound, &wants).unwrap_err();
    assert!(matches!(err, CompileError::UnboundVariable { .. }));
}

#[test]
fn no_such_table_is_a_schema_error() {
    let schema = example_schema();
    let bound = HashMap::new();
    let wants = vec!["X".to_string()];
    let err = drc_core::compile("ghost(X)", &schema, &bound, &wants).unwrap_err();
    assert!(matches!(
        err,
        CompileError::Schema { relation } if relation == "ghost"
    ));
}

#[test]
fn lex_error_propagates_through_compile() {
    let schema = example_schema();
    let bound = HashMap::new();
    let wants = vec!["S".to_string()];
    let err = drc_core::compile("student(S) & other(S)", &schema, &bound, &wants).unwrap_err();
    assert!(matches!(err, CompileError::Lex(_)));
}

#[test]
fn parse_error_propagates_through_compile() {
    let schema = example_schema();
    let bound = HashMap::new();
    let wants = vec!["S".to_string()];
    let err = drc_core::compile("student(", &schema, &bound, &wants).unwrap_err();
    assert!(matches!(err, CompileError::Parse(_)));
}

#[test]
fn digit_bearing_identifier_argument_is_a_parse_error() {
    let schema = example_schema();
    let bound = HashMap::new();
    let wants = vec!["S".to_string()];
    let err = drc_core::compile("student(a1,SD)", &schema, &bound, &wants).unwrap_err();
    assert!(matches!(err, CompileError::Parse(_)));
}

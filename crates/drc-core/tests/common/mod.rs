#![allow(dead_code)]

use std::collections::HashMap;

use drc_core::Schema;

/// The five-relation schema used throughout spec examples: `student`,
/// `immatriculated`, `lecture`, `registered`, `teacher`, each with two
/// columns named `_1_` and `_2_`.
pub fn example_schema() -> Schema {
    HashMap::from([
        (
            "student".to_string(),
            vec!["_1_".to_string(), "_2_".to_string()],
        ),
        (
            "immatriculated".to_string(),
            vec!["_1_".to_string(), "_2_".to_string()],
        ),
        (
            "lecture".to_string(),
            vec!["_1_".to_string(), "_2_".to_string()],
        ),
        (
            "registered".to_string(),
            vec!["_1_".to_string(), "_2_".to_string()],
        ),
        (
            "teacher".to_string(),
            vec!["_1_".to_string(), "_2_".to_string()],
        ),
    ])
}

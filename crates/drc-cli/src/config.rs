//! Loads the external `Schema` and `BoundVars` collaborators from disk.
//!
//! The core never parses these itself (§6) — this module is the thin,
//! swappable on-disk shape the CLI chose for them: a JSON object mapping
//! relation names to ordered column lists, and a JSON object mapping
//! variable names to string values.

use std::collections::HashMap;
use std::path::Path;

use drc_core::{BoundVars, Schema};

use crate::error::{CliError, Result};

pub fn load_schema(path: &Path) -> Result<Schema> {
    load_json(path)
}

pub fn load_bound_vars(path: &Path) -> Result<BoundVars> {
    load_json(path)
}

fn load_json<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Empty bound-vars map, used when `--bound-vars` is omitted.
#[must_use]
pub fn empty_bound_vars() -> HashMap<String, String> {
    HashMap::new()
}

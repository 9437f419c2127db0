//! CLI-level errors: everything a `drcc` invocation can fail with, layered
//! on top of [`drc_core::CompileError`].

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path} as JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Compile(#[from] drc_core::CompileError),

    #[error("no query given: pass it positionally or via --query-file")]
    MissingQuery,
}

pub type Result<T> = std::result::Result<T, CliError>;

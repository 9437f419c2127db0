//! `drcc` — compiles a Domain Relational Calculus query into SQL.
//!
//! This binary is the external, out-of-scope-per-spec driver around
//! `drc-core`: it owns argument parsing, reading the schema/bound-vars
//! files, and printing the result. None of that is part of the
//! translator itself.

mod config;
mod error;

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use error::Result;

/// Compile a DRC query into an equivalent SQL SELECT.
#[derive(Parser)]
#[command(name = "drcc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The DRC query string to compile, read as a positional argument.
    ///
    /// Omit this and pass `--query-file` instead to read the query from
    /// disk.
    query: Option<String>,

    /// Read the DRC query from a file instead of the positional argument.
    #[arg(long, conflicts_with = "query")]
    query_file: Option<PathBuf>,

    /// Path to a JSON schema file: `{"relation": ["col1", "col2"], ...}`.
    #[arg(short, long, env = "DRC_SCHEMA")]
    schema: PathBuf,

    /// Path to a JSON bound-variables file: `{"var": "value", ...}`.
    #[arg(short, long)]
    bound_vars: Option<PathBuf>,

    /// Comma-separated list of variables to project, in order.
    #[arg(short, long, value_delimiter = ',')]
    wants: Vec<String>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber");

    let query = match (&cli.query, &cli.query_file) {
        (Some(q), None) => q.clone(),
        (None, Some(path)) => std::fs::read_to_string(path).map_err(|source| error::CliError::Io {
            path: path.clone(),
            source,
        })?,
        (Some(_), Some(_)) => unreachable!("clap rejects query and --query-file together"),
        (None, None) => {
            return Err(error::CliError::MissingQuery);
        }
    };

    let schema = config::load_schema(&cli.schema)?;
    let bound = match &cli.bound_vars {
        Some(path) => config::load_bound_vars(path)?,
        None => config::empty_bound_vars(),
    };

    info!(query = %query, wants = ?cli.wants, "compiling");
    let sql = drc_core::compile(&query, &schema, &bound, &cli.wants)?;
    println!("{sql}");

    Ok(())
}

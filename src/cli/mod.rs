//! Command-line interface for concordance-scheme.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **show**: Print the whole scheme as a table
//! - **lookup**: Print the contingency states for one (truth, call) pair
//! - **validate**: Check that a scheme file is complete and well formed
//! - **export**: Write the active scheme as JSON
//!
//! ## Usage
//!
//! ```text
//! # Print the built-in GA4GH scheme
//! concordance-scheme show
//!
//! # Classify one comparison
//! concordance-scheme lookup HET_VAR1_VAR2 HET_VAR1_VAR3
//!
//! # Start a custom scheme from the built-in one
//! concordance-scheme export -o my_scheme.json
//! concordance-scheme validate my_scheme.json
//! concordance-scheme --scheme my_scheme.json show --format tsv
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::scheme::default_scheme;
use crate::scheme::store::ConcordanceScheme;

pub mod export;
pub mod lookup;
pub mod show;
pub mod validate;

#[derive(Parser)]
#[command(name = "concordance-scheme")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Inspect the genotype concordance contingency scheme")]
#[command(
    long_about = "concordance-scheme prints and checks the table that decides which contingency entries (TP, FP, TN, FN) a comparison between a truth genotype and a called genotype contributes to.\n\nThe built-in table follows the GA4GH benchmarking conventions. Custom tables can be exported, edited and validated as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Use a scheme JSON file instead of the built-in GA4GH scheme
    #[arg(long, global = true)]
    pub scheme: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the full scheme
    Show(show::ShowArgs),

    /// Look up the contingency states for a truth and call state
    Lookup(lookup::LookupArgs),

    /// Validate a scheme file
    Validate(validate::ValidateArgs),

    /// Export the active scheme as JSON
    Export(export::ExportArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Resolve the scheme a command should use
///
/// # Errors
///
/// Returns an error if a scheme file was given and cannot be loaded.
pub fn active_scheme(path: Option<&Path>) -> anyhow::Result<Cow<'static, ConcordanceScheme>> {
    match path {
        Some(path) => {
            info!("Loading scheme from {}", path.display());
            let scheme = ConcordanceScheme::load_from_file(path)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;
            Ok(Cow::Owned(scheme))
        }
        None => {
            debug!("Using built-in GA4GH scheme");
            Ok(Cow::Borrowed(default_scheme()))
        }
    }
}

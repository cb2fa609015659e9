use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::scheme::store::ConcordanceScheme;

#[derive(Args)]
pub struct ValidateArgs {
    /// Scheme JSON file to check
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Counts reported for a valid scheme
struct SchemeSummary {
    cells: usize,
    na: usize,
    empty: usize,
}

impl SchemeSummary {
    fn of(scheme: &ConcordanceScheme) -> Self {
        let mut summary = Self {
            cells: 0,
            na: 0,
            empty: 0,
        };
        for (_, set) in scheme.cells() {
            summary.cells += 1;
            if set.is_na() {
                summary.na += 1;
            } else if set.is_empty() {
                summary.empty += 1;
            }
        }
        summary
    }
}

/// Execute the validate command
///
/// The global `--scheme` option does not apply; the file to check is given
/// directly.
///
/// # Errors
///
/// Returns an error naming the first problem if the file is not a complete,
/// well-formed scheme.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ValidateArgs, format: OutputFormat) -> anyhow::Result<()> {
    info!("Validating scheme file {}", args.input.display());
    let scheme = ConcordanceScheme::load_from_file(&args.input)
        .map_err(|e| anyhow::anyhow!("{}: {e}", args.input.display()))?;
    let summary = SchemeSummary::of(&scheme);

    match format {
        OutputFormat::Text => {
            println!(
                "Scheme '{}' is valid: {} cells ({} NA, {} empty)",
                scheme.name(),
                summary.cells,
                summary.na,
                summary.empty
            );
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": args.input.display().to_string(),
                "name": scheme.name(),
                "valid": true,
                "cells": summary.cells,
                "na_cells": summary.na,
                "empty_cells": summary.empty,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("path\tname\tcells\tna_cells\tempty_cells");
            println!(
                "{}\t{}\t{}\t{}\t{}",
                args.input.display(),
                scheme.name(),
                summary.cells,
                summary.na,
                summary.empty
            );
        }
    }

    Ok(())
}

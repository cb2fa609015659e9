use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::cli::active_scheme;

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the export command. Output is always JSON.
///
/// # Errors
///
/// Returns an error if the scheme cannot be loaded or the file cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ExportArgs, scheme_path: Option<&Path>) -> anyhow::Result<()> {
    let scheme = active_scheme(scheme_path)?;
    let json = scheme.to_json()?;

    if let Some(path) = &args.output {
        std::fs::write(path, json + "\n")?;
        info!("Wrote scheme '{}' to {}", scheme.name(), path.display());
    } else {
        println!("{json}");
    }

    Ok(())
}

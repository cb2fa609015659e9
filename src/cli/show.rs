use std::path::Path;

use clap::Args;

use crate::cli::{active_scheme, OutputFormat};
use crate::core::types::{CallState, TruthState};
use crate::scheme::store::ConcordanceScheme;

#[derive(Args)]
pub struct ShowArgs {
    /// Only show rows for these call states (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub calls: Vec<CallState>,

    /// Hide rows whose cells are all NA or empty
    #[arg(long)]
    pub informative_only: bool,
}

/// Execute the show command
///
/// # Errors
///
/// Returns an error if the scheme cannot be loaded or serialized.
#[allow(clippy::needless_pass_by_value)]
pub fn run(
    args: ShowArgs,
    format: OutputFormat,
    verbose: bool,
    scheme_path: Option<&Path>,
) -> anyhow::Result<()> {
    let scheme = active_scheme(scheme_path)?;
    let rows = selected_rows(&scheme, &args);

    match format {
        OutputFormat::Text => print_text_table(&scheme, &rows, verbose),
        OutputFormat::Json => print_json_cells(&scheme, &rows)?,
        OutputFormat::Tsv => print_tsv_table(&scheme, &rows),
    }

    Ok(())
}

fn selected_rows(scheme: &ConcordanceScheme, args: &ShowArgs) -> Vec<CallState> {
    CallState::ALL
        .into_iter()
        .filter(|call| args.calls.is_empty() || args.calls.contains(call))
        .filter(|call| {
            !args.informative_only
                || scheme
                    .row(*call)
                    .any(|(_, set)| set.is_some_and(|s| !s.is_empty() && !s.is_na()))
        })
        .collect()
}

/// Cell text for display; `?` marks an unregistered pair
fn cell_text(scheme: &ConcordanceScheme, truth: TruthState, call: CallState) -> String {
    scheme
        .lookup(truth, call)
        .map_or_else(|| "?".to_string(), |set| set.to_string())
}

fn print_text_table(scheme: &ConcordanceScheme, rows: &[CallState], verbose: bool) {
    println!("Concordance Scheme: {}", scheme.name());
    println!("Rows are call states, columns are truth states");
    println!();

    let label_width = rows
        .iter()
        .map(|call| call.name().len())
        .max()
        .unwrap_or(0)
        .max("CALL".len());

    let widths: Vec<usize> = TruthState::ALL
        .iter()
        .map(|truth| {
            rows.iter()
                .map(|call| cell_text(scheme, *truth, *call).len())
                .max()
                .unwrap_or(0)
                .max(truth.name().len())
        })
        .collect();

    let mut header = format!("{:<label_width$}", "CALL");
    for (truth, &width) in TruthState::ALL.iter().zip(&widths) {
        header.push_str(&format!("  {:<width$}", truth.name()));
    }
    println!("{}", header.trim_end());
    println!("{}", "-".repeat(header.trim_end().len()));

    for call in rows {
        let mut line = format!("{:<label_width$}", call.name());
        for (truth, &width) in TruthState::ALL.iter().zip(&widths) {
            line.push_str(&format!("  {:<width$}", cell_text(scheme, *truth, *call)));
        }
        println!("{}", line.trim_end());
    }

    if verbose {
        let cells: Vec<_> = scheme.cells().collect();
        let na = cells.iter().filter(|(_, set)| set.is_na()).count();
        let empty = cells.iter().filter(|(_, set)| set.is_empty()).count();
        println!();
        println!("Cells: {} ({na} NA, {empty} empty)", cells.len());
        println!("'-' = no contribution, NA = combination never produced");
    }
}

fn print_json_cells(scheme: &ConcordanceScheme, rows: &[CallState]) -> anyhow::Result<()> {
    let cells: Vec<serde_json::Value> = scheme
        .cells()
        .filter(|(pair, _)| rows.contains(&pair.call_state))
        .map(|(pair, set)| {
            serde_json::json!({
                "truth_state": pair.truth_state,
                "call_state": pair.call_state,
                "contingency_states": set,
            })
        })
        .collect();

    let output = serde_json::json!({
        "name": scheme.name(),
        "cells": cells,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_table(scheme: &ConcordanceScheme, rows: &[CallState]) {
    let header: Vec<&str> = std::iter::once("call_state")
        .chain(TruthState::ALL.iter().map(|truth| truth.name()))
        .collect();
    println!("{}", header.join("\t"));

    for call in rows {
        let line: Vec<String> = std::iter::once(call.name().to_string())
            .chain(
                TruthState::ALL
                    .iter()
                    .map(|truth| cell_text(scheme, *truth, *call)),
            )
            .collect();
        println!("{}", line.join("\t"));
    }
}

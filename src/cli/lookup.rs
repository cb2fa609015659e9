use std::path::Path;

use clap::Args;

use crate::cli::{active_scheme, OutputFormat};
use crate::core::contingency::ContingencySet;
use crate::core::types::{CallState, ContingencyState, TruthState};

#[derive(Args)]
pub struct LookupArgs {
    /// Truth genotype category (e.g. HOM_REF, HET_REF_VAR1, HET_VAR1_VAR2)
    #[arg(required = true)]
    pub truth: TruthState,

    /// Call genotype category (e.g. HOM_VAR1, HET_VAR1_VAR3, NO_CALL)
    #[arg(required = true)]
    pub call: CallState,
}

/// Execute the lookup command
///
/// # Errors
///
/// Returns an error if the scheme cannot be loaded or has no entry for the pair.
#[allow(clippy::needless_pass_by_value)]
pub fn run(
    args: LookupArgs,
    format: OutputFormat,
    verbose: bool,
    scheme_path: Option<&Path>,
) -> anyhow::Result<()> {
    let scheme = active_scheme(scheme_path)?;
    let set = scheme.lookup(args.truth, args.call).ok_or_else(|| {
        anyhow::anyhow!(
            "Scheme '{}' has no entry for [{}, {}]",
            scheme.name(),
            args.truth,
            args.call
        )
    })?;

    match format {
        OutputFormat::Text => print_text_lookup(&args, set, verbose),
        OutputFormat::Json => print_json_lookup(&args, set)?,
        OutputFormat::Tsv => print_tsv_lookup(&args, set),
    }

    Ok(())
}

fn print_text_lookup(args: &LookupArgs, set: ContingencySet, verbose: bool) {
    println!("[{}, {}] -> {set}", args.truth, args.call);

    if verbose {
        if set.is_na() {
            println!("  This combination is never produced when assigning genotype states.");
        } else if set.is_empty() {
            println!("  This comparison does not contribute to the contingency table.");
        } else {
            for state in set {
                println!("  {state}: {}", describe(state));
            }
        }
    }
}

fn describe(state: ContingencyState) -> &'static str {
    match state {
        ContingencyState::TP => "an allele in the truth was called",
        ContingencyState::FP => "an allele was called that is not in the truth",
        ContingencyState::TN => "the reference allele is in both truth and call",
        ContingencyState::FN => "an allele in the truth was not called",
        ContingencyState::NA => "unreachable",
    }
}

fn print_json_lookup(args: &LookupArgs, set: ContingencySet) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "truth_state": args.truth,
        "call_state": args.call,
        "contingency_states": set,
        "unreachable": set.is_na(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_lookup(args: &LookupArgs, set: ContingencySet) {
    println!("truth_state\tcall_state\tcontingency_states");
    println!("{}\t{}\t{set}", args.truth, args.call);
}

//! # Check-Evidence Subcommand
//!
//! Consistency gate for evidence pack authors: duplicate ids and dangling
//! references fail the command with one line per problem.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;
use eaic_evidence::EvidenceGraph;

use crate::print::load_json;

/// Arguments for the check-evidence subcommand.
#[derive(Args, Debug)]
pub struct CheckEvidenceArgs {
    /// The evidence pack to check.
    #[arg(long)]
    pub evidence: PathBuf,
}

/// Consistency-check one evidence pack.
pub fn run(args: CheckEvidenceArgs) -> anyhow::Result<()> {
    let graph: EvidenceGraph = serde_json::from_value(load_json(&args.evidence)?)
        .with_context(|| format!("invalid evidence pack in {}", args.evidence.display()))?;

    let errors = graph.consistency_errors();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("  {e}");
        }
        bail!("{}: {} consistency error(s)", args.evidence.display(), errors.len());
    }

    println!(
        "{}: consistent ({} sources, {} claims, {} patterns)",
        args.evidence.display(),
        graph.sources.len(),
        graph.claims.len(),
        graph.patterns.len()
    );
    Ok(())
}

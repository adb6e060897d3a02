//! # Verify Subcommand
//!
//! Re-validates a sealed card file: schema conformance first, then the
//! checksum seal. Exits non-zero on any mismatch so the command can gate
//! a CI step or an import pipeline.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;
use eaic_card::Card;
use eaic_schema::CompiledSchema;

use crate::print::load_json;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// The sealed card file to verify.
    #[arg(long)]
    pub card: PathBuf,

    /// Card schema file (Draft 2020-12).
    #[arg(long)]
    pub schema: PathBuf,
}

/// Verify one card file against the schema and its checksum.
pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let card_value = load_json(&args.card)?;
    let schema = CompiledSchema::from_value("eai_card", &load_json(&args.schema)?)?;

    let violations = schema.violations(&card_value);
    if !violations.is_empty() {
        for v in &violations {
            eprintln!("  {v}");
        }
        bail!("{}: {} schema violation(s)", args.card.display(), violations.len());
    }

    let card: Card = serde_json::from_value(card_value)
        .with_context(|| format!("cannot parse card in {}", args.card.display()))?;
    if card.meta.checksum_sha256.is_none() {
        bail!("{}: card is unsealed (no checksum)", args.card.display());
    }
    if !card.verify_checksum()? {
        bail!("{}: checksum mismatch", args.card.display());
    }

    println!("{}: valid and sealed", args.card.display());
    Ok(())
}

//! # Print-Card Subcommand
//!
//! Loads the input documents, runs the compilation pipeline, and writes
//! two artifacts into the output directory: the sealed card document
//! (`<card_id>.eai_card.json`) and the rendered paste text
//! (`<card_id>.paste_prompt.txt`).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Args;
use eaic_card::{CardCompiler, CardInput, CompileOutcome, SystemGenerator};
use eaic_evidence::EvidenceGraph;
use eaic_schema::CompiledSchema;
use eaic_ssot::RuleTable;
use serde_json::Value;

/// Arguments for the print-card subcommand.
#[derive(Args, Debug)]
pub struct PrintCardArgs {
    /// Compilation input: context plus band selection, as JSON.
    #[arg(long)]
    pub input: PathBuf,

    /// SSOT document carrying the logic gates and trace schema.
    #[arg(long)]
    pub ssot: PathBuf,

    /// Card schema file (Draft 2020-12).
    #[arg(long)]
    pub schema: PathBuf,

    /// Evidence pack. Without it, cards carry no evidence links.
    #[arg(long)]
    pub evidence: Option<PathBuf>,

    /// Directory to write the card and paste-text artifacts into.
    #[arg(long, default_value = "out")]
    pub out_dir: PathBuf,

    /// Gate trigger dimension.
    #[arg(long, default_value = "K")]
    pub trigger_dimension: String,
}

pub fn load_json(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Compile one card and write its artifacts.
pub fn run(args: PrintCardArgs) -> anyhow::Result<()> {
    let input: CardInput = serde_json::from_value(load_json(&args.input)?)
        .with_context(|| format!("invalid card input in {}", args.input.display()))?;
    let table = RuleTable::from_document(&load_json(&args.ssot)?);
    let schema_name = args
        .schema
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "card schema".to_string());
    let schema = CompiledSchema::from_value(schema_name, &load_json(&args.schema)?)?;

    let graph: Option<EvidenceGraph> = match &args.evidence {
        Some(path) => Some(
            serde_json::from_value(load_json(path)?)
                .with_context(|| format!("invalid evidence pack in {}", path.display()))?,
        ),
        None => None,
    };

    let generator = SystemGenerator;
    let mut compiler = CardCompiler::new(&table, &schema, &generator)
        .with_trigger_dimension(&args.trigger_dimension);
    if let Some(graph) = &graph {
        compiler = compiler.with_evidence(graph);
    }

    let card = match compiler.compile(input)? {
        CompileOutcome::Sealed(card) => card,
        CompileOutcome::Invalid { violations, .. } => {
            for v in &violations {
                eprintln!("  {v}");
            }
            bail!(
                "card failed schema validation with {} violation(s)",
                violations.len()
            );
        }
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create {}", args.out_dir.display()))?;

    let card_path = args.out_dir.join(format!("{}.eai_card.json", card.meta.card_id));
    let card_json = serde_json::to_string_pretty(&card)?;
    std::fs::write(&card_path, card_json)
        .with_context(|| format!("cannot write {}", card_path.display()))?;

    let paste_path = args
        .out_dir
        .join(format!("{}.paste_prompt.txt", card.meta.card_id));
    std::fs::write(&paste_path, &card.prompt_pack.paste_prompt_text)
        .with_context(|| format!("cannot write {}", paste_path.display()))?;

    for change in &card.validation_report.enforced_changes {
        println!(
            "enforced: {} ({} -> {}, {})",
            change.rule, change.before, change.after, change.reason
        );
    }
    println!("card:  {}", card_path.display());
    println!("paste: {}", paste_path.display());
    Ok(())
}

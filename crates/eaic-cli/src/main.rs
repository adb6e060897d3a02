//! # eaic CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// EAI Card Stack CLI — card compilation toolchain.
///
/// Compiles interaction contexts and rubric band selections into sealed
/// EAI cards, verifies sealed cards, and checks evidence packs.
#[derive(Parser, Debug)]
#[command(name = "eaic", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compile, validate, seal, and write a card.
    PrintCard(eaic_cli::print::PrintCardArgs),
    /// Re-validate and checksum-verify a sealed card file.
    Verify(eaic_cli::verify::VerifyArgs),
    /// Consistency-check an evidence pack.
    CheckEvidence(eaic_cli::evidence::CheckEvidenceArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::PrintCard(args) => eaic_cli::print::run(args),
        Commands::Verify(args) => eaic_cli::verify::run(args),
        Commands::CheckEvidence(args) => eaic_cli::evidence::run(args),
    }
}

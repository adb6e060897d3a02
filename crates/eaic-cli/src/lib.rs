//! # eaic-cli — EAI Card Stack Command-Line Interface
//!
//! Thin I/O shell around the domain crates: loads JSON documents from
//! disk, hands them to the compiler, and writes artifacts back out.
//!
//! ## Subcommands
//!
//! - `print-card` — Compile, validate, seal, and write a card
//! - `verify` — Re-validate and checksum-verify a sealed card file
//! - `check-evidence` — Consistency-check an evidence pack
//!
//! ## Crate Policy
//!
//! - All file I/O lives here; the domain crates never touch the disk.
//! - Handler functions delegate to domain crates — no business logic here.

pub mod evidence;
pub mod print;
pub mod verify;

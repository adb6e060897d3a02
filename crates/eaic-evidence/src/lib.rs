//! # eaic-evidence — Evidence Graph and Link Suggestion
//!
//! Behavioral constraints on a card are backed by traceable evidence: a
//! *pattern* (a didactic design pattern like retrieval practice) links to
//! *claims*, and each claim cites *sources*. This crate holds the parsed
//! graph ([`EvidenceGraph`]) and the deterministic linker
//! ([`suggest_links`]) that selects applicable patterns for an interaction
//! and walks pattern → claim → source.
//!
//! The linker is a pure function: same inputs, same ordered output. An
//! empty result is a valid result, and dangling references are skipped
//! silently — graph hygiene is the pack author's job, checked separately
//! by [`EvidenceGraph::consistency_errors`].

pub mod graph;
pub mod linker;

pub use graph::{Claim, EvidenceGraph, Pattern, Source};
pub use linker::{suggest_links, PATTERN_LINK_PREFIX};

//! # Evidence Linker — Pattern Selection and Bounded Traversal
//!
//! Selects applicable design patterns for an interaction from two heuristic
//! rule sets (process-phase keywords, then knowledge-type code), then walks
//! the graph pattern → claim → source, deduplicating while preserving
//! first-seen order at every step.
//!
//! The output is a flat list of link identifiers: pattern ids wrapped with
//! the [`PATTERN_LINK_PREFIX`] namespace marker, followed by claim ids,
//! followed by source ids. Pattern ids share no namespace with claim or
//! source ids, so the marker keeps the three kinds distinguishable in the
//! card's single link list.

use eaic_core::band::BandSelection;

use crate::graph::EvidenceGraph;

/// Namespace marker prepended to pattern ids in the emitted link list.
pub const PATTERN_LINK_PREFIX: &str = "PAT_";

/// Phase keywords that select the practice-oriented patterns.
/// Matched case-insensitively as substrings, so Dutch phase names like
/// "oefenfase" and "consolidatie" hit alongside their English forms.
const PRACTICE_KEYWORDS: [&str; 3] = ["oefen", "practice", "consolid"];

/// Phase keywords that select the feedback pattern.
const FEEDBACK_KEYWORDS: [&str; 3] = ["feedback", "format", "reflect"];

/// Suggest evidence links for an interaction.
///
/// `process_phase` is the context's free-text phase description; `bands`
/// is the *corrected* selection (gates already enforced). The result is a
/// pure function of the inputs — no randomness, no external state — and
/// is empty (not an error) when no heuristic matches or the graph has no
/// matching entries.
pub fn suggest_links(
    process_phase: &str,
    bands: &BandSelection,
    graph: &EvidenceGraph,
) -> Vec<String> {
    let phase = process_phase.to_lowercase();
    let k_code = bands.get("K").map(|b| b.code.as_str()).unwrap_or("");

    // Rule set 1: phase keywords, fixed order.
    let mut want: Vec<&str> = Vec::new();
    if PRACTICE_KEYWORDS.iter().any(|kw| phase.contains(kw)) {
        want.extend(["retrieval_practice", "feed_up_back_forward", "guided_practice"]);
    }
    if FEEDBACK_KEYWORDS.iter().any(|kw| phase.contains(kw)) {
        want.push("feed_up_back_forward");
    }

    // Rule set 2: knowledge-type code.
    match k_code {
        "K1" => want.extend(["worked_examples", "guided_practice"]),
        "K3" => want.extend(["explain_your_reasoning", "compare_and_justify"]),
        _ => {}
    }

    // Dedup preserving first-seen order; drop ids the graph does not know.
    let mut pattern_ids: Vec<&str> = Vec::new();
    for id in want {
        if !pattern_ids.contains(&id) && graph.pattern(id).is_some() {
            pattern_ids.push(id);
        }
    }

    // Pattern -> claim, first-seen order across patterns.
    let mut claim_ids: Vec<&str> = Vec::new();
    for pid in &pattern_ids {
        // Lookup cannot fail here, but a dangling id would just be skipped.
        let Some(pattern) = graph.pattern(pid) else {
            continue;
        };
        for cid in &pattern.claim_links {
            if !claim_ids.contains(&cid.as_str()) {
                claim_ids.push(cid);
            }
        }
    }

    // Claim -> source, same discipline; dangling claim ids drop out here.
    let mut source_ids: Vec<&str> = Vec::new();
    for cid in &claim_ids {
        let Some(claim) = graph.claim(cid) else {
            continue;
        };
        for sid in &claim.sources {
            if !source_ids.contains(&sid.as_str()) {
                source_ids.push(sid);
            }
        }
    }

    let mut links = Vec::with_capacity(pattern_ids.len() + claim_ids.len() + source_ids.len());
    links.extend(
        pattern_ids
            .iter()
            .map(|pid| format!("{PATTERN_LINK_PREFIX}{pid}")),
    );
    links.extend(claim_ids.iter().map(|cid| cid.to_string()));
    links.extend(source_ids.iter().map(|sid| sid.to_string()));
    links
}

//! # Evidence Graph Types
//!
//! Three identified collections form a directed graph: sources are leaves,
//! claims reference sources (and the patterns they support), patterns
//! reference claims. The compiler treats the graph as an immutable,
//! externally supplied snapshot and tolerates dangling references; the
//! [`EvidenceGraph::consistency_errors`] check exists for pack authors and
//! fixture tests, not for the compilation pipeline.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A citable source document (leaf node).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Stable identifier, unique within the pack.
    pub source_id: String,
    /// Display title, if the pack carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The patterns a claim supports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supports {
    /// Pattern ids this claim is evidence for.
    #[serde(default)]
    pub design_patterns: Vec<String>,
}

/// A research claim citing zero or more sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Stable identifier, unique within the pack.
    pub claim_id: String,
    /// Source ids backing this claim.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Patterns this claim supports.
    #[serde(default)]
    pub supports: Supports,
}

/// A didactic design pattern linked to supporting claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Stable identifier, unique within the pack.
    pub pattern_id: String,
    /// Claim ids this pattern rests on.
    #[serde(default)]
    pub claim_links: Vec<String>,
}

/// The complete evidence pack: three parsed collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceGraph {
    /// All sources in the pack.
    pub sources: Vec<Source>,
    /// All claims in the pack.
    pub claims: Vec<Claim>,
    /// All patterns in the pack.
    pub patterns: Vec<Pattern>,
}

impl EvidenceGraph {
    /// Look up a pattern by id.
    pub fn pattern(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.pattern_id == id)
    }

    /// Look up a claim by id.
    pub fn claim(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.claim_id == id)
    }

    /// Look up a source by id.
    pub fn source(&self, id: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.source_id == id)
    }

    /// Check the pack for duplicate ids and dangling references.
    ///
    /// Returns one message per problem, empty when the pack is sound.
    /// This is the pack author's consistency gate; the compiler never
    /// calls it and simply skips whatever does not resolve.
    pub fn consistency_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let source_ids: HashSet<&str> =
            self.sources.iter().map(|s| s.source_id.as_str()).collect();
        if source_ids.len() != self.sources.len() {
            errors.push("duplicate source_id found".to_string());
        }

        let claim_ids: HashSet<&str> =
            self.claims.iter().map(|c| c.claim_id.as_str()).collect();
        if claim_ids.len() != self.claims.len() {
            errors.push("duplicate claim_id found".to_string());
        }

        let pattern_ids: HashSet<&str> =
            self.patterns.iter().map(|p| p.pattern_id.as_str()).collect();
        if pattern_ids.len() != self.patterns.len() {
            errors.push("duplicate pattern_id found".to_string());
        }

        for claim in &self.claims {
            for sid in &claim.sources {
                if !source_ids.contains(sid.as_str()) {
                    errors.push(format!(
                        "claim {} references missing source {sid}",
                        claim.claim_id
                    ));
                }
            }
            for pid in &claim.supports.design_patterns {
                if !pattern_ids.contains(pid.as_str()) {
                    errors.push(format!(
                        "claim {} references missing design pattern {pid}",
                        claim.claim_id
                    ));
                }
            }
        }

        for pattern in &self.patterns {
            for cid in &pattern.claim_links {
                if !claim_ids.contains(cid.as_str()) {
                    errors.push(format!(
                        "pattern {} references missing claim {cid}",
                        pattern.pattern_id
                    ));
                }
            }
        }

        errors
    }
}

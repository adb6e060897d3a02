//! # Rule Table — Read-Only SSOT View
//!
//! [`RuleTable`] is the parsed, immutable snapshot of the SSOT's gate list
//! that a compilation call receives. It holds no logic beyond lookup; the
//! enforcement semantics live in [`crate::gates`].
//!
//! The SSOT document itself is loaded and parsed by the caller (CLI or
//! service). [`RuleTable::from_document`] is the tolerant extraction path
//! for the published document layout:
//!
//! ```json
//! {
//!   "version": "15.0.0",
//!   "interaction_protocol": { "logic_gates": [ { "trigger_band": "K1",
//!                                                "enforcement": "MAX_TD=TD3" } ] },
//!   "trace_schema": { "required_fields": ["card_id", "checksum_sha256"] }
//! }
//! ```
//!
//! Missing sections degrade to empty collections, never to an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One gate from the SSOT's interaction protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicGate {
    /// The exact code that triggers this gate (string equality, not rank).
    pub trigger_band: String,
    /// Enforcement expression, e.g. `"MAX_TD=TD3"`. Unrecognized grammar
    /// means the gate is skipped.
    pub enforcement: String,
}

impl LogicGate {
    /// Construct a gate from trigger code and enforcement expression.
    pub fn new(trigger_band: impl Into<String>, enforcement: impl Into<String>) -> Self {
        Self {
            trigger_band: trigger_band.into(),
            enforcement: enforcement.into(),
        }
    }
}

/// A versioned, ordered, read-only snapshot of the SSOT gate list.
///
/// Loaded once per compilation call and never mutated. Concurrent
/// compilations can share a `RuleTable` freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    version: String,
    gates: Vec<LogicGate>,
    trace_required_fields: Vec<String>,
}

impl RuleTable {
    /// Construct a rule table from its parts. Gate order is preserved and
    /// significant: gates are enforced first to last.
    pub fn new(
        version: impl Into<String>,
        gates: Vec<LogicGate>,
        trace_required_fields: Vec<String>,
    ) -> Self {
        Self {
            version: version.into(),
            gates,
            trace_required_fields,
        }
    }

    /// Extract a rule table from a parsed SSOT document.
    ///
    /// Tolerant by design: a missing `version` becomes `"unknown"`, a
    /// missing or malformed gate list becomes empty, and gate entries
    /// without the expected string fields get empty strings (which can
    /// never trigger or parse, so they are inert).
    pub fn from_document(doc: &Value) -> Self {
        let version = doc
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();

        let gates = doc
            .get("interaction_protocol")
            .and_then(|p| p.get("logic_gates"))
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .map(|g| LogicGate {
                        trigger_band: string_field(g, "trigger_band"),
                        enforcement: string_field(g, "enforcement"),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let trace_required_fields = doc
            .get("trace_schema")
            .and_then(|t| t.get("required_fields"))
            .and_then(Value::as_array)
            .map(|arr| arr.iter().map(stringify).collect())
            .unwrap_or_default();

        Self {
            version,
            gates,
            trace_required_fields,
        }
    }

    /// The SSOT document version this table was extracted from.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All gates, in enforcement order.
    pub fn gates(&self) -> &[LogicGate] {
        &self.gates
    }

    /// Gates whose trigger code equals `code` exactly.
    pub fn gates_for_trigger<'a>(
        &'a self,
        code: &'a str,
    ) -> impl Iterator<Item = &'a LogicGate> {
        self.gates.iter().filter(move |g| g.trigger_band == code)
    }

    /// Trace fields the SSOT requires every card to carry.
    pub fn trace_required_fields(&self) -> &[String] {
        &self.trace_required_fields
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Render any scalar as its string form; trace field lists in the wild
/// occasionally contain bare numbers.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_document_full() {
        let doc = json!({
            "version": "15.0.0",
            "interaction_protocol": {
                "logic_gates": [
                    { "trigger_band": "K1", "enforcement": "MAX_TD=TD3" },
                    { "trigger_band": "K3", "enforcement": "ALLOW_TD=TD5" }
                ]
            },
            "trace_schema": { "required_fields": ["card_id", 7] }
        });
        let table = RuleTable::from_document(&doc);
        assert_eq!(table.version(), "15.0.0");
        assert_eq!(table.gates().len(), 2);
        assert_eq!(table.gates()[0].trigger_band, "K1");
        assert_eq!(table.trace_required_fields(), &["card_id", "7"]);
    }

    #[test]
    fn test_from_document_empty() {
        let table = RuleTable::from_document(&json!({}));
        assert_eq!(table.version(), "unknown");
        assert!(table.gates().is_empty());
        assert!(table.trace_required_fields().is_empty());
    }

    #[test]
    fn test_from_document_malformed_gate_entries() {
        let doc = json!({
            "interaction_protocol": {
                "logic_gates": [ {}, { "trigger_band": 42 }, "not-an-object" ]
            }
        });
        let table = RuleTable::from_document(&doc);
        // Entries are kept but inert: empty trigger never equals a code.
        assert_eq!(table.gates().len(), 3);
        assert!(table.gates().iter().all(|g| g.trigger_band.is_empty()));
    }

    #[test]
    fn test_gates_for_trigger_preserves_order() {
        let table = RuleTable::new(
            "1",
            vec![
                LogicGate::new("K1", "MAX_TD=TD4"),
                LogicGate::new("K2", "MAX_TD=TD6"),
                LogicGate::new("K1", "MAX_TD=TD2"),
            ],
            vec![],
        );
        let hits: Vec<&str> = table
            .gates_for_trigger("K1")
            .map(|g| g.enforcement.as_str())
            .collect();
        assert_eq!(hits, vec!["MAX_TD=TD4", "MAX_TD=TD2"]);
    }
}

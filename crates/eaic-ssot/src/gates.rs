//! # Gate Enforcer — Ceiling Clamps over a Band Selection
//!
//! Walks the SSOT gate list in table order and clamps the band selection
//! against every gate whose trigger code matches the designated trigger
//! dimension's current code. Later gates see the output of earlier gates:
//! enforcement is sequential, not batch.
//!
//! The enforcer returns a corrected **copy** — the caller's selection is
//! left untouched so it can serve as the "before" side of the audit trail,
//! and so concurrent compilations never share mutable state.

use eaic_core::band::{code_prefix, code_rank, BandSelection};

use crate::grammar::parse_enforcement;
use crate::ruletable::RuleTable;

/// One applied clamp, recorded for the card's validation report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GateChange {
    /// Which rule fired, e.g. `"SSOT logic gate for K1"`.
    pub rule: String,
    /// The dimension's code before the clamp.
    pub before: String,
    /// The dimension's code after the clamp.
    pub after: String,
    /// The gate's raw enforcement expression.
    pub reason: String,
}

/// The enforcer's result: a corrected selection plus its change log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
    /// The corrected copy of the input selection.
    pub bands: BandSelection,
    /// One entry per applied clamp, in enforcement order. Empty when no
    /// gate changed anything.
    pub changes: Vec<GateChange>,
}

/// Enforce every gate in `table` against `bands`, using the dimension
/// named by `trigger_dimension` (conventionally `"K"`) as the trigger.
///
/// Guarantees:
///
/// - `rank(after) <= rank(before)` for every dimension — codes are only
///   ever lowered toward a ceiling, never raised.
/// - A gate whose enforcement expression does not parse is skipped.
/// - A gate targeting the trigger dimension itself is skipped: letting a
///   gate rewrite its own trigger would make enforcement non-idempotent
///   (a second pass could match gates the first pass did not).
/// - A missing trigger dimension, a missing target dimension, or a
///   malformed code (rank 0) never fails — those gates are inert.
/// - Re-running the enforcer on its own output yields an empty change log.
pub fn enforce_gates(
    table: &RuleTable,
    bands: &BandSelection,
    trigger_dimension: &str,
) -> GateOutcome {
    let mut corrected = bands.clone();
    let mut changes = Vec::new();

    let Some(trigger_code) = bands.get(trigger_dimension).map(|b| b.code.clone()) else {
        return GateOutcome {
            bands: corrected,
            changes,
        };
    };

    for gate in table.gates() {
        if gate.trigger_band != trigger_code {
            continue;
        }

        let Some(ceiling) = parse_enforcement(&gate.enforcement) else {
            continue;
        };
        if ceiling.dimension == trigger_dimension {
            continue;
        }
        let ceiling_rank = ceiling.rank();
        if ceiling_rank == 0 {
            continue;
        }

        let Some(band) = corrected.get_mut(&ceiling.dimension) else {
            continue;
        };
        // Ranks only compare within a prefix; a foreign or malformed code
        // carries no rank information and is never clamped.
        if code_prefix(&band.code) != ceiling.dimension {
            continue;
        }
        if code_rank(&band.code) <= ceiling_rank {
            continue;
        }

        let before = std::mem::replace(&mut band.code, ceiling.code.clone());
        tracing::debug!(
            rule = %gate.trigger_band,
            %before,
            after = %band.code,
            "logic gate clamped band"
        );
        changes.push(GateChange {
            rule: format!("SSOT logic gate for {trigger_code}"),
            before,
            after: band.code.clone(),
            reason: gate.enforcement.clone(),
        });
    }

    GateOutcome {
        bands: corrected,
        changes,
    }
}

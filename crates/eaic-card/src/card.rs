//! # Card Document and Checksum Seal
//!
//! The compiled card: the full serializable document plus the sealing
//! logic. The checksum is SHA-256 over the JCS canonical form of a fixed
//! view of the card. The view excludes two things:
//!
//! - `meta.checksum_sha256` itself, so the seal never hashes its own slot;
//! - `validation_report`, which is audit trail about how the card was
//!   produced, not part of the contract the card states.
//!
//! Everything else a consumer acts on is inside the hash.

use eaic_core::{sha256_hex, CanonicalBytes, EaicError, Timestamp};
use eaic_ssot::GateChange;
use serde::{Deserialize, Serialize};

use crate::context::CardContext;
use crate::contract::OutputContract;
use crate::generate::CardId;
use crate::policy::Policy;
use crate::prompt::PromptPack;
use eaic_core::band::BandSelection;

/// Lifecycle state of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    /// Assembled but not yet validated and sealed.
    Draft,
    /// Validated against the card schema and sealed with a checksum.
    Verified,
}

/// Card metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMeta {
    /// Unique card id.
    pub card_id: CardId,
    /// Version of the card document format.
    pub card_version: String,
    /// Creation time, UTC seconds precision.
    pub created_at: Timestamp,
    /// Version string of the rule table the card was compiled against.
    pub ssot_version: String,
    /// Version of the compiler that produced the card.
    pub generator_version: String,
    /// Lifecycle state.
    pub status: CardStatus,
    /// Integrity seal. Absent on drafts; set exactly once at sealing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum_sha256: Option<String>,
}

/// What the learner's interaction trace must record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRequirements {
    /// Trace detail level.
    pub trace_level: String,
    /// Field names every trace entry must carry, from the SSOT.
    pub required_fields: Vec<String>,
}

/// Audit trail of the compilation: what enforcement changed and how much
/// evidence was linked. Excluded from the checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Clamps applied by gate enforcement, in order.
    pub enforced_changes: Vec<GateChange>,
    /// The band selection as supplied by the caller.
    pub input_bands_before: BandSelection,
    /// The band selection after enforcement.
    pub input_bands_after: BandSelection,
    /// Number of evidence links attached.
    pub evidence_links_count: usize,
}

/// A compiled EAI card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Metadata and seal.
    pub meta: CardMeta,
    /// The governed interaction, as supplied.
    pub context: CardContext,
    /// The corrected band selection.
    pub bands: BandSelection,
    /// The derived usage policy.
    pub policy: Policy,
    /// Prompt artifacts, including the rendered paste text.
    pub prompt_pack: PromptPack,
    /// The required output format.
    pub output_contract: OutputContract,
    /// Trace obligations.
    pub trace_requirements: TraceRequirements,
    /// Evidence graph node ids supporting this card's policy.
    pub evidence_links: Vec<String>,
    /// Compilation audit trail. Not covered by the checksum.
    pub validation_report: ValidationReport,
}

/// The hashed view of the card. Field names match the card document so the
/// canonical form reads as a subset of the serialized card.
#[derive(Serialize)]
struct DigestView<'a> {
    meta: MetaView<'a>,
    context: &'a CardContext,
    bands: &'a BandSelection,
    policy: &'a Policy,
    prompt_pack: &'a PromptPack,
    output_contract: &'a OutputContract,
    trace_requirements: &'a TraceRequirements,
    evidence_links: &'a [String],
}

/// `CardMeta` without the checksum slot.
#[derive(Serialize)]
struct MetaView<'a> {
    card_id: CardId,
    card_version: &'a str,
    created_at: Timestamp,
    ssot_version: &'a str,
    generator_version: &'a str,
    status: CardStatus,
}

impl Card {
    /// Compute the checksum of this card's hashed view.
    ///
    /// Pure with respect to `meta.checksum_sha256` and
    /// `validation_report`: neither participates in the hash, so sealing
    /// and re-verifying use the same computation.
    pub fn compute_checksum(&self) -> Result<String, EaicError> {
        let view = DigestView {
            meta: MetaView {
                card_id: self.meta.card_id,
                card_version: &self.meta.card_version,
                created_at: self.meta.created_at,
                ssot_version: &self.meta.ssot_version,
                generator_version: &self.meta.generator_version,
                status: self.meta.status,
            },
            context: &self.context,
            bands: &self.bands,
            policy: &self.policy,
            prompt_pack: &self.prompt_pack,
            output_contract: &self.output_contract,
            trace_requirements: &self.trace_requirements,
            evidence_links: &self.evidence_links,
        };
        let bytes = CanonicalBytes::new(&view)?;
        Ok(sha256_hex(&bytes))
    }

    /// Recompute the checksum and compare it to the stored seal.
    ///
    /// Returns `false` for unsealed cards and for any mismatch.
    pub fn verify_checksum(&self) -> Result<bool, EaicError> {
        match self.meta.checksum_sha256.as_deref() {
            Some(stored) => Ok(stored == self.compute_checksum()?),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Audience;
    use crate::generate::CardId;
    use crate::policy::default_policy_for;
    use crate::prompt::{build_paste_text, PromptPack, SYSTEM_PROMPT, USER_PROMPT_TEMPLATE};
    use eaic_core::band::Band;
    use uuid::Uuid;

    fn sample_card() -> Card {
        let bands: BandSelection = [
            ("K".to_string(), Band::new("K1", "Feitenkennis")),
            ("TD".to_string(), Band::new("TD3", "Gemiddeld")),
        ]
        .into_iter()
        .collect();
        let context = CardContext {
            audience: Audience::Student,
            subject: "wiskunde".into(),
            level: "havo 4".into(),
            task_description: "oefenen".into(),
            process_phase: "oefenfase".into(),
            assessment_stakes: None,
            language: None,
            constraints: None,
        };
        let policy = default_policy_for(&bands);
        let contract = OutputContract::process_evidence_table();
        let paste = build_paste_text(&context, &bands, &policy, &contract);
        Card {
            meta: CardMeta {
                card_id: CardId(Uuid::nil()),
                card_version: "2.1.0".into(),
                created_at: Timestamp::parse("2026-01-01T00:00:00Z").unwrap(),
                ssot_version: "1.0".into(),
                generator_version: "2.1.0".into(),
                status: CardStatus::Verified,
                checksum_sha256: None,
            },
            context,
            bands,
            policy,
            prompt_pack: PromptPack {
                system_prompt: SYSTEM_PROMPT.to_string(),
                user_prompt_template: USER_PROMPT_TEMPLATE.to_string(),
                paste_prompt_text: paste,
            },
            output_contract: contract,
            trace_requirements: TraceRequirements {
                trace_level: "standard".into(),
                required_fields: vec!["timestamp".into(), "actor".into()],
            },
            evidence_links: vec!["PAT_retrieval_practice".into()],
            validation_report: ValidationReport {
                enforced_changes: vec![],
                input_bands_before: BandSelection::new(),
                input_bands_after: BandSelection::new(),
                evidence_links_count: 1,
            },
        }
    }

    #[test]
    fn test_checksum_is_stable() {
        let card = sample_card();
        assert_eq!(card.compute_checksum().unwrap(), card.compute_checksum().unwrap());
    }

    #[test]
    fn test_checksum_ignores_its_own_slot() {
        let mut card = sample_card();
        let open = card.compute_checksum().unwrap();
        card.meta.checksum_sha256 = Some(open.clone());
        assert_eq!(card.compute_checksum().unwrap(), open);
    }

    #[test]
    fn test_checksum_ignores_validation_report() {
        let mut card = sample_card();
        let before = card.compute_checksum().unwrap();
        card.validation_report.evidence_links_count = 99;
        assert_eq!(card.compute_checksum().unwrap(), before);
    }

    #[test]
    fn test_checksum_covers_policy() {
        let mut card = sample_card();
        let before = card.compute_checksum().unwrap();
        card.policy.allowed.push("iets anders".into());
        assert_ne!(card.compute_checksum().unwrap(), before);
    }

    #[test]
    fn test_verify_checksum() {
        let mut card = sample_card();
        assert!(!card.verify_checksum().unwrap());
        card.meta.checksum_sha256 = Some(card.compute_checksum().unwrap());
        assert!(card.verify_checksum().unwrap());
        card.bands.get_mut("K").unwrap().code = "K2".into();
        assert!(!card.verify_checksum().unwrap());
    }

    #[test]
    fn test_draft_serializes_without_checksum_field() {
        let card = sample_card();
        let value = serde_json::to_value(&card).unwrap();
        assert!(value["meta"].get("checksum_sha256").is_none());
        assert_eq!(value["meta"]["status"], "verified");
    }
}

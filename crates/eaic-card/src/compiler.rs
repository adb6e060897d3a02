//! # Card Compiler — the Compilation Pipeline
//!
//! One call, six stages, fixed order:
//!
//! 1. enforce logic gates over the band selection (corrected copy),
//! 2. derive the usage policy from the corrected bands,
//! 3. attach the output contract,
//! 4. suggest evidence links,
//! 5. render the prompt pack and assemble the draft card,
//! 6. validate against the card schema, then seal with the checksum.
//!
//! Validation happens before sealing. A card that fails the schema check
//! comes back as [`CompileOutcome::Invalid`]: still a complete draft
//! document for diagnosis, but never carrying a checksum, so no consumer
//! can mistake it for a verified card.

use eaic_core::band::BandSelection;
use eaic_core::EaicError;
use eaic_evidence::{suggest_links, EvidenceGraph};
use eaic_schema::{CompiledSchema, Violation};
use eaic_ssot::{enforce_gates, RuleTable};
use serde::Deserialize;

use crate::card::{Card, CardMeta, CardStatus, TraceRequirements, ValidationReport};
use crate::context::CardContext;
use crate::contract::OutputContract;
use crate::generate::CardGenerator;
use crate::policy::default_policy_for;
use crate::prompt::{build_paste_text, PromptPack, SYSTEM_PROMPT, USER_PROMPT_TEMPLATE};

/// Version of the card document format this compiler emits.
pub const CARD_VERSION: &str = "2.1.0";

/// Version of the compiler itself, written into `meta.generator_version`.
pub const GENERATOR_VERSION: &str = "2.1.0";

/// The dimension whose code triggers logic gates, unless overridden.
pub const DEFAULT_TRIGGER_DIMENSION: &str = "K";

/// One compilation request.
#[derive(Debug, Clone, Deserialize)]
pub struct CardInput {
    /// The interaction to govern.
    pub context: CardContext,
    /// The teacher's (pre-enforcement) band selection.
    pub bands: BandSelection,
}

/// Result of one compilation call.
#[derive(Debug)]
pub enum CompileOutcome {
    /// The card passed schema validation and carries its checksum.
    Sealed(Card),
    /// The card failed schema validation. The draft is returned unsealed,
    /// together with the full violation list.
    Invalid {
        /// The assembled draft, for diagnosis.
        card: Card,
        /// Every schema violation found.
        violations: Vec<Violation>,
    },
}

/// The compiler: borrows its collaborators, owns nothing.
///
/// All inputs are read-only, so a single compiler can serve concurrent
/// compilations without locking.
pub struct CardCompiler<'a> {
    table: &'a RuleTable,
    schema: &'a CompiledSchema,
    generator: &'a dyn CardGenerator,
    trigger_dimension: &'a str,
    evidence: Option<&'a EvidenceGraph>,
}

impl<'a> CardCompiler<'a> {
    /// Build a compiler with the default trigger dimension and no
    /// evidence graph.
    pub fn new(
        table: &'a RuleTable,
        schema: &'a CompiledSchema,
        generator: &'a dyn CardGenerator,
    ) -> Self {
        Self {
            table,
            schema,
            generator,
            trigger_dimension: DEFAULT_TRIGGER_DIMENSION,
            evidence: None,
        }
    }

    /// Use `graph` for evidence linking. Without a graph, cards carry an
    /// empty link list.
    pub fn with_evidence(mut self, graph: &'a EvidenceGraph) -> Self {
        self.evidence = Some(graph);
        self
    }

    /// Override the gate trigger dimension.
    pub fn with_trigger_dimension(mut self, dimension: &'a str) -> Self {
        self.trigger_dimension = dimension;
        self
    }

    /// Compile one card.
    ///
    /// # Errors
    ///
    /// Fails only on canonicalization problems during sealing; every
    /// content-level problem (unparseable gates, dangling evidence,
    /// schema violations) is handled inside the outcome instead.
    pub fn compile(&self, input: CardInput) -> Result<CompileOutcome, EaicError> {
        let CardInput { context, bands } = input;

        let outcome = enforce_gates(self.table, &bands, self.trigger_dimension);
        let policy = default_policy_for(&outcome.bands);
        let contract = OutputContract::process_evidence_table();

        let evidence_links = match self.evidence {
            Some(graph) => suggest_links(&context.process_phase, &outcome.bands, graph),
            None => Vec::new(),
        };

        let paste_prompt_text =
            build_paste_text(&context, &outcome.bands, &policy, &contract);

        let mut card = Card {
            meta: CardMeta {
                card_id: self.generator.new_card_id(),
                card_version: CARD_VERSION.to_string(),
                created_at: self.generator.now(),
                ssot_version: self.table.version().to_string(),
                generator_version: GENERATOR_VERSION.to_string(),
                status: CardStatus::Draft,
                checksum_sha256: None,
            },
            context,
            bands: outcome.bands,
            policy,
            prompt_pack: PromptPack {
                system_prompt: SYSTEM_PROMPT.to_string(),
                user_prompt_template: USER_PROMPT_TEMPLATE.to_string(),
                paste_prompt_text,
            },
            output_contract: contract,
            trace_requirements: TraceRequirements {
                trace_level: "standard".to_string(),
                required_fields: self.table.trace_required_fields().to_vec(),
            },
            evidence_links,
            validation_report: ValidationReport {
                enforced_changes: outcome.changes,
                input_bands_before: bands,
                input_bands_after: BandSelection::new(),
                evidence_links_count: 0,
            },
        };
        card.validation_report.input_bands_after = card.bands.clone();
        card.validation_report.evidence_links_count = card.evidence_links.len();

        let instance = serde_json::to_value(&card)
            .map_err(|e| EaicError::Serialization(e.to_string()))?;
        let violations = self.schema.violations(&instance);
        if !violations.is_empty() {
            tracing::warn!(
                card_id = %card.meta.card_id,
                violations = violations.len(),
                "card failed schema validation, returning unsealed draft"
            );
            return Ok(CompileOutcome::Invalid { card, violations });
        }

        // Status flips before hashing so the seal covers "verified".
        card.meta.status = CardStatus::Verified;
        card.meta.checksum_sha256 = Some(card.compute_checksum()?);

        tracing::info!(
            card_id = %card.meta.card_id,
            ssot_version = %card.meta.ssot_version,
            changes = card.validation_report.enforced_changes.len(),
            links = card.evidence_links.len(),
            "card compiled and sealed"
        );
        Ok(CompileOutcome::Sealed(card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Audience;
    use crate::generate::{CardId, FixedGenerator};
    use eaic_core::band::Band;
    use eaic_core::Timestamp;
    use eaic_ssot::LogicGate;
    use serde_json::json;
    use uuid::Uuid;

    fn generator() -> FixedGenerator {
        FixedGenerator {
            card_id: CardId(Uuid::nil()),
            timestamp: Timestamp::parse("2026-02-01T09:00:00Z").unwrap(),
        }
    }

    fn table() -> RuleTable {
        RuleTable::new(
            "15.0.0",
            vec![LogicGate::new("K1", "MAX_TD=TD3")],
            vec!["card_id".into(), "checksum_sha256".into()],
        )
    }

    // Permissive schema; the real one lives in the workspace schemas/ dir
    // and is exercised by the integration test.
    fn open_schema() -> CompiledSchema {
        CompiledSchema::from_value("open", &json!({"type": "object"})).unwrap()
    }

    fn input(k: &str, td: &str) -> CardInput {
        CardInput {
            context: CardContext {
                audience: Audience::Student,
                subject: "wiskunde".into(),
                level: "havo 4".into(),
                task_description: "kwadratische vergelijkingen".into(),
                process_phase: "oefenfase".into(),
                assessment_stakes: None,
                language: None,
                constraints: None,
            },
            bands: [
                ("K".to_string(), Band::new(k, "kennis")),
                ("TD".to_string(), Band::new(td, "taakdichtheid")),
            ]
            .into_iter()
            .collect(),
        }
    }

    fn compile(input: CardInput) -> Card {
        let table = table();
        let schema = open_schema();
        let generator = generator();
        let compiler = CardCompiler::new(&table, &schema, &generator);
        match compiler.compile(input).unwrap() {
            CompileOutcome::Sealed(card) => card,
            CompileOutcome::Invalid { violations, .. } => {
                panic!("expected sealed card, got violations: {violations:?}")
            }
        }
    }

    #[test]
    fn test_gate_clamps_and_is_reported() {
        let card = compile(input("K1", "TD6"));
        assert_eq!(card.bands["TD"].code, "TD3");
        assert_eq!(card.validation_report.enforced_changes.len(), 1);
        assert_eq!(card.validation_report.input_bands_before["TD"].code, "TD6");
        assert_eq!(card.validation_report.input_bands_after["TD"].code, "TD3");
    }

    #[test]
    fn test_no_gate_no_changes() {
        let card = compile(input("K2", "TD6"));
        assert_eq!(card.bands["TD"].code, "TD6");
        assert!(card.validation_report.enforced_changes.is_empty());
    }

    #[test]
    fn test_sealed_card_verifies() {
        let card = compile(input("K1", "TD6"));
        assert_eq!(card.meta.status, CardStatus::Verified);
        assert!(card.meta.checksum_sha256.is_some());
        assert!(card.verify_checksum().unwrap());
    }

    #[test]
    fn test_metadata_comes_from_collaborators() {
        let card = compile(input("K1", "TD6"));
        assert_eq!(card.meta.card_id, CardId(Uuid::nil()));
        assert_eq!(card.meta.created_at.to_iso8601(), "2026-02-01T09:00:00Z");
        assert_eq!(card.meta.ssot_version, "15.0.0");
        assert_eq!(card.trace_requirements.required_fields, vec!["card_id", "checksum_sha256"]);
    }

    #[test]
    fn test_no_evidence_graph_means_empty_links() {
        let card = compile(input("K1", "TD6"));
        assert!(card.evidence_links.is_empty());
        assert_eq!(card.validation_report.evidence_links_count, 0);
    }

    #[test]
    fn test_evidence_links_attached_when_graph_supplied() {
        let graph: EvidenceGraph = serde_json::from_value(json!({
            "sources": [{"source_id": "SRC_roediger2011"}],
            "claims": [{
                "claim_id": "CLM_retrieval",
                "sources": ["SRC_roediger2011"],
                "supports": {"design_patterns": []}
            }],
            "patterns": [
                {"pattern_id": "retrieval_practice", "claim_links": ["CLM_retrieval"]},
                {"pattern_id": "feed_up_back_forward", "claim_links": []},
                {"pattern_id": "guided_practice", "claim_links": []},
                {"pattern_id": "worked_examples", "claim_links": []}
            ]
        }))
        .unwrap();

        let table = table();
        let schema = open_schema();
        let generator = generator();
        let compiler = CardCompiler::new(&table, &schema, &generator).with_evidence(&graph);
        let CompileOutcome::Sealed(card) = compiler.compile(input("K1", "TD6")).unwrap() else {
            panic!("expected sealed card");
        };
        assert_eq!(
            card.evidence_links,
            vec![
                "PAT_retrieval_practice",
                "PAT_feed_up_back_forward",
                "PAT_guided_practice",
                "PAT_worked_examples",
                "CLM_retrieval",
                "SRC_roediger2011",
            ]
        );
        assert_eq!(card.validation_report.evidence_links_count, 6);
    }

    #[test]
    fn test_invalid_card_returned_unsealed() {
        let strict = CompiledSchema::from_value(
            "strict",
            &json!({
                "type": "object",
                "properties": {
                    "meta": {
                        "type": "object",
                        "properties": {"card_version": {"const": "9.9.9"}}
                    }
                }
            }),
        )
        .unwrap();
        let table = table();
        let generator = generator();
        let compiler = CardCompiler::new(&table, &strict, &generator);
        let CompileOutcome::Invalid { card, violations } =
            compiler.compile(input("K1", "TD6")).unwrap()
        else {
            panic!("expected invalid outcome");
        };
        assert!(!violations.is_empty());
        assert_eq!(card.meta.status, CardStatus::Draft);
        assert!(card.meta.checksum_sha256.is_none());
    }

    #[test]
    fn test_compilation_is_deterministic_with_fixed_generator() {
        let a = compile(input("K1", "TD6"));
        let b = compile(input("K1", "TD6"));
        assert_eq!(a.meta.checksum_sha256, b.meta.checksum_sha256);
        assert_eq!(a, b);
    }

    #[test]
    fn test_input_bands_not_consumed_semantics() {
        // The report keeps the caller's original selection intact even
        // though the card carries the corrected copy.
        let card = compile(input("K1", "TD6"));
        assert_eq!(card.validation_report.input_bands_before["TD"].code, "TD6");
        assert_eq!(card.bands["TD"].code, "TD3");
    }
}

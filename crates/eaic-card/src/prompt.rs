//! # Prompt Bundle and Paste Text
//!
//! Every card carries three prompt artifacts: a fixed system prompt, a
//! fixed user-prompt template, and the rendered paste text (the
//! human-pasteable plain-text form of the whole card). Rendering is
//! deterministic concatenation in fixed section order; the only
//! conditional lines are the stakes line and the extra-constraints block,
//! emitted only when the context supplies them.

use eaic_core::band::BandSelection;
use serde::{Deserialize, Serialize};

use crate::context::CardContext;
use crate::contract::OutputContract;
use crate::policy::Policy;

/// The system prompt embedded in every card. Dutch, like all card-facing
/// text in this deployment.
pub const SYSTEM_PROMPT: &str = "Je bent een onderwijsassistent die strikt de EAI-card \
volgt.\nJe vraagt door, dwingt transparantie af, en je geeft geen verboden output.";

/// The user-prompt template embedded in every card.
pub const USER_PROMPT_TEMPLATE: &str = "Gebruik de EAI-card hieronder.\nStart met 2 \
verduidelijkende vragen, daarna begeleid je de leerling stap voor stap.";

/// The prompt artifacts attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPack {
    /// Fixed system prompt.
    pub system_prompt: String,
    /// Fixed user-prompt template.
    pub user_prompt_template: String,
    /// The rendered plain-text card, pasteable into any LLM.
    pub paste_prompt_text: String,
}

/// Render the plain-text card.
///
/// Section order is fixed: context, bands, rules, verification,
/// transparency, output contract, working agreement. Bands render in the
/// selection's key order, which `BandSelection` keeps sorted.
pub fn build_paste_text(
    context: &CardContext,
    bands: &BandSelection,
    policy: &Policy,
    contract: &OutputContract,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("EAI-card (plakbaar in elke LLM)".to_string());
    lines.push(String::new());
    lines.push("1) Context".to_string());
    lines.push(format!("- Doelgroep: {}", context.audience));
    lines.push(format!("- Vak/gebied: {}", context.subject));
    lines.push(format!("- Niveau: {}", context.level));
    lines.push(format!("- Taak: {}", context.task_description));
    lines.push(format!("- Procesfase: {}", context.process_phase));
    if let Some(stakes) = context.assessment_stakes {
        lines.push(format!("- Stakes: {stakes}"));
    }
    if let Some(constraints) = context.constraints.as_deref() {
        if !constraints.is_empty() {
            lines.push("- Extra beperkingen:".to_string());
            for c in constraints {
                lines.push(format!("  - {c}"));
            }
        }
    }
    lines.push(String::new());

    lines.push("2) Rubric banden (SSOT)".to_string());
    for (dimension, band) in bands {
        lines.push(format!("- {dimension}: {} | {}", band.code, band.label));
    }
    lines.push(String::new());

    lines.push("3) Regels voor AI gebruik".to_string());
    lines.push("Toegestaan:".to_string());
    for a in &policy.allowed {
        lines.push(format!("- {a}"));
    }
    lines.push("Niet toegestaan:".to_string());
    for f in &policy.forbidden {
        lines.push(format!("- {f}"));
    }
    lines.push(String::new());

    lines.push("4) Verificatie (verplicht)".to_string());
    for check in &policy.verification.required_checks {
        lines.push(format!("- {check}"));
    }
    lines.push(String::new());

    lines.push("5) Transparantie (verplicht)".to_string());
    lines.push(format!(
        "- Label AI-bijdrage: {}",
        policy.transparency.ai_contribution_label
    ));
    lines.push("- Stappen die de leerling zichtbaar moet tonen:".to_string());
    for step in &policy.transparency.student_visible_steps {
        lines.push(format!("- {step}"));
    }
    lines.push(String::new());

    lines.push("6) Output contract".to_string());
    lines.push(format!("- contract_id: {}", contract.contract_id));
    lines.push(format!("- format: {}", contract.format));
    lines.push("Volg exact het schema hieronder:".to_string());
    lines.push(serde_json::to_string_pretty(&contract.schema).unwrap_or_default());
    lines.push(String::new());

    lines.push("7) Werkafspraak".to_string());
    lines.push(
        "Als je twijfelt of informatie klopt, vraag door en stel een verificatiestap voor. \
         Geef geen eindantwoord als dat verboden is door de regels hierboven."
            .to_string(),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Audience, Stakes};
    use crate::policy::default_policy_for;
    use eaic_core::band::Band;

    fn context() -> CardContext {
        CardContext {
            audience: Audience::Student,
            subject: "wiskunde".into(),
            level: "havo 4".into(),
            task_description: "kwadratische vergelijkingen oplossen".into(),
            process_phase: "oefenfase".into(),
            assessment_stakes: None,
            language: None,
            constraints: None,
        }
    }

    fn bands() -> BandSelection {
        [
            ("K".to_string(), Band::new("K1", "Feitenkennis")),
            ("TD".to_string(), Band::new("TD3", "Gemiddelde taakdichtheid")),
        ]
        .into_iter()
        .collect()
    }

    fn render(ctx: &CardContext) -> String {
        let bands = bands();
        let policy = default_policy_for(&bands);
        build_paste_text(ctx, &bands, &policy, &OutputContract::process_evidence_table())
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let text = render(&context());
        let positions: Vec<usize> = [
            "1) Context",
            "2) Rubric banden (SSOT)",
            "3) Regels voor AI gebruik",
            "4) Verificatie (verplicht)",
            "5) Transparantie (verplicht)",
            "6) Output contract",
            "7) Werkafspraak",
        ]
        .iter()
        .map(|h| text.find(h).unwrap_or_else(|| panic!("missing section {h}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_band_lines_one_per_dimension() {
        let text = render(&context());
        assert!(text.contains("- K: K1 | Feitenkennis"));
        assert!(text.contains("- TD: TD3 | Gemiddelde taakdichtheid"));
    }

    #[test]
    fn test_stakes_line_only_when_supplied() {
        let without = render(&context());
        assert!(!without.contains("- Stakes:"));

        let mut ctx = context();
        ctx.assessment_stakes = Some(Stakes::High);
        assert!(render(&ctx).contains("- Stakes: high"));
    }

    #[test]
    fn test_constraints_block_only_when_nonempty() {
        let mut ctx = context();
        ctx.constraints = Some(vec![]);
        assert!(!render(&ctx).contains("Extra beperkingen"));

        ctx.constraints = Some(vec!["geen rekenmachine".into()]);
        let text = render(&ctx);
        assert!(text.contains("- Extra beperkingen:"));
        assert!(text.contains("  - geen rekenmachine"));
    }

    #[test]
    fn test_contract_schema_inlined_as_json() {
        let text = render(&context());
        assert!(text.contains("- contract_id: process_evidence_table_v1"));
        assert!(text.contains("\"min_rows\": 4"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(render(&context()), render(&context()));
    }
}

//! # Policy Derivation
//!
//! Maps a corrected band selection to the usage policy the tutor must
//! follow. The statement lists are domain-authored constants; the only
//! branch is the high-task-density addition to the verification checklist.
//! Output is always structurally complete, with no optional fields, so
//! the downstream schema check stays simple.

use eaic_core::band::BandSelection;
use serde::{Deserialize, Serialize};

/// Task-density ranks that count as "high": the learner is doing a lot of
/// the work in one interaction, so proven work and AI help must be kept
/// apart explicitly.
const HIGH_TD_RANKS: std::ops::RangeInclusive<u32> = 5..=8;

/// Verification requirements for the tutor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// Checks the tutor must perform, in order.
    pub required_checks: Vec<String>,
    /// Whether factual claims must carry citations.
    pub citation_required: bool,
}

/// Transparency requirements toward the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transparency {
    /// The label the tutor must attach to its contributions.
    pub ai_contribution_label: String,
    /// Work steps the learner must keep visible.
    pub student_visible_steps: Vec<String>,
}

/// The derived usage policy: what the tutor may do, must never do, must
/// verify, and must disclose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Permitted tutor behaviors.
    pub allowed: Vec<String>,
    /// Forbidden tutor behaviors.
    pub forbidden: Vec<String>,
    /// Verification requirements.
    pub verification: Verification,
    /// Transparency requirements.
    pub transparency: Transparency,
}

/// Derive the usage policy for a corrected band selection.
///
/// Pure function: constant statement lists, plus one conditional check
/// when the Task-Density rank is high. A missing or malformed TD code
/// carries rank 0 and simply skips the addition.
pub fn default_policy_for(bands: &BandSelection) -> Policy {
    let td_rank = bands.get("TD").map(|b| b.rank()).unwrap_or(0);

    let allowed = vec![
        "Vragen stellen die de leerling aanzetten tot uitleggen en redeneren".to_string(),
        "Feedback geven op leerlingwerk volgens succescriteria".to_string(),
        "Alternatieven en voorbeelden geven nadat de leerling een eerste poging deed".to_string(),
        "Samenvatten van leerling-uitleg in eigen woorden, met terugvraag".to_string(),
    ];

    let forbidden = vec![
        "Het eindantwoord geven zonder tussenstappen en bewijs van leerlingdenken".to_string(),
        "Een volledige uitwerking geven als de card dit verbiedt (bijvoorbeeld bij K1 of K3)"
            .to_string(),
        "Ongecontroleerde feitenclaims doen zonder verificatie of bronvermelding wanneer vereist"
            .to_string(),
        "Werk van de leerling herschrijven zodat de bijdrage van de leerling onzichtbaar wordt"
            .to_string(),
    ];

    let mut required_checks = vec![
        "Vraag eerst om de eigen poging van de leerling (of om tussenstappen) voordat je verbetert"
            .to_string(),
        "Controleer definities, aannames en eenheden als het een reken- of redeneertaak is"
            .to_string(),
        "Markeer onzekerheid expliciet en stel een verificatievraag als er twijfel is".to_string(),
    ];

    if HIGH_TD_RANKS.contains(&td_rank) {
        required_checks.push(
            "Maak een korte checklist: wat is bewezen door de leerling en wat is AI-hulp"
                .to_string(),
        );
    }

    Policy {
        allowed,
        forbidden,
        verification: Verification {
            required_checks,
            citation_required: false,
        },
        transparency: Transparency {
            ai_contribution_label: "AI-hulp gebruikt volgens EAI-card".to_string(),
            student_visible_steps: vec![
                "Eigen poging of eerste antwoord".to_string(),
                "Redenering of tussenstappen".to_string(),
                "Wat is aangepast na feedback".to_string(),
                "Korte reflectie: wat heb ik geleerd".to_string(),
            ],
        },
    }
}

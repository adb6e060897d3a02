//! # Interaction Context
//!
//! The immutable description of one learner interaction, supplied by an
//! upstream UI or resolver. The compiler only reads it: it steers evidence
//! linking (via the process phase) and document rendering, nothing else.

use serde::{Deserialize, Serialize};

/// Who the card is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// A teacher using AI in lesson preparation or assessment.
    Teacher,
    /// A learner working with an AI tutor.
    Student,
    /// A teaching team.
    Team,
    /// Another automated system.
    System,
}

impl Audience {
    /// The lowercase wire form, also used in the paste text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Team => "team",
            Self::System => "system",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much the interaction counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stakes {
    /// Formative, low-stakes work.
    Low,
    /// Graded but not decisive.
    Medium,
    /// Summative or decisive assessment.
    High,
}

impl Stakes {
    /// The lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Stakes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The interaction being governed. Never mutated by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContext {
    /// Target audience of the card.
    pub audience: Audience,
    /// Subject or domain, free text (e.g. "wiskunde").
    pub subject: String,
    /// Proficiency level, free text (e.g. "havo 4").
    pub level: String,
    /// What the learner is asked to do.
    pub task_description: String,
    /// Free-text process phase; drives the evidence linker's keyword rules.
    pub process_phase: String,
    /// Optional stakes level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_stakes: Option<Stakes>,
    /// Optional interaction language tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Optional extra constraints, rendered verbatim into the paste text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_audience_wire_form() {
        assert_eq!(serde_json::to_value(Audience::Teacher).unwrap(), json!("teacher"));
        assert_eq!(format!("{}", Audience::Student), "student");
    }

    #[test]
    fn test_context_minimal_deserializes() {
        let ctx: CardContext = serde_json::from_value(json!({
            "audience": "student",
            "subject": "wiskunde",
            "level": "havo 4",
            "task_description": "kwadratische vergelijkingen oplossen",
            "process_phase": "oefenfase"
        }))
        .unwrap();
        assert_eq!(ctx.audience, Audience::Student);
        assert!(ctx.assessment_stakes.is_none());
        assert!(ctx.constraints.is_none());
    }

    #[test]
    fn test_absent_optionals_not_serialized() {
        let ctx: CardContext = serde_json::from_value(json!({
            "audience": "teacher",
            "subject": "s",
            "level": "l",
            "task_description": "t",
            "process_phase": "p"
        }))
        .unwrap();
        let value = serde_json::to_value(&ctx).unwrap();
        assert!(value.get("assessment_stakes").is_none());
        assert!(value.get("language").is_none());
        assert!(value.get("constraints").is_none());
    }
}

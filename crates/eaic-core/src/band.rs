//! # Rubric Band Primitives
//!
//! A rubric dimension is a named axis (Knowledge type `K`, Task density
//! `TD`, Process phase `P`, …) with an ordered set of rank-bearing codes.
//! A code follows the `<PREFIX><integer>` convention — `TD5` is rank 5 on
//! the `TD` axis. The label carries display text only and has no semantic
//! weight.
//!
//! Rank extraction is deliberately infallible: a code with no parseable
//! numeric suffix carries rank 0, which downstream means "no information" —
//! it is never clamped by a ceiling and never raises an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One selected band on a rubric dimension: an ordinal code plus a
/// free-text display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// Rank-bearing code, e.g. `"TD5"`.
    pub code: String,
    /// Display text; no semantic weight.
    pub label: String,
}

impl Band {
    /// Construct a band from code and label.
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }

    /// The ordinal rank encoded in this band's code.
    pub fn rank(&self) -> u32 {
        code_rank(&self.code)
    }
}

/// A mapping from dimension identifier (`"K"`, `"TD"`, …) to the selected
/// band on that dimension.
///
/// A `BTreeMap` keeps the serialized form (and therefore the paste text
/// and the checksum input) independent of insertion order.
pub type BandSelection = BTreeMap<String, Band>;

/// Extract the integer rank from a code's numeric suffix.
///
/// `"TD5"` → 5, `"K12"` → 12. A code with no parseable suffix (`"TD"`,
/// `""`, `"T5D"`) has rank 0 and is therefore never reduced by a ceiling.
pub fn code_rank(code: &str) -> u32 {
    let prefix_len = code.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    let suffix = &code[prefix_len..];
    if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    suffix.parse().unwrap_or(0)
}

/// Extract the leading alphabetic prefix of a code (`"TD5"` → `"TD"`).
///
/// Rank comparisons are only meaningful between codes sharing a prefix;
/// the gate enforcer checks this before clamping.
pub fn code_prefix(code: &str) -> &str {
    let prefix_len = code.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    &code[..prefix_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_rank_basic() {
        assert_eq!(code_rank("TD5"), 5);
        assert_eq!(code_rank("K1"), 1);
        assert_eq!(code_rank("TD12"), 12);
    }

    #[test]
    fn test_code_rank_no_suffix_is_zero() {
        assert_eq!(code_rank("TD"), 0);
        assert_eq!(code_rank(""), 0);
        assert_eq!(code_rank("vrij tekstveld"), 0);
    }

    #[test]
    fn test_code_rank_mixed_garbage_is_zero() {
        // Digits interrupted by letters do not form a rank suffix.
        assert_eq!(code_rank("T5D"), 0);
        assert_eq!(code_rank("TD5x"), 0);
    }

    #[test]
    fn test_code_prefix() {
        assert_eq!(code_prefix("TD5"), "TD");
        assert_eq!(code_prefix("K1"), "K");
        assert_eq!(code_prefix("TD"), "TD");
        assert_eq!(code_prefix("5"), "");
    }

    #[test]
    fn test_band_rank() {
        assert_eq!(Band::new("TD6", "hoge taakdichtheid").rank(), 6);
        assert_eq!(Band::new("??", "unknown").rank(), 0);
    }

    #[test]
    fn test_selection_serializes_in_key_order() {
        let mut bands = BandSelection::new();
        bands.insert("TD".into(), Band::new("TD5", "t"));
        bands.insert("K".into(), Band::new("K1", "k"));
        let json = serde_json::to_string(&bands).unwrap();
        let k_pos = json.find("\"K\"").unwrap();
        let td_pos = json.find("\"TD\"").unwrap();
        assert!(k_pos < td_pos);
    }
}

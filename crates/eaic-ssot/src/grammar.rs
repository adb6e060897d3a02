//! # Gate Enforcement Grammar
//!
//! Enforcement expressions follow a small fixed grammar:
//!
//! ```text
//! MAX_<DIM> = <DIM><rank>      e.g.  MAX_TD=TD3
//! ALLOW_<DIM> = <DIM><rank>    e.g.  ALLOW_TD = TD5
//! ```
//!
//! Whitespace around `=` is tolerated, and the expression may be embedded
//! in surrounding prose (`"IF K1 THEN MAX_TD=TD3"`); the leftmost
//! recognizable clause wins.
//!
//! ## Known ambiguity (deliberately preserved)
//!
//! Both keyword forms resolve to the **same ceiling clamp**. The SSOT
//! authors may have intended `ALLOW_*` to mean something different (a
//! floor, or an exact pin), but the reference behavior treats the two
//! identically and so does this parser. Do not invent new semantics for
//! `ALLOW_*` without an SSOT-side decision.
//!
//! An expression that does not match the grammar parses to `None`; the
//! gate enforcer skips such gates without recording anything.

use eaic_core::band::{code_prefix, code_rank};

/// A parsed ceiling clause: "cap `dimension` at `code`".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ceiling {
    /// The dimension being capped, e.g. `"TD"`.
    pub dimension: String,
    /// The ceiling code, e.g. `"TD3"`. Its rank may be 0 (`"TD0"`),
    /// which the enforcer treats as "no ceiling".
    pub code: String,
}

impl Ceiling {
    /// The ceiling's ordinal rank.
    pub fn rank(&self) -> u32 {
        code_rank(&self.code)
    }
}

/// Parse an enforcement expression into a ceiling clause.
///
/// Returns `None` for anything outside the grammar — the caller must
/// skip the gate, not fail.
pub fn parse_enforcement(expr: &str) -> Option<Ceiling> {
    // Leftmost occurrence of either keyword wins, like a regex alternation.
    let mut starts: Vec<(usize, usize)> = expr
        .match_indices("MAX_")
        .map(|(i, _)| (i, "MAX_".len()))
        .chain(expr.match_indices("ALLOW_").map(|(i, _)| (i, "ALLOW_".len())))
        .collect();
    starts.sort_unstable();

    starts
        .into_iter()
        .find_map(|(i, kw_len)| parse_clause(&expr[i + kw_len..]))
}

/// Parse `<DIM> = <DIM><rank>` from the text following a keyword.
fn parse_clause(rest: &str) -> Option<Ceiling> {
    let dim_len = rest.chars().take_while(|c| c.is_ascii_uppercase()).count();
    if dim_len == 0 {
        return None;
    }
    let dimension = &rest[..dim_len];

    let rest = rest[dim_len..].trim_start();
    let rest = rest.strip_prefix('=')?.trim_start();

    let code_len = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .count();
    let code = &rest[..code_len];

    // The ceiling code must be the capped dimension's own prefix followed
    // by at least one digit; ranks never compare across prefixes.
    if code_prefix(code) != dimension || code.len() == dimension.len() {
        return None;
    }
    if !code[dimension.len()..].chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(Ceiling {
        dimension: dimension.to_string(),
        code: code.to_string(),
    })
}

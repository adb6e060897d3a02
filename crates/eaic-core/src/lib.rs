//! # eaic-core — Foundational Types for the EAI Card Stack
//!
//! This crate is the bedrock of the Card Stack. It defines the primitives
//! that the card compiler builds on: canonical byte production, content
//! digests, UTC-only timestamps, and rubric band types. Every other crate
//! in the workspace depends on `eaic-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** ALL digest computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for checksums,
//!    ever. Two callers serializing the same card must get the same bytes.
//!
//! 2. **`sha256_digest()` accepts only `&CanonicalBytes`.** Compile-time
//!    enforcement that the card checksum is computed over canonical bytes.
//!
//! 3. **UTC-only timestamps.** `Timestamp` enforces UTC with Z suffix and
//!    seconds precision, matching the canonical serialization rules.
//!
//! 4. **Rank-bearing band codes.** `Band` and `BandSelection` model rubric
//!    dimensions as `<PREFIX><integer>` codes; rank extraction never fails,
//!    a malformed code simply carries rank 0 ("no information").
//!
//! ## Crate Policy
//!
//! - No dependencies on other `eaic-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod band;
pub mod canonical;
pub mod digest;
pub mod error;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use band::{code_prefix, code_rank, Band, BandSelection};
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, ContentDigest};
pub use error::{CanonicalizationError, EaicError};
pub use temporal::Timestamp;

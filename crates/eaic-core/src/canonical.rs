//! # Canonical Serialization — JCS-Compatible Byte Production
//!
//! This module defines `CanonicalBytes`, the sole construction path for
//! bytes used in checksum computation across the Card Stack.
//!
//! ## Integrity Invariant
//!
//! A sealed card must carry a checksum that any independent implementation
//! can reproduce from the card's logical fields. That only works if there is
//! exactly one byte representation per logical value, so the `CanonicalBytes`
//! newtype has a private inner field: the only way to construct it is through
//! `CanonicalBytes::new()`, which applies the coercion rules below and then
//! RFC 8785 (JSON Canonicalization Scheme) serialization via `serde_jcs`.
//!
//! ## Coercion Rules
//!
//! 1. **Reject floats** — cards carry no fractional numbers; floats have
//!    non-deterministic JCS number formatting edge cases, so they are
//!    refused outright rather than rounded.
//! 2. **Timestamps are strings** — `Timestamp` serializes to UTC ISO8601
//!    with `Z` suffix at seconds precision before it ever reaches this
//!    module (see `temporal`).
//! 3. **Sorted keys, compact separators** — handled by `serde_jcs`.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - The byte sequence is valid UTF-8 JSON with lexicographically sorted
///   object keys and no insignificant whitespace.
/// - No float ever survives into the byte sequence.
///
/// These invariants are enforced by the constructor and cannot be violated
/// by downstream code because the inner `Vec<u8>` is private.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// This is the ONLY way to construct `CanonicalBytes`. All checksum
    /// computation in the workspace must flow through this constructor.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::FloatRejected` if the value contains
    /// float numbers, or `CanonicalizationError::SerializationFailed` if
    /// JCS serialization fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        reject_floats(&value)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Walk a JSON value tree and refuse any number that is a pure float
/// (not representable as i64/u64).
fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => {
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                if let Some(f) = n.as_f64() {
                    return Err(CanonicalizationError::FloatRejected(f));
                }
            }
            Ok(())
        }
        Value::Object(map) => map.values().try_for_each(reject_floats),
        Value::Array(arr) => arr.iter().try_for_each(reject_floats),
    }
}

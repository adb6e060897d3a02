//! # Error Types — Shared Error Hierarchy
//!
//! Defines the error types used throughout the Card Stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The compiler itself is designed so that almost nothing is an error:
//! unparseable gates are skipped, dangling evidence references are dropped,
//! malformed band codes carry rank 0. What remains here are the genuinely
//! exceptional conditions — canonicalization failures and malformed
//! timestamps — plus the variants collaborator crates wrap.

use thiserror::Error;

/// Top-level error type for the Card Stack.
#[derive(Error, Debug)]
pub enum EaicError {
    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A timestamp string was malformed or not UTC.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Schema validation failure.
    #[error("schema validation error: {0}")]
    SchemaValidation(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error (collaborator side only; the compiler performs no I/O).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    #[error("float values are not permitted in canonical card content: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

//! # eaic-schema — Card Shape Validation
//!
//! Runtime validation of assembled cards against a JSON Schema (Draft
//! 2020-12). The schema is supplied by the caller and treated as opaque:
//! this crate compiles it and reports violations, it does not interpret it.
//!
//! ## Design
//!
//! Validation failure is a *report*, not an exception. Every violation is
//! collected (all-errors mode) into [`Violation`] values carrying the
//! instance path, the schema path, and a human-readable message, so a
//! caller can diagnose a malformed card without losing the artifact.

pub mod validate;

pub use validate::{CompiledSchema, SchemaError, Violation};

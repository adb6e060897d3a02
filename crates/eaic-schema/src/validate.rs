//! # Schema Compilation and Violation Reporting
//!
//! [`CompiledSchema`] wraps one compiled JSON Schema and produces complete
//! violation lists. Loading the schema document from disk is the caller's
//! concern; this module only ever sees a parsed `Value`.

use std::fmt;

use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Error while compiling a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema did not compile to a validator.
    #[error("schema compile error for '{schema_name}': {reason}")]
    Compile {
        /// Schema filename or identifier.
        schema_name: String,
        /// Reason the validator could not be built.
        reason: String,
    },
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// One compiled schema, ready to produce violation reports.
pub struct CompiledSchema {
    name: String,
    validator: Validator,
}

impl fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl CompiledSchema {
    /// Compile an externally supplied schema value (Draft 2020-12).
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if the schema itself is invalid.
    pub fn from_value(name: impl Into<String>, schema: &Value) -> Result<Self, SchemaError> {
        let name = name.into();
        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .build(schema)
            .map_err(|e| SchemaError::Compile {
                schema_name: name.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { name, validator })
    }

    /// The schema's name (filename or caller-chosen identifier).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collect **every** violation of `instance` against this schema.
    ///
    /// An empty result means the instance conforms. This never fails:
    /// validation problems are data, not errors.
    pub fn violations(&self, instance: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }

    /// True if `instance` conforms to this schema.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }
}

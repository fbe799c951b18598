//! Validation error shapes recognized by the dispatcher
//!
//! Two flavours exist because callers report failures in two shapes: a
//! structured set of per-field problems from a schema validator, or a single
//! unstructured complaint. Both always translate to 400.

use std::fmt;
use thiserror::Error;

/// A single failing field reported by a validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A structured validation failure aggregating one or more field errors
///
/// Field order is the order the validator reported them; the rendered
/// message preserves it:
///
/// ```text
/// Validation failed: name - must not be blank; age - must be positive;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<FieldError>) -> Self {
        ValidationFailure { errors }
    }

    /// Convenience for building from `(field, message)` pairs
    pub fn from_fields<F, M>(fields: impl IntoIterator<Item = (F, M)>) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        ValidationFailure {
            errors: fields
                .into_iter()
                .map(|(field, message)| FieldError::new(field, message))
                .collect(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: ")?;
        for error in &self.errors {
            write!(f, "{} - {}; ", error.field, error.message)?;
        }
        Ok(())
    }
}

/// An unstructured, single-value validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// A semantically invalid value supplied by calling code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidArgument(pub String);

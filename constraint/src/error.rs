//! Constraint error types.

use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors raised by the constraint layer itself.
///
/// Problems found in a model are never errors; they are report entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Unknown rule identifier: {name}")]
    UnknownRule { name: String },

    #[error("Model is invalid: {errors} error(s), first: {first}")]
    Invalid { errors: usize, first: String },
}

impl ConstraintError {
    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }

    pub fn invalid(errors: usize, first: impl Into<String>) -> Self {
        Self::Invalid {
            errors,
            first: first.into(),
        }
    }
}

//! Common error types for the component model.

use thiserror::Error;

/// Errors raised while constructing model entities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A property was given both a literal value and an embedded payload.
    #[error("Property '{name}' declares both a value and an 'any' payload")]
    ExclusivePropertyContent { name: String },
}

impl ModelError {
    pub fn exclusive_property_content(name: impl Into<String>) -> Self {
        Self::ExclusivePropertyContent { name: name.into() }
    }
}

/// Result type for model construction.
pub type ModelResult<T> = Result<T, ModelError>;

/// A version string that could not be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid version '{version}' at offset {offset}: {reason}")]
pub struct VersionParseError {
    /// The rejected input.
    pub version: String,
    /// Byte offset of the offending character.
    pub offset: usize,
    /// What was wrong.
    pub reason: String,
}

impl VersionParseError {
    pub fn new(version: impl Into<String>, offset: usize, reason: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            offset,
            reason: reason.into(),
        }
    }
}

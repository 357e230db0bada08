//! Error types for the scenario framework.

use cmv_registry::RegistryError;
use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The modules could not be indexed.
    #[error("failed to index modules: {0}")]
    Registry(#[from] RegistryError),

    /// An expectation did not hold.
    #[error("assertion failed for scenario '{scenario}': {message}")]
    AssertionFailed { scenario: String, message: String },
}

impl ScenarioError {
    pub fn assertion_failed(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            scenario: scenario.into(),
            message: message.into(),
        }
    }
}

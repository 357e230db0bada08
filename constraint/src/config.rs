//! Validator configuration.

/// Options controlling a validation pass.
///
/// Passed explicitly to [`crate::ModelValidator::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// When false, validation returns an empty report without walking the model.
    pub enabled: bool,
    /// Coerce every property declaration to its declared type.
    pub check_property_values: bool,
    /// Parse every message template.
    pub check_message_templates: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_property_values: true,
            check_message_templates: true,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn property_values(mut self, check: bool) -> Self {
        self.check_property_values = check;
        self
    }

    pub fn message_templates(mut self, check: bool) -> Self {
        self.check_message_templates = check;
        self
    }
}

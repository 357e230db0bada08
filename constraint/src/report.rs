//! Validation report types.

use crate::error::{ConstraintError, ConstraintResult};
use crate::rule::RuleId;
use cmv_core::Subject;
use serde::Serialize;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only.
    Info,
    /// Soft problem - the model stays valid.
    Warning,
    /// Hard problem - the model is invalid.
    Error,
}

/// A single diagnostic entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    /// The rule that was violated.
    pub rule: RuleId,
    pub severity: Severity,
    /// Human-readable message describing the violation.
    pub message: String,
    /// The offending entity.
    pub subject: Subject,
}

impl Detail {
    /// Create a new detail.
    pub fn new(
        rule: RuleId,
        severity: Severity,
        subject: Subject,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            severity,
            message: message.into(),
            subject,
        }
    }

    /// Create an error-level detail.
    pub fn error(rule: RuleId, subject: Subject, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Error, subject, message)
    }

    /// Create a warning-level detail.
    pub fn warning(rule: RuleId, subject: Subject, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Warning, subject, message)
    }

    /// Check if this is at or above error severity.
    pub fn is_error(&self) -> bool {
        self.severity >= Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

/// Ordered collection of diagnostics produced by a validation pass.
///
/// Entries keep insertion order and are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    details: Vec<Detail>,
}

impl ValidationReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a detail.
    pub fn push(&mut self, detail: Detail) {
        self.details.push(detail);
    }

    /// True when no entry reaches error severity.
    pub fn is_valid(&self) -> bool {
        !self.details.iter().any(Detail::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    /// Get all details.
    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Detail> {
        self.details.iter()
    }

    /// Details reported for one rule, in insertion order.
    pub fn details_for(&self, rule: RuleId) -> Vec<&Detail> {
        self.details.iter().filter(|d| d.rule == rule).collect()
    }

    /// Number of details reported for one rule.
    pub fn count(&self, rule: RuleId) -> usize {
        self.details.iter().filter(|d| d.rule == rule).count()
    }

    /// Get error-level details.
    pub fn errors(&self) -> impl Iterator<Item = &Detail> {
        self.details.iter().filter(|d| d.is_error())
    }

    /// Get warning-level details.
    pub fn warnings(&self) -> impl Iterator<Item = &Detail> {
        self.details.iter().filter(|d| d.is_warning())
    }

    /// Merge another report, keeping order.
    pub fn merge(&mut self, other: ValidationReport) {
        self.details.extend(other.details);
    }

    /// Turn an invalid report into an error.
    pub fn ensure_valid(&self) -> ConstraintResult<()> {
        let mut errors = self.errors();
        match errors.next() {
            None => Ok(()),
            Some(first) => Err(ConstraintError::invalid(
                1 + errors.count(),
                format!("{}: {}", first.rule, first.message),
            )),
        }
    }
}

impl IntoIterator for ValidationReport {
    type Item = Detail;
    type IntoIter = std::vec::IntoIter<Detail>;

    fn into_iter(self) -> Self::IntoIter {
        self.details.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Detail;
    type IntoIter = std::slice::Iter<'a, Detail>;

    fn into_iter(self) -> Self::IntoIter {
        self.details.iter()
    }
}

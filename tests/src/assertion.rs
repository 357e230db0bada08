//! Expectation types and builders for verifying validation reports.

use cmv_constraint::{RuleId, ValidationReport};
use std::collections::BTreeMap;

use crate::error::{ScenarioError, ScenarioResult};

/// Everything a scenario expects of its report.
#[derive(Default)]
pub struct Expectation {
    /// Exact number of details per rule.
    pub counts: BTreeMap<RuleId, usize>,
    /// Exact number of details overall.
    pub total: Option<usize>,
    /// Expected outcome of `is_valid`.
    pub valid: Option<bool>,
    /// Subject identifiers per rule, in report order.
    pub subjects: Vec<(RuleId, Vec<String>)>,
    /// Patterns that at least one message of the rule must match.
    pub message_patterns: Vec<(RuleId, String)>,

    // Custom assertion function
    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&ValidationReport) -> bool + Send + Sync>>,
}

impl std::fmt::Debug for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Expectation")
            .field("counts", &self.counts)
            .field("total", &self.total)
            .field("valid", &self.valid)
            .field("subjects", &self.subjects)
            .field("message_patterns", &self.message_patterns)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Expectation {
    /// Create a new empty expectation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the expectation against a report.
    pub fn verify(&self, scenario: &str, report: &ValidationReport) -> ScenarioResult<()> {
        for (&rule, &expected) in &self.counts {
            let actual = report.count(rule);
            if actual != expected {
                return Err(ScenarioError::assertion_failed(
                    scenario,
                    format!(
                        "expected {} {} detail(s), got {}: {:?}",
                        expected,
                        rule,
                        actual,
                        messages(report, rule)
                    ),
                ));
            }
        }

        if let Some(expected) = self.total {
            if report.len() != expected {
                return Err(ScenarioError::assertion_failed(
                    scenario,
                    format!(
                        "expected {} detail(s) overall, got {}: {:?}",
                        expected,
                        report.len(),
                        report.iter().map(|d| d.rule.as_str()).collect::<Vec<_>>()
                    ),
                ));
            }
        }

        if let Some(expected) = self.valid {
            if report.is_valid() != expected {
                let state = if expected { "valid" } else { "invalid" };
                return Err(ScenarioError::assertion_failed(
                    scenario,
                    format!(
                        "expected the model to be {}, report has {} detail(s): {:?}",
                        state,
                        report.len(),
                        report.iter().map(|d| d.message.as_str()).collect::<Vec<_>>()
                    ),
                ));
            }
        }

        for (rule, expected) in &self.subjects {
            let actual: Vec<&str> = report
                .details_for(*rule)
                .into_iter()
                .map(|d| d.subject.identifier.as_str())
                .collect();
            if actual != *expected {
                return Err(ScenarioError::assertion_failed(
                    scenario,
                    format!("expected {} subjects {:?}, got {:?}", rule, expected, actual),
                ));
            }
        }

        for (rule, pattern) in &self.message_patterns {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(scenario, format!("invalid regex pattern: {}", e))
            })?;
            if !report.details_for(*rule).iter().any(|d| re.is_match(&d.message)) {
                return Err(ScenarioError::assertion_failed(
                    scenario,
                    format!(
                        "no {} message matches pattern '{}': {:?}",
                        rule,
                        pattern,
                        messages(report, *rule)
                    ),
                ));
            }
        }

        if let Some(ref custom) = self.custom {
            if !custom(report) {
                return Err(ScenarioError::assertion_failed(
                    scenario,
                    "custom assertion failed",
                ));
            }
        }

        Ok(())
    }
}

fn messages(report: &ValidationReport, rule: RuleId) -> Vec<&str> {
    report
        .details_for(rule)
        .into_iter()
        .map(|d| d.message.as_str())
        .collect()
}

/// Builder for creating expectations.
#[derive(Default)]
pub struct ExpectationBuilder {
    expectation: Expectation,
}

impl From<Expectation> for ExpectationBuilder {
    fn from(expectation: Expectation) -> Self {
        Self { expectation }
    }
}

impl ExpectationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the expectation.
    pub fn build(self) -> Expectation {
        self.expectation
    }

    /// Expect exactly `n` details for `rule`.
    pub fn count(mut self, rule: RuleId, n: usize) -> Self {
        self.expectation.counts.insert(rule, n);
        self
    }

    /// Expect no detail for `rule`.
    pub fn none(self, rule: RuleId) -> Self {
        self.count(rule, 0)
    }

    /// Expect exactly `n` details overall.
    pub fn total(mut self, n: usize) -> Self {
        self.expectation.total = Some(n);
        self
    }

    /// Expect the model to be valid.
    pub fn valid(mut self) -> Self {
        self.expectation.valid = Some(true);
        self
    }

    /// Expect the model to be invalid.
    pub fn invalid(mut self) -> Self {
        self.expectation.valid = Some(false);
        self
    }

    /// Expect the details for `rule` to name exactly these subjects, in order.
    pub fn subjects(mut self, rule: RuleId, identifiers: &[&str]) -> Self {
        self.expectation.subjects.push((
            rule,
            identifiers.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Expect some message for `rule` to match a regex pattern.
    pub fn message_matches(mut self, rule: RuleId, pattern: impl Into<String>) -> Self {
        self.expectation
            .message_patterns
            .push((rule, pattern.into()));
        self
    }

    /// Add a custom assertion function.
    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: Fn(&ValidationReport) -> bool + Send + Sync + 'static,
    {
        self.expectation.custom = Some(Box::new(f));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmv_constraint::Detail;
    use cmv_core::Subject;

    fn report() -> ValidationReport {
        let mut report = ValidationReport::new();
        report.push(Detail::error(
            RuleId::ImplementationInheritanceCycle,
            Subject::implementation("a"),
            "implementation 'a': inheritance cycle through 'b'",
        ));
        report.push(Detail::error(
            RuleId::ImplementationInheritanceCycle,
            Subject::implementation("b"),
            "implementation 'b': inheritance cycle through 'a'",
        ));
        report
    }

    #[test]
    fn test_matching_expectation() {
        let expectation = ExpectationBuilder::new()
            .count(RuleId::ImplementationInheritanceCycle, 2)
            .none(RuleId::ImplementationClass)
            .total(2)
            .invalid()
            .subjects(RuleId::ImplementationInheritanceCycle, &["a", "b"])
            .message_matches(RuleId::ImplementationInheritanceCycle, r"through '[ab]'")
            .custom(|r| r.errors().count() == 2)
            .build();

        assert!(expectation.verify("cycle", &report()).is_ok());
    }

    #[test]
    fn test_count_mismatch() {
        let expectation = ExpectationBuilder::new()
            .count(RuleId::ImplementationInheritanceCycle, 1)
            .build();

        let err = expectation.verify("cycle", &report()).unwrap_err();
        assert!(err.to_string().contains("expected 1"));
    }

    #[test]
    fn test_subject_order_matters() {
        let expectation = ExpectationBuilder::new()
            .subjects(RuleId::ImplementationInheritanceCycle, &["b", "a"])
            .build();

        assert!(expectation.verify("cycle", &report()).is_err());
    }

    #[test]
    fn test_invalid_pattern() {
        let expectation = ExpectationBuilder::new()
            .message_matches(RuleId::ImplementationInheritanceCycle, "(")
            .build();

        let err = expectation.verify("cycle", &report()).unwrap_err();
        assert!(err.to_string().contains("invalid regex pattern"));
    }

    #[test]
    fn test_valid_on_empty_report() {
        let expectation = ExpectationBuilder::new().valid().total(0).build();
        assert!(expectation.verify("empty", &ValidationReport::new()).is_ok());
    }
}

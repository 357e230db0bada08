//! Model validation.
//!
//! A single sweep over modules, specifications and implementations (with their
//! dependencies, recursively). Every problem becomes a report entry; the sweep
//! never stops early.

mod dependency;
mod implementation;
mod module;
mod specification;

use crate::coerce::{DefaultValueCoercer, ValueCoercer};
use crate::config::ValidatorConfig;
use crate::report::{Detail, ValidationReport};
use crate::rule::RuleId;
use crate::template;
use cmv_core::{
    Message, NaturalVersionComparator, Property, Subject, VersionComparator, VersionParseError,
};
use cmv_registry::Modules;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Validates a [`Modules`] graph against the full rule set.
pub struct ModelValidator {
    config: ValidatorConfig,
    comparator: Box<dyn VersionComparator>,
    coercer: Box<dyn ValueCoercer>,
}

impl Default for ModelValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl ModelValidator {
    /// Create a validator with the natural version ordering and the default coercer.
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            comparator: Box::new(NaturalVersionComparator),
            coercer: Box::new(DefaultValueCoercer),
        }
    }

    /// Replace the version comparator.
    pub fn with_comparator(mut self, comparator: Box<dyn VersionComparator>) -> Self {
        self.comparator = comparator;
        self
    }

    /// Replace the value coercer.
    pub fn with_coercer(mut self, coercer: Box<dyn ValueCoercer>) -> Self {
        self.coercer = coercer;
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Run every rule against `modules` and return the diagnostics.
    pub fn validate(&self, modules: &Modules) -> ValidationReport {
        if !self.config.enabled {
            tracing::debug!("validation disabled");
            return ValidationReport::new();
        }

        tracing::debug!(
            modules = modules.modules().len(),
            specifications = modules.specification_count(),
            implementations = modules.implementation_count(),
            "validation started"
        );

        let mut checker = Checker::new(
            modules,
            &self.config,
            self.comparator.as_ref(),
            self.coercer.as_ref(),
        );
        checker.run();
        let report = checker.finish();

        tracing::debug!(
            details = report.len(),
            valid = report.is_valid(),
            "validation finished"
        );
        report
    }
}

/// Validate with the default configuration and collaborators.
pub fn validate(modules: &Modules) -> ValidationReport {
    ModelValidator::default().validate(modules)
}

/// Owner of property declarations; selects the rule identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Owner {
    Module,
    Specification,
    Implementation,
    Dependency,
}

impl Owner {
    fn type_rule(self) -> RuleId {
        match self {
            Owner::Module => RuleId::ModulePropertyType,
            Owner::Specification => RuleId::SpecificationPropertyType,
            Owner::Implementation => RuleId::ImplementationPropertyType,
            Owner::Dependency => RuleId::ImplementationDependencyPropertyType,
        }
    }

    fn value_rule(self) -> RuleId {
        match self {
            Owner::Module => RuleId::ModulePropertyValue,
            Owner::Specification => RuleId::SpecificationPropertyValue,
            Owner::Implementation => RuleId::ImplementationPropertyValue,
            Owner::Dependency => RuleId::ImplementationDependencyPropertyValue,
        }
    }
}

/// State of one validation pass.
pub(crate) struct Checker<'m> {
    modules: &'m Modules,
    config: &'m ValidatorConfig,
    comparator: &'m dyn VersionComparator,
    coercer: &'m dyn ValueCoercer,
    /// First specification declaring each class.
    specification_classes: HashMap<&'m str, &'m str>,
    /// First implementation declaring each class.
    implementation_classes: HashMap<&'m str, &'m str>,
    report: ValidationReport,
}

impl<'m> Checker<'m> {
    fn new(
        modules: &'m Modules,
        config: &'m ValidatorConfig,
        comparator: &'m dyn VersionComparator,
        coercer: &'m dyn ValueCoercer,
    ) -> Self {
        let mut specification_classes = HashMap::new();
        for specification in modules.specifications() {
            if let Some(class) = specification.class.as_deref() {
                specification_classes
                    .entry(class)
                    .or_insert(specification.identifier.as_str());
            }
        }
        let mut implementation_classes = HashMap::new();
        for implementation in modules.implementations() {
            if let Some(class) = implementation.class.as_deref() {
                implementation_classes
                    .entry(class)
                    .or_insert(implementation.identifier.as_str());
            }
        }

        Self {
            modules,
            config,
            comparator,
            coercer,
            specification_classes,
            implementation_classes,
            report: ValidationReport::new(),
        }
    }

    fn run(&mut self) {
        let modules = self.modules;
        for module in modules.modules() {
            self.check_module(module);
        }
        for specification in modules.specifications() {
            self.check_specification(specification);
        }
        for implementation in modules.implementations() {
            self.check_implementation(implementation);
        }
    }

    fn finish(self) -> ValidationReport {
        self.report
    }

    /// Append an error-level detail.
    fn report(&mut self, rule: RuleId, subject: &Subject, message: impl Into<String>) {
        let detail = Detail::error(rule, subject.clone(), message);
        tracing::trace!(rule = %rule, subject = %subject, message = %detail.message, "constraint violated");
        self.report.push(detail);
    }

    /// Compare two versions, reporting a parse failure under `versioning`.
    fn compare_versions(
        &mut self,
        left: &str,
        right: &str,
        versioning: RuleId,
        subject: &Subject,
    ) -> Option<Ordering> {
        match self.comparator.compare(left, right) {
            Ok(ordering) => Some(ordering),
            Err(error) => {
                self.report_versioning(versioning, subject, &error);
                None
            }
        }
    }

    fn report_versioning(&mut self, rule: RuleId, subject: &Subject, error: &VersionParseError) {
        self.report(rule, subject, format!("{subject}: {error}"));
    }

    /// Template rule for message declarations of one owner.
    fn check_messages(&mut self, rule: RuleId, subject: &Subject, messages: &[Message]) {
        if !self.config.check_message_templates {
            return;
        }
        for message in messages {
            for text in &message.template {
                if let Err(error) = template::check_text(text) {
                    self.report(
                        rule,
                        subject,
                        format!(
                            "{subject}: message '{}' [{}] is not a valid template: {error}",
                            message.name, text.language
                        ),
                    );
                }
            }
        }
    }

    /// Type and value rules for property declarations of one owner.
    fn check_properties(&mut self, owner: Owner, subject: &Subject, properties: &[Property]) {
        for property in properties {
            if property.content.is_any() && property.type_name.is_none() {
                self.report(
                    owner.type_rule(),
                    subject,
                    format!(
                        "{subject}: property '{}' carries an 'any' payload but declares no type",
                        property.name
                    ),
                );
                continue;
            }
            if self.config.check_property_values {
                if let Err(error) = self.coercer.coerce(property) {
                    self.report(owner.value_rule(), subject, format!("{subject}: {error}"));
                }
            }
        }
    }
}

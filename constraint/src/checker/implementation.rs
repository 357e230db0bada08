//! Implementation-level rules.
//!
//! Most rules compare an implementation's own members against the view
//! merged from its ancestors (`Modules::inherited`), so an override needs a
//! non-final inherited counterpart and a name reaching the implementation
//! from two different ancestors needs a local declaration.

use super::{Checker, Owner};
use crate::rule::RuleId;
use cmv_core::{Implementation, Subject};
use cmv_registry::Kind;
use std::cmp::Ordering;

impl<'m> Checker<'m> {
    pub(super) fn check_implementation(&mut self, implementation: &'m Implementation) {
        let modules = self.modules;
        let subject = Subject::implementation(&implementation.identifier);

        if let Some(closing) = modules.find_cycle(implementation) {
            self.report(
                RuleId::ImplementationInheritanceCycle,
                &subject,
                format!(
                    "{subject}: inheritance cycle closed by implementation '{}'",
                    closing.identifier
                ),
            );
        }

        self.check_class(implementation, &subject);

        if implementation.is_abstract {
            if let Some(location) = &implementation.location {
                self.report(
                    RuleId::ImplementationAbstractLocation,
                    &subject,
                    format!("{subject}: abstract implementation cannot be deployed at '{location}'"),
                );
            }
        }

        for nested in &implementation.implementations.declarations {
            self.report(
                RuleId::ImplementationImplementationDeclaration,
                &subject,
                format!(
                    "{subject}: nested implementation declaration '{}' is not allowed",
                    nested.identifier
                ),
            );
        }
        for nested in &implementation.specifications.declarations {
            self.report(
                RuleId::ImplementationSpecificationDeclaration,
                &subject,
                format!(
                    "{subject}: nested specification declaration '{}' is not allowed",
                    nested.identifier
                ),
            );
        }

        self.check_references(implementation, &subject);

        self.check_modifiers(
            implementation,
            &subject,
            Kind::Dependencies,
            RuleId::ImplementationDependencyOverride,
            RuleId::ImplementationDependencyInheritance,
        );
        self.check_modifiers(
            implementation,
            &subject,
            Kind::Messages,
            RuleId::ImplementationMessageOverride,
            RuleId::ImplementationMessageInheritance,
        );
        self.check_modifiers(
            implementation,
            &subject,
            Kind::Properties,
            RuleId::ImplementationPropertyOverride,
            RuleId::ImplementationPropertyInheritance,
        );
        self.check_modifiers(
            implementation,
            &subject,
            Kind::Specifications,
            RuleId::ImplementationSpecificationOverride,
            RuleId::ImplementationSpecificationInheritance,
        );
        self.check_modifiers(
            implementation,
            &subject,
            Kind::Implementations,
            RuleId::ImplementationImplementationOverride,
            RuleId::ImplementationImplementationInheritance,
        );

        for (kind, rule) in [
            (Kind::Dependencies, RuleId::ImplementationDependencyMultipleInheritance),
            (Kind::Messages, RuleId::ImplementationMessageMultipleInheritance),
            (Kind::Properties, RuleId::ImplementationPropertyMultipleInheritance),
            (Kind::Specifications, RuleId::ImplementationSpecificationMultipleInheritance),
        ] {
            self.check_ambiguity(implementation, &subject, kind, rule);
        }

        self.check_parents(implementation, &subject);
        self.check_specification_versions(implementation, &subject);

        self.check_messages(
            RuleId::ImplementationMessageTemplate,
            &subject,
            &implementation.messages.declarations,
        );
        self.check_properties(
            Owner::Implementation,
            &subject,
            &implementation.properties.declarations,
        );

        for dependency in &implementation.dependencies {
            self.check_dependency(&subject, dependency);
        }
    }

    fn check_class(&mut self, implementation: &'m Implementation, subject: &Subject) {
        match implementation.class.as_deref() {
            None if !implementation.is_abstract => {
                self.report(
                    RuleId::ImplementationClass,
                    subject,
                    format!("{subject}: concrete implementation declares no class"),
                );
            }
            None => {}
            Some(class) => {
                if let Some(&first) = self.implementation_classes.get(class) {
                    if first != implementation.identifier {
                        self.report(
                            RuleId::ImplementationClassDeclaration,
                            subject,
                            format!(
                                "{subject}: class '{class}' is already declared by implementation '{first}'"
                            ),
                        );
                    }
                }
            }
        }
    }

    /// References that resolve neither directly nor through inheritance.
    fn check_references(&mut self, implementation: &'m Implementation, subject: &Subject) {
        let modules = self.modules;

        for reference in &implementation.implementations.references {
            if modules.implementation(&reference.identifier).is_none() {
                self.report(
                    RuleId::ImplementationImplementationReferenceDeclaration,
                    subject,
                    format!(
                        "{subject}: parent implementation '{}' is not declared",
                        reference.identifier
                    ),
                );
            }
        }
        for reference in &implementation.specifications.references {
            if modules.specification(&reference.identifier).is_none() {
                self.report(
                    RuleId::ImplementationSpecificationReferenceDeclaration,
                    subject,
                    format!(
                        "{subject}: specification '{}' is not declared",
                        reference.identifier
                    ),
                );
            }
        }

        if !implementation.messages.references.is_empty() {
            let inherited = modules.inherited(implementation, Kind::Messages);
            for reference in &implementation.messages.references {
                if modules.message(&reference.name).is_none() && !inherited.contains(&reference.name) {
                    self.report(
                        RuleId::ImplementationMessageReferenceDeclaration,
                        subject,
                        format!("{subject}: message reference '{}' resolves to nothing", reference.name),
                    );
                }
            }
        }

        if !implementation.properties.references.is_empty() {
            let inherited = modules.inherited(implementation, Kind::Properties);
            let specifications = modules.effective(implementation, Kind::Specifications);
            for reference in &implementation.properties.references {
                let name = reference.name.as_str();
                let from_specification = specifications.iter().any(|contribution| {
                    modules
                        .specification(contribution.member.name())
                        .is_some_and(|s| s.properties.declaration(name).is_some())
                });
                if modules.property(name).is_none() && !from_specification && !inherited.contains(name) {
                    self.report(
                        RuleId::ImplementationPropertyReferenceDeclaration,
                        subject,
                        format!("{subject}: property reference '{name}' resolves to nothing"),
                    );
                }
            }
        }
    }

    /// Override and final rules for one kind of inherited member.
    fn check_modifiers(
        &mut self,
        implementation: &'m Implementation,
        subject: &Subject,
        kind: Kind,
        override_rule: RuleId,
        inheritance_rule: RuleId,
    ) {
        let members = kind.members(implementation);
        if members.is_empty() {
            return;
        }
        let modules = self.modules;
        let inherited = modules.inherited(implementation, kind);

        for member in members {
            let name = member.name();
            match inherited.get(name) {
                None if member.is_override() => {
                    self.report(
                        override_rule,
                        subject,
                        format!(
                            "{subject}: {} '{name}' overrides nothing inherited",
                            kind.label()
                        ),
                    );
                }
                Some(contribution) if contribution.member.is_final() => {
                    self.report(
                        inheritance_rule,
                        subject,
                        format!(
                            "{subject}: {} '{name}' is final in implementation '{}'",
                            kind.label(),
                            contribution.source.identifier
                        ),
                    );
                }
                _ => {}
            }
        }
    }

    /// One entry per name reaching the implementation from several ancestors.
    fn check_ambiguity(
        &mut self,
        implementation: &'m Implementation,
        subject: &Subject,
        kind: Kind,
        rule: RuleId,
    ) {
        if implementation.implementations.references.len() < 2 {
            return;
        }
        let modules = self.modules;
        let contributors = modules.contributors(implementation, kind);
        for (name, sources) in contributors.ambiguous() {
            if kind.declares(implementation, name) {
                continue;
            }
            let sources: Vec<&str> = sources.iter().copied().collect();
            self.report(
                rule,
                subject,
                format!(
                    "{subject}: {} '{name}' is inherited from {} and must be redeclared",
                    kind.label(),
                    sources.join(", ")
                ),
            );
        }
    }

    /// Final parents and parent version compatibility.
    fn check_parents(&mut self, implementation: &'m Implementation, subject: &Subject) {
        let modules = self.modules;
        for reference in &implementation.implementations.references {
            let Some(parent) = modules.implementation(&reference.identifier) else {
                continue;
            };

            if parent.is_final {
                self.report(
                    RuleId::ImplementationImplementationInheritance,
                    subject,
                    format!(
                        "{subject}: implementation '{}' is final and cannot be inherited from",
                        parent.identifier
                    ),
                );
            }

            let Some(required) = reference.version.as_deref() else {
                continue;
            };
            let compatible = match parent.version.as_deref() {
                None => false,
                Some(actual) => match self.compare_versions(
                    actual,
                    required,
                    RuleId::ImplementationInheritanceVersioning,
                    subject,
                ) {
                    Some(ordering) => ordering != Ordering::Less,
                    None => continue,
                },
            };
            if !compatible {
                self.report(
                    RuleId::ImplementationInheritanceCompatibility,
                    subject,
                    format!(
                        "{subject}: parent '{}' version {} is not compatible with required {required}",
                        parent.identifier,
                        parent.version.as_deref().unwrap_or("<none>")
                    ),
                );
            }
        }
    }

    /// Specification references must name the exact specification version.
    fn check_specification_versions(&mut self, implementation: &'m Implementation, subject: &Subject) {
        let modules = self.modules;
        for reference in &implementation.specifications.references {
            let Some(required) = reference.version.as_deref() else {
                continue;
            };
            let Some(specification) = modules.specification(&reference.identifier) else {
                continue;
            };
            let compatible = match specification.version.as_deref() {
                None => false,
                Some(actual) => match self.compare_versions(
                    required,
                    actual,
                    RuleId::ImplementationSpecificationVersioning,
                    subject,
                ) {
                    Some(ordering) => ordering == Ordering::Equal,
                    None => continue,
                },
            };
            if !compatible {
                self.report(
                    RuleId::ImplementationSpecificationCompatibility,
                    subject,
                    format!(
                        "{subject}: specification '{}' version {} does not match required {required}",
                        specification.identifier,
                        specification.version.as_deref().unwrap_or("<none>")
                    ),
                );
            }
        }
    }
}

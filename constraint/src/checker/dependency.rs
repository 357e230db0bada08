//! Dependency-level rules.
//!
//! Dependencies are checked against the specification they target and against
//! every implementation that could satisfy them. Nested dependencies, messages
//! and properties override the same-named members of those implementations.
//! Nested dependencies are checked recursively with the same owner.

use super::{Checker, Owner};
use crate::rule::RuleId;
use cmv_core::{Dependency, Implementation, Multiplicity, Specification, Subject};
use cmv_registry::{Inherited, Kind, Member};
use std::cmp::Ordering;

/// Rules for a nested override that finds nothing to override, or a final member.
fn override_rules(member: &Member<'_>) -> (RuleId, RuleId) {
    match member {
        Member::Dependency(_) => (
            RuleId::ImplementationDependencyOverrideDependency,
            RuleId::ImplementationDependencyFinalDependency,
        ),
        Member::Message(_) | Member::MessageReference(_) => (
            RuleId::ImplementationDependencyOverrideMessage,
            RuleId::ImplementationDependencyFinalMessage,
        ),
        _ => (
            RuleId::ImplementationDependencyOverrideProperty,
            RuleId::ImplementationDependencyFinalProperty,
        ),
    }
}

impl<'m> Checker<'m> {
    pub(super) fn check_dependency(&mut self, owner: &Subject, dependency: &'m Dependency) {
        let modules = self.modules;
        let Some(specification) = modules.specification(&dependency.identifier) else {
            self.report(
                RuleId::ImplementationDependencySpecification,
                owner,
                format!(
                    "{owner}: dependency '{}' targets undeclared specification '{}'",
                    dependency.name, dependency.identifier
                ),
            );
            return;
        };

        let candidates: Vec<&'m Implementation> = modules
            .implementations_of(&specification.identifier)
            .into_iter()
            .filter(|candidate| match dependency.implementation_name.as_deref() {
                Some(name) => candidate.name.as_deref() == Some(name),
                None => true,
            })
            .collect();

        if !dependency.optional && candidates.is_empty() {
            let wanted = match dependency.implementation_name.as_deref() {
                Some(name) => format!("an implementation named '{name}'"),
                None => "an implementation".to_string(),
            };
            self.report(
                RuleId::ImplementationMandatoryDependency,
                owner,
                format!(
                    "{owner}: mandatory dependency '{}' needs {wanted} of specification '{}'",
                    dependency.name, specification.identifier
                ),
            );
        }

        if specification.class.is_none() {
            self.report(
                RuleId::ImplementationDependencyClassDeclaration,
                owner,
                format!(
                    "{owner}: dependency '{}' targets specification '{}' which declares no class",
                    dependency.name, specification.identifier
                ),
            );
        }

        self.check_dependency_version(owner, dependency, specification);

        if specification.scope.is_some() {
            self.check_scoped_overrides(owner, dependency, specification);
        }

        for reference in &dependency.messages.references {
            self.report(
                RuleId::ImplementationDependencyMessageReferenceDeclaration,
                owner,
                format!(
                    "{owner}: dependency '{}' cannot reference message '{}'",
                    dependency.name, reference.name
                ),
            );
        }
        for reference in &dependency.properties.references {
            self.report(
                RuleId::ImplementationDependencyPropertyReferenceDeclaration,
                owner,
                format!(
                    "{owner}: dependency '{}' cannot reference property '{}'",
                    dependency.name, reference.name
                ),
            );
        }

        self.check_messages(
            RuleId::ImplementationDependencyMessageTemplate,
            owner,
            &dependency.messages.declarations,
        );
        self.check_properties(Owner::Dependency, owner, &dependency.properties.declarations);

        if dependency.has_overrides() {
            for &candidate in &candidates {
                self.check_overrides(owner, dependency, candidate);
            }
        }

        for nested in &dependency.dependencies {
            self.check_dependency(owner, nested);
        }
    }

    fn check_dependency_version(
        &mut self,
        owner: &Subject,
        dependency: &Dependency,
        specification: &Specification,
    ) {
        let Some(required) = dependency.version.as_deref() else {
            return;
        };
        let compatible = match specification.version.as_deref() {
            None => false,
            Some(actual) => match self.compare_versions(
                required,
                actual,
                RuleId::ImplementationDependencyVersioning,
                owner,
            ) {
                Some(ordering) => ordering != Ordering::Greater,
                None => return,
            },
        };
        if !compatible {
            self.report(
                RuleId::ImplementationDependencyCompatibility,
                owner,
                format!(
                    "{owner}: dependency '{}' requires version {required} but specification '{}' is {}",
                    dependency.name,
                    specification.identifier,
                    specification.version.as_deref().unwrap_or("unversioned")
                ),
            );
        }
    }

    /// Scoped specifications own their nested configuration.
    fn check_scoped_overrides(
        &mut self,
        owner: &Subject,
        dependency: &Dependency,
        specification: &Specification,
    ) {
        let scope = specification.scope.as_deref().unwrap_or_default();
        let nested = [
            (
                !dependency.dependencies.is_empty(),
                RuleId::ImplementationDependencyDependenciesOverride,
                "dependencies",
            ),
            (
                !dependency.messages.declarations.is_empty(),
                RuleId::ImplementationDependencyMessagesOverride,
                "messages",
            ),
            (
                !dependency.properties.declarations.is_empty(),
                RuleId::ImplementationDependencyPropertiesOverride,
                "properties",
            ),
        ];
        for (present, rule, what) in nested {
            if present {
                self.report(
                    rule,
                    owner,
                    format!(
                        "{owner}: dependency '{}' cannot override {what} of '{scope}' scoped specification '{}'",
                        dependency.name, specification.identifier
                    ),
                );
            }
        }
    }

    /// Nested overrides against one candidate implementation.
    fn check_overrides(
        &mut self,
        owner: &Subject,
        dependency: &'m Dependency,
        target: &'m Implementation,
    ) {
        let modules = self.modules;

        let dependencies = modules.effective(target, Kind::Dependencies);
        for nested in &dependency.dependencies {
            let overridden = self
                .check_override(owner, dependency, target, &dependencies, Member::Dependency(nested))
                .and_then(|member| member.as_dependency());
            if let Some(overridden) = overridden {
                self.check_dependency_compatibility(owner, dependency, nested, overridden);
            }
        }

        let messages = modules.effective(target, Kind::Messages);
        for message in &dependency.messages.declarations {
            self.check_override(owner, dependency, target, &messages, Member::Message(message));
        }

        let properties = modules.effective(target, Kind::Properties);
        for property in &dependency.properties.declarations {
            self.check_override(owner, dependency, target, &properties, Member::Property(property));
        }
    }

    /// Report a missing or final override target; return the overridden member.
    fn check_override(
        &mut self,
        owner: &Subject,
        dependency: &Dependency,
        target: &Implementation,
        view: &Inherited<'m>,
        overriding: Member<'m>,
    ) -> Option<Member<'m>> {
        let (missing_rule, final_rule) = override_rules(&overriding);
        let what = overriding.entity_kind().label();
        let name = overriding.name();

        match view.get(name) {
            None => {
                if overriding.is_override() {
                    self.report(
                        missing_rule,
                        owner,
                        format!(
                            "{owner}: dependency '{}' overrides {what} '{name}' which implementation '{}' does not declare",
                            dependency.name, target.identifier
                        ),
                    );
                }
                None
            }
            Some(contribution) if contribution.member.is_final() => {
                self.report(
                    final_rule,
                    owner,
                    format!(
                        "{owner}: dependency '{}' overrides final {what} '{name}' of implementation '{}'",
                        dependency.name, contribution.source.identifier
                    ),
                );
                None
            }
            Some(contribution) => Some(contribution.member),
        }
    }

    /// An overriding dependency must target a specification shaped like the
    /// overridden one.
    fn check_dependency_compatibility(
        &mut self,
        owner: &Subject,
        dependency: &Dependency,
        overriding: &Dependency,
        overridden: &Dependency,
    ) {
        let modules = self.modules;
        let (Some(new), Some(old)) = (
            modules.specification(&overriding.identifier),
            modules.specification(&overridden.identifier),
        ) else {
            return;
        };

        if new.multiplicity != old.multiplicity {
            self.report(
                RuleId::ImplementationDependencyMultiplicity,
                owner,
                format!(
                    "{owner}: dependency '{}' overrides '{}' with specification '{}' of different multiplicity than '{}'",
                    dependency.name, overriding.name, new.identifier, old.identifier
                ),
            );
        }
        if new.scope != old.scope {
            self.report(
                RuleId::ImplementationDependencyScope,
                owner,
                format!(
                    "{owner}: dependency '{}' overrides '{}' with specification '{}' of different scope than '{}'",
                    dependency.name, overriding.name, new.identifier, old.identifier
                ),
            );
        }
        if old.multiplicity == Multiplicity::Many
            && overriding.implementation_name.is_some() != overridden.implementation_name.is_some()
        {
            self.report(
                RuleId::ImplementationDependencyImplementationName,
                owner,
                format!(
                    "{owner}: dependency '{}' overrides '{}' inconsistently about the implementation name",
                    dependency.name, overriding.name
                ),
            );
        }
    }
}

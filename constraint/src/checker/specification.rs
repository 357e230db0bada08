//! Specification-level rules.

use super::{Checker, Owner};
use crate::rule::RuleId;
use cmv_core::{Implementation, Multiplicity, Specification, Subject};
use std::collections::BTreeMap;

impl<'m> Checker<'m> {
    pub(super) fn check_specification(&mut self, specification: &'m Specification) {
        let subject = Subject::specification(&specification.identifier);

        if let Some(class) = specification.class.as_deref() {
            if let Some(&first) = self.specification_classes.get(class) {
                if first != specification.identifier {
                    self.report(
                        RuleId::SpecificationClassDeclaration,
                        &subject,
                        format!("{subject}: class '{class}' is already declared by specification '{first}'"),
                    );
                }
            }
        }

        let modules = self.modules;
        let implementations = modules.implementations_of(&specification.identifier);
        match specification.multiplicity {
            Multiplicity::One if implementations.len() > 1 => {
                for implementation in &implementations {
                    let implementation_subject = Subject::implementation(&implementation.identifier);
                    self.report(
                        RuleId::SpecificationImplementationMultiplicity,
                        &implementation_subject,
                        format!(
                            "{implementation_subject}: specification '{}' admits one implementation but has {}",
                            specification.identifier,
                            implementations.len()
                        ),
                    );
                }
            }
            Multiplicity::Many => self.check_implementation_names(specification, &implementations),
            Multiplicity::One => {}
        }

        for reference in &specification.properties.references {
            self.report(
                RuleId::SpecificationPropertyReferenceDeclaration,
                &subject,
                format!("{subject}: property reference '{}' is not allowed here", reference.name),
            );
        }
        self.check_properties(Owner::Specification, &subject, &specification.properties.declarations);
    }

    /// Flag every implementation sharing its name with another implementation.
    fn check_implementation_names(
        &mut self,
        specification: &Specification,
        implementations: &[&'m Implementation],
    ) {
        let mut by_name: BTreeMap<&str, usize> = BTreeMap::new();
        for implementation in implementations {
            if let Some(name) = implementation.name.as_deref() {
                *by_name.entry(name).or_default() += 1;
            }
        }

        // Report in declaration order, not name order.
        for implementation in implementations {
            let Some(name) = implementation.name.as_deref() else {
                continue;
            };
            let shared = by_name.get(name).copied().unwrap_or(0);
            if shared > 1 {
                let implementation_subject = Subject::implementation(&implementation.identifier);
                self.report(
                    RuleId::SpecificationImplementationNameUniqueness,
                    &implementation_subject,
                    format!(
                        "{implementation_subject}: name '{name}' is shared by {shared} implementations of specification '{}'",
                        specification.identifier
                    ),
                );
            }
        }
    }
}

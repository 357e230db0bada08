//! Version compatibility integration tests.

use cmv_tests::prelude::*;

fn concrete(id: &str) -> Implementation {
    Implementation::new(id).class(format!("acme.{id}"))
}

fn parent_requiring(required: &str, actual: Option<&str>) -> Module {
    let mut base = Implementation::new("base").abstract_();
    if let Some(version) = actual {
        base = base.version(version);
    }
    Module::new("m")
        .implementation(base)
        .implementation(concrete("child").parent(ImplementationReference::new("base").version(required)))
}

mod parent_versions {
    use super::*;

    pub fn newer_parent() -> Scenario {
        Scenario::new("newer_parent")
            .module(parent_requiring("1.0", Some("2")))
            .expect_valid()
    }

    pub fn padded_parent() -> Scenario {
        Scenario::new("padded_parent")
            .module(parent_requiring("1.0.0", Some("1.0")))
            .expect_valid()
    }

    pub fn older_parent() -> Scenario {
        Scenario::new("older_parent")
            .module(parent_requiring("1.1", Some("1.0")))
            .expect(RuleId::ImplementationInheritanceCompatibility, 1)
            .check(|e| e.total(1))
    }

    pub fn unversioned_parent() -> Scenario {
        Scenario::new("unversioned_parent")
            .module(parent_requiring("1.0", None))
            .expect(RuleId::ImplementationInheritanceCompatibility, 1)
    }

    #[test]
    fn test_parent_at_or_above_required_version() {
        newer_parent().run().unwrap();
        padded_parent().run().unwrap();
    }

    #[test]
    fn test_parent_below_required_version() {
        older_parent().run().unwrap();
        unversioned_parent().run().unwrap();
    }
}

mod malformed_versions {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("malformed_versions")
            .module(parent_requiring("1..0", Some("1.0")))
            .expect(RuleId::ImplementationInheritanceVersioning, 1)
            .expect(RuleId::ImplementationInheritanceCompatibility, 0)
            .check(|e| {
                e.message_matches(RuleId::ImplementationInheritanceVersioning, r"'1\.\.0'")
                    .total(1)
            })
    }

    #[test]
    fn test_unparsable_version_is_a_versioning_entry() {
        scenario().run().unwrap();
    }
}

mod specification_versions {
    use super::*;

    fn module(required: &str) -> Module {
        Module::new("m")
            .specification(Specification::new("s").class("acme.S").version("2.0"))
            .implementation(
                concrete("i").specification_reference(SpecificationReference::new("s").version(required)),
            )
    }

    pub fn exact() -> Scenario {
        Scenario::new("exact_specification_version")
            .module(module("2"))
            .expect_valid()
    }

    pub fn mismatch() -> Scenario {
        Scenario::new("specification_version_mismatch")
            .module(module("1.9"))
            .expect(RuleId::ImplementationSpecificationCompatibility, 1)
            .check(|e| e.total(1))
    }

    #[test]
    fn test_specification_version_must_match() {
        exact().run().unwrap();
        mismatch().run().unwrap();
    }
}

mod dependency_versions {
    use super::*;

    fn module(required: &str) -> Module {
        Module::new("m")
            .specification(Specification::new("db").class("acme.Db").version("1.5"))
            .implementation(
                concrete("app").dependency(Dependency::new("store", "db").version(required).optional()),
            )
    }

    pub fn satisfied() -> Scenario {
        Scenario::new("dependency_version_satisfied")
            .module(module("1.2"))
            .expect_valid()
    }

    pub fn too_new() -> Scenario {
        Scenario::new("dependency_version_too_new")
            .module(module("2.0"))
            .expect(RuleId::ImplementationDependencyCompatibility, 1)
            .check(|e| e.subjects(RuleId::ImplementationDependencyCompatibility, &["app"]))
    }

    pub fn padded_prerelease() -> Scenario {
        Scenario::new("dependency_padded_prerelease")
            .module(
                Module::new("m")
                    .specification(Specification::new("db").class("acme.Db").version("1-alpha"))
                    .implementation(
                        concrete("app").dependency(Dependency::new("store", "db").version("1.0-alpha").optional()),
                    ),
            )
            .expect(RuleId::ImplementationDependencyCompatibility, 0)
            .expect_valid()
    }

    #[test]
    fn test_dependency_requires_at_most_the_specification_version() {
        satisfied().run().unwrap();
        too_new().run().unwrap();
    }

    #[test]
    fn test_zero_padding_before_a_qualifier() {
        padded_prerelease().run().unwrap();
    }
}

//! Inheritance integration tests.
//!
//! Cycles, diamonds, final parents and override modifiers across
//! implementation hierarchies.

use cmv_tests::prelude::*;

fn concrete(id: &str) -> Implementation {
    Implementation::new(id).class(format!("acme.{id}"))
}

mod self_loop {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("self_loop")
            .module(Module::new("m").implementation(concrete("a").extends("a")))
            .expect(RuleId::ImplementationInheritanceCycle, 1)
            .expect_invalid()
            .check(|e| {
                e.total(1).message_matches(
                    RuleId::ImplementationInheritanceCycle,
                    r"closed by implementation 'a'",
                )
            })
    }

    #[test]
    fn test_implementation_extending_itself() {
        scenario().run().unwrap();
    }
}

mod cycle_with_descendant {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("cycle_with_descendant")
            .module(
                Module::new("m")
                    .implementation(concrete("a").extends("b"))
                    .implementation(concrete("b").extends("a"))
                    .implementation(concrete("c").extends("a")),
            )
            .check(|e| {
                e.subjects(RuleId::ImplementationInheritanceCycle, &["a", "b", "c"])
                    .total(3)
            })
    }

    #[test]
    fn test_every_implementation_reaching_the_cycle_is_flagged() {
        scenario().run().unwrap();
    }
}

/// g <- p1, g <- p2, (p1, p2) <- c
fn diamond(p1: Implementation, c: Implementation) -> Module {
    Module::new("m")
        .specification(Specification::new("s").class("acme.S").many())
        .implementation(
            Implementation::new("g")
                .abstract_()
                .implements("s")
                .property(Property::new("timeout").type_name("int").value("30")),
        )
        .implementation(p1.extends("g"))
        .implementation(concrete("p2").extends("g"))
        .implementation(c.extends("p1").extends("p2"))
}

mod plain_diamond {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("plain_diamond")
            .module(diamond(concrete("p1"), concrete("c")))
            .expect(RuleId::ImplementationInheritanceCycle, 0)
            .expect(RuleId::ImplementationPropertyMultipleInheritance, 0)
            .expect(RuleId::ImplementationSpecificationMultipleInheritance, 0)
            .expect_valid()
            .check(|e| e.total(0))
    }

    #[test]
    fn test_shared_ancestor_is_not_ambiguous() {
        scenario().run().unwrap();
    }
}

mod ambiguous_diamond {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("ambiguous_diamond")
            .module(diamond(
                concrete("p1").property(
                    Property::new("timeout")
                        .type_name("int")
                        .value("60")
                        .overriding(),
                ),
                concrete("c"),
            ))
            .expect(RuleId::ImplementationPropertyMultipleInheritance, 1)
            .check(|e| {
                e.subjects(RuleId::ImplementationPropertyMultipleInheritance, &["c"])
                    .message_matches(
                        RuleId::ImplementationPropertyMultipleInheritance,
                        r"'timeout' is inherited from g, p1",
                    )
                    .total(1)
            })
    }

    #[test]
    fn test_diverging_override_must_be_redeclared() {
        scenario().run().unwrap();
    }
}

mod resolved_diamond {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("resolved_diamond")
            .module(diamond(
                concrete("p1").property(
                    Property::new("timeout")
                        .type_name("int")
                        .value("60")
                        .overriding(),
                ),
                concrete("c").property(
                    Property::new("timeout")
                        .type_name("int")
                        .value("90")
                        .overriding(),
                ),
            ))
            .expect_valid()
            .check(|e| e.total(0))
    }

    #[test]
    fn test_local_redeclaration_resolves_ambiguity() {
        scenario().run().unwrap();
    }
}

mod final_parent {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("final_parent")
            .module(
                Module::new("m")
                    .implementation(concrete("sealed").final_())
                    .implementation(concrete("child").extends("sealed")),
            )
            .expect(RuleId::ImplementationImplementationInheritance, 1)
            .check(|e| {
                e.subjects(RuleId::ImplementationImplementationInheritance, &["child"])
                    .total(1)
            })
    }

    #[test]
    fn test_final_implementation_cannot_be_extended() {
        scenario().run().unwrap();
    }
}

mod override_modifiers {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("override_modifiers")
            .module(
                Module::new("m")
                    .implementation(
                        Implementation::new("base")
                            .abstract_()
                            .property(Property::new("locked").final_())
                            .message(Message::new("greeting").text("en", "Hello {0}")),
                    )
                    .implementation(
                        concrete("child")
                            .extends("base")
                            .property(Property::new("locked").overriding())
                            .property(Property::new("ghost").overriding())
                            .message(
                                Message::new("greeting")
                                    .overriding()
                                    .text("en", "Hi {0}"),
                            ),
                    ),
            )
            .expect(RuleId::ImplementationPropertyInheritance, 1)
            .expect(RuleId::ImplementationPropertyOverride, 1)
            .expect(RuleId::ImplementationMessageOverride, 0)
            .check(|e| {
                e.message_matches(RuleId::ImplementationPropertyOverride, "'ghost'")
                    .message_matches(
                        RuleId::ImplementationPropertyInheritance,
                        "'locked' is final in implementation 'base'",
                    )
                    .total(2)
            })
    }

    #[test]
    fn test_final_and_dangling_overrides() {
        scenario().run().unwrap();
    }
}

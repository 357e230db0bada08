//! Inheritance resolution.
//!
//! An implementation inherits dependencies, messages, properties,
//! specification references and parent references from every implementation
//! reachable through its `ImplementationReference` edges. Views are merged
//! depth-first with first-writer-wins semantics: an implementation's own items
//! shadow those of its parents, and earlier parents shadow later ones.
//!
//! Every walk threads a visited set, so resolution terminates on cyclic input.

use crate::Modules;
use cmv_core::{
    Dependency, EntityKind, Implementation, ImplementationReference, Inheritable, Message,
    MessageReference, Property, PropertyReference, SpecificationReference,
};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// The kind of inherited item a view collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Dependencies,
    /// Message declarations and references.
    Messages,
    /// Property declarations and references.
    Properties,
    /// Specification references.
    Specifications,
    /// Parent implementation references.
    Implementations,
}

impl Kind {
    /// Items an implementation declares locally for this kind, declarations first.
    pub fn members<'a>(self, implementation: &'a Implementation) -> Vec<Member<'a>> {
        match self {
            Kind::Dependencies => implementation
                .dependencies
                .iter()
                .map(Member::Dependency)
                .collect(),
            Kind::Messages => implementation
                .messages
                .declarations
                .iter()
                .map(Member::Message)
                .chain(
                    implementation
                        .messages
                        .references
                        .iter()
                        .map(Member::MessageReference),
                )
                .collect(),
            Kind::Properties => implementation
                .properties
                .declarations
                .iter()
                .map(Member::Property)
                .chain(
                    implementation
                        .properties
                        .references
                        .iter()
                        .map(Member::PropertyReference),
                )
                .collect(),
            Kind::Specifications => implementation
                .specifications
                .references
                .iter()
                .map(Member::Specification)
                .collect(),
            Kind::Implementations => implementation
                .implementations
                .references
                .iter()
                .map(Member::Implementation)
                .collect(),
        }
    }

    /// Whether an implementation declares an item of this kind under `name`.
    pub fn declares(self, implementation: &Implementation, name: &str) -> bool {
        self.members(implementation)
            .iter()
            .any(|member| member.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Kind::Dependencies => "dependency",
            Kind::Messages => "message",
            Kind::Properties => "property",
            Kind::Specifications => "specification",
            Kind::Implementations => "implementation",
        }
    }
}

/// An item taking part in inheritance.
#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    Dependency(&'a Dependency),
    Message(&'a Message),
    MessageReference(&'a MessageReference),
    Property(&'a Property),
    PropertyReference(&'a PropertyReference),
    Specification(&'a SpecificationReference),
    Implementation(&'a ImplementationReference),
}

impl<'a> Member<'a> {
    fn inheritable(&self) -> &'a dyn Inheritable {
        match *self {
            Member::Dependency(d) => d,
            Member::Message(m) => m,
            Member::MessageReference(r) => r,
            Member::Property(p) => p,
            Member::PropertyReference(r) => r,
            Member::Specification(r) => r,
            Member::Implementation(r) => r,
        }
    }

    /// The name or identifier the item is inherited under.
    pub fn name(&self) -> &'a str {
        self.inheritable().key()
    }

    pub fn is_final(&self) -> bool {
        self.inheritable().is_final()
    }

    pub fn is_override(&self) -> bool {
        self.inheritable().is_override()
    }

    pub fn entity_kind(&self) -> EntityKind {
        match self {
            Member::Dependency(_) => EntityKind::Dependency,
            Member::Message(_) => EntityKind::Message,
            Member::MessageReference(_) => EntityKind::MessageReference,
            Member::Property(_) => EntityKind::Property,
            Member::PropertyReference(_) => EntityKind::PropertyReference,
            Member::Specification(_) => EntityKind::SpecificationReference,
            Member::Implementation(_) => EntityKind::ImplementationReference,
        }
    }

    pub fn as_dependency(&self) -> Option<&'a Dependency> {
        match *self {
            Member::Dependency(d) => Some(d),
            _ => None,
        }
    }
}

/// A member together with the implementation that contributed it.
#[derive(Debug, Clone, Copy)]
pub struct Contribution<'a> {
    pub member: Member<'a>,
    pub source: &'a Implementation,
}

/// A merged view of inherited members, keyed by name.
#[derive(Debug, Default)]
pub struct Inherited<'a> {
    members: BTreeMap<&'a str, Contribution<'a>>,
}

impl<'a> Inherited<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member unless one of the same name is already present.
    /// Returns whether the member was added.
    pub fn offer(&mut self, member: Member<'a>, source: &'a Implementation) -> bool {
        let name = member.name();
        if self.members.contains_key(name) {
            return false;
        }
        self.members.insert(name, Contribution { member, source });
        true
    }

    pub fn get(&self, name: &str) -> Option<&Contribution<'a>> {
        self.members.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Contributions ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &Contribution<'a>> {
        self.members.values()
    }
}

/// For each inherited name, the implementations that contribute it.
#[derive(Debug, Default)]
pub struct Contributors<'a> {
    by_name: BTreeMap<&'a str, BTreeSet<&'a str>>,
}

impl<'a> Contributors<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &'a str, source: &'a str) {
        self.by_name.entry(name).or_default().insert(source);
    }

    /// Names contributed by more than one implementation, ordered by name.
    pub fn ambiguous(&self) -> impl Iterator<Item = (&'a str, &BTreeSet<&'a str>)> + '_ {
        self.by_name
            .iter()
            .filter(|(_, sources)| sources.len() > 1)
            .map(|(name, sources)| (*name, sources))
    }
}

/// Merge the members of `kind` reachable from `implementation` into `inherited`.
///
/// The implementation is marked visited before its parents are walked; an
/// already visited implementation contributes nothing. `include_self` controls
/// whether the starting implementation's own members take part.
pub fn collect<'a>(
    modules: &'a Modules,
    implementation: &'a Implementation,
    kind: Kind,
    inherited: &mut Inherited<'a>,
    visited: &mut HashSet<&'a str>,
    include_self: bool,
) {
    if !visited.insert(implementation.identifier.as_str()) {
        return;
    }

    if include_self {
        for member in kind.members(implementation) {
            inherited.offer(member, implementation);
        }
    }

    for reference in &implementation.implementations.references {
        if let Some(parent) = modules.implementation(&reference.identifier) {
            collect(modules, parent, kind, inherited, visited, true);
        }
    }
}

impl Modules {
    /// The full effective view of an implementation: its own members merged
    /// with everything it inherits.
    pub fn effective<'a>(&'a self, implementation: &'a Implementation, kind: Kind) -> Inherited<'a> {
        let mut inherited = Inherited::new();
        let mut visited = HashSet::new();
        collect(self, implementation, kind, &mut inherited, &mut visited, true);
        inherited
    }

    /// The members an implementation inherits from its ancestors only.
    pub fn inherited<'a>(&'a self, implementation: &'a Implementation, kind: Kind) -> Inherited<'a> {
        let mut inherited = Inherited::new();
        let mut visited = HashSet::new();
        collect(self, implementation, kind, &mut inherited, &mut visited, false);
        inherited
    }

    /// Which ancestors contribute each inherited name.
    ///
    /// Every direct parent reference is resolved on its own; the contributor of
    /// a name along one parent is the implementation whose member wins in that
    /// parent's effective view. A name reaching the implementation from two
    /// different contributors is ambiguous.
    pub fn contributors<'a>(
        &'a self,
        implementation: &'a Implementation,
        kind: Kind,
    ) -> Contributors<'a> {
        let mut contributors = Contributors::new();
        for reference in &implementation.implementations.references {
            let Some(parent) = self.implementation(&reference.identifier) else {
                continue;
            };
            let mut branch = Inherited::new();
            let mut visited = HashSet::from([implementation.identifier.as_str()]);
            collect(self, parent, kind, &mut branch, &mut visited, true);
            for contribution in branch.iter() {
                contributors.add(
                    contribution.member.name(),
                    contribution.source.identifier.as_str(),
                );
            }
        }
        contributors
    }

    /// Non-abstract implementations whose effective specification references
    /// include `identifier`, in declaration order.
    pub fn implementations_of(&self, identifier: &str) -> Vec<&Implementation> {
        self.implementations()
            .filter(|implementation| !implementation.is_abstract)
            .filter(|implementation| {
                self.effective(implementation, Kind::Specifications)
                    .contains(identifier)
            })
            .collect()
    }
}

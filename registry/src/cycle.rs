//! Cycle detection over the implementation inheritance graph.

use crate::Modules;
use cmv_core::Implementation;
use std::collections::HashSet;

/// Find an inheritance cycle reachable from `start`.
///
/// Walks every parent reference depth-first, keeping the current path. When a
/// parent already on the path is reached, that implementation closes the cycle
/// and is returned. Unresolved parent references are skipped.
pub fn find_cycle<'a>(modules: &'a Modules, start: &'a Implementation) -> Option<&'a Implementation> {
    let mut on_path = HashSet::new();
    let mut finished = HashSet::new();
    visit(modules, start, &mut on_path, &mut finished)
}

fn visit<'a>(
    modules: &'a Modules,
    implementation: &'a Implementation,
    on_path: &mut HashSet<&'a str>,
    finished: &mut HashSet<&'a str>,
) -> Option<&'a Implementation> {
    let id = implementation.identifier.as_str();
    if on_path.contains(id) {
        tracing::trace!(closing = id, "inheritance cycle closed");
        return Some(implementation);
    }
    if finished.contains(id) {
        return None;
    }

    on_path.insert(id);
    for reference in &implementation.implementations.references {
        if let Some(parent) = modules.implementation(&reference.identifier) {
            if let Some(closing) = visit(modules, parent, on_path, finished) {
                return Some(closing);
            }
        }
    }
    on_path.remove(id);
    finished.insert(id);
    None
}

impl Modules {
    /// The implementation closing an inheritance cycle reachable from `implementation`.
    pub fn find_cycle<'a>(&'a self, implementation: &'a Implementation) -> Option<&'a Implementation> {
        find_cycle(self, implementation)
    }
}

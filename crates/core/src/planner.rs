use crate::descriptor::{Dependency, Descriptor};
use crate::inventory::Inventory;
use crate::resolver::{property_name, resolve_version};

/// Outcome of planning one dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteDecision {
    /// Replace the declared version text with this value
    Rewrite(String),
    /// No version element; the parent project supplies one
    SkipInherited,
    /// Version is bound to a property this document does not define
    SkipForeignProperty(String),
    /// Declared version already matches the inventory
    SkipUnchanged,
    /// No version to compare, or the coordinate was never sighted
    SkipUnresolved,
}

/// Decide, for every dependency of one descriptor, whether its version text
/// should be rewritten to the inventory's latest sighting.
///
/// Decisions are returned in document order, paired with the declaration they
/// apply to. Planning never touches the document; the caller applies the
/// `Rewrite` decisions afterwards.
#[must_use]
pub fn plan<'a>(
    descriptor: &'a Descriptor,
    inventory: &Inventory,
) -> Vec<(&'a Dependency, RewriteDecision)> {
    descriptor
        .dependencies()
        .iter()
        .map(|dependency| (dependency, decide(descriptor, dependency, inventory)))
        .collect()
}

fn decide(descriptor: &Descriptor, dependency: &Dependency, inventory: &Inventory) -> RewriteDecision {
    let Some(raw) = dependency.raw_version() else {
        // no version element at all: either the parent supplies one or
        // there is nothing to compare against
        return if descriptor.parent().is_some_and(|parent| parent.version().is_some()) {
            RewriteDecision::SkipInherited
        } else {
            RewriteDecision::SkipUnresolved
        };
    };

    // Rewriting a property defined in another file would silently
    // desynchronize the two files, so a reference without a local
    // definition is refused outright.
    if let Some(name) = property_name(raw)
        && !descriptor.properties().contains_key(name)
    {
        return RewriteDecision::SkipForeignProperty(name.to_string());
    }

    let Some(current) = resolve_version(Some(raw), descriptor.properties()) else {
        return RewriteDecision::SkipUnresolved;
    };

    match inventory.latest(dependency.coordinate()) {
        None => RewriteDecision::SkipUnresolved,
        Some(latest) if latest == current => RewriteDecision::SkipUnchanged,
        Some(latest) => RewriteDecision::Rewrite(latest.to_string()),
    }
}

use std::collections::HashMap;

use crate::coordinate::ArtifactCoordinate;
use crate::descriptor::Descriptor;
use crate::resolver::resolve_version;

/// Last-seen local version per coordinate, across the whole tree.
///
/// Duplicate coordinates overwrite in visit order, so the descriptor read
/// last wins. No version ordering is consulted anywhere; "latest" means
/// "most recently observed".
#[derive(Debug, Default)]
pub struct Inventory {
    versions: HashMap<ArtifactCoordinate, String>,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sighting of a coordinate at a resolved version.
    ///
    /// An absent version is dropped rather than recorded: a descriptor that
    /// fails to resolve its own version must not erase a value learned from
    /// an earlier file.
    pub fn record(&mut self, coordinate: ArtifactCoordinate, version: Option<String>) {
        if let Some(version) = version {
            self.versions.insert(coordinate, version);
        }
    }

    #[must_use]
    pub fn latest(&self, coordinate: &ArtifactCoordinate) -> Option<&str> {
        self.versions.get(coordinate).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// Aggregate every descriptor's own version and every dependency sighting
/// into one inventory.
///
/// Each descriptor contributes its project version first, then its
/// dependency versions, each resolved against that descriptor's own property
/// table. Descriptors must be passed in file-visit order for the
/// last-write-wins contract to hold.
#[must_use]
pub fn build_inventory<'a>(descriptors: impl IntoIterator<Item = &'a Descriptor>) -> Inventory {
    let mut inventory = Inventory::new();
    for descriptor in descriptors {
        inventory.record(descriptor.coordinate().clone(), descriptor.resolved_version());
        for dependency in descriptor.dependencies() {
            inventory.record(
                dependency.coordinate().clone(),
                resolve_version(dependency.raw_version(), descriptor.properties()),
            );
        }
    }
    inventory
}

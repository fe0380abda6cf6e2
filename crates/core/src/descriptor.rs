use std::collections::HashMap;

use crate::coordinate::ArtifactCoordinate;
use crate::resolver::resolve_version;

/// Opaque handle to one `<dependency>` element inside the document it was
/// read from.
///
/// Handles are ordinals in document order. They let the planner hand a pure
/// decision list back to the rewriter without holding a live reference into
/// the parsed tree, and they are meaningless outside their own document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyNode(usize);

impl DependencyNode {
    #[must_use]
    pub const fn new(ordinal: usize) -> Self {
        Self(ordinal)
    }

    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.0
    }
}

/// One declared dependency, exactly as written in the document.
///
/// `raw_version` is the unresolved text of the `<version>` element: a literal,
/// a `${property}` reference, or `None` when the element is missing entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    coordinate: ArtifactCoordinate,
    raw_version: Option<String>,
    node: DependencyNode,
}

impl Dependency {
    #[must_use]
    pub const fn new(
        coordinate: ArtifactCoordinate,
        raw_version: Option<String>,
        node: DependencyNode,
    ) -> Self {
        Self {
            coordinate,
            raw_version,
            node,
        }
    }

    #[must_use]
    pub const fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    #[must_use]
    pub fn raw_version(&self) -> Option<&str> {
        self.raw_version.as_deref()
    }

    #[must_use]
    pub const fn node(&self) -> DependencyNode {
        self.node
    }
}

/// Identity and version of a descriptor's `<parent>` block.
///
/// Every field is optional so a sparse parent block still contributes what it
/// does declare; the reader decides what a missing field means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

impl Parent {
    #[must_use]
    pub const fn new(
        group_id: Option<String>,
        artifact_id: Option<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group_id,
            artifact_id,
            version,
        }
    }

    #[must_use]
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    #[must_use]
    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Everything read from one `pom.xml`.
///
/// The property table is scoped to this document only; references into a
/// parent's properties stay unresolved here on purpose.
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// Project identity (after any groupId fallback to the parent)
    coordinate: ArtifactCoordinate,
    /// Directly declared project version, unresolved
    raw_version: Option<String>,
    /// Parent block, when the project declares one
    parent: Option<Parent>,
    /// Name/value pairs from the `<properties>` block
    properties: HashMap<String, String>,
    /// Declared dependencies in document order
    dependencies: Vec<Dependency>,
}

impl Descriptor {
    #[must_use]
    pub const fn new(
        coordinate: ArtifactCoordinate,
        raw_version: Option<String>,
        parent: Option<Parent>,
        properties: HashMap<String, String>,
        dependencies: Vec<Dependency>,
    ) -> Self {
        Self {
            coordinate,
            raw_version,
            parent,
            properties,
            dependencies,
        }
    }

    #[must_use]
    pub const fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    #[must_use]
    pub fn raw_version(&self) -> Option<&str> {
        self.raw_version.as_deref()
    }

    #[must_use]
    pub const fn parent(&self) -> Option<&Parent> {
        self.parent.as_ref()
    }

    #[must_use]
    pub const fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    #[must_use]
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// The version this project itself publishes under.
    ///
    /// A directly declared version is resolved against the document's own
    /// properties and is authoritative even when resolution fails; only a
    /// document with no direct version at all falls back to the parent's
    /// version, again resolved against this document's properties.
    #[must_use]
    pub fn resolved_version(&self) -> Option<String> {
        if self.raw_version.is_some() {
            return resolve_version(self.raw_version.as_deref(), &self.properties);
        }
        let parent = self.parent.as_ref()?;
        resolve_version(parent.version(), &self.properties)
    }
}

use std::fmt::Display;

/// Identity of a Maven artifact, independent of version.
///
/// Two coordinates are equal iff both ids match exactly; comparison is
/// case-sensitive and no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactCoordinate {
    group_id: String,
    artifact_id: String,
}

impl ArtifactCoordinate {
    #[must_use]
    pub const fn new(group_id: String, artifact_id: String) -> Self {
        Self {
            group_id,
            artifact_id,
        }
    }

    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }
}

impl Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

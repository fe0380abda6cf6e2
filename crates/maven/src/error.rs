use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing one `pom.xml`.
///
/// Read-side variants mean the file is skipped and the run continues;
/// `Write` means the save failed and the file keeps its pre-write content.
#[derive(Debug, Error)]
pub enum PomError {
    #[error("malformed XML in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: quick_xml::Error,
    },

    #[error("{}: missing groupId", .path.display())]
    MissingGroupId { path: PathBuf },

    #[error("{}: missing artifactId", .path.display())]
    MissingArtifactId { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to save {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

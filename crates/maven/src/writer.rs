use std::path::Path;

use tempfile::NamedTempFile;
use tokio::fs;

use crate::error::PomError;

/// Write the full content through a temp file in the target's directory and
/// rename it over the target.
///
/// A failure at any step leaves the original file exactly as it was; the
/// temp file is cleaned up on drop.
pub async fn save_atomic(path: &Path, content: &str) -> Result<(), PomError> {
    let write_error = |source| PomError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    fs::write(temp.path(), content).await.map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

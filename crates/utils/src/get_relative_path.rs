use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// # Errors
/// Returns error if `path` is not located under `root`.
pub fn get_relative_path(root: &Path, path: &Path) -> Result<PathBuf> {
    let relative = path
        .strip_prefix(root)
        .with_context(|| format!("{} is outside of {}", path.display(), root.display()))?;
    Ok(relative.to_path_buf())
}

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glob::Pattern;
use ignore::WalkBuilder;
use pomsync_core::Config;

/// Collect every `pom.xml` under `root`, sorted by path.
///
/// Directories named `target` are never descended into, so build output is
/// invisible to the scan. Symlinks are followed. Files whose root-relative
/// path matches a configured ignore pattern are dropped. An unreadable
/// subtree is skipped; the rest of the walk continues.
///
/// # Errors
/// Returns error if `root` is not a directory.
pub fn find_pom_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }
    // Invalid patterns are skipped rather than failing the scan
    let ignore_patterns = config
        .ignore
        .iter()
        .filter_map(|pattern| Pattern::new(pattern).ok())
        .collect::<Vec<_>>();

    let walker = WalkBuilder::new(root)
        .follow_links(true)
        .standard_filters(false)
        .filter_entry(|entry| {
            !(entry.file_type().is_some_and(|kind| kind.is_dir()) && entry.file_name() == "target")
        })
        .build();

    let mut pom_files = Vec::new();
    for entry in walker.flatten() {
        if !entry.file_type().is_some_and(|kind| kind.is_file()) || entry.file_name() != "pom.xml" {
            continue;
        }
        let ignored = entry.path().strip_prefix(root).is_ok_and(|relative| {
            let relative = relative.to_string_lossy();
            ignore_patterns
                .iter()
                .any(|pattern| pattern.matches(&relative))
        });
        if !ignored {
            pom_files.push(entry.path().to_path_buf());
        }
    }
    pom_files.sort();
    Ok(pom_files)
}

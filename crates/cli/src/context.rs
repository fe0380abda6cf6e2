use std::path::{Path, PathBuf};

use anyhow::Result;
use pomsync_maven::{PomDocument, PomError};
use pomsync_utils::{find_pom_files, get_relative_path, load_config};

/// Everything a command needs after the read pass: the parsed documents in
/// visit order plus the files that could not be read or parsed.
pub struct CommandContext {
    documents: Vec<PomDocument>,
    failures: Vec<(PathBuf, PomError)>,
}

impl CommandContext {
    /// Run the full read pass under `path` (current directory when `None`).
    /// Nothing is written here; every document is in memory before any
    /// rewrite is planned or applied.
    ///
    /// # Errors
    /// Returns error if the root directory cannot be scanned at all.
    pub async fn discover(path: Option<&Path>) -> Result<Self> {
        let root = match path {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let config = load_config(&root).await?;
        let pom_paths = find_pom_files(&root, &config)?;

        let outcomes = futures::future::join_all(pom_paths.iter().map(async |pom_path| {
            let relative_path = get_relative_path(&root, pom_path)?;
            let outcome = PomDocument::load(pom_path, &relative_path).await;
            Ok::<_, anyhow::Error>((relative_path, outcome))
        }))
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

        let mut documents = Vec::new();
        let mut failures = Vec::new();
        for (relative_path, outcome) in outcomes {
            match outcome {
                Ok(document) => documents.push(document),
                Err(error) => failures.push((relative_path, error)),
            }
        }
        Ok(Self {
            documents,
            failures,
        })
    }

    #[must_use]
    pub fn documents(&self) -> &[PomDocument] {
        &self.documents
    }

    #[must_use]
    pub fn failures(&self) -> &[(PathBuf, PomError)] {
        &self.failures
    }
}

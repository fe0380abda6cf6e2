use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use pomsync_core::{DependencyNode, Descriptor};
use tokio::fs::read_to_string;

use crate::error::PomError;
use crate::reader::parse_descriptor;
use crate::rewriter::apply_rewrites;
use crate::writer::save_atomic;

/// One `pom.xml` held in memory: where it lives, its raw bytes, and what it
/// declares.
///
/// The content is kept from the read pass so the rewrite pass can stream it
/// back out without touching the disk again in between.
#[derive(Debug)]
pub struct PomDocument {
    path: PathBuf,
    relative_path: PathBuf,
    content: String,
    descriptor: Descriptor,
}

impl PomDocument {
    /// Read and parse one descriptor file.
    ///
    /// # Errors
    ///
    /// [`PomError::Read`] when the file cannot be read, or any parse-side
    /// [`PomError`] when it is not a usable POM.
    pub async fn load(path: &Path, relative_path: &Path) -> Result<Self, PomError> {
        let content = read_to_string(path).await.map_err(|source| PomError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let descriptor = parse_descriptor(&content, path)?;
        Ok(Self {
            path: path.to_path_buf(),
            relative_path: relative_path.to_path_buf(),
            content,
            descriptor,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    #[must_use]
    pub const fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Apply planned version replacements and save the result in place.
    ///
    /// # Errors
    ///
    /// Returns an error when the content cannot be re-streamed or the save
    /// fails; the on-disk file is left at its pre-write state either way.
    pub async fn save(&self, edits: &HashMap<DependencyNode, String>) -> Result<()> {
        let content = apply_rewrites(&self.content, edits)?;
        save_atomic(&self.path, &content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const POM: &str = r"<project>
  <groupId>org.example</groupId>
  <artifactId>app</artifactId>
  <version>0.1.0</version>
  <dependencies>
    <dependency>
      <groupId>org.example</groupId>
      <artifactId>lib</artifactId>
      <version>1.0</version>
    </dependency>
  </dependencies>
</project>
";

    #[tokio::test]
    async fn test_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app").join("pom.xml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, POM).unwrap();

        let document = PomDocument::load(&path, &PathBuf::from("app/pom.xml"))
            .await
            .unwrap();

        assert_eq!(document.path(), path);
        assert_eq!(document.relative_path(), PathBuf::from("app/pom.xml"));
        assert_eq!(document.descriptor().coordinate().artifact_id(), "app");
        assert_eq!(document.descriptor().dependencies().len(), 1);

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pom.xml");

        let result = PomDocument::load(&path, &PathBuf::from("pom.xml")).await;

        assert!(matches!(result, Err(PomError::Read { .. })));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_load_rejects_non_pom_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pom.xml");
        fs::write(&path, "<settings><profile/></settings>").unwrap();

        let result = PomDocument::load(&path, &PathBuf::from("pom.xml")).await;

        assert!(matches!(result, Err(PomError::MissingGroupId { .. })));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_save_applies_edits_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pom.xml");
        fs::write(&path, POM).unwrap();

        let document = PomDocument::load(&path, &PathBuf::from("pom.xml"))
            .await
            .unwrap();
        let node = document.descriptor().dependencies()[0].node();
        let edits = HashMap::from([(node, "2.0".to_string())]);

        document.save(&edits).await.unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<version>2.0</version>"));
        assert!(!written.contains("<version>1.0</version>"));
        assert!(written.contains("<version>0.1.0</version>"));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_save_without_edits_keeps_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pom.xml");
        fs::write(&path, POM).unwrap();

        let document = PomDocument::load(&path, &PathBuf::from("pom.xml"))
            .await
            .unwrap();
        document.save(&HashMap::new()).await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), POM);

        temp_dir.close().unwrap();
    }
}

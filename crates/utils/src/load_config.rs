use std::path::Path;

use anyhow::{Context, Result};
use pomsync_core::Config;
use tokio::fs::read_to_string;

/// Load `.pomsync.json` from the scan root. A missing file is not an error;
/// it yields the default configuration.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn load_config(root: &Path) -> Result<Config> {
    let config_path = root.join(".pomsync.json");
    if !config_path.exists() {
        return Ok(Config::default());
    }
    let content = read_to_string(&config_path)
        .await
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))
}

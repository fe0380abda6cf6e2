use serde::{Deserialize, Serialize};

/// Loaded from `.pomsync.json` at the scan root, controls which descriptors
/// are skipped.
///
/// Every field is optional; a missing or empty config file means "sync
/// everything under the root".
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for descriptor paths to ignore (e.g., "legacy/**")
    #[serde(default)]
    pub ignore: Vec<String>,
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Why a dependency declaration was left alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    Inherited,
    ForeignProperty,
    Unchanged,
    Unresolved,
}

/// One dependency whose version text is behind the inventory.
///
/// `from` is the raw text as written in the file, so a replaced property
/// reference shows up as `${name}` rather than its resolved value.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteEntry {
    group_id: String,
    artifact_id: String,
    /// Descriptor path relative to the scan root
    path: PathBuf,
    from: String,
    to: String,
}

impl RewriteEntry {
    #[must_use]
    pub const fn new(
        group_id: String,
        artifact_id: String,
        path: PathBuf,
        from: String,
        to: String,
    ) -> Self {
        Self {
            group_id,
            artifact_id,
            path,
            from,
            to,
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

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }
}

/// One dependency declaration the planner refused to touch.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipEntry {
    group_id: String,
    artifact_id: String,
    /// Descriptor path relative to the scan root
    path: PathBuf,
    reason: SkipReason,
    /// Property name, when the reason is a foreign property
    property: Option<String>,
}

impl SkipEntry {
    #[must_use]
    pub const fn new(
        group_id: String,
        artifact_id: String,
        path: PathBuf,
        reason: SkipReason,
        property: Option<String>,
    ) -> Self {
        Self {
            group_id,
            artifact_id,
            path,
            reason,
            property,
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

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn reason(&self) -> SkipReason {
        self.reason
    }

    #[must_use]
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }
}

/// Aggregated run results for JSON output format.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Descriptors successfully parsed
    descriptors: usize,
    /// Descriptors skipped because they failed to parse
    parse_failures: usize,
    rewrites: Vec<RewriteEntry>,
    skips: Vec<SkipEntry>,
}

impl RunReport {
    #[must_use]
    pub const fn new(
        descriptors: usize,
        parse_failures: usize,
        rewrites: Vec<RewriteEntry>,
        skips: Vec<SkipEntry>,
    ) -> Self {
        Self {
            descriptors,
            parse_failures,
            rewrites,
            skips,
        }
    }

    #[must_use]
    pub const fn descriptors(&self) -> usize {
        self.descriptors
    }

    #[must_use]
    pub const fn parse_failures(&self) -> usize {
        self.parse_failures
    }

    #[must_use]
    pub fn rewrites(&self) -> &[RewriteEntry] {
        &self.rewrites
    }

    #[must_use]
    pub fn skips(&self) -> &[SkipEntry] {
        &self.skips
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn test_rewrite_entry_serializes_camel_case() {
        let entry = RewriteEntry::new(
            "org.example".to_string(),
            "core-lib".to_string(),
            PathBuf::from("modules/app/pom.xml"),
            "1.0".to_string(),
            "2.0".to_string(),
        );
        let json: Value = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json.get("groupId"),
            Some(&Value::String("org.example".to_string()))
        );
        assert_eq!(
            json.get("artifactId"),
            Some(&Value::String("core-lib".to_string()))
        );
        assert_eq!(
            json.get("path"),
            Some(&Value::String("modules/app/pom.xml".to_string()))
        );
        assert_eq!(json.get("from"), Some(&Value::String("1.0".to_string())));
        assert_eq!(json.get("to"), Some(&Value::String("2.0".to_string())));
        assert!(json.get("group_id").is_none());
    }

    #[test]
    fn test_skip_reason_serializes_camel_case() {
        assert_eq!(
            serde_json::to_value(SkipReason::ForeignProperty).unwrap(),
            Value::String("foreignProperty".to_string())
        );
        assert_eq!(
            serde_json::to_value(SkipReason::Inherited).unwrap(),
            Value::String("inherited".to_string())
        );
        assert_eq!(
            serde_json::to_value(SkipReason::Unchanged).unwrap(),
            Value::String("unchanged".to_string())
        );
        assert_eq!(
            serde_json::to_value(SkipReason::Unresolved).unwrap(),
            Value::String("unresolved".to_string())
        );
    }

    #[test]
    fn test_skip_entry_carries_property_name() {
        let entry = SkipEntry::new(
            "org.example".to_string(),
            "core-lib".to_string(),
            PathBuf::from("pom.xml"),
            SkipReason::ForeignProperty,
            Some("shared.version".to_string()),
        );
        let json: Value = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json.get("reason"),
            Some(&Value::String("foreignProperty".to_string()))
        );
        assert_eq!(
            json.get("property"),
            Some(&Value::String("shared.version".to_string()))
        );
    }

    #[test]
    fn test_run_report_serializes_counts_and_entries() {
        let report = RunReport::new(
            3,
            1,
            vec![RewriteEntry::new(
                "org.example".to_string(),
                "core-lib".to_string(),
                PathBuf::from("app/pom.xml"),
                "${lib.version}".to_string(),
                "2.0".to_string(),
            )],
            vec![SkipEntry::new(
                "org.example".to_string(),
                "util".to_string(),
                PathBuf::from("app/pom.xml"),
                SkipReason::Unchanged,
                None,
            )],
        );
        let json: Value = serde_json::to_value(&report).unwrap();

        assert_eq!(json.get("descriptors"), Some(&Value::Number(3.into())));
        assert_eq!(json.get("parseFailures"), Some(&Value::Number(1.into())));
        assert_eq!(json["rewrites"].as_array().unwrap().len(), 1);
        assert_eq!(json["rewrites"][0]["from"], "${lib.version}");
        assert_eq!(json["skips"][0]["reason"], "unchanged");
        assert_eq!(json["skips"][0]["property"], Value::Null);
    }
}

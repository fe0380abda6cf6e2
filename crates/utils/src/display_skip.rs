use colored::Colorize;
use pomsync_core::{SkipEntry, SkipReason};

/// One console line per dependency the planner left alone, with the reason.
pub fn display_skip(entry: &SkipEntry) -> String {
    let reason = match entry.reason() {
        SkipReason::Inherited => "version inherited from parent".to_string(),
        SkipReason::ForeignProperty => match entry.property() {
            Some(name) => format!("property ${{{name}}} is owned by another file"),
            None => "property is owned by another file".to_string(),
        },
        SkipReason::Unchanged => "already current".to_string(),
        SkipReason::Unresolved => "no known version to apply".to_string(),
    };
    format!(
        "{} {} {} {}",
        "[skip]".yellow().bold(),
        format!("{}:{}", entry.group_id(), entry.artifact_id())
            .bright_white()
            .bold(),
        format!("({reason})").yellow(),
        format!("./{}", entry.path().display()).bright_black()
    )
}

use colored::Colorize;
use pomsync_core::RewriteEntry;

/// One console line per rewritten dependency version.
pub fn display_rewrite(entry: &RewriteEntry) -> String {
    format!(
        "{} {} {} {} {} {}",
        "[sync]".bright_green().bold(),
        format!("{}:{}", entry.group_id(), entry.artifact_id())
            .bright_white()
            .bold(),
        entry.from().yellow(),
        "→".bright_cyan(),
        entry.to().bright_green(),
        format!("./{}", entry.path().display()).bright_black()
    )
}

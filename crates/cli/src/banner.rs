use colored::Colorize;

/// Startup banner: the tool name and a one-line summary of what a run does.
pub fn banner() -> String {
    format!(
        "{}\n{}",
        "pomsync".bright_cyan().bold(),
        "Scans pom.xml files, finds the latest local dependency versions, and rewrites stale ones"
            .bright_black()
    )
}

use std::path::Path;

use colored::Colorize;
use pomsync_core::Descriptor;

/// One console line per located descriptor, in the shape
/// `[pom] group:artifact (version) → ./relative/path`.
pub fn display_descriptor(descriptor: &Descriptor, relative_path: &Path) -> String {
    let version = descriptor
        .resolved_version()
        .map_or_else(|| "(unknown)".to_string(), |version| format!("({version})"));
    format!(
        "{} {} {} {} {}",
        "[pom]".bright_blue().bold(),
        descriptor.coordinate().to_string().bright_white().bold(),
        version.bright_green(),
        "→".bright_cyan(),
        format!("./{}", relative_path.display()).bright_black()
    )
}

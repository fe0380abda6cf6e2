use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pomsync_core::RunReport;
use pomsync_utils::{display_descriptor, display_rewrite, display_skip};

use crate::banner::banner;
use crate::context::CommandContext;
use crate::options::FormatOptions;
use crate::plan::plan_run;

#[derive(Args, Debug)]
#[command(about = "Report stale dependency versions without writing anything")]
pub struct CheckArgs {
    /// Root directory to scan (default: current directory)
    pub path: Option<PathBuf>,

    #[arg(short, long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Dry run: scan and plan exactly like sync, print what would be rewritten,
/// write nothing.
///
/// # Errors
/// Returns error if the root directory cannot be scanned.
pub async fn handle_check(args: &CheckArgs) -> Result<()> {
    if args.format.is_stdout() {
        println!("{}", banner());
    }
    let context = CommandContext::discover(args.path.as_deref()).await?;
    let run_plan = plan_run(&context);

    if args.format.is_stdout() {
        for (_, error) in context.failures() {
            println!("{} {error}", "[warn]".red().bold());
        }
        for document in context.documents() {
            println!(
                "{}",
                display_descriptor(document.descriptor(), document.relative_path())
            );
        }
        for entry in &run_plan.rewrites {
            println!("{}", display_rewrite(entry));
        }
        for entry in &run_plan.skips {
            println!("{}", display_skip(entry));
        }
    }

    let summary = format!(
        "{} descriptors scanned: {} to rewrite, {} skipped, {} parse failures\n\
         Dry run, no files were written",
        context.documents().len(),
        run_plan.rewrites.len(),
        run_plan.skips.len(),
        context.failures().len()
    );
    let report = RunReport::new(
        context.documents().len(),
        context.failures().len(),
        run_plan.rewrites,
        run_plan.skips,
    );
    args.format
        .print(&summary, &serde_json::to_string_pretty(&report)?);
    Ok(())
}

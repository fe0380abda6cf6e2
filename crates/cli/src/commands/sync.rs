use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pomsync_utils::{display_descriptor, display_rewrite, display_skip};

use crate::banner::banner;
use crate::context::CommandContext;
use crate::plan::plan_run;

#[derive(Args, Debug)]
#[command(about = "Synchronize dependency versions across a pom.xml tree")]
pub struct SyncArgs {
    /// Root directory to scan (default: current directory)
    pub path: Option<PathBuf>,
}

/// Scan, plan, and rewrite stale dependency versions in place.
///
/// # Errors
/// Returns error if the root directory cannot be scanned. Per-file parse and
/// write failures are reported and do not abort the run.
pub async fn handle_sync(args: &SyncArgs) -> Result<()> {
    println!("{}", banner());
    let context = CommandContext::discover(args.path.as_deref()).await?;

    for (_, error) in context.failures() {
        println!("{} {error}", "[warn]".red().bold());
    }
    for document in context.documents() {
        println!(
            "{}",
            display_descriptor(document.descriptor(), document.relative_path())
        );
    }

    let run_plan = plan_run(&context);
    for entry in &run_plan.rewrites {
        println!("{}", display_rewrite(entry));
    }
    for entry in &run_plan.skips {
        println!("{}", display_skip(entry));
    }

    // Only files with at least one planned rewrite are written
    let pending = context
        .documents()
        .iter()
        .zip(&run_plan.edits)
        .filter(|(_, edits)| !edits.is_empty())
        .collect::<Vec<_>>();
    let outcomes =
        futures::future::join_all(pending.iter().map(|&(document, edits)| document.save(edits)))
            .await;

    let mut write_failures = 0usize;
    for ((document, _), outcome) in pending.iter().zip(outcomes) {
        match outcome {
            Ok(()) => println!(
                "{} {}",
                "[save]".bright_green().bold(),
                format!("./{}", document.relative_path().display()).bright_black()
            ),
            Err(error) => {
                write_failures += 1;
                println!("{} {error}", "[warn]".red().bold());
            }
        }
    }

    println!(
        "{} descriptors scanned: {} rewritten, {} skipped, {} parse failures, {} write failures",
        context.documents().len(),
        run_plan.rewrites.len(),
        run_plan.skips.len(),
        context.failures().len(),
        write_failures
    );
    Ok(())
}

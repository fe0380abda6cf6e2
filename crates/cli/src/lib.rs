use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{CheckArgs, SyncArgs, handle_check, handle_sync};

mod banner;
pub mod commands;
mod context;
pub mod options;
mod plan;

#[derive(Parser, Debug)]
#[command(
    name = "pomsync",
    author,
    version,
    about = "Synchronizes Maven dependency versions across a repository",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root directory to scan (default: current directory)
    path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Sync(SyncArgs),
    Check(CheckArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    if let Some(command) = cli.command {
        match command {
            Commands::Sync(args) => handle_sync(&args).await?,
            Commands::Check(args) => handle_check(&args).await?,
        }
    } else {
        handle_sync(&SyncArgs { path: cli.path }).await?;
    }
    Ok(())
}

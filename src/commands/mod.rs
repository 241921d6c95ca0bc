pub mod add;
pub mod complete;
pub mod export;
pub mod init;
pub mod list;
pub mod menu;
pub mod remove;

use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task to the task file")]
    Add(add::AddArgs),
    #[command(about = "List the tasks in the task file")]
    List(list::ListArgs),
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
    #[command(about = "Remove a task from the task file")]
    Remove(remove::RemoveArgs),
    #[command(about = "Export the task list to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Dispatches a subcommand, or starts the interactive menu session
    /// when invoked without one.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Add(args)) => add::cmd(args),
            Some(Commands::List(args)) => list::cmd(args),
            Some(Commands::Complete(args)) => complete::cmd(args),
            Some(Commands::Remove(args)) => remove::cmd(args),
            Some(Commands::Export(args)) => export::cmd(args),
            None => menu::cmd(),
        }
    }
}

/// Task file used by one-shot commands: the explicit `--file` argument
/// wins, then the configured default, then `tasks.txt`.
fn resolve_task_file(file: Option<PathBuf>, config: &Config) -> PathBuf {
    file.unwrap_or_else(|| config.task_file())
}

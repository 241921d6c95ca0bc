use crate::libs::{
    config::Config,
    export::{ExportFormat, Exporter},
    messages::Message,
    task_list::TaskList,
};
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short = 'F', long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Task file to operate on
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let path = super::resolve_task_file(args.file, &config);

    if !TaskList::file_exists(&path) {
        msg_error!(Message::FileNotFound(path.display().to_string()));
        return Ok(());
    }

    let mut list = TaskList::new();
    list.load_from_file(&path)?;

    if list.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(list.tasks())?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}

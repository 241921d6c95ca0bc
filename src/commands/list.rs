use crate::libs::{config::Config, messages::Message, task_list::TaskList, view::View};
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Task file to operate on
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let path = super::resolve_task_file(args.file, &config);

    if !TaskList::file_exists(&path) {
        msg_error!(Message::FileNotFound(path.display().to_string()));
        return Ok(());
    }

    let mut list = TaskList::new();
    list.load_from_file(&path)?;

    if list.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(list.tasks())?;
    Ok(())
}

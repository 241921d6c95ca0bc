use crate::libs::{config::Config, messages::Message, task_list::TaskList, view::View};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// 1-based position of the task to remove
    position: Option<usize>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,

    /// Task file to operate on
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: RemoveArgs) -> Result<()> {
    let config = Config::read()?;
    let path = super::resolve_task_file(args.file, &config);

    if !TaskList::file_exists(&path) {
        msg_error!(Message::FileNotFound(path.display().to_string()));
        return Ok(());
    }

    let mut list = TaskList::new();
    list.load_from_file(&path)?;

    if list.is_empty() {
        msg_info!(Message::NoTasksToRemove);
        return Ok(());
    }

    let position = match args.position {
        Some(position) => position,
        None => {
            msg_print!(Message::CurrentListHeader, true);
            View::tasks(list.tasks())?;
            super::complete::prompt_position(Message::PromptTaskToRemove, list.count())?
        }
    };

    if position == 0 {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }
    if position > list.count() {
        msg_error!(Message::PositionOutOfRange(position, list.count()));
        return Ok(());
    }

    let name = list.tasks()[position - 1].name().to_string();

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRemoveTask(name).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if list.remove(position) {
        list.save_to_file(&path)?;
        msg_success!(Message::TaskRemoved);
    }

    Ok(())
}

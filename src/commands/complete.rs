use crate::libs::{config::Config, messages::Message, task_list::TaskList, view::View};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// 1-based position of the task to complete
    position: Option<usize>,

    /// Task file to operate on
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: CompleteArgs) -> Result<()> {
    let config = Config::read()?;
    let path = super::resolve_task_file(args.file, &config);

    if !TaskList::file_exists(&path) {
        msg_error!(Message::FileNotFound(path.display().to_string()));
        return Ok(());
    }

    let mut list = TaskList::new();
    list.load_from_file(&path)?;

    if list.is_empty() {
        msg_info!(Message::NoTasksToComplete);
        return Ok(());
    }

    let position = match args.position {
        Some(position) => position,
        None => {
            msg_print!(Message::CurrentListHeader, true);
            View::tasks(list.tasks())?;
            prompt_position(Message::PromptTaskToComplete, list.count())?
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

    list.complete(position);
    list.save_to_file(&path)?;

    msg_success!(Message::TaskCompleted);
    Ok(())
}

/// Asks for a task position in `0..=size`, where 0 cancels.
pub(super) fn prompt_position(prompt: Message, size: usize) -> Result<usize> {
    let position = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .validate_with(|input: &usize| -> Result<(), String> {
            if *input <= size {
                Ok(())
            } else {
                Err(Message::PositionOutOfRange(*input, size).to_string())
            }
        })
        .interact_text()?;

    Ok(position)
}

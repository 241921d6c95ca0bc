//! Adds a single task to the task file.
//!
//! Name and due date may be given as arguments; anything missing is
//! collected interactively. The date prompt re-asks until the input
//! validates, like the menu session does.

use crate::libs::{config::Config, date::Date, messages::Message, task_list::TaskList};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name
    name: Option<String>,

    /// Due date as mm/dd/yyyy
    #[arg(short, long)]
    due: Option<String>,

    /// Task file to operate on
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let path = super::resolve_task_file(args.file, &config);

    let mut list = TaskList::new();
    if TaskList::file_exists(&path) {
        list.load_from_file(&path)?;
    }

    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName.to_string())
            .interact_text()?,
    };

    // A date given on the command line must already be valid; the prompt
    // keeps asking until one is.
    let due = match args.due {
        Some(due) => match Date::validate(&due) {
            Some(normalized) => normalized,
            None => msg_bail_anyhow!(Message::InvalidDate),
        },
        None => prompt_due_date()?,
    };

    list.add(&name, Date::parse(&due));
    list.save_to_file(&path)?;

    msg_success!(Message::TaskAdded(name));
    Ok(())
}

pub(super) fn prompt_due_date() -> Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDueDate.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            match Date::validate(input) {
                Some(_) => Ok(()),
                None => Err(Message::InvalidDate.to_string()),
            }
        })
        .interact_text()?;

    Ok(input)
}

//! The interactive menu session.
//!
//! Running taskdeck without a subcommand enters a menu loop over an
//! in-memory task list: display, add, complete, remove, change the task
//! file, load, save, quit. The session tracks whether the list has
//! unsaved changes and asks for confirmation before quitting with them.
//!
//! Only the shell lives here; every list operation goes through
//! [`TaskList`], and all indentation comes from the configured margin.

use crate::libs::{config::Config, date::Date, messages::Message, task_list::TaskList, view::View};
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::path::{Path, PathBuf};

const MENU_OPTIONS: [&str; 8] = [
    "Display tasks",
    "Add task",
    "Complete task",
    "Remove task",
    "Change file",
    "Load file",
    "Save file",
    "Quit",
];

struct MenuSession {
    list: TaskList,
    current_file: Option<PathBuf>,
    modified: bool,
    margin: usize,
}

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut session = MenuSession {
        list: TaskList::new(),
        current_file: config.storage.as_ref().map(|storage| PathBuf::from(&storage.file)),
        modified: false,
        margin: config.margin(),
    };

    loop {
        session.show_header();

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(&MENU_OPTIONS)
            .default(0)
            .interact()?;

        match choice {
            0 => session.display()?,
            1 => session.add()?,
            2 => session.complete()?,
            3 => session.remove()?,
            4 => session.change_file()?,
            5 => session.load(),
            6 => session.save()?,
            7 => {
                if session.quit()? {
                    break;
                }
            }
            _ => {}
        }
    }

    msg_print!(Message::Goodbye, true);
    Ok(())
}

impl MenuSession {
    fn show_header(&self) {
        View::title("Main Menu", self.margin);

        let file = match &self.current_file {
            Some(path) => path.display().to_string(),
            None => "None".to_string(),
        };
        let marker = if self.modified { " *" } else { "" };
        View::message(&format!("Task file: {}{}", file, marker), self.margin);
    }

    fn display(&self) -> Result<()> {
        if self.list.is_empty() {
            msg_info!(Message::NoTasks);
            return Ok(());
        }

        msg_print!(Message::TasksHeader, true);
        View::tasks(self.list.tasks())
    }

    fn add(&mut self) -> Result<()> {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName.to_string())
            .interact_text()?;

        let due = super::add::prompt_due_date()?;

        self.list.add(&name, Date::parse(&due));
        self.modified = true;

        msg_success!(Message::TaskAdded(name));
        Ok(())
    }

    fn complete(&mut self) -> Result<()> {
        if self.list.is_empty() {
            msg_info!(Message::NoTasksToComplete);
            return Ok(());
        }

        msg_print!(Message::CurrentListHeader, true);
        View::tasks(self.list.tasks())?;

        let position = super::complete::prompt_position(Message::PromptTaskToComplete, self.list.count())?;
        if position == 0 {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }

        self.list.complete(position);
        self.modified = true;

        msg_success!(Message::TaskCompleted);
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        if self.list.is_empty() {
            msg_info!(Message::NoTasksToRemove);
            return Ok(());
        }

        msg_print!(Message::CurrentListHeader, true);
        View::tasks(self.list.tasks())?;

        let position = super::complete::prompt_position(Message::PromptTaskToRemove, self.list.count())?;
        if position == 0 {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }

        if self.list.remove(position) {
            self.modified = true;
            msg_success!(Message::TaskRemoved);
        }

        Ok(())
    }

    fn change_file(&mut self) -> Result<()> {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFileName.to_string())
            .interact_text()?;

        let path = with_txt_extension(name);
        msg_print!(Message::FileNameChanged(path.display().to_string()));

        self.current_file = Some(path);
        self.modified = false;
        Ok(())
    }

    fn load(&mut self) {
        let path = match &self.current_file {
            Some(path) => path.clone(),
            None => {
                msg_info!(Message::NoFileSelected);
                return;
            }
        };

        if !TaskList::file_exists(&path) {
            msg_error!(Message::FileNotFound(path.display().to_string()));
            return;
        }

        match self.list.load_from_file(&path) {
            Ok(()) => {
                self.modified = false;
                msg_success!(Message::FileLoaded(path.display().to_string()));
            }
            Err(error) => msg_error!(Message::FileLoadFailed(error.to_string())),
        }
    }

    fn save(&mut self) -> Result<()> {
        if self.list.is_empty() {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSaveEmpty.to_string())
                .default(true)
                .interact()?;

            if !confirmed {
                msg_info!(Message::FileNotSaved);
                return Ok(());
            }
        }

        let path = match &self.current_file {
            Some(path) => path.clone(),
            None => {
                let name: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptFileName.to_string())
                    .interact_text()?;
                let path = with_txt_extension(name);
                self.current_file = Some(path.clone());
                path
            }
        };

        match self.list.save_to_file(&path) {
            Ok(()) => {
                self.modified = false;
                msg_success!(Message::FileSaved(path.display().to_string()));
            }
            Err(error) => msg_error!(Message::FileSaveFailed(error.to_string())),
        }

        Ok(())
    }

    /// Returns true when the session should end.
    fn quit(&self) -> Result<bool> {
        if self.modified {
            msg_warning!(Message::UnsavedChanges);
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptQuitUnsaved.to_string())
                .default(false)
                .interact()?;
            return Ok(confirmed);
        }

        Ok(true)
    }
}

/// Bare file names get a `.txt` extension; names that already carry an
/// extension are kept as typed.
fn with_txt_extension(name: String) -> PathBuf {
    if Path::new(&name).extension().is_none() {
        PathBuf::from(format!("{}.txt", name))
    } else {
        PathBuf::from(name)
    }
}

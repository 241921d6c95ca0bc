//! Message-to-text conversion for all user-facing output.
//!
//! Keeping every string behind the [`Message`] enum gives one place to
//! review wording and keeps parameter interpolation type-checked.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(name) => format!("Task '{}' added", name),
            Message::TaskCompleted => "Task has been completed".to_string(),
            Message::TaskRemoved => "Task has been removed".to_string(),
            Message::NoTasks => "There are no tasks in your list".to_string(),
            Message::NoTasksToComplete => "There are no tasks to complete".to_string(),
            Message::NoTasksToRemove => "There are no tasks to remove".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::CurrentListHeader => "Your current list:".to_string(),
            Message::InvalidDate => "Invalid date, expected mm/dd/yyyy".to_string(),
            Message::PositionOutOfRange(position, size) => {
                format!("Task {} does not exist, the list has {} task(s)", position, size)
            }
            Message::ConfirmRemoveTask(name) => format!("Remove task '{}'?", name),

            // === FILE MESSAGES ===
            Message::FileSaved(file) => format!("Task file saved to {}", file),
            Message::FileNotSaved => "Task file was not saved".to_string(),
            Message::FileLoaded(file) => format!("Task file loaded from {}", file),
            Message::FileLoadFailed(error) => format!("Failed to load task file: {}", error),
            Message::FileSaveFailed(error) => format!("Failed to save task file: {}", error),
            Message::FileNotFound(file) => format!("Task file {} does not exist", file),
            Message::FileNameChanged(file) => format!("Task file changed to {}", file),
            Message::NoFileSelected => "No task file selected, choose one from the main menu".to_string(),
            Message::UnsavedChanges => "You have unsaved changes".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(file) => format!("Tasks exported to {}", file),
            Message::NothingToExport => "There are no tasks to export".to_string(),

            // === PROMPTS ===
            Message::PromptTaskName => "Enter task name".to_string(),
            Message::PromptDueDate => "Enter due date as mm/dd/yyyy".to_string(),
            Message::PromptTaskToComplete => "Choose a task to complete (0 to cancel)".to_string(),
            Message::PromptTaskToRemove => "Choose a task to remove (0 to cancel)".to_string(),
            Message::PromptFileName => "Enter a name for your task file".to_string(),
            Message::PromptSaveEmpty => "You have no tasks to save. Do you still want to save?".to_string(),
            Message::PromptQuitUnsaved => "Are you sure you want to quit?".to_string(),
            Message::PromptMenuChoice => "Choose an option".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptTaskFile => "Enter default task file".to_string(),
            Message::PromptMargin => "Enter console margin (spaces)".to_string(),

            // === GENERAL ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::Goodbye => "Program is shutting down, have a nice day!".to_string(),
        };

        write!(f, "{}", text)
    }
}

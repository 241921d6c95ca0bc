#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskCompleted,
    TaskRemoved,
    NoTasks,
    NoTasksToComplete,
    NoTasksToRemove,
    TasksHeader,
    CurrentListHeader,
    InvalidDate,
    PositionOutOfRange(usize, usize), // position, list size
    ConfirmRemoveTask(String),

    // === FILE MESSAGES ===
    FileSaved(String),
    FileNotSaved,
    FileLoaded(String),
    FileLoadFailed(String),
    FileSaveFailed(String),
    FileNotFound(String),
    FileNameChanged(String),
    NoFileSelected,
    UnsavedChanges,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleStorage,
    ConfigModuleDisplay,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NothingToExport,

    // === PROMPTS ===
    PromptTaskName,
    PromptDueDate,
    PromptTaskToComplete,
    PromptTaskToRemove,
    PromptFileName,
    PromptSaveEmpty,
    PromptQuitUnsaved,
    PromptMenuChoice,
    PromptSelectModules,
    PromptTaskFile,
    PromptMargin,

    // === GENERAL ===
    OperationCancelled,
    Goodbye,
}

//! The ordered task store and its flat-file persistence.
//!
//! Tasks are held in insertion order and addressed by 1-based position,
//! matching what the console shell shows the user. The persisted format is
//! one comma-separated record per line, `name,MM,DD,YYYY,completed` with
//! the flag serialized as `0` or `1`, no header line and no trailing
//! newline. Names must not contain commas; no escaping is supported.

use super::date::Date;
use super::task::Task;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Task file I/O failure. Position-based operations never produce errors;
/// only opening, reading, or writing the backing file can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open task file '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to read task file '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write task file '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// An ordered collection of tasks with 1-based positional addressing.
///
/// Insertion is append-only; removing a task shifts every later position
/// down by one. Cloning produces a fully independent copy.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    /// Appends a pending task at the end of the list.
    pub fn add(&mut self, name: &str, due_date: Date) {
        self.push(name, due_date, false);
    }

    fn push(&mut self, name: &str, due_date: Date, completed: bool) {
        self.tasks.push(Task::new(name, due_date, completed));
    }

    /// Marks the task at `position` as completed. Out-of-range positions
    /// (including 0) are silently ignored.
    pub fn complete(&mut self, position: usize) {
        if position >= 1 && position <= self.tasks.len() {
            self.tasks[position - 1].mark_complete();
        }
    }

    /// Removes the task at `position`, shifting later tasks down by one.
    /// Returns false without touching the list if the position is out of
    /// range.
    pub fn remove(&mut self, position: usize) -> bool {
        if position >= 1 && position <= self.tasks.len() {
            self.tasks.remove(position - 1);
            true
        } else {
            false
        }
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read-only view of the tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Replaces the list contents with the records parsed from `path`.
    ///
    /// The current contents are only cleared once the file has been opened
    /// and read, so a missing or unreadable file leaves the list untouched.
    /// Blank lines (including a trailing one) are skipped; unparseable
    /// numeric fields fall back to the unset-date sentinel rather than
    /// failing the load.
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), StoreError> {
        let mut file = File::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        self.clear();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let (name, due_date, completed) = parse_record(line);
            self.push(name, due_date, completed);
        }

        Ok(())
    }

    /// Writes one record per task, newline-separated with no trailing
    /// newline after the last record.
    pub fn save_to_file(&self, path: &Path) -> Result<(), StoreError> {
        let records: Vec<String> = self.tasks.iter().map(format_record).collect();
        fs::write(path, records.join("\n")).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether a file exists at `path`. No side effects.
    pub fn file_exists(path: &Path) -> bool {
        path.exists()
    }
}

fn format_record(task: &Task) -> String {
    let due = task.due_date();
    format!(
        "{},{:02},{:02},{:04},{}",
        task.name(),
        due.month(),
        due.day(),
        due.year(),
        u8::from(task.completed())
    )
}

/// Parses a `name,month,day,year,flag` record. Missing fields default to
/// an empty name, the 0 sentinel, or pending; `Date::new` clamps anything
/// out of range.
fn parse_record(line: &str) -> (&str, Date, bool) {
    let mut fields = line.splitn(5, ',');
    let name = fields.next().unwrap_or("");
    let month = parse_field(fields.next());
    let day = parse_field(fields.next());
    let year = parse_field(fields.next());
    let completed = fields.next().map(|f| f.trim() == "1").unwrap_or(false);

    (name, Date::new(month, day, year), completed)
}

fn parse_field(field: Option<&str>) -> i32 {
    field.and_then(|f| f.trim().parse().ok()).unwrap_or(0)
}

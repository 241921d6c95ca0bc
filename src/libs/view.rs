//! Console rendering for the task list and the menu chrome.
//!
//! Table output goes through prettytable; the title and message helpers
//! take the indentation margin explicitly so presentation settings stay in
//! the configuration instead of a global.

use super::date::Date;
use super::task::Task;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the tasks as a table with their 1-based positions. Pending
    /// tasks whose due date has passed are flagged as overdue.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let today = Local::now().date_naive();
        let mut table = Table::new();

        table.add_row(row!["#", "NAME", "DUE DATE", "STATUS"]);
        for (index, task) in tasks.iter().enumerate() {
            table.add_row(row![
                index + 1,
                task.name(),
                task.due_date(),
                status(task, today)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints `text` indented by `margin` spaces.
    pub fn message(text: &str, margin: usize) {
        println!("{:margin$}{}", "", text);
    }

    /// Prints a bordered title block indented by `margin` spaces.
    pub fn title(text: &str, margin: usize) {
        let border = "=".repeat(text.len() + 16);
        println!();
        println!("{:margin$}{}", "", border);
        println!("{:margin$}|       {}       |", "", text);
        println!("{:margin$}{}", "", border);
    }
}

fn status(task: &Task, today: NaiveDate) -> &'static str {
    if task.completed() {
        "Done"
    } else if is_overdue(task.due_date(), today) {
        "Overdue"
    } else {
        "Pending"
    }
}

/// A date with any unset field is never overdue.
fn is_overdue(due: &Date, today: NaiveDate) -> bool {
    if !due.is_set() {
        return false;
    }
    NaiveDate::from_ymd_opt(due.year(), due.month() as u32, due.day() as u32)
        .map(|date| date < today)
        .unwrap_or(false)
}

//! # Taskdeck - Console Task List Manager
//!
//! A command-line utility for keeping an ordered personal task list with
//! due dates and completion tracking, persisted to a plain text file.
//!
//! ## Features
//!
//! - **Ordered Task List**: Tasks keep their insertion order and are
//!   addressed by the 1-based position shown in the console
//! - **Due Dates**: Forgiving `mm/dd/yyyy` input with leap-year checking
//! - **Flat-File Persistence**: One comma-separated record per task
//! - **Interactive Menu**: A full menu session when run without arguments
//! - **Data Export**: Export the task list to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;

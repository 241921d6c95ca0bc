//! Task list export for external tools.
//!
//! Exports are a presentation of the current list, not a second
//! persistence format: records carry the 1-based position shown in the
//! console, and the dates are preformatted. CSV files get a header row;
//! JSON files are a pretty-printed array.

use super::task::Task;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

/// One exported task as shown to the user.
#[derive(Debug, Serialize)]
pub struct ExportRecord {
    pub position: usize,
    pub name: String,
    pub due_date: String,
    pub completed: bool,
}

impl ExportRecord {
    fn from_task(position: usize, task: &Task) -> Self {
        ExportRecord {
            position,
            name: task.name().to_string(),
            due_date: task.due_date().to_string(),
            completed: task.completed(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to a timestamped
    /// default file name when none is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("taskdeck_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    pub fn export(&self, tasks: &[Task]) -> Result<()> {
        let records: Vec<ExportRecord> = tasks
            .iter()
            .enumerate()
            .map(|(index, task)| ExportRecord::from_task(index + 1, task))
            .collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&records),
            ExportFormat::Json => self.export_json(&records),
        }
    }

    fn export_csv(&self, records: &[ExportRecord]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Position", "Name", "Due Date", "Completed"])?;

        for record in records {
            wtr.write_record([
                record.position.to_string(),
                record.name.clone(),
                record.due_date.clone(),
                record.completed.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, records: &[ExportRecord]) -> Result<()> {
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(&file, records)?;
        Ok(())
    }
}

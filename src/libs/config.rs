//! Application configuration.
//!
//! Settings are stored as pretty-printed JSON in the platform application
//! data directory. Every section is optional so the tool runs with no
//! configuration at all; `taskdeck init` walks the user through the
//! sections interactively.
//!
//! The console margin lives here rather than in a global: the shell reads
//! it once at startup and passes it to whatever needs indentation.

use super::data_storage::DataStorage;
use super::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Task file name used when neither the command line nor the
/// configuration names one.
pub const DEFAULT_TASK_FILE: &str = "tasks.txt";

/// Fallback indentation for console output.
const DEFAULT_MARGIN: usize = 4;

/// Default task file settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Task file used when a command does not name one explicitly.
    pub file: String,
}

/// Console presentation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Number of spaces of indentation for menu titles and messages.
    pub margin: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            file: DEFAULT_TASK_FILE.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { margin: DEFAULT_MARGIN }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when none
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Deletes the configuration file if one exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive configuration setup. Existing values are offered as
    /// defaults so re-running only changes what the user touches.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Storage", "Display"];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Storage" => {
                    let default = config.storage.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    config.storage = Some(StorageConfig {
                        file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTaskFile.to_string())
                            .default(default.file)
                            .interact_text()?,
                    });
                }
                "Display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        margin: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMargin.to_string())
                            .default(default.margin)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// The configured default task file, or [`DEFAULT_TASK_FILE`].
    pub fn task_file(&self) -> PathBuf {
        match &self.storage {
            Some(storage) => PathBuf::from(&storage.file),
            None => PathBuf::from(DEFAULT_TASK_FILE),
        }
    }

    /// The configured console margin, or the built-in default.
    pub fn margin(&self) -> usize {
        self.display.as_ref().map(|d| d.margin).unwrap_or(DEFAULT_MARGIN)
    }
}

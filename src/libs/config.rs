//! Configuration management for the sleeptrack application.
//!
//! The configuration is a small JSON document stored next to the database in
//! the platform-specific data directory. Each section is optional; a missing
//! section (or a missing file) falls back to defaults, so the application runs
//! without any setup.
//!
//! ## Configuration Structure
//!
//! - **Storage Config**: Name of the SQLite database file
//! - **Display Config**: `chrono` format string used when rendering times
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use sleeptrack::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Database: {}", config.database_file());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data directory.
pub const DEFAULT_DATABASE_FILE: &str = "sleep_history.db";

/// Default format for start and end times in rendered session lists.
pub const DEFAULT_TIME_FORMAT: &str = "%a %b %d %Y %H:%M";

/// A configurable section offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Where the session database lives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// File name of the SQLite database, resolved inside the data directory.
    pub database_file: String,
}

/// How sessions are rendered for display.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// `chrono` strftime pattern for start and end times.
    pub time_format: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            database_file: DEFAULT_DATABASE_FILE.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

/// Root configuration object.
///
/// All sections are optional; accessors fall back to the section defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Loads the configuration file, or the defaults when it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Missing files are not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    pub fn database_file(&self) -> String {
        self.storage.clone().unwrap_or_default().database_file
    }

    pub fn time_format(&self) -> String {
        self.display.clone().unwrap_or_default().time_format
    }

    /// Runs the interactive setup wizard, starting from the stored values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: Message::ConfigModuleStorage.to_string(),
            },
            ConfigModule {
                key: "display".to_string(),
                name: Message::ConfigModuleDisplay.to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "storage" => {
                    let default = config.storage.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    config.storage = Some(StorageConfig {
                        database_file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDatabaseFile.to_string())
                            .default(default.database_file)
                            .interact_text()?,
                    });
                }
                "display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        time_format: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTimeFormat.to_string())
                            .default(default.time_format)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

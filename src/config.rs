//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::{ContactStore, FlatFileStore, JsonFileStore};
use std::env;
use std::path::PathBuf;

const DEFAULT_CONTACTS_FILE: &str = "contacts.txt";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// On-disk format of the contacts file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageFormat {
    /// `name,phone` lines, primary phone only
    #[default]
    Flat,
    /// JSON array with every phone
    Json,
}

impl StorageFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "flat" | "txt" => Some(Self::Flat),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the contacts file (default: "contacts.txt")
    pub contacts_file: PathBuf,

    /// Format of the contacts file (default: flat)
    pub storage_format: StorageFormat,

    /// Where to keep prompt history; no history is kept when unset
    pub history_file: Option<PathBuf>,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Path of the contacts file (default: "contacts.txt")
    /// - `CONTACTS_FORMAT`: `flat` or `json` (default: "flat")
    /// - `CONTACTS_HISTORY_FILE`: Prompt history path (default: none)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let contacts_file = Self::parse_env_path("CONTACTS_FILE")?
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTACTS_FILE));

        let storage_format = match env::var("CONTACTS_FORMAT") {
            Ok(val) => StorageFormat::parse(&val).ok_or_else(|| ConfigError::InvalidValue {
                var: "CONTACTS_FORMAT".to_string(),
                reason: format!("Must be one of: flat, json, got: {}", val),
            })?,
            Err(_) => StorageFormat::default(),
        };

        let history_file = Self::parse_env_path("CONTACTS_HISTORY_FILE")?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            contacts_file,
            storage_format,
            history_file,
            log_level,
        })
    }

    /// Parse an environment variable as a non-empty path.
    fn parse_env_path(var_name: &str) -> ConfigResult<Option<PathBuf>> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(Some(PathBuf::from(val))),
            Err(_) => Ok(None),
        }
    }

    /// Build the store selected by this configuration.
    pub fn store(&self) -> Box<dyn ContactStore> {
        match self.storage_format {
            StorageFormat::Flat => Box::new(FlatFileStore::new(&self.contacts_file)),
            StorageFormat::Json => Box::new(JsonFileStore::new(&self.contacts_file)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            storage_format: StorageFormat::Flat,
            history_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

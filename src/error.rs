//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation errors live in [`crate::domain::errors`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while parsing or executing a user command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments; carries the usage hint for the command
    #[error("{0}")]
    MalformedCommandArguments(String),

    /// No contact with the requested name
    #[error("This contact was not found in the system. Try again.")]
    ContactNotFound(String),

    /// A name or phone failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur when loading or saving the address book.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the contacts file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The name cannot be written to a line-based file
    #[error("Contact name {0:?} cannot be saved: it contains a line break")]
    UnstorableName(String),

    /// Failed to encode or decode the JSON snapshot
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum ReplError {
    /// The line editor failed
    #[error("Prompt error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// The book could not be saved on exit
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

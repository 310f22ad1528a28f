//! Contact Book - a personal contact directory with validated phone numbers.
//!
//! Contacts are kept in an [`AddressBook`] keyed by case-folded name. Each
//! [`Record`] holds one name and any number of phones; every phone is checked
//! when it is created, so an invalid number never enters the book.
//!
//! # Architecture
//!
//! - **domain**: Value objects (`Name`, `Phone`) and the `Field` contract
//! - **models**: `Record` and `AddressBook`
//! - **storage**: Loading and saving the book (flat file, JSON)
//! - **commands**: Parsing prompt input and executing it against the book
//! - **session**: A loaded book bound to its store
//! - **repl**: The interactive prompt
//! - **config**: Configuration from environment variables
//! - **error**: Error types for every layer
//!
//! The book is single-threaded: it is mutated in place by one caller and
//! provides no locking.

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod session;
pub mod storage;

pub use commands::{Command, CommandMessage, CommandOutcome, MessageLevel};
pub use config::{Config, StorageFormat};
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, ReplError, StoreError};
pub use models::{AddressBook, Record, RejectedEntry};
pub use repl::ContactRepl;
pub use session::Session;
pub use storage::{ContactStore, FlatFileStore, JsonFileStore, LoadRejection, LoadReport};

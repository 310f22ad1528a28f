//! Persistence for the address book.
//!
//! A [`ContactStore`] turns a file into an [`AddressBook`](crate::models::AddressBook)
//! at startup and writes the book back on exit. Two formats are supported:
//!
//! - [`FlatFileStore`]: one `name,phone` pair per line, primary phone only
//! - [`JsonFileStore`]: a JSON array keeping every phone of every contact

mod flat_file;
mod json_file;
mod traits;

pub use flat_file::FlatFileStore;
pub use json_file::JsonFileStore;
pub use traits::{ContactStore, LoadRejection, LoadReport};

use crate::error::{StoreError, StoreResult};
use std::fs;
use std::path::Path;

/// Create the directory that will hold `path`, if it is missing.
pub(crate) fn ensure_parent_dir(path: &Path) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
    }
    Ok(())
}

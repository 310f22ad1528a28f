//! Line-oriented `name,phone` contacts file.

use super::ensure_parent_dir;
use super::traits::{ContactStore, LoadRejection, LoadReport};
use crate::error::{StoreError, StoreResult};
use crate::models::{AddressBook, Record};
use std::fs;
use std::path::PathBuf;

/// Stores one contact per line as `<name>,<phone>`.
///
/// Only the primary phone of each record is written. A record without phones
/// is written as `<name>,` and loads back as a record without phones.
///
/// A line is split at its last comma, so names may contain commas. Names
/// containing a line break cannot be saved.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Add one line to `book`, or explain why it cannot be added.
    fn load_line(book: &mut AddressBook, line: &str) -> Result<(), String> {
        let Some((name, phone)) = line.rsplit_once(',') else {
            return Err("expected `name,phone`, found no comma".to_string());
        };
        let phone = phone.trim_end_matches(['\r', '\n']);

        if phone.is_empty() {
            let record = Record::new(name).map_err(|e| e.to_string())?;
            book.add_record(record);
            return Ok(());
        }

        book.seed(name, phone).map_err(|e| e.to_string())
    }

    fn parse(content: &str) -> LoadReport {
        let mut report = LoadReport::default();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            if let Err(reason) = Self::load_line(&mut report.book, line) {
                tracing::warn!(line = index + 1, content = line, %reason, "Skipping contact entry");
                report.rejected.push(LoadRejection {
                    entry: index + 1,
                    content: line.to_string(),
                    reason,
                });
            }
        }

        report
    }

    fn render(book: &AddressBook) -> StoreResult<String> {
        let mut content = String::new();
        for (name, phone) in book.export() {
            if name.contains('\n') {
                return Err(StoreError::UnstorableName(name.to_string()));
            }
            content.push_str(name);
            content.push(',');
            content.push_str(phone.unwrap_or_default());
            content.push('\n');
        }
        Ok(content)
    }
}

impl ContactStore for FlatFileStore {
    fn load(&self) -> StoreResult<LoadReport> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "Contacts file missing, creating empty one");
            ensure_parent_dir(&self.path)?;
            fs::write(&self.path, "").map_err(|e| StoreError::io(&self.path, e))?;
            return Ok(LoadReport::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let report = Self::parse(&content);

        tracing::info!(
            path = %self.path.display(),
            loaded = report.book.len(),
            rejected = report.rejected.len(),
            "Contacts loaded"
        );
        Ok(report)
    }

    fn save(&self, book: &AddressBook) -> StoreResult<()> {
        let content = Self::render(book)?;
        ensure_parent_dir(&self.path)?;
        fs::write(&self.path, content).map_err(|e| StoreError::io(&self.path, e))?;

        tracing::info!(path = %self.path.display(), saved = book.len(), "Contacts saved");
        Ok(())
    }
}

//! JSON snapshot keeping every phone of every contact.

use super::ensure_parent_dir;
use super::traits::{ContactStore, LoadRejection, LoadReport};
use crate::domain::{Field, ValidationResult};
use crate::error::{StoreError, StoreResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// One contact as written to the snapshot.
///
/// Values are kept as plain strings so that a bad phone rejects only its own
/// contact instead of the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RecordEntry {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
}

impl RecordEntry {
    fn from_record(record: &Record) -> Self {
        Self {
            name: record.name().value().to_string(),
            phones: record.phones().iter().map(|p| p.value().to_string()).collect(),
        }
    }

    fn into_record(self) -> ValidationResult<Record> {
        let mut record = Record::new(&self.name)?;
        for phone in self.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}

/// Stores the whole book as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(content: &str) -> StoreResult<LoadReport> {
        let entries: Vec<RecordEntry> = if content.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(content)?
        };

        let mut report = LoadReport::default();
        for (index, entry) in entries.into_iter().enumerate() {
            let raw = serde_json::to_string(&entry)?;
            match entry.into_record() {
                Ok(record) => {
                    report.book.add_record(record);
                }
                Err(error) => {
                    tracing::warn!(entry = index + 1, %raw, %error, "Skipping contact entry");
                    report.rejected.push(LoadRejection {
                        entry: index + 1,
                        content: raw,
                        reason: error.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }

    fn render(book: &AddressBook) -> StoreResult<String> {
        let entries: Vec<RecordEntry> = book.iter().map(RecordEntry::from_record).collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> StoreResult<LoadReport> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "Contacts snapshot missing, starting empty");
            return Ok(LoadReport::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let report = Self::parse(&content)?;

        tracing::info!(
            path = %self.path.display(),
            loaded = report.book.len(),
            rejected = report.rejected.len(),
            "Contacts loaded"
        );
        Ok(report)
    }

    fn save(&self, book: &AddressBook) -> StoreResult<()> {
        ensure_parent_dir(&self.path)?;

        let content = Self::render(book)?;
        fs::write(&self.path, content).map_err(|e| StoreError::io(&self.path, e))?;

        tracing::info!(path = %self.path.display(), saved = book.len(), "Contacts saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_all_phones() {
        let json = r#"[{"name": "Alice", "phones": ["0991234567", "+380501112233"]}]"#;
        let report = JsonFileStore::parse(json).unwrap();

        assert!(report.rejected.is_empty());
        assert_eq!(
            report.book.find("alice").unwrap().to_string(),
            "Contact name: Alice, phones: 0991234567; +380501112233"
        );
    }

    #[test]
    fn test_parse_rejects_only_bad_record() {
        let json = r#"[
            {"name": "alice", "phones": ["0991234567", "oops"]},
            {"name": "bob"}
        ]"#;
        let report = JsonFileStore::parse(json).unwrap();

        assert_eq!(report.book.len(), 1);
        assert!(report.book.find("bob").unwrap().phones().is_empty());
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].entry, 1);
        assert!(report.rejected[0].content.contains("oops"));
    }

    #[test]
    fn test_parse_empty_content() {
        let report = JsonFileStore::parse("  \n").unwrap();
        assert!(report.book.is_empty());
    }

    #[test]
    fn test_parse_malformed_json_fails() {
        assert!(matches!(
            JsonFileStore::parse("{not json"),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn test_render_then_parse() {
        let mut book = AddressBook::new();
        let mut alice = Record::new("Alice").unwrap();
        alice.add_phone("0991234567").unwrap();
        alice.add_phone("0501112233").unwrap();
        book.add_record(alice);

        let rendered = JsonFileStore::render(&book).unwrap();
        let report = JsonFileStore::parse(&rendered).unwrap();
        assert_eq!(report.book.find("alice").unwrap().phones().len(), 2);
    }
}

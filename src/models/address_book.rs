//! The keyed collection of all contact records.

use crate::domain::name::normalize as normalize_name;
use crate::domain::{Field, ValidationError, ValidationResult};
use crate::models::Record;
use std::collections::HashMap;

/// A seed entry that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub name: String,
    pub phone: String,
    pub error: ValidationError,
}

/// All contacts, keyed by normalized name.
///
/// The book owns its records; callers reach them only through [`find`],
/// [`find_mut`] and [`iter`]. Inserting a record whose name is already present
/// replaces the old record in place. Iteration follows the order in which
/// names were first inserted.
///
/// Not synchronized. A single caller mutates the book.
///
/// [`find`]: AddressBook::find
/// [`find_mut`]: AddressBook::find_mut
/// [`iter`]: AddressBook::iter
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from `(name, phone)` pairs, one single-phone record each.
    ///
    /// Entries with an empty name or an invalid phone are skipped and handed
    /// back; the remaining entries are still loaded.
    pub fn from_entries<I, N, P>(entries: I) -> (Self, Vec<RejectedEntry>)
    where
        I: IntoIterator<Item = (N, P)>,
        N: AsRef<str>,
        P: Into<String>,
    {
        let mut book = Self::new();
        let mut rejected = Vec::new();

        for (name, phone) in entries {
            let phone = phone.into();
            if let Err(error) = book.seed(name.as_ref(), phone.clone()) {
                tracing::warn!(name = name.as_ref(), phone = %phone, %error, "Seed entry rejected");
                rejected.push(RejectedEntry {
                    name: name.as_ref().to_string(),
                    phone,
                    error,
                });
            }
        }

        (book, rejected)
    }

    /// Insert one seed entry as a record holding a single phone.
    pub fn seed(&mut self, name: &str, phone: impl Into<String>) -> ValidationResult<()> {
        let record = Record::with_phone(name, phone)?;
        self.add_record(record);
        Ok(())
    }

    /// Lookup key for a contact name.
    pub fn normalize(name: &str) -> String {
        normalize_name(name)
    }

    /// Insert a record, replacing any record with the same normalized name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().value().to_string();
        let replaced = self.records.insert(key.clone(), record);
        match replaced {
            Some(_) => tracing::debug!(key = %key, "Record replaced"),
            None => {
                tracing::debug!(key = %key, "Record added");
                self.order.push(key);
            }
        }
        replaced
    }

    /// Find a record by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(&Self::normalize(name))
    }

    /// Find a record by name for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&Self::normalize(name))
    }

    /// Remove the record for `name`, if present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let key = Self::normalize(name);
        let removed = self.records.remove(&key)?;
        self.order.retain(|k| k != &key);
        tracing::debug!(key = %key, "Record deleted");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// `(name, primary phone)` pairs in insertion order.
    ///
    /// This is the single-phone shape used by the flat file.
    pub fn export(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.iter()
            .map(|record| (record.name().value(), record.primary_phone().map(|p| p.value())))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Box<dyn Iterator<Item = &'a Record> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        Record::with_phone(name, phone).unwrap()
    }

    #[test]
    fn test_find_ignores_case() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "0991234567"));

        let found = book.find("ALICE").unwrap();
        assert_eq!(
            found.to_string(),
            "Contact name: Alice, phones: 0991234567"
        );
        assert!(book.find("alice").is_some());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let book = AddressBook::new();
        assert!(book.find("nobody").is_none());
    }

    #[test]
    fn test_whitespace_is_significant() {
        let mut book = AddressBook::new();
        book.add_record(record("bob", "0991234567"));

        assert!(book.find(" bob").is_none());
        assert!(book.find("bob ").is_none());

        book.add_record(record(" bob", "0501112233"));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("Bob", "0991234567")).is_none());

        let replaced = book.add_record(record("bob", "0501112233")).unwrap();
        assert_eq!(replaced.primary_phone().unwrap().value(), "0991234567");

        assert_eq!(book.len(), 1);
        assert_eq!(
            book.find("BOB").unwrap().primary_phone().unwrap().value(),
            "0501112233"
        );
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "0991234567"));
        book.add_record(record("bob", "0991234567"));
        book.add_record(record("ALICE", "0501112233"));

        let names: Vec<&str> = book.iter().map(|r| r.name().value()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn test_delete_then_find() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "0991234567"));

        let removed = book.delete("alice").unwrap();
        assert_eq!(removed.name().value(), "alice");
        assert!(book.find("alice").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "0991234567"));

        assert!(book.delete("bob").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_delete_then_readd_moves_to_end() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "0991234567"));
        book.add_record(record("bob", "0991234567"));
        book.delete("alice");
        book.add_record(record("alice", "0991234567"));

        let names: Vec<&str> = book.iter().map(|r| r.name().value()).collect();
        assert_eq!(names, vec!["bob", "alice"]);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "0991234567"));

        book.find_mut("Alice")
            .unwrap()
            .add_phone("0501112233")
            .unwrap();

        assert_eq!(
            book.find("alice").unwrap().to_string(),
            "Contact name: Alice, phones: 0991234567; 0501112233"
        );
    }

    #[test]
    fn test_from_entries_skips_invalid() {
        let (book, rejected) = AddressBook::from_entries(vec![
            ("Alice", "0991234567"),
            ("Bob", "123"),
            ("", "0991234567"),
            ("Carol", "+380501112233"),
        ]);

        assert_eq!(book.len(), 2);
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0].name, "Bob");
        assert_eq!(
            rejected[0].error,
            ValidationError::InvalidPhoneFormat("123".to_string())
        );
        assert_eq!(rejected[1].error, ValidationError::EmptyName);
    }

    #[test]
    fn test_seed_export_round_trip_normalizes_names() {
        let entries = vec![
            ("Alice", "0991234567"),
            ("BOB", "+380501112233"),
            ("carol", "0670000000"),
        ];
        let (book, rejected) = AddressBook::from_entries(entries);
        assert!(rejected.is_empty());

        let exported: Vec<(&str, Option<&str>)> = book.export().collect();
        assert_eq!(
            exported,
            vec![
                ("alice", Some("0991234567")),
                ("bob", Some("+380501112233")),
                ("carol", Some("0670000000")),
            ]
        );
    }

    #[test]
    fn test_export_record_without_phone() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Dave").unwrap());

        let exported: Vec<_> = book.export().collect();
        assert_eq!(exported, vec![("dave", None)]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(AddressBook::normalize("MiXeD"), "mixed");
        assert_eq!(AddressBook::normalize(" Spaced "), " spaced ");
    }

    #[test]
    fn test_into_iterator() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "0991234567"));

        let mut count = 0;
        for record in &book {
            assert_eq!(record.name().value(), "alice");
            count += 1;
        }
        assert_eq!(count, 1);
    }
}

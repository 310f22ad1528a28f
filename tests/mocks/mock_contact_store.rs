use contact_book::error::StoreResult;
use contact_book::{AddressBook, ContactStore, LoadRejection, LoadReport};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps `(name, phone)` seed entries in memory, records what was saved and
/// tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    seed: Arc<Mutex<Vec<(String, String)>>>,
    saved: Arc<Mutex<Option<Vec<(String, Option<String>)>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that loads the given entries.
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        {
            let mut seed = store.seed.lock().unwrap();
            for (name, phone) in entries {
                seed.push((name.to_string(), phone.to_string()));
            }
        }
        store
    }

    /// The last exported contents passed to `save`, if any.
    pub fn saved(&self) -> Option<Vec<(String, Option<String>)>> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactStore for MockContactStore {
    fn load(&self) -> StoreResult<LoadReport> {
        self.track_call("load");

        let seed = self.seed.lock().unwrap().clone();
        let mut book = AddressBook::new();
        let mut rejected = Vec::new();
        for (index, (name, phone)) in seed.into_iter().enumerate() {
            if let Err(error) = book.seed(&name, phone.clone()) {
                rejected.push(LoadRejection {
                    entry: index + 1,
                    content: format!("{},{}", name, phone),
                    reason: error.to_string(),
                });
            }
        }

        Ok(LoadReport { book, rejected })
    }

    fn save(&self, book: &AddressBook) -> StoreResult<()> {
        self.track_call("save");

        let exported = book
            .export()
            .map(|(name, phone)| (name.to_string(), phone.map(str::to_string)))
            .collect();
        *self.saved.lock().unwrap() = Some(exported);
        Ok(())
    }
}

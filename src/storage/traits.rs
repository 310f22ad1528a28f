use crate::error::StoreResult;
use crate::models::AddressBook;

/// An entry that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRejection {
    /// 1-based position of the entry in the source (line or array element)
    pub entry: usize,

    /// The entry as it appeared in the source
    pub content: String,

    /// Why the entry was rejected
    pub reason: String,
}

/// The outcome of loading a store.
///
/// Rejected entries do not fail the load; they are reported next to the book
/// built from the remaining entries.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub book: AddressBook,
    pub rejected: Vec<LoadRejection>,
}

/// Storage backend for the address book.
///
/// Provides abstraction over where and how contacts are persisted,
/// enabling different implementations (flat file, JSON, in-memory mocks).
pub trait ContactStore {
    /// Read the stored contacts.
    fn load(&self) -> StoreResult<LoadReport>;

    /// Replace the stored contacts with the contents of `book`.
    fn save(&self, book: &AddressBook) -> StoreResult<()>;
}

impl<S: ContactStore + ?Sized> ContactStore for Box<S> {
    fn load(&self) -> StoreResult<LoadReport> {
        (**self).load()
    }

    fn save(&self, book: &AddressBook) -> StoreResult<()> {
        (**self).save(book)
    }
}

//! A loaded address book bound to the store it came from.

use crate::commands::{self, CommandMessage, CommandOutcome};
use crate::error::StoreResult;
use crate::models::AddressBook;
use crate::storage::{ContactStore, LoadRejection};

/// The state of one run of the tool: the book being edited and the store it
/// is saved back to.
pub struct Session<S: ContactStore> {
    book: AddressBook,
    store: S,
}

impl<S: ContactStore> Session<S> {
    /// Load the book from `store`.
    ///
    /// Entries the store could not read are returned next to the session; the
    /// load itself only fails on I/O or decoding errors.
    pub fn open(store: S) -> StoreResult<(Self, Vec<LoadRejection>)> {
        let report = store.load()?;
        let session = Self {
            book: report.book,
            store,
        };
        Ok((session, report.rejected))
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    /// Parse and run one input line.
    ///
    /// Command failures become a single error message; they never end the
    /// session.
    pub fn handle_line(&mut self, line: &str) -> CommandOutcome {
        let result =
            commands::parse(line).and_then(|command| commands::execute(&mut self.book, command));

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(error = %e, "Command failed");
                CommandOutcome::default().with_message(CommandMessage::error(e.to_string()))
            }
        }
    }

    /// Write the book back to the store.
    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.book)
    }
}

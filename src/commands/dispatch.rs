//! Command execution against the address book.

use super::{Command, CommandMessage, CommandOutcome};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};

pub const HELP_TEXT: &str = "\
1. 'Add' <name> <phone number> --> Adding a new contact to the contact dictionary.
2. 'Change' <name> <phone number> --> Stores in memory a new phone number for the username.
3. 'Phone' <name> --> Returns the name and phone number.
4. 'All' --> Return all saved contacts with phone numbers.
5. 'Delete' <name> --> Removes the contact.
6. 'Close' or 'Exit' --> Save contacts and exit the program.";

pub const EMPTY_BOOK: &str = "There are still no entries in your notebook. Try making one.";

/// Execute a parsed command.
///
/// # Errors
///
/// - `CommandError::Validation` when `add`/`change` gets an invalid phone; the
///   book is left untouched
/// - `CommandError::ContactNotFound` when `phone`/`delete` names an unknown
///   contact
pub fn execute(book: &mut AddressBook, command: Command) -> CommandResult<CommandOutcome> {
    tracing::debug!(?command, "Executing command");

    let outcome = CommandOutcome::default();
    let outcome = match command {
        Command::Hello => outcome.with_message(CommandMessage::info("How can I help you?")),
        Command::Help => outcome.with_message(CommandMessage::info(HELP_TEXT)),
        Command::Add { name, phone } => {
            book.add_record(Record::with_phone(&name, phone)?);
            outcome.with_message(CommandMessage::success("Contact added."))
        }
        Command::Change { name, phone } => {
            book.add_record(Record::with_phone(&name, phone)?);
            outcome.with_message(CommandMessage::success("Contact changed."))
        }
        Command::Phone { name } => {
            let record = book
                .find(&name)
                .ok_or(CommandError::ContactNotFound(name))?;
            outcome.with_message(CommandMessage::info(phone_line(record)))
        }
        Command::All => all(book, outcome),
        Command::Delete { name } => {
            book.delete(&name)
                .ok_or(CommandError::ContactNotFound(name))?;
            outcome.with_message(CommandMessage::success("Contact deleted."))
        }
        Command::Exit => outcome
            .with_message(CommandMessage::info("Good bye!"))
            .exiting(),
        Command::Unknown(_) => outcome.with_message(CommandMessage::warning(
            "Invalid command. Print 'Help' to see all commands.",
        )),
    };

    Ok(outcome)
}

fn all(book: &AddressBook, mut outcome: CommandOutcome) -> CommandOutcome {
    if book.is_empty() {
        outcome.add_message(CommandMessage::info(EMPTY_BOOK));
        return outcome;
    }

    for record in book.iter() {
        outcome.add_message(CommandMessage::info(phone_line(record)));
    }
    outcome
}

/// `"<Name>'s phone number is <phones>"`, sentence-capitalized.
fn phone_line(record: &Record) -> String {
    if record.phones().is_empty() {
        return capitalize(&format!(
            "{} has no phone numbers yet",
            record.name().as_str()
        ));
    }
    capitalize(&format!(
        "{}'s phone number is {}",
        record.name().as_str(),
        record.phones_display()
    ))
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

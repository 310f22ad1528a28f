//! # Command Layer
//!
//! Turns a line typed at the prompt into a [`Command`] and executes it against
//! an [`AddressBook`](crate::models::AddressBook).
//!
//! Nothing here prints. Execution returns a [`CommandOutcome`] holding the
//! messages to show and whether the session should end; failures come back as
//! [`CommandError`](crate::error::CommandError) values for the presenter to
//! render.

pub mod dispatch;
pub mod parser;

pub use dispatch::execute;
pub use parser::parse;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    /// Create or replace a contact with a single phone
    Add { name: String, phone: String },
    /// Same as `Add`, reported as a change
    Change { name: String, phone: String },
    /// Look up the phones of one contact
    Phone { name: String },
    All,
    Delete { name: String },
    Exit,
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CommandMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub messages: Vec<CommandMessage>,
    /// The session should end (and the book be saved)
    pub exit: bool,
}

impl CommandOutcome {
    pub fn add_message(&mut self, message: CommandMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CommandMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn exiting(mut self) -> Self {
        self.exit = true;
        self
    }
}

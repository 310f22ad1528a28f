//! REPL (Read-Eval-Print Loop) for the contact book

use crate::commands::CommandMessage;
use crate::error::ReplError;
use crate::session::Session;
use crate::storage::ContactStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

const PROMPT: &str = "Enter a command: ";

/// Interactive contact book prompt
pub struct ContactRepl<S: ContactStore> {
    session: Session<S>,
    history_path: Option<PathBuf>,
}

impl<S: ContactStore> ContactRepl<S> {
    /// Create a new ContactRepl
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            history_path: None,
        }
    }

    /// Keep prompt history in the given file
    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL until the user exits, then save the book.
    pub fn run(mut self) -> Result<(), ReplError> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!("Welcome to the assistant bot!\nPrint 'Help' to see all commands.\n");

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    let outcome = self.session.handle_line(line);
                    print_messages(&outcome.messages);
                    if outcome.exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Good bye!");
                    break;
                }
                Err(err) => {
                    // Keep what the user entered so far before bailing out.
                    self.session.save()?;
                    return Err(err.into());
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        self.session.save()?;
        Ok(())
    }
}

fn print_messages(messages: &[CommandMessage]) {
    for message in messages {
        println!("{}", message.content);
    }
    println!();
}

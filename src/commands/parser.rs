//! Input line parsing.

use super::Command;
use crate::error::{CommandError, CommandResult};

pub const ADD_USAGE: &str = "Enter a valid command in this format --->>> <add> <name> <phone number>";
pub const CHANGE_USAGE: &str =
    "Enter a valid command in format --->>> <change> <name> <new phone number>";
pub const PHONE_USAGE: &str = "Enter a command in this format --->>> <phone> <name>";
pub const DELETE_USAGE: &str = "Enter a command in this format --->>> <delete> <name>";

const EXIT_PHRASE: &str = "good bye";

/// Parse one input line.
///
/// The first word picks the command, case-insensitively; the remaining
/// words are its arguments.
///
/// # Errors
///
/// Returns `CommandError::MalformedCommandArguments` with the command's usage
/// hint when the number of arguments is wrong.
pub fn parse(line: &str) -> CommandResult<Command> {
    let line = line.trim();
    if line.to_lowercase() == EXIT_PHRASE {
        return Ok(Command::Exit);
    }

    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(Command::Unknown(String::new()));
    };
    let args: Vec<&str> = words.collect();

    let command = match word.to_lowercase().as_str() {
        "hello" => Command::Hello,
        "help" => Command::Help,
        "add" => {
            let (name, phone) = name_and_phone(&args, ADD_USAGE)?;
            Command::Add { name, phone }
        }
        "change" => {
            let (name, phone) = name_and_phone(&args, CHANGE_USAGE)?;
            Command::Change { name, phone }
        }
        "phone" => Command::Phone {
            name: first_arg(&args, PHONE_USAGE)?,
        },
        "all" => Command::All,
        "delete" => Command::Delete {
            name: first_arg(&args, DELETE_USAGE)?,
        },
        "close" | "exit" => Command::Exit,
        _ => Command::Unknown(word.to_string()),
    };

    Ok(command)
}

fn name_and_phone(args: &[&str], usage: &str) -> CommandResult<(String, String)> {
    match args {
        [name, phone] => Ok((name.to_string(), phone.to_string())),
        _ => Err(CommandError::MalformedCommandArguments(usage.to_string())),
    }
}

fn first_arg(args: &[&str], usage: &str) -> CommandResult<String> {
    args.first()
        .map(|name| name.to_string())
        .ok_or_else(|| CommandError::MalformedCommandArguments(usage.to_string()))
}

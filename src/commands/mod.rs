//! Command layer for the interactive contact bot.
//!
//! Thin glue between user input and the address book: parsing a line into a
//! command and arguments, dispatching to a handler, and the static help
//! text. Handlers return either a display string or a typed
//! [`CommandError`](crate::error::CommandError); rendering errors to text is
//! the caller's job (see `main.rs`). No validation or date logic lives here.

pub mod handlers;

use crate::book::AddressBook;
use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use chrono::Local;
use tracing::debug;

/// Split an input line into a lowercased command name and its arguments.
///
/// An empty or whitespace-only line yields an empty command name.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    let args = parts.map(str::to_string).collect();
    (command, args)
}

/// Dispatch a parsed command to its handler.
///
/// Covers the commands that touch the address book; `hello`, `help` and
/// `close`/`exit` are pure REPL concerns handled before this function is
/// reached. The `birthdays` window starts at today's local date.
pub fn execute(
    command: &str,
    args: &[String],
    book: &mut AddressBook,
    config: &Config,
) -> CommandResult<String> {
    debug!(command = %command, args = ?args, "dispatching command");

    match command {
        "add" => handlers::add_contact(args, book),
        "change" => handlers::change_contact(args, book),
        "phone" => handlers::show_phone(args, book),
        "all" => handlers::show_all(book),
        "add-birthday" => handlers::add_birthday(args, book),
        "show-birthday" => handlers::show_birthday(args, book),
        "birthdays" => handlers::birthdays_on(
            book,
            Local::now().date_naive(),
            config.birthday_window_days,
        ),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Static help text listing every supported command.
pub fn help_text() -> &'static str {
    "Available commands:

  hello
    Get a greeting from the bot.
    Example: hello

  add [name] [phone]
    Add a new contact or another phone to an existing contact.
    The phone must consist of 10 digits.
    Example: add John 1234567890

  change [name] [old phone] [new phone]
    Replace a phone number of an existing contact.
    Example: change John 1234567890 0987654321

  phone [name]
    Show all phone numbers of the given contact.
    Example: phone John

  all
    Show every contact in the address book.
    Example: all

  add-birthday [name] [birthday]
    Set the birthday of the given contact.
    Date format: DD.MM.YYYY
    Example: add-birthday John 01.11.1990

  show-birthday [name]
    Show the birthday of the given contact.
    Example: show-birthday John

  birthdays
    Show the birthdays coming up within the next week.
    Example: birthdays

  help
    Show this list of commands.
    Example: help

  close or exit
    Quit the program.
    Example: exit"
}

//! Per-command handlers.
//!
//! Each handler takes the raw argument list and the address book and returns
//! a display string or a typed error. Handlers never print; the boundary in
//! `main.rs` renders both outcomes.

use crate::book::AddressBook;
use crate::error::{CommandError, CommandResult, NotFoundError};
use crate::models::Record;
use chrono::NaiveDate;

/// `add name phone` — create the contact if absent, then append the phone.
///
/// A brand-new record is only inserted after its first phone validates, so a
/// failed add leaves the book unchanged.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArguments("add [name] [phone]"));
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(name.as_str())?;
            record.add_phone(phone)?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change name old new` — replace one phone of an existing contact.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(CommandError::MissingArguments(
            "change [name] [old phone] [new phone]",
        ));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| NotFoundError::Contact(name.clone()))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone name` — list a contact's phones, joined by "; ".
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments("phone [name]"));
    };

    let record = book
        .find(name)
        .ok_or_else(|| NotFoundError::Contact(name.clone()))?;

    if record.phones().is_empty() {
        return Ok(format!("{} has no phone numbers.", name));
    }

    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Ok(format!("{}: {}", name, phones))
}

/// `all` — every record, one per line, in insertion order.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("The address book is empty.".to_string());
    }

    let lines = book
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(lines)
}

/// `add-birthday name date` — set (or overwrite) a contact's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(CommandError::MissingArguments(
            "add-birthday [name] [DD.MM.YYYY]",
        ));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| NotFoundError::Contact(name.clone()))?;
    record.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday name` — the contact's raw birthday string.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments("show-birthday [name]"));
    };

    let record = book
        .find(name)
        .ok_or_else(|| NotFoundError::Contact(name.clone()))?;

    match record.birthday() {
        Some(birthday) => Ok(format!("{}: {}", name, birthday)),
        None => Ok(format!("No birthday set for {}.", name)),
    }
}

/// `birthdays` — the upcoming-birthday list for a given reference date.
///
/// Split out from the dispatcher so tests can pin the reference date instead
/// of depending on the wall clock.
pub fn birthdays_on(
    book: &AddressBook,
    reference: NaiveDate,
    window_days: i64,
) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(reference, window_days);

    if upcoming.is_empty() {
        return Ok(format!(
            "No birthdays in the next {} days.",
            window_days
        ));
    }

    let lines = upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.congratulation_date))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(lines)
}

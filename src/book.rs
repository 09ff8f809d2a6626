//! Address book: the collection of all records, keyed by contact name.

use crate::error::NotFoundError;
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An upcoming-birthday entry: who to congratulate and on which date.
///
/// The congratulation date is the birthday itself unless it falls on a
/// weekend, in which case it is shifted forward to the following Monday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: String,

    /// Congratulation date formatted as DD.MM.YYYY
    pub congratulation_date: String,
}

/// An insertion-ordered collection of contact records.
///
/// Records are keyed by their name; the key of every entry matches its
/// record's name, and [`AddressBook::add_record`] is the only way that
/// invariant is maintained. Lookup is by exact name; iteration reproduces
/// insertion order, which is what `list all` renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Insert a record keyed by its name.
    ///
    /// If a record with the same name already exists it is replaced
    /// wholesale (last write wins, no merge) while keeping its original
    /// insertion position.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        debug!(name = %name, "adding record to address book");
        self.records.insert(name, record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record with this name.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::Contact` if the name is absent; the book is
    /// unchanged in that case.
    pub fn delete(&mut self, name: &str) -> Result<(), NotFoundError> {
        // shift_remove keeps the remaining entries in insertion order
        self.records
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| NotFoundError::Contact(name.to_string()))
    }

    /// Iterate over all records in insertion order.
    ///
    /// Each call starts a fresh iteration over the current state of the
    /// book.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collect the contacts whose birthday falls within `window_days` days
    /// of `reference`, with weekend-shifted congratulation dates.
    ///
    /// For every record with a birthday set, the birthday's month/day is
    /// projected onto the reference year; if that date has already passed,
    /// onto the next year instead. A projected date landing within
    /// `[0, window_days]` whole days of `reference` is included. Saturday
    /// birthdays are congratulated two days later, Sunday birthdays one day
    /// later, so both land on the following Monday. A February 29 birthday
    /// projected onto a non-leap year resolves to March 1.
    ///
    /// Entries come out in the book's iteration order, not sorted by date.
    pub fn upcoming_birthdays(&self, reference: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut this_year = birthday.in_year(reference.year());
            if this_year < reference {
                this_year = birthday.in_year(reference.year() + 1);
            }

            let days_until = (this_year - reference).num_days();
            if !(0..=window_days).contains(&days_until) {
                continue;
            }

            let congratulation = match this_year.weekday() {
                Weekday::Sat => this_year + Days::new(2),
                Weekday::Sun => this_year + Days::new(1),
                _ => this_year,
            };

            debug!(
                name = %record.name(),
                birthday = %this_year,
                congratulation = %congratulation,
                "birthday falls inside the window"
            );

            upcoming.push(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date: congratulation.format("%d.%m.%Y").to_string(),
            });
        }

        upcoming
    }
}

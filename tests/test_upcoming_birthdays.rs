//! Integration tests for the upcoming-birthday window computation.
//!
//! Reference date throughout is 2024-10-28, a Monday, unless a scenario
//! needs otherwise.

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 28).unwrap()
}

fn add_contact_with_birthday(book: &mut AddressBook, name: &str, birthday: &str) {
    let mut record = Record::new(name).unwrap();
    record.set_birthday(birthday).unwrap();
    book.add_record(record);
}

#[test]
fn test_weekday_birthday_keeps_its_date() {
    // 01.11.2024 is a Friday, 4 days from the reference Monday.
    let mut book = AddressBook::new();
    add_contact_with_birthday(&mut book, "John", "01.11.1990");

    let upcoming = book.upcoming_birthdays(reference(), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "John");
    assert_eq!(upcoming[0].congratulation_date, "01.11.2024");
}

#[test]
fn test_weekend_birthdays_shift_to_monday() {
    // 02.11.2024 is a Saturday, 03.11.2024 a Sunday; both congratulation
    // dates land on Monday 04.11.2024.
    let mut book = AddressBook::new();
    add_contact_with_birthday(&mut book, "Sam", "02.11.1985");
    add_contact_with_birthday(&mut book, "Ann", "03.11.1990");

    let upcoming = book.upcoming_birthdays(reference(), 7);
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].congratulation_date, "04.11.2024");
    assert_eq!(upcoming[1].congratulation_date, "04.11.2024");
}

#[test]
fn test_window_boundaries_are_inclusive() {
    let mut book = AddressBook::new();
    // Day 0: the reference date itself.
    add_contact_with_birthday(&mut book, "Today", "28.10.1970");
    // Day 7: exactly at the window edge (04.11.2024, a Monday).
    add_contact_with_birthday(&mut book, "Edge", "04.11.1970");
    // Day 8: one past the edge.
    add_contact_with_birthday(&mut book, "Past", "05.11.1970");

    let upcoming = book.upcoming_birthdays(reference(), 7);
    let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Today", "Edge"]);
}

#[test]
fn test_passed_birthday_moves_to_next_year() {
    let mut book = AddressBook::new();
    add_contact_with_birthday(&mut book, "Missed", "27.10.1990");

    // Next occurrence is 27.10.2025, far outside a 7-day window.
    assert!(book.upcoming_birthdays(reference(), 7).is_empty());

    // But a window long enough reaches it: 364 days ahead, and 27.10.2025
    // is a Monday, so no shift.
    let upcoming = book.upcoming_birthdays(reference(), 365);
    assert_eq!(upcoming[0].congratulation_date, "27.10.2025");
}

#[test]
fn test_year_wraparound_through_new_year() {
    // From Saturday 2024-12-28, a January 1 birthday is 4 days out.
    // 01.01.2025 is a Wednesday.
    let mut book = AddressBook::new();
    add_contact_with_birthday(&mut book, "Nina", "01.01.1993");

    let late_december = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
    let upcoming = book.upcoming_birthdays(late_december, 7);
    assert_eq!(upcoming[0].congratulation_date, "01.01.2025");
}

#[test]
fn test_feb29_policy_in_common_year() {
    // In 2025 (not a leap year) a Feb 29 birthday resolves to March 1,
    // which is a Saturday, so the congratulation shifts to Monday 03.03.
    let mut book = AddressBook::new();
    add_contact_with_birthday(&mut book, "Leap", "29.02.1992");

    let reference = NaiveDate::from_ymd_opt(2025, 2, 25).unwrap();
    let upcoming = book.upcoming_birthdays(reference, 7);
    assert_eq!(upcoming[0].congratulation_date, "03.03.2025");
}

#[test]
fn test_feb29_kept_in_leap_year() {
    // 29.02.2024 itself was a Thursday.
    let mut book = AddressBook::new();
    add_contact_with_birthday(&mut book, "Leap", "29.02.1992");

    let reference = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
    let upcoming = book.upcoming_birthdays(reference, 7);
    assert_eq!(upcoming[0].congratulation_date, "29.02.2024");
}

#[test]
fn test_contacts_without_birthdays_are_ignored() {
    let mut book = AddressBook::new();
    let mut no_birthday = Record::new("Quiet").unwrap();
    no_birthday.add_phone("1234567890").unwrap();
    book.add_record(no_birthday);

    assert!(book.upcoming_birthdays(reference(), 7).is_empty());
}

#[test]
fn test_output_order_matches_book_order() {
    let mut book = AddressBook::new();
    add_contact_with_birthday(&mut book, "Later", "03.11.1990");
    add_contact_with_birthday(&mut book, "Sooner", "29.10.1990");
    add_contact_with_birthday(&mut book, "Middle", "31.10.1990");

    let names: Vec<String> = book
        .upcoming_birthdays(reference(), 7)
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["Later", "Sooner", "Middle"]);
}

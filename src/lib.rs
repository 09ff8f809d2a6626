//! Contact Book - an interactive command-line contact manager.
//!
//! This library stores named contacts with validated 10-digit phone numbers
//! and an optional `DD.MM.YYYY` birthday, and answers questions like "whose
//! birthday is coming up this week" with weekend-shifted congratulation
//! dates.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the contact record built from those value objects
//! - **book**: the address book keyed by name, with the birthday-window query
//! - **commands**: thin command layer gluing user input to the book
//! - **error**: typed errors for validation and lookup failures
//! - **config**: configuration from environment variables
//!
//! The core (domain, models, book) does no I/O and produces no user-facing
//! text beyond `Display` on records; all printing and error rendering stays
//! in the command layer and the binary.

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use book::{AddressBook, UpcomingBirthday};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber};
pub use error::{CommandError, ConfigError, NotFoundError, ValidationError};
pub use models::Record;

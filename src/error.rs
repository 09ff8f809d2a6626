//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The core raises only `ValidationError` and `NotFoundError`; `CommandError` exists
//! at the command boundary and wraps both, plus the argument-count and unknown-command
//! failures that can only happen while parsing user input.

use thiserror::Error;

/// Errors raised when an input fails a format contract.
///
/// Always raised synchronously at construction or mutation time; a failed
/// validation never leaves a record partially mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Contact name is empty or whitespace-only
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// Phone number is not exactly 10 decimal digits
    #[error("Invalid phone number '{0}': must be exactly 10 digits")]
    InvalidPhone(String),

    /// Birthday string is not a real calendar date in DD.MM.YYYY format
    #[error("Invalid date '{0}': use DD.MM.YYYY")]
    InvalidDate(String),
}

/// Errors raised when a lookup key does not exist where the operation requires it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No record with this name in the address book
    #[error("Contact not found: {0}")]
    Contact(String),

    /// No phone in the record's sequence equals this value
    #[error("Phone number not found: {0}")]
    Phone(String),
}

/// Errors surfaced by command handlers.
///
/// The REPL renders these via `Display`; the core itself never produces
/// user-facing text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A core validation failure
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A core lookup failure
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Too few arguments for the command
    #[error("Not enough arguments. Usage: {0}")]
    MissingArguments(&'static str),

    /// Command name not in the dispatch table
    #[error("Invalid command: {0}")]
    UnknownCommand(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

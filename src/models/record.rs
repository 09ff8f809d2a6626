//! Contact record: one name, its phones, and an optional birthday.

use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::{NotFoundError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is set at creation and never changes afterwards; it doubles as
/// the record's key inside [`AddressBook`](crate::book::AddressBook). Phones
/// form an ordered sequence. Duplicate phone values are allowed: the record
/// neither prevents nor deduplicates them, so removal and editing act on the
/// first match only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with a validated name, no phones, no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty after
    /// trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Get the contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Get the phone sequence in stored order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Get the birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Appends even if an equal value is already present.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is not exactly
    /// 10 digits; the sequence is unchanged in that case.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::Phone` if no phone matches; the sequence is
    /// unchanged in that case.
    pub fn remove_phone(&mut self, phone: &str) -> Result<(), NotFoundError> {
        let position = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| NotFoundError::Phone(phone.to_string()))?;
        self.phones.remove(position);
        Ok(())
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`,
    /// preserving its position.
    ///
    /// The lookup happens before the new value is validated, and the slot is
    /// only written once validation succeeds, so a failed edit leaves the
    /// sequence byte-for-byte unchanged.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::Phone` if `old_phone` is absent, or
    /// `ValidationError::InvalidPhone` (wrapped in [`EditPhoneError`]) if
    /// `new_phone` is malformed.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> Result<(), EditPhoneError> {
        let position = self
            .phones
            .iter()
            .position(|p| p.as_str() == old_phone)
            .ok_or_else(|| EditPhoneError::NotFound(NotFoundError::Phone(old_phone.to_string())))?;
        let new_phone = PhoneNumber::new(new_phone).map_err(EditPhoneError::Validation)?;
        self.phones[position] = new_phone;
        Ok(())
    }

    /// Find the first phone equal to `phone`, without side effects.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, overwriting any existing one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the value is not a real
    /// `DD.MM.YYYY` date; the existing birthday is kept in that case.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

/// Failure modes of [`Record::edit_phone`], which can miss the old value or
/// reject the new one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditPhoneError {
    /// The old phone value is not in the sequence
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The replacement value is malformed
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<EditPhoneError> for crate::error::CommandError {
    fn from(err: EditPhoneError) -> Self {
        match err {
            EditPhoneError::NotFound(e) => Self::NotFound(e),
            EditPhoneError::Validation(e) => Self::Validation(e),
        }
    }
}

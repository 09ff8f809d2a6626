//! Birthday value object.

use crate::error::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Anchored DD.MM.YYYY pattern: two-digit day, two-digit month, four-digit year.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").unwrap());

/// A type-safe wrapper for birthdays.
///
/// The input must match the exact `DD.MM.YYYY` pattern and denote a real
/// calendar date, so `32.13.2000` and `29.02.2001` (not a leap year) are
/// rejected at construction. Both the original string and the parsed date
/// are stored: the string for display, the date for arithmetic.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("01.11.1990").unwrap();
/// assert_eq!(birthday.as_str(), "01.11.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format and the calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string does not match
    /// `DD.MM.YYYY` or the day/month/year combination is not a valid date.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        let caps = DATE_PATTERN
            .captures(&raw)
            .ok_or_else(|| ValidationError::InvalidDate(raw.clone()))?;

        // The pattern guarantees these are short digit strings, so parsing
        // cannot fail; only the calendar check below can.
        let day: u32 = caps[1].parse().unwrap_or_default();
        let month: u32 = caps[2].parse().unwrap_or_default();
        let year: i32 = caps[3].parse().unwrap_or_default();

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ValidationError::InvalidDate(raw.clone()))?;

        Ok(Self { raw, date })
    }

    /// Get the original `DD.MM.YYYY` string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Project the birthday's month/day onto another year.
    ///
    /// A February 29 birthday projected onto a non-leap year resolves to
    /// March 1 of that year.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 always exists"))
    }
}

// Serde support - serialize as the original string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("01.11.1990").unwrap();
        assert_eq!(birthday.as_str(), "01.11.1990");
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 11, 1).unwrap()
        );
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("32.13.2000").is_err());
        assert!(Birthday::new("31.04.2000").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("30.02.1999").is_err());
    }

    #[test]
    fn test_birthday_leap_year_handling() {
        assert!(Birthday::new("29.02.2000").is_ok());
        assert!(Birthday::new("29.02.2001").is_err());
    }

    #[test]
    fn test_birthday_rejects_wrong_pattern() {
        assert!(Birthday::new("1.11.1990").is_err());
        assert!(Birthday::new("01/11/1990").is_err());
        assert!(Birthday::new("1990.11.01").is_err());
        assert!(Birthday::new("01.11.90").is_err());
        assert!(Birthday::new("01.11.1990 ").is_err());
        assert!(Birthday::new("").is_err());
    }

    #[test]
    fn test_birthday_projection() {
        let birthday = Birthday::new("01.11.1990").unwrap();
        assert_eq!(
            birthday.in_year(2024),
            NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()
        );
    }

    #[test]
    fn test_birthday_feb29_projects_to_mar1_in_common_year() {
        let birthday = Birthday::new("29.02.1992").unwrap();
        assert_eq!(
            birthday.in_year(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            birthday.in_year(2025),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("05.11.1985").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"05.11.1985\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"29.02.2001\"");
        assert!(result.is_err());
    }
}

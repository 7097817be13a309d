//! Birthday value object and anniversary arithmetic.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted textual form of a birthday (`DD.MM.YYYY`).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono's `%Y` takes any digit count and a sign, so pin the shape first
static BIRTHDAY_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A validated calendar date of birth.
///
/// Input is parsed as `DD.MM.YYYY`; the rendered form is always zero-padded
/// `DD.MM.YYYY`, so `1.6.1990` is shown back as `01.06.1990`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// assert!(Birthday::new("1990-06-15").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the text does not parse
    /// or names a date that does not exist (e.g. `31.02.1990`).
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let trimmed = raw.trim();
        if !BIRTHDAY_SHAPE_REGEX.is_match(trimmed) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// The stored date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// 29 February is observed on 28 February when `year` is not a leap year.
    pub fn anniversary_in(&self, year: i32) -> NaiveDate {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
            .unwrap_or(self.0)
    }

    /// First anniversary falling on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(today.year());
        if this_year < today {
            self.anniversary_in(today.year() + 1)
        } else {
            this_year
        }
    }

    /// Whole days from `today` until the next anniversary (0 means today).
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

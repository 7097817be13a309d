//! Record model: one person's entry in the address book.

use crate::domain::{Birthday, ContactName, Phone, ValidationError};
use serde::Serialize;
use std::fmt;

/// Outcome of replacing a phone number on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneEdit {
    /// The old number was found and replaced.
    Updated,
    /// No phone with the old value exists; the record is unchanged.
    NotFound,
}

/// A contact in the address book.
///
/// Phones keep insertion order and duplicates are allowed. At most one
/// birthday is stored; setting it again overwrites the previous value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    name: ContactName,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is only validated once `old` has been found, so a missing `old`
    /// always reports [`PhoneEdit::NotFound`].
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<PhoneEdit, ValidationError> {
        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(index) => {
                self.phones[index] = Phone::new(new)?;
                Ok(PhoneEdit::Updated)
            }
            None => Ok(PhoneEdit::NotFound),
        }
    }

    /// Set (or overwrite) the birthday.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// The birthday, or `None` when it was never set.
    pub fn show_birthday(&self) -> Option<&Birthday> {
        self.birthday()
    }

    /// Phones joined with `", "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, Birthday: ", self.name, self.phones_display())?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "N/A"),
        }
    }
}

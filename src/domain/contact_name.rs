//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The name a record is filed under.
///
/// Names are compared exactly (case-sensitive) and cannot be changed once a
/// record exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_name_valid() {
        let name = ContactName::new("Bob").unwrap();
        assert_eq!(name.as_str(), "Bob");
        assert_eq!(format!("{}", name), "Bob");
    }

    #[test]
    fn test_contact_name_rejects_blank() {
        assert_eq!(ContactName::new(""), Err(ValidationError::EmptyName));
        assert_eq!(ContactName::new("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_contact_name_is_case_sensitive() {
        assert_ne!(
            ContactName::new("bob").unwrap(),
            ContactName::new("Bob").unwrap()
        );
    }
}

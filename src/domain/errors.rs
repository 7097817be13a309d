//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday does not parse as `DD.MM.YYYY`.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty."),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number '{}': use exactly 10 digits.", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date '{}': use DD.MM.YYYY.", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::InvalidPhone("123".to_string()).to_string(),
            "Invalid phone number '123': use exactly 10 digits."
        );
        assert_eq!(
            ValidationError::InvalidBirthday("1990-06-15".to_string()).to_string(),
            "Invalid date '1990-06-15': use DD.MM.YYYY."
        );
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Contact name cannot be empty."
        );
    }
}

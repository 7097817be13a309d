//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror`. Every variant of
//! [`CommandError`] renders as the single line shown to the user in place of a
//! command's normal reply.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a single command invocation can report.
///
/// None of these are fatal: the interpreter prints them and keeps reading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field failed validation
    #[error("Error: {0}")]
    Validation(#[from] ValidationError),

    /// No record with this name
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// The record has no phone with the given value
    #[error("Phone not found.")]
    PhoneNotFound { name: String, phone: String },

    /// Too few positional arguments
    #[error("Error: '{command}' expects: {usage}")]
    MissingArguments {
        command: String,
        usage: &'static str,
    },

    /// A day count that is not a positive integer
    #[error("Error: Invalid day count '{0}'.")]
    InvalidDayCount(String),

    /// The line could not be decoded as UTF-8
    #[error("Error: Input is not valid UTF-8.")]
    InvalidInput,

    /// The line held nothing but whitespace
    #[error("Please enter a command.")]
    EmptyInput,

    /// The command word is not recognised
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// Rendering the export failed
    #[error("Error: export failed: {0}")]
    Export(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for a command's reply or error
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::ContactNotFound("Unknown".to_string());
        assert_eq!(err.to_string(), "Contact Unknown not found.");

        let err = CommandError::UnknownCommand("fly".to_string());
        assert_eq!(err.to_string(), "Invalid command.");

        let err = CommandError::MissingArguments {
            command: "phone".to_string(),
            usage: "phone <name>",
        };
        assert_eq!(err.to_string(), "Error: 'phone' expects: phone <name>");

        let err = ConfigError::InvalidValue {
            var: "CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS: Must be at least 1"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: CommandError = ValidationError::InvalidPhone("12".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Error: Invalid phone number '12': use exactly 10 digits."
        );
    }
}

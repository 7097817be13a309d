//! Configuration management for the contact book.
//!
//! Settings come from environment variables (optionally via a `.env` file).
//! Command-line flags parsed in `main` override them. Configuration never
//! carries contact data; the address book lives only for one run.

use crate::book::DEFAULT_UPCOMING_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default interactive prompt.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Runtime configuration for the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Window used by `birthdays` when no day count is given (default: 7)
    pub birthday_window_days: u32,

    /// Prompt printed before each line is read
    pub prompt: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS`: upcoming-birthday window (default: 7)
    /// - `CONTACT_BOOK_PROMPT`: interactive prompt (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_u32(
            "CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS",
            DEFAULT_UPCOMING_WINDOW_DAYS,
        )?;
        Self::validate_window("CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS", birthday_window_days)?;

        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            prompt,
            log_level,
        })
    }

    /// Replace the birthday window, rejecting zero.
    pub fn with_birthday_window(mut self, days: u32) -> ConfigResult<Self> {
        Self::validate_window("--window-days", days)?;
        self.birthday_window_days = days;
        Ok(self)
    }

    fn validate_window(var: &str, days: u32) -> ConfigResult<()> {
        if days == 0 {
            return Err(ConfigError::InvalidValue {
                var: var.to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.prompt, "Enter a command: ");
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let mut guard = EnvGuard::new();
        guard.unset("CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS");
        guard.unset("CONTACT_BOOK_PROMPT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS", "30");
        guard.set("CONTACT_BOOK_PROMPT", "> ");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 30);
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_window() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS", "a week");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_zero_window() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS", "0");

        assert!(Config::from_env().is_err());
    }

    #[test]
    fn test_with_birthday_window() {
        let config = Config::default().with_birthday_window(14).unwrap();
        assert_eq!(config.birthday_window_days, 14);
        assert!(Config::default().with_birthday_window(0).is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "-3");

        let result = Config::parse_env_u32("TEST_U32_INVALID", 7);
        assert!(result.is_err());

        let result = Config::parse_env_u32("NONEXISTENT_U32", 7);
        assert_eq!(result.unwrap(), 7);
    }
}

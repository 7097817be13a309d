//! Contact Book - an interactive assistant for keeping contacts in memory.
//!
//! The library holds the whole contact model and command set so it can be
//! driven by the `contact-book` binary or by tests with scripted input.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (names, phones, birthdays)
//! - **models**: The contact record
//! - **book**: The address book and the upcoming-birthdays query
//! - **commands**: Input tokenizing and command handlers
//! - **repl**: The read-dispatch-print loop
//! - **clock**: Source of today's date
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, DEFAULT_UPCOMING_WINDOW_DAYS};
pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{parse_input, Command};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError};
pub use models::{PhoneEdit, Record};
pub use repl::{Outcome, Session, SessionState, SessionStats};

//! Command parsing and handling.
//!
//! Lines are tokenized by [`parse_input`] into a [`Command`] plus positional
//! arguments, and each command is answered by a handler in [`handlers`].

pub mod handlers;
mod parser;

pub use parser::{parse_input, Command};

//! Data models for address book entries.

pub mod record;

pub use record::{PhoneEdit, Record};

//! The address book: every record, keyed by name.

mod address_book;

pub use address_book::{AddressBook, DEFAULT_UPCOMING_WINDOW_DAYS};

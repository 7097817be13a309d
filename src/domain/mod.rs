//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers, and birthdays. These value objects validate at
//! construction time so an invalid field can never be stored in a record.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::Phone;

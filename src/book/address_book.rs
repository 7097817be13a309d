//! In-memory address book keyed by contact name.

use crate::clock::{Clock, SystemClock};
use crate::domain::{ContactName, ValidationError};
use crate::models::Record;
use chrono::NaiveDate;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Default size of the upcoming-birthdays window, in days.
pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 7;

/// All records, keyed by exact name and kept in insertion order.
///
/// Two records can never share a name: inserting a record under an existing
/// name replaces the old one in place. Nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key, record).is_some() {
            tracing::debug!("Replaced existing record");
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Fetch the record for `name`, creating an empty one if it is unknown.
    pub fn get_or_insert(&mut self, name: &str) -> Result<&mut Record, ValidationError> {
        match self.records.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let record = Record::new(ContactName::new(name)?);
                tracing::debug!(name = %name, "Creating new record");
                Ok(entry.insert(record))
            }
        }
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose next birthday is fewer than `days` days after `today`.
    ///
    /// The window is half-open: a birthday today is 0 days away and included,
    /// a birthday exactly `days` days away is excluded. Records without a
    /// birthday never match. Results follow insertion order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<&Record> {
        let days = i64::from(days);
        self.records
            .values()
            .filter(|record| {
                record
                    .birthday()
                    .is_some_and(|birthday| (0..days).contains(&birthday.days_until(today)))
            })
            .collect()
    }

    /// [`upcoming_birthdays`](Self::upcoming_birthdays) against the system clock.
    pub fn get_upcoming_birthdays(&self, days: u32) -> Vec<&Record> {
        self.upcoming_birthdays(SystemClock.today(), days)
    }
}

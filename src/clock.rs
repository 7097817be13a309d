//! Source of "today" for date-relative queries.

use chrono::NaiveDate;

/// Provides the current calendar date.
///
/// The interpreter asks its clock instead of reading the system time
/// directly so birthday windows can be checked against a pinned date.
pub trait Clock {
    /// Today's date in the local timezone.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock that always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

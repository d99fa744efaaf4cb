//! The current date, as seen by invariant checks and derived fields.

use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The current calendar year in the local timezone.
pub fn current_year() -> i32 {
    today().year()
}

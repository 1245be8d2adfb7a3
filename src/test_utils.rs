//! Shared constructors for unit tests.

use crate::{DateParts, Locale, MonthLabels};
use chrono::NaiveDate;

pub fn parts(year: i32, month: u8) -> DateParts {
    DateParts::from_numbers(year, month).expect("test month must be 1-12")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must exist")
}

pub fn en_us_labels() -> MonthLabels {
    MonthLabels::new(Locale::en_US)
}

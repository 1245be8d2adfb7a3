mod consts;
mod convert;
mod locale;
mod mask;
mod normalize;
mod prelude;
mod range;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use convert::{
    DateInput, add_months, get_date_from_parts, get_date_parts, get_normalized_date, is_valid_date,
    parse_month_year,
};
pub use locale::{LocaleError, MonthLabels, default_locale, get_month_names, month_names_for, resolve_locale};
pub use mask::{FormatToken, format_date_parts, format_date_parts_in_locale};
pub use normalize::{normalize_month_year_string, pad, pad_option};
pub use range::{DateRange, DateSelection, is_valid_range};
pub use types::{Month, MonthNameLength};

pub use chrono::Locale;

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A calendar month: year plus 1-based month.
///
/// The year is not range checked; conversions to a calendar date return
/// `None` where chrono cannot represent it. `Display` output parses back
/// through `FromStr` for every year chrono can represent, negative included.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}", "year", "month.get()")]
pub struct DateParts {
    pub year:  i32,
    pub month: Month,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl DateParts {
    /// Creates parts from an already validated month
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Creates parts from a raw month number
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if `month` is not in `1..=12`.
    pub fn from_numbers(year: i32, month: u8) -> Result<Self, ParseError> {
        Ok(Self::new(year, Month::new(month)?))
    }

    /// Months since year 0, January being 0
    fn month_ordinal(self) -> i64 {
        i64::from(self.year) * MONTHS_PER_YEAR + i64::from(self.month.get() - JANUARY)
    }

    /// Moves by `count` months, carrying into the year.
    /// Returns `None` if the year leaves the `i32` range.
    pub fn checked_add_months(self, count: i32) -> Option<Self> {
        let ordinal = self.month_ordinal() + i64::from(count);
        let year = i32::try_from(ordinal.div_euclid(MONTHS_PER_YEAR)).ok()?;
        Some(Self::new(year, Month::from_index(ordinal)))
    }

    /// The following month
    pub fn next(self) -> Option<Self> {
        self.checked_add_months(1)
    }

    /// The preceding month
    pub fn prev(self) -> Option<Self> {
        self.checked_add_months(-1)
    }

    /// First day of this month, if chrono can represent it
    pub fn first_day(self) -> Option<NaiveDate> {
        get_date_from_parts(self)
    }

    /// Renders through a mask such as `MMM YYYY`
    pub fn format(&self, mask: &str, labels: &MonthLabels) -> String {
        format_date_parts(self, mask, labels)
    }
}

impl From<NaiveDate> for DateParts {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), Month::of(&date))
    }
}

impl TryFrom<(i32, u8)> for DateParts {
    type Error = ParseError;

    fn try_from((year, month): (i32, u8)) -> Result<Self, Self::Error> {
        Self::from_numbers(year, month)
    }
}

impl FromStr for DateParts {
    type Err = ParseError;

    /// Accepts anything [`parse_month_year`] does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        parse_month_year(trimmed).ok_or_else(|| ParseError::InvalidFormat(s.to_owned()))
    }
}

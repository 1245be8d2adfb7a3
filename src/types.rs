use crate::ParseError;
use crate::consts::{JANUARY, MAX_MONTH, MONTHS_PER_YEAR};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Month of a calendar date. Infallible since chrono already keeps it in range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self(NonZeroU8::MIN.saturating_add(date.month0() as u8))
    }

    /// Builds a month from a zero-based index, wrapping into `0..12`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn from_index(index: i64) -> Self {
        Self(NonZeroU8::MIN.saturating_add(index.rem_euclid(MONTHS_PER_YEAR) as u8))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position of the month, for indexing month name tables
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - JANUARY) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which form of month name to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthNameLength {
    /// Abbreviated name, e.g. `Jan`
    Short,
    /// Full name, e.g. `January`
    Long,
}

impl MonthNameLength {
    /// strftime specifier producing this form
    pub(crate) const fn strftime(self) -> &'static str {
        match self {
            Self::Short => "%b",
            Self::Long => "%B",
        }
    }
}

//! Conversions between calendar dates, loose date input and [`DateParts`].

use crate::consts::{JANUARY, MIDNIGHT_SUFFIX, MIN_DAY};
use crate::normalize::normalize_month_year_string;
use crate::prelude::*;
use crate::{DateParts, Month};
use chrono::{DateTime, Local, Months, NaiveDate, NaiveDateTime, TimeZone};

/// Anything the conversion functions accept as "a date".
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum DateInput {
    /// A calendar date
    Date(NaiveDate),
    /// A date and time; the time is discarded
    DateTime(NaiveDateTime),
    /// Milliseconds since the Unix epoch, read in the local time zone
    Timestamp(i64),
    /// Date text, e.g. `2018-10-31`, `2019-03` or `jan 2000`
    Text(String),
    /// No value
    #[from(ignore)]
    Empty,
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl<T: Into<Self>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y/%m/%dT%H:%M:%S"];
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn has_time_component(text: &str) -> bool {
    text.contains(':')
        || text
            .as_bytes()
            .windows(3)
            .any(|w| w[0].is_ascii_digit() && w[1] == b'T' && w[2].is_ascii_digit())
}

/// Date-only text, read as local midnight.
fn parse_calendar_text(text: &str) -> Option<NaiveDate> {
    let with_midnight = format!("{text}{MIDNIGHT_SUFFIX}");
    if let Some(dt) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&with_midnight, fmt).ok())
    {
        return Some(dt.date());
    }
    parse_year_month(text)
        .or_else(|| parse_named_month(text))
        .and_then(get_date_from_parts)
}

/// `YYYY-MM` or a bare `YYYY` (January). Negative years keep their sign,
/// as [`DateParts`] displays them (`-005-03`).
fn parse_year_month(text: &str) -> Option<DateParts> {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (digits, month) = match unsigned.split_once('-') {
        Some((digits, month)) => (digits, Some(month)),
        None => (unsigned, None),
    };
    if sign.len() + digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = format!("{sign}{digits}").parse().ok()?;
    let month = match month {
        Some(m) if m.len() == 2 => Month::new(m.parse().ok()?).ok()?,
        Some(_) => return None,
        None => Month::new(JANUARY).ok()?,
    };
    Some(DateParts::new(year, month))
}

/// `<month name> <year>`, e.g. `jan 2000` or `September 1999`.
fn parse_named_month(text: &str) -> Option<DateParts> {
    let mut words = text.split_whitespace();
    let (name, year, None) = (words.next()?, words.next()?, words.next()) else {
        return None;
    };
    let month = name.trim_end_matches([',', '.']).parse::<chrono::Month>().ok()?;
    let year: i32 = year.parse().ok()?;
    Some(DateParts::new(year, Month::from_index(i64::from(month.number_from_month()) - 1)))
}

fn parse_date_time_text(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
}

fn parse_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let parsed = if has_time_component(text) {
        parse_date_time_text(text)
    } else {
        parse_calendar_text(text)
    };
    if parsed.is_none() {
        tracing::trace!(text, "unparseable date text");
    }
    parsed
}

/// Resolves `input` to a calendar date with the time of day dropped.
///
/// Returns `None` for empty or unparseable input, and for timestamps outside
/// chrono's range.
pub fn get_normalized_date(input: impl Into<DateInput>) -> Option<NaiveDate> {
    match input.into() {
        DateInput::Date(date) => Some(date),
        DateInput::DateTime(dt) => Some(dt.date()),
        DateInput::Timestamp(millis) => Local
            .timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.date_naive()),
        DateInput::Text(text) => parse_text(&text),
        DateInput::Empty => None,
    }
}

/// Whether `input` resolves to a real date.
pub fn is_valid_date(input: impl Into<DateInput>) -> bool {
    get_normalized_date(input).is_some()
}

/// Year and 1-based month of `input`.
pub fn get_date_parts(input: impl Into<DateInput>) -> Option<DateParts> {
    get_normalized_date(input).map(DateParts::from)
}

/// First day of the month described by `parts`.
///
/// `None` when the year is outside chrono's supported range.
pub fn get_date_from_parts(parts: DateParts) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(parts.year, u32::from(parts.month.get()), MIN_DAY)
}

/// Moves `date` by `count` months; negative counts go backwards.
///
/// Days past the end of the target month clamp to its last day
/// (Jan 31 + 1 month is Feb 28 or 29).
pub fn add_months(date: NaiveDate, count: i32) -> Option<NaiveDate> {
    let months = Months::new(count.unsigned_abs());
    if count >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Parses loose month-year text such as `3/2019`, `2019.1` or `jan 2000`.
///
/// Numeric input goes through [`normalize_month_year_string`] first, so
/// month-first and year-first orders both work.
pub fn parse_month_year(value: &str) -> Option<DateParts> {
    let normalized = normalize_month_year_string(value.trim())?;
    get_date_parts(normalized)
}

//! Mask-based formatting of [`DateParts`].
//!
//! A mask mixes tokens with literal text, e.g. `MMM YYYY` or `'Period' MM/YY`.
//! Month and year tokens are rendered; day, weekday, time and zone tokens are
//! recognized by the tokenizer so they are never split into month tokens, but
//! have no formatter yet and are written out unchanged. Quoted runs are
//! emitted without their quotes.

use crate::consts::{DEFAULT_PAD_CHAR, DEFAULT_PAD_WIDTH, SHORT_YEAR_OFFSET, YEAR_WIDTH};
use crate::locale::{LocaleError, MonthLabels};
use crate::normalize::pad;
use crate::types::MonthNameLength;
use crate::DateParts;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// Literal pattern; compiled on first use by every formatting test.
#[allow(clippy::expect_used)]
static TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"Do|D{1,4}|d{1,4}|M{1,4}|YYYY|YY|S{1,3}|ZZ|Z|HH?|hh?|mm?|ss?|[aA]|"[^"]*"|'[^']*'"#,
    )
    .expect("mask token pattern is valid")
});

/// A mask token with a formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatToken {
    /// `M`: month number, `5`
    Month,
    /// `MM`: zero-padded month number, `05`
    MonthPadded,
    /// `MMM`: short month name, `May`
    MonthShort,
    /// `MMMM`: long month name, `May`
    MonthLong,
    /// `YY`: year string from its third character on, `2023` -> `23`
    YearShort,
    /// `YYYY`: year padded to four digits
    YearFull,
}

impl FormatToken {
    /// The formatter for `token`, if one is registered.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "M" => Some(Self::Month),
            "MM" => Some(Self::MonthPadded),
            "MMM" => Some(Self::MonthShort),
            "MMMM" => Some(Self::MonthLong),
            "YY" => Some(Self::YearShort),
            "YYYY" => Some(Self::YearFull),
            _ => None,
        }
    }

    /// Renders this token for `parts`.
    pub fn format(self, parts: &DateParts, labels: &MonthLabels) -> String {
        match self {
            Self::Month => parts.month.to_string(),
            Self::MonthPadded => pad(parts.month, DEFAULT_PAD_WIDTH, DEFAULT_PAD_CHAR),
            Self::MonthShort => labels.names(MonthNameLength::Short)[parts.month.index()].clone(),
            Self::MonthLong => labels.names(MonthNameLength::Long)[parts.month.index()].clone(),
            // Substring, not modulo: year 5 renders as "".
            Self::YearShort => parts.year.to_string().chars().skip(SHORT_YEAR_OFFSET).collect(),
            Self::YearFull => pad(parts.year, YEAR_WIDTH, DEFAULT_PAD_CHAR),
        }
    }
}

fn render_match(caps: &Captures<'_>, parts: &DateParts, labels: &MonthLabels) -> String {
    let token = &caps[0];
    if let Some(flag) = FormatToken::parse(token) {
        return flag.format(parts, labels);
    }
    let quoted = (token.starts_with('\'') && token.ends_with('\''))
        || (token.starts_with('"') && token.ends_with('"'));
    if quoted && token.len() >= 2 {
        return token[1..token.len() - 1].to_owned();
    }
    token.to_owned()
}

/// Renders `parts` through `mask`, taking month names from `labels`.
pub fn format_date_parts(parts: &DateParts, mask: &str, labels: &MonthLabels) -> String {
    TOKENS
        .replace_all(mask, |caps: &Captures<'_>| render_match(caps, parts, labels))
        .into_owned()
}

/// [`format_date_parts`] with month names from `locale` (or the runtime default).
///
/// # Errors
/// Returns `LocaleError::UnknownLocale` for identifiers with no locale data.
pub fn format_date_parts_in_locale(
    parts: &DateParts,
    mask: &str,
    locale: Option<&str>,
) -> Result<String, LocaleError> {
    let labels = MonthLabels::for_locale(locale)?;
    Ok(format_date_parts(parts, mask, &labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{en_us_labels, parts};

    #[test]
    fn test_format_cases() {
        struct TestCase {
            year:     i32,
            month:    u8,
            mask:     &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase { year: 2023, month: 5, mask: "MMM YYYY", expected: "May 2023" },
            TestCase { year: 2023, month: 5, mask: "M YYYY", expected: "5 2023" },
            TestCase { year: 2023, month: 3, mask: "MMMM YY", expected: "March 23" },
            TestCase { year: 2023, month: 3, mask: "MM/YY", expected: "03/23" },
            TestCase { year: 2023, month: 11, mask: "YYYY-MM", expected: "2023-11" },
            TestCase { year: 2023, month: 9, mask: "MMMMYYYY", expected: "September2023" },
            TestCase { year: 987, month: 1, mask: "YYYY", expected: "0987" },
            TestCase { year: 12345, month: 1, mask: "YYYY", expected: "12345" },
        ];

        let labels = en_us_labels();
        for case in &cases {
            let p = parts(case.year, case.month);
            assert_eq!(
                format_date_parts(&p, case.mask, &labels),
                case.expected,
                "mask {:?} for {p}",
                case.mask
            );
        }
    }

    #[test]
    fn test_short_year_is_substring() {
        let labels = en_us_labels();
        assert_eq!(format_date_parts(&parts(1999, 1), "YY", &labels), "99");
        assert_eq!(format_date_parts(&parts(5, 1), "YY", &labels), "");
        assert_eq!(format_date_parts(&parts(123, 1), "YY", &labels), "3");
        assert_eq!(format_date_parts(&parts(12345, 1), "YY", &labels), "345");
    }

    #[test]
    fn test_quoted_literals_are_unwrapped() {
        let labels = en_us_labels();
        let p = parts(2023, 5);
        assert_eq!(format_date_parts(&p, "'Month' M", &labels), "Month 5");
        assert_eq!(format_date_parts(&p, r#"MMM "of" YYYY"#, &labels), "May of 2023");
    }

    #[test]
    fn test_reserved_tokens_pass_through() {
        let labels = en_us_labels();
        let p = parts(2023, 5);
        assert_eq!(format_date_parts(&p, "DD MMM YYYY", &labels), "DD May 2023");
        assert_eq!(format_date_parts(&p, "dddd, MMMM", &labels), "dddd, May");
        assert_eq!(format_date_parts(&p, "HH:mm", &labels), "HH:mm");
    }

    #[test]
    fn test_literal_text_is_kept() {
        let labels = en_us_labels();
        assert_eq!(format_date_parts(&parts(2023, 5), "[MM] - (YYYY)", &labels), "[05] - (2023)");
        assert_eq!(format_date_parts(&parts(2023, 5), "", &labels), "");
    }

    #[test]
    fn test_token_parse() {
        assert_eq!(FormatToken::parse("MMM"), Some(FormatToken::MonthShort));
        assert_eq!(FormatToken::parse("YYYY"), Some(FormatToken::YearFull));
        assert_eq!(FormatToken::parse("DD"), None);
        assert_eq!(FormatToken::parse("YYY"), None);
    }

    #[test]
    fn test_format_in_locale() {
        let p = parts(2023, 3);
        assert_eq!(
            format_date_parts_in_locale(&p, "MMMM YYYY", Some("de-DE")).as_deref(),
            Ok("März 2023")
        );
        assert!(format_date_parts_in_locale(&p, "MMMM", Some("zz_ZZ")).is_err());
    }
}

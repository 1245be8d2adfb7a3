//! Padding and best-effort reshaping of loose month-year text.
//!
//! Date parsers disagree on what a "month-year" string looks like: `11-2019`
//! may parse where `3-2019` or `2019.1` do not. [`normalize_month_year_string`]
//! rewrites purely numeric two-part input into canonical `YYYY-MM` and leaves
//! everything else untouched for the caller's parser to accept or reject.

use crate::consts::{DATE_SEPARATOR, DEFAULT_PAD_CHAR, MONTH_WIDTH, YEAR_WIDTH};
use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

// Literal pattern; compiled on first use by every normalization test.
#[allow(clippy::expect_used)]
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s/.\-]+").expect("separator pattern is valid"));

/// Left-pads the string form of `value` with `fill` until it is `length`
/// characters long. Values already at or past `length` are returned as-is.
pub fn pad(value: impl Display, length: usize, fill: char) -> String {
    let text = value.to_string();
    let missing = length.saturating_sub(text.chars().count());
    let mut out = String::with_capacity(text.len() + missing * fill.len_utf8());
    out.extend(std::iter::repeat_n(fill, missing));
    out.push_str(&text);
    out
}

/// [`pad`] for optional values; `None` pads the empty string.
pub fn pad_option<T: Display>(value: Option<T>, length: usize, fill: char) -> String {
    match value {
        Some(v) => pad(v, length, fill),
        None => pad("", length, fill),
    }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Rewrites a two-token numeric month-year string into `YYYY-MM`.
///
/// Returns `None` for empty input. Input that does not split into exactly two
/// purely numeric tokens on whitespace, `/`, `.` or `-` is returned unchanged.
/// Single-digit tokens are taken as months and padded to two digits; tokens
/// longer than two digits are taken as years and padded to four. Two-digit
/// tokens are ambiguous and kept as they are.
pub fn normalize_month_year_string(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = SEPARATORS.split(value).collect();
    if tokens.len() != 2 {
        tracing::trace!(value, tokens = tokens.len(), "not a two-part month-year string");
        return Some(value.to_owned());
    }
    if !tokens.iter().all(|t| is_numeric(t)) {
        tracing::trace!(value, "month-year string has non-numeric parts");
        return Some(value.to_owned());
    }

    let mut padded: Vec<String> = tokens
        .into_iter()
        .map(|token| match token.len() {
            1 => pad(token, MONTH_WIDTH, DEFAULT_PAD_CHAR),
            n if n > MONTH_WIDTH => pad(token, YEAR_WIDTH, DEFAULT_PAD_CHAR),
            _ => token.to_owned(),
        })
        .collect();
    // Stable, so equal-length tokens keep their input order.
    padded.sort_by(|a, b| b.len().cmp(&a.len()));

    Some(padded.join(&DATE_SEPARATOR.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_PAD_WIDTH;

    #[test]
    fn test_pad_defaults() {
        assert_eq!(pad(5, DEFAULT_PAD_WIDTH, DEFAULT_PAD_CHAR), "05");
        assert_eq!(pad(12, DEFAULT_PAD_WIDTH, DEFAULT_PAD_CHAR), "12");
        assert_eq!(pad(123, DEFAULT_PAD_WIDTH, DEFAULT_PAD_CHAR), "123");
    }

    #[test]
    fn test_pad_keeps_numeric_value() {
        for m in (1..=999_999u32).step_by(997) {
            let padded = pad(m, DEFAULT_PAD_WIDTH, DEFAULT_PAD_CHAR);
            assert!(padded.len() >= 2, "{padded} too short");
            assert!(padded.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(padded.parse::<u32>().ok(), Some(m));
        }
    }

    #[test]
    fn test_pad_custom_fill_and_width() {
        assert_eq!(pad("7", 4, ' '), "   7");
        assert_eq!(pad(-5, 4, '0'), "00-5");
        assert_eq!(pad("é", 3, '*'), "**é");
    }

    #[test]
    fn test_pad_option_none_is_empty() {
        assert_eq!(pad_option::<u8>(None, 2, '0'), "00");
        assert_eq!(pad_option(Some(3), 2, '0'), "03");
    }

    #[test]
    fn test_normalize_cases() {
        struct TestCase {
            input:       &'static str,
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "11-2019",
                expected:    "2019-11",
                description: "month first, two-digit month",
            },
            TestCase {
                input:       "3-2019",
                expected:    "2019-03",
                description: "single-digit month is padded",
            },
            TestCase {
                input:       "2019-1",
                expected:    "2019-01",
                description: "year first, single-digit month",
            },
            TestCase {
                input:       "3/2019",
                expected:    "2019-03",
                description: "slash separator",
            },
            TestCase {
                input:       "3.2019",
                expected:    "2019-03",
                description: "dot separator",
            },
            TestCase {
                input:       "3   2019",
                expected:    "2019-03",
                description: "whitespace run separator",
            },
            TestCase {
                input:       "3 / 2019",
                expected:    "2019-03",
                description: "mixed separator run",
            },
            TestCase {
                input:       "4-123",
                expected:    "0123-04",
                description: "three-digit year padded to four",
            },
            TestCase {
                input:       "2018-11",
                expected:    "2018-11",
                description: "already canonical",
            },
            TestCase {
                input:       "11-18",
                expected:    "11-18",
                description: "two two-digit tokens keep input order",
            },
            TestCase {
                input:       "jan 2000",
                expected:    "jan 2000",
                description: "non-numeric token passes through",
            },
            TestCase {
                input:       "2018",
                expected:    "2018",
                description: "single token passes through",
            },
            TestCase {
                input:       "1-2-2018",
                expected:    "1-2-2018",
                description: "three tokens pass through",
            },
            TestCase {
                input:       "2019-",
                expected:    "2019-",
                description: "trailing separator yields an empty token",
            },
        ];

        for case in &cases {
            assert_eq!(
                normalize_month_year_string(case.input).as_deref(),
                Some(case.expected),
                "{}: {:?}",
                case.description,
                case.input
            );
        }
    }

    #[test]
    fn test_normalize_empty_is_none() {
        assert_eq!(normalize_month_year_string(""), None);
    }

    #[test]
    fn test_normalize_rejects_non_ascii_digits() {
        // Arabic-Indic digits are not treated as numeric
        assert_eq!(normalize_month_year_string("٣-2019").as_deref(), Some("٣-2019"));
    }
}

//! Localized month names.

use crate::consts::{
    DEFAULT_LOCALE, DEFAULT_REGIONS, LOCALE_ENV_VARS, MONTH_NAME_BASE_YEAR, MONTH_NAME_REFERENCE_DAY,
};
use crate::types::MonthNameLength;
use chrono::{Locale, NaiveDate, TimeZone, Utc};

/// Error type for locale lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// No locale data exists for the identifier.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

/// Resolves a locale identifier such as `en-US`, `en_us`, `zh-Hans-CN`,
/// `de_DE.UTF-8` or `ja`.
///
/// Region subtags are upper-cased and script subtags dropped. A bare language
/// takes its region from [`DEFAULT_REGIONS`], then is tried as `xx_XX`.
///
/// # Errors
/// Returns `LocaleError::UnknownLocale` when no locale data matches.
pub fn resolve_locale(identifier: &str) -> Result<Locale, LocaleError> {
    let base = identifier
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('-', "_");

    if let Ok(locale) = Locale::try_from(base.as_str()) {
        return Ok(locale);
    }
    let found = locale_candidates(&base)
        .into_iter()
        .find_map(|name| Locale::try_from(name.as_str()).ok().map(|locale| (name, locale)));
    match found {
        Some((name, locale)) => {
            tracing::debug!(identifier, resolved = %name, "resolved locale identifier");
            Ok(locale)
        }
        None => Err(LocaleError::UnknownLocale(identifier.to_owned())),
    }
}

/// `lang_REGION` spellings worth trying for an underscore-separated identifier.
fn locale_candidates(base: &str) -> Vec<String> {
    let mut subtags = base.split('_').filter(|t| !t.is_empty());
    let Some(language) = subtags.next() else {
        return Vec::new();
    };
    let language = language.to_ascii_lowercase();
    // Scripts are four letters (`Hans`); regions two letters or three digits.
    let region = subtags.find(|t| {
        (t.len() == 2 && t.bytes().all(|b| b.is_ascii_alphabetic()))
            || (t.len() == 3 && t.bytes().all(|b| b.is_ascii_digit()))
    });

    match region {
        Some(region) => vec![format!("{language}_{}", region.to_ascii_uppercase())],
        None => {
            let mut names: Vec<String> = DEFAULT_REGIONS
                .iter()
                .filter(|(lang, _)| *lang == language)
                .map(|(lang, region)| format!("{lang}_{region}"))
                .collect();
            names.push(format!("{language}_{}", language.to_ascii_uppercase()));
            names
        }
    }
}

/// Picks the locale name out of an environment value like `de_DE.UTF-8`.
/// `C` and `POSIX` carry no month names and are skipped.
fn locale_from_env_value(value: &str) -> Option<&str> {
    let name = value.split(['.', '@']).next()?.trim();
    match name {
        "" | "C" | "POSIX" => None,
        name => Some(name),
    }
}

/// The runtime default locale: the first usable value of `LC_ALL`, `LC_TIME`
/// or `LANG`, otherwise [`DEFAULT_LOCALE`].
pub fn default_locale() -> Locale {
    let from_env = LOCALE_ENV_VARS.iter().find_map(|var| {
        let value = std::env::var(var).ok()?;
        let name = locale_from_env_value(&value)?;
        resolve_locale(name).ok()
    });
    from_env.unwrap_or_else(|| {
        tracing::debug!(fallback = DEFAULT_LOCALE, "no usable locale in environment");
        Locale::en_US
    })
}

fn locale_or_default(locale: Option<&str>) -> Result<Locale, LocaleError> {
    locale.map_or_else(|| Ok(default_locale()), resolve_locale)
}

/// Names of January through December in `locale`.
pub fn month_names_for(length: MonthNameLength, locale: Locale) -> [String; 12] {
    std::array::from_fn(|index| {
        // index < 12, so the month and reference day always exist
        #[allow(clippy::cast_possible_truncation)]
        let reference = NaiveDate::from_ymd_opt(
            MONTH_NAME_BASE_YEAR,
            index as u32 + 1,
            MONTH_NAME_REFERENCE_DAY,
        )
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive));

        reference
            .map(|dt| dt.format_localized(length.strftime(), locale).to_string())
            .unwrap_or_default()
    })
}

/// Names of January through December, in `locale` or the runtime default.
///
/// # Errors
/// Returns `LocaleError::UnknownLocale` for identifiers with no locale data.
pub fn get_month_names(length: MonthNameLength, locale: Option<&str>) -> Result<[String; 12], LocaleError> {
    Ok(month_names_for(length, locale_or_default(locale)?))
}

/// Short and long month names, as needed by the mask formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabels {
    /// Abbreviated names, January first
    pub short: [String; 12],
    /// Full names, January first
    pub long:  [String; 12],
}

impl MonthLabels {
    /// Labels for an already resolved locale.
    pub fn new(locale: Locale) -> Self {
        Self {
            short: month_names_for(MonthNameLength::Short, locale),
            long:  month_names_for(MonthNameLength::Long, locale),
        }
    }

    /// Labels for `locale`, or the runtime default when `None`.
    ///
    /// # Errors
    /// Returns `LocaleError::UnknownLocale` for identifiers with no locale data.
    pub fn for_locale(locale: Option<&str>) -> Result<Self, LocaleError> {
        Ok(Self::new(locale_or_default(locale)?))
    }

    /// Name table for the requested length
    pub const fn names(&self, length: MonthNameLength) -> &[String; 12] {
        match length {
            MonthNameLength::Short => &self.short,
            MonthNameLength::Long => &self.long,
        }
    }
}

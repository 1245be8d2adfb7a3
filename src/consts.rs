/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of months in a year
pub const MONTHS_PER_YEAR: i64 = 12;

/// First day of month, used when converting parts back into a date
pub const MIN_DAY: u32 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;

/// Day used to build reference dates for month names.
/// Every month has at least this many days.
pub const MONTH_NAME_REFERENCE_DAY: u32 = 15;
/// Year used to build reference dates for month names
pub const MONTH_NAME_BASE_YEAR: i32 = 2000;

/// Default width for [`pad`](crate::pad)
pub const DEFAULT_PAD_WIDTH: usize = 2;
/// Default fill character for [`pad`](crate::pad)
pub const DEFAULT_PAD_CHAR: char = '0';

/// Padded width of a month token in canonical `YYYY-MM` output
pub const MONTH_WIDTH: usize = 2;
/// Padded width of a year token in canonical `YYYY-MM` output
pub const YEAR_WIDTH: usize = 4;

/// Character offset where the `YY` mask token starts slicing the year string
pub const SHORT_YEAR_OFFSET: usize = 2;

/// Date component separator in canonical output
pub const DATE_SEPARATOR: char = '-';

/// Locale used when neither the caller nor the environment names one
pub const DEFAULT_LOCALE: &str = "en_US";

/// Region assumed for a bare language code, where `xx_XX` is not a locale
pub const DEFAULT_REGIONS: [(&str, &str); 24] = [
    ("ar", "SA"),
    ("bn", "BD"),
    ("ca", "ES"),
    ("cs", "CZ"),
    ("da", "DK"),
    ("el", "GR"),
    ("en", "US"),
    ("et", "EE"),
    ("fa", "IR"),
    ("ga", "IE"),
    ("he", "IL"),
    ("hi", "IN"),
    ("ja", "JP"),
    ("ka", "GE"),
    ("ko", "KR"),
    ("ms", "MY"),
    ("nb", "NO"),
    ("sl", "SI"),
    ("sq", "AL"),
    ("sr", "RS"),
    ("sv", "SE"),
    ("uk", "UA"),
    ("vi", "VN"),
    ("zh", "CN"),
];

/// Environment variables consulted for the runtime locale, highest priority first
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Time suffix appended to date-only strings so they parse as local midnight
pub(crate) const MIDNIGHT_SUFFIX: &str = "T00:00:00";

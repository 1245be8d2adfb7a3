use serde::{Deserialize, Serialize};

use crate::DateParts;

/// A possibly incomplete range of months, as held by a picker mid-selection.
///
/// No ordering is enforced; [`DateRange::ordered`] swaps the ends when needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateRange {
    pub start: Option<DateParts>,
    pub end:   Option<DateParts>,
}

/// What a month picker holds: one month, or a range of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateSelection {
    /// A single month
    Single(DateParts),
    /// A range, possibly with missing ends
    Range(DateRange),
}

impl DateRange {
    /// Creates a range from its two ends
    pub const fn new(start: Option<DateParts>, end: Option<DateParts>) -> Self {
        Self { start, end }
    }

    /// Both ends are set
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// The same range with `start` no later than `end`. Incomplete ranges are
    /// returned as they are.
    #[must_use]
    pub fn ordered(self) -> Self {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => Self {
                start: Some(end),
                end:   Some(start),
            },
            _ => self,
        }
    }

    /// Whether `parts` lies between the ends, inclusive. Incomplete ranges contain nothing.
    pub fn contains(&self, parts: &DateParts) -> bool {
        match self.ordered() {
            Self {
                start: Some(start),
                end: Some(end),
            } => start <= *parts && *parts <= end,
            _ => false,
        }
    }
}

impl DateSelection {
    /// The range, if this selection is one
    pub const fn as_range(&self) -> Option<&DateRange> {
        match self {
            Self::Range(range) => Some(range),
            Self::Single(_) => None,
        }
    }

    /// The single month, if this selection is one
    pub const fn as_single(&self) -> Option<&DateParts> {
        match self {
            Self::Single(parts) => Some(parts),
            Self::Range(_) => None,
        }
    }
}

impl From<DateParts> for DateSelection {
    fn from(parts: DateParts) -> Self {
        Self::Single(parts)
    }
}

impl From<DateRange> for DateSelection {
    fn from(range: DateRange) -> Self {
        Self::Range(range)
    }
}

/// A range is valid when it exists and both of its ends are set.
/// Chronological order is not checked.
pub const fn is_valid_range(range: Option<&DateRange>) -> bool {
    match range {
        Some(range) => range.is_complete(),
        None => false,
    }
}

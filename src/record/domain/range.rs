//! Range values: ordered intervals over timestamps or integers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An interval with a start and an end endpoint of one ordered kind.
///
/// Ranges model relational range columns such as `tstzrange` or
/// `int8range`. A range may be well-formed (`end > start`), empty
/// (`end == start`), or inverted (`end < start`); the range rule maps each
/// of these states to a distinct validation outcome.
///
/// # Examples
///
/// ```
/// use parapet::record::domain::RangeValue;
///
/// let range = RangeValue::integers(1, 2);
/// assert!(!range.is_empty());
/// assert!(!range.is_inverted());
///
/// assert!(RangeValue::integers(3, 3).is_empty());
/// assert!(RangeValue::integers(5, 4).is_inverted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeValue {
    /// A time interval.
    Timestamps {
        /// Lower bound of the interval.
        start: DateTime<Utc>,
        /// Upper bound of the interval.
        end: DateTime<Utc>,
    },
    /// An integer interval.
    Integers {
        /// Lower bound of the interval.
        start: i64,
        /// Upper bound of the interval.
        end: i64,
    },
}

impl RangeValue {
    /// Creates a time interval.
    #[must_use]
    pub const fn timestamps(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::Timestamps { start, end }
    }

    /// Creates an integer interval.
    #[must_use]
    pub const fn integers(start: i64, end: i64) -> Self {
        Self::Integers { start, end }
    }

    /// Compares the end of the range to its start.
    ///
    /// `Ordering::Greater` means the range is well-formed, `Equal` that it
    /// is empty, and `Less` that its bounds are inverted.
    #[must_use]
    pub fn bounds_ordering(&self) -> Ordering {
        match self {
            Self::Timestamps { start, end } => end.cmp(start),
            Self::Integers { start, end } => end.cmp(start),
        }
    }

    /// Returns `true` if the range contains no values (`end == start`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds_ordering() == Ordering::Equal
    }

    /// Returns `true` if the bounds are inverted (`end < start`).
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.bounds_ordering() == Ordering::Less
    }
}

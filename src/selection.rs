use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::RANGE_SEPARATOR;

/// The user's chosen day or day range.
///
/// Either nothing, a start day alone, or a start and a later end day. The end
/// is never set without a start and never precedes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    start: Option<NaiveDate>,
    end:   Option<NaiveDate>,
}

/// Error type for selection construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Start date is after end date.
    #[error("Invalid selection: start ({start}) is after end ({end})")]
    Reversed { start: NaiveDate, end: NaiveDate },

    /// Error parsing one of the dates.
    #[error(transparent)]
    InvalidDate(#[from] chrono::ParseError),

    /// Invalid selection format.
    #[error("Invalid selection format: {0}")]
    InvalidFormat(String),
}

impl Selection {
    /// Nothing selected.
    pub const fn empty() -> Self {
        Self { start: None, end: None }
    }

    /// A start day with no end yet.
    pub const fn single(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end:   None,
        }
    }

    /// A complete range. A range ending on its start day is the single day.
    ///
    /// # Errors
    /// Returns `SelectionError::Reversed` if start > end.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Result<Self, SelectionError> {
        if start > end {
            return Err(SelectionError::Reversed { start, end });
        }
        if start == end {
            return Ok(Self::single(start));
        }
        Ok(Self {
            start: Some(start),
            end:   Some(end),
        })
    }

    /// Builds a selection from optional endpoints, as a host would store them.
    /// An end without a start becomes a single-day selection on that end.
    ///
    /// # Errors
    /// Returns `SelectionError::Reversed` if start > end.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, SelectionError> {
        match (start, end) {
            (None, None) => Ok(Self::empty()),
            (Some(day), None) | (None, Some(day)) => Ok(Self::single(day)),
            (Some(start), Some(end)) => Self::range(start, end),
        }
    }

    /// Returns the start date, if any.
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Returns the end date, if any.
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns both dates as a tuple, read together.
    pub const fn dates(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.start, self.end)
    }

    pub const fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// True once both ends are chosen.
    pub const fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    /// Checks if `date` is one of the selected days.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => start == date,
            _ => false,
        }
    }

    /// Number of selected days, counting both ends.
    pub fn len(&self) -> u32 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                u32::try_from(end.signed_duration_since(start).num_days() + 1).unwrap_or(u32::MAX)
            }
            (Some(_), None) => 1,
            _ => 0,
        }
    }

    /// The selection after the user taps `date`.
    ///
    /// - nothing selected: `date` becomes the start,
    /// - complete range: start over from `date`,
    /// - start only: an earlier `date` replaces the start, the same day changes
    ///   nothing, and a later one completes the range.
    #[must_use]
    pub fn after_tap(self, date: NaiveDate) -> Self {
        match (self.start, self.end) {
            (None, _) | (Some(_), Some(_)) => Self::single(date),
            (Some(start), None) if date < start => Self::single(date),
            (Some(start), None) if date == start => self,
            (Some(start), None) => Self {
                start: Some(start),
                end:   Some(date),
            },
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(start), Some(end)) => write!(f, "{start}{RANGE_SEPARATOR}{end}"),
            (Some(start), None) => write!(f, "{start}"),
            _ => Ok(()),
        }
    }
}

impl FromStr for Selection {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::empty());
        }

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Ok(Self::single(trimmed.parse::<NaiveDate>()?)),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    SelectionError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.trim().parse::<NaiveDate>()?;
                let end = end_str.trim().parse::<NaiveDate>()?;

                Self::range(start, end)
            }
            _ => Err(SelectionError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected at most 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for Selection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//! Construction-time configuration of a calendar.
//!
//! A [`CalendarConfig`] is plain data (deserializable from the host's settings)
//! and is validated once by [`CalendarWindow::new`](crate::CalendarWindow::new).

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_MONTH, MAX_YEAR};
use crate::prelude::*;
use crate::types::{Month, WeekdayNumber, Year};

/// Error raised when a calendar cannot be built from its configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(u16),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid weekday: {0} (must be 1-7, Sunday = 1)")]
    InvalidWeekday(u8),

    /// The window would contain no month at all.
    #[error("Calendar window is empty: {0}")]
    EmptyWindow(WindowSpan),

    /// The start or last month of the window cannot be represented.
    #[error("Calendar window starting {year}-{month:02} spanning {span} is out of range")]
    WindowOutOfRange { year: u16, month: u8, span: WindowSpan },
}

/// How far the calendar extends from its start month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum WindowSpan {
    /// A fixed number of months starting at the start month.
    #[display(fmt = "{_0} months")]
    Months(u32),
    /// Whole calendar years: the window runs from the start month through
    /// December of the last year.
    #[display(fmt = "{_0} years")]
    Years(u32),
}

impl Default for WindowSpan {
    fn default() -> Self {
        Self::Years(1)
    }
}

/// Settings fixed when the calendar is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Year of the first month shown, defaults to the current year.
    pub start_year: Option<Year>,
    /// First month shown, defaults to the current month.
    pub start_month: Option<Month>,
    pub span: WindowSpan,
    /// Render padding days of adjacent months as hidden instead of disabled.
    pub hides_dates_from_other_month: bool,
    /// Disable every day of the window before today.
    pub disabled_before_today: bool,
    /// First column of each row, Sunday = 1.
    pub first_weekday: WeekdayNumber,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            start_year: None,
            start_month: None,
            span: WindowSpan::default(),
            hides_dates_from_other_month: false,
            disabled_before_today: true,
            first_weekday: WeekdayNumber::default(),
        }
    }
}

impl CalendarConfig {
    /// Config for a window starting at `year`-`month`.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidYear` or `ConfigError::InvalidMonth` for
    /// out-of-range values.
    pub fn starting_at(year: u16, month: u8) -> Result<Self, ConfigError> {
        Ok(Self {
            start_year: Some(Year::new(year)?),
            start_month: Some(Month::new(month)?),
            ..Self::default()
        })
    }

    #[must_use]
    pub const fn with_span(mut self, span: WindowSpan) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub const fn with_hidden_other_months(mut self, hides: bool) -> Self {
        self.hides_dates_from_other_month = hides;
        self
    }

    #[must_use]
    pub const fn with_disabled_before_today(mut self, disabled: bool) -> Self {
        self.disabled_before_today = disabled;
        self
    }

    #[must_use]
    pub const fn with_first_weekday(mut self, first_weekday: WeekdayNumber) -> Self {
        self.first_weekday = first_weekday;
        self
    }
}

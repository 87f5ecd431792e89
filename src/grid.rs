//! Month-grid geometry.
//!
//! The calendar is a list of sections, one per month of the window. Each
//! section is a whole number of weeks: a few leading cells from the previous
//! month, every day of the month, then trailing cells from the next month up to
//! the end of the last row.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cell::{CellContext, CellState};
use crate::config::{CalendarConfig, ConfigError, WindowSpan};
use crate::consts::{DAYS_IN_WEEK, MIN_DAY, MONTHS_IN_YEAR};
use crate::date;
use crate::prelude::*;
use crate::selection::Selection;
use crate::types::{Month, WeekdayNumber, Year};

/// Coordinate of a cell: month offset from the window start and cell offset
/// within that month's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{section}:{row}")]
pub struct GridPosition {
    pub section: usize,
    pub row:     usize,
}

impl GridPosition {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Layout of one section, derived from its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGeometry {
    pub first_day:      NaiveDate,
    pub last_day:       NaiveDate,
    /// Cells borrowed from the previous month to pad the first row, `0..=6`.
    pub leading_blanks: usize,
    /// Total cells including both paddings, always a multiple of 7.
    pub cell_count:     usize,
}

impl MonthGeometry {
    /// Geometry of the month starting on `first_day`.
    pub fn new(first_day: NaiveDate, first_weekday: WeekdayNumber) -> Self {
        let leading_blanks = usize::from(date::weekday(first_day).days_since(first_weekday));
        let days = date::days_in_month(first_day) as usize;
        let week = usize::from(DAYS_IN_WEEK);

        let raw = days + leading_blanks;
        let remainder = raw % week;
        let cell_count = if remainder == 0 { raw } else { raw + week - remainder };

        Self {
            first_day,
            last_day: date::last_of_month(first_day),
            leading_blanks,
            cell_count,
        }
    }

    /// Date shown in cell `row`, which may fall in an adjacent month.
    pub fn cell_date(&self, row: usize) -> NaiveDate {
        let row = i64::try_from(row).unwrap_or(i64::MAX);
        let leading_blanks = i64::try_from(self.leading_blanks).unwrap_or(0);
        date::add_days(self.first_day, row.saturating_sub(leading_blanks))
    }

    /// Row showing `date`, when `date` belongs to this month.
    pub fn row_of(&self, date: NaiveDate) -> Option<usize> {
        if date < self.first_day || date > self.last_day {
            return None;
        }
        Some(self.leading_blanks + (date.day() - u32::from(MIN_DAY)) as usize)
    }
}

/// The validated, immutable range of months a calendar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    start_date: NaiveDate,
    section_count: usize,
    first_weekday: WeekdayNumber,
    hides_dates_from_other_month: bool,
    disabled_before_today: bool,
}

impl CalendarWindow {
    /// Resolves `config` against `today` and validates the result.
    ///
    /// A missing start year or month is taken from `today`.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWindow` when the span covers no month and
    /// `ConfigError::WindowOutOfRange` when its last month cannot be represented.
    pub fn new(config: &CalendarConfig, today: NaiveDate) -> Result<Self, ConfigError> {
        let year = match config.start_year {
            Some(year) => year,
            None => Year::new(u16::try_from(today.year()).unwrap_or(0))?,
        };
        let month = match config.start_month {
            Some(month) => month,
            None => Month::new(u8::try_from(today.month()).unwrap_or(0))?,
        };

        let section_count = match config.span {
            WindowSpan::Months(0) | WindowSpan::Years(0) => {
                return Err(ConfigError::EmptyWindow(config.span));
            }
            WindowSpan::Months(months) => months,
            WindowSpan::Years(years) => years
                .checked_mul(MONTHS_IN_YEAR)
                .map(|months| months - (u32::from(month.get()) - 1))
                .ok_or(ConfigError::WindowOutOfRange {
                    year: year.get(),
                    month: month.get(),
                    span: config.span,
                })?,
        };

        let out_of_range = || ConfigError::WindowOutOfRange {
            year: year.get(),
            month: month.get(),
            span: config.span,
        };
        let start_date = NaiveDate::from_ymd_opt(
            i32::from(year.get()),
            u32::from(month.get()),
            u32::from(MIN_DAY),
        )
        .ok_or_else(out_of_range)?;
        // The trailing padding of the last section must stay representable too
        start_date
            .checked_add_months(chrono::Months::new(section_count))
            .and_then(|end| end.checked_add_days(chrono::Days::new(u64::from(DAYS_IN_WEEK))))
            .ok_or_else(out_of_range)?;

        Ok(Self {
            start_date,
            section_count: section_count as usize,
            first_weekday: config.first_weekday,
            hides_dates_from_other_month: config.hides_dates_from_other_month,
            disabled_before_today: config.disabled_before_today,
        })
    }

    /// First day of the first section.
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the last section's month.
    pub fn end_date(&self) -> NaiveDate {
        date::last_of_month(self.header_date(self.section_count - 1))
    }

    pub const fn first_weekday(&self) -> WeekdayNumber {
        self.first_weekday
    }

    pub const fn hides_dates_from_other_month(&self) -> bool {
        self.hides_dates_from_other_month
    }

    pub const fn disabled_before_today(&self) -> bool {
        self.disabled_before_today
    }

    /// Number of months in the window.
    pub const fn section_count(&self) -> usize {
        self.section_count
    }

    /// First day of the month shown in `section`, used for its header.
    pub fn header_date(&self, section: usize) -> NaiveDate {
        let offset = i32::try_from(section).unwrap_or(i32::MAX);
        date::add_months(self.start_date, offset)
    }

    pub fn geometry(&self, section: usize) -> MonthGeometry {
        MonthGeometry::new(self.header_date(section), self.first_weekday)
    }

    /// Number of cells in `section`, always a multiple of 7.
    pub fn cell_count(&self, section: usize) -> usize {
        self.geometry(section).cell_count
    }

    /// Date shown at `position`.
    pub fn cell_date(&self, position: GridPosition) -> NaiveDate {
        self.geometry(position.section).cell_date(position.row)
    }

    /// State of the cell at `position` for `selection` and `today`.
    pub fn cell_state(&self, position: GridPosition, selection: &Selection, today: NaiveDate) -> CellState {
        CellContext::new(
            &self.geometry(position.section),
            position.row,
            today,
            *selection,
            self.hides_dates_from_other_month,
            self.disabled_before_today,
        )
        .classify()
    }

    /// Position of `date` in its own month's section, if that month is in the window.
    pub fn position_of(&self, date: NaiveDate) -> Option<GridPosition> {
        let section = usize::try_from(date::months_between(self.start_date, date))
            .ok()
            .filter(|&section| section < self.section_count)?;
        let row = self.geometry(section).row_of(date)?;
        Some(GridPosition { section, row })
    }

    /// Cell to bring into view for `selection`: the section of its start
    /// date's month and the row showing that day.
    ///
    /// Returns `None` when nothing is selected or the start lies outside the window.
    pub fn resolve_scroll_target(&self, selection: &Selection) -> Option<GridPosition> {
        self.position_of(selection.start()?)
    }
}

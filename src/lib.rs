//! Month-grid generation and tap-driven date-range selection for calendar
//! pickers.
//!
//! A [`RangeCalendar`] answers the pull-style queries a scrolling grid widget
//! makes (how many months, how many cells per month, which date and state each
//! cell has) and turns the user's day taps into a validated [`Selection`].
//! Rendering, localization and layout are left to the host.

mod cell;
mod config;
mod consts;
pub mod date;
mod grid;
pub mod header;
mod prelude;
mod selection;
mod types;

pub use cell::{Cell, CellContext, CellState};
pub use config::{CalendarConfig, ConfigError, WindowSpan};
pub use consts::*;
pub use grid::{CalendarWindow, GridPosition, MonthGeometry};
pub use selection::{Selection, SelectionError};
pub use types::{Month, WeekdayNumber, Year};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::date::IntoCalendarDate;

/// Receives the selection each time a tap changes it.
pub trait SelectionListener {
    fn selection_did_change(&mut self, selection: &Selection);
}

impl<F> SelectionListener for F
where
    F: FnMut(&Selection),
{
    fn selection_did_change(&mut self, selection: &Selection) {
        self(selection);
    }
}

/// Result of a tap on a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The cell cannot be selected in its current state.
    Ignored(CellState),
    /// The tap was accepted but left the selection as it was.
    Unchanged,
    /// The selection changed; every cell must be re-read.
    Changed(Selection),
}

/// One month of the grid with its cells classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// First day of the month, for the section header.
    pub header_date: NaiveDate,
    pub cells:       Vec<Cell>,
}

/// A calendar picker: an immutable window of months plus the current
/// selection and today's date.
pub struct RangeCalendar {
    window:         CalendarWindow,
    selection:      Selection,
    today:          NaiveDate,
    pending_scroll: Option<GridPosition>,
    listener:       Option<Box<dyn SelectionListener>>,
}

impl RangeCalendar {
    /// Creates a calendar with nothing selected.
    ///
    /// # Errors
    /// Returns `ConfigError` when `config` does not describe a usable window.
    pub fn new(config: &CalendarConfig, today: impl IntoCalendarDate) -> Result<Self, ConfigError> {
        let today = date::truncate_to_date(today);
        let window = CalendarWindow::new(config, today)?;
        info!(
            start = %window.start_date(),
            end = %window.end_date(),
            sections = window.section_count(),
            "calendar window created"
        );

        Ok(Self {
            window,
            selection: Selection::empty(),
            today,
            pending_scroll: None,
            listener: None,
        })
    }

    /// Starts with `selection` already chosen.
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Registers the listener notified after taps that change the selection.
    #[must_use]
    pub fn with_listener(mut self, listener: impl SelectionListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn set_listener(&mut self, listener: impl SelectionListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub const fn window(&self) -> &CalendarWindow {
        &self.window
    }

    pub const fn selection(&self) -> Selection {
        self.selection
    }

    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Moves `today`, e.g. when the host notices the day rolled over.
    pub fn set_today(&mut self, today: impl IntoCalendarDate) {
        self.today = date::truncate_to_date(today);
    }

    /// Replaces the selection as a whole. The listener is not notified.
    pub fn set_selection(&mut self, selection: Selection) {
        debug!(old = %self.selection, new = %selection, "selection replaced by host");
        self.selection = selection;
    }

    pub const fn section_count(&self) -> usize {
        self.window.section_count()
    }

    pub fn cell_count(&self, section: usize) -> usize {
        self.window.cell_count(section)
    }

    pub fn cell_date(&self, position: GridPosition) -> NaiveDate {
        self.window.cell_date(position)
    }

    pub fn header_date(&self, section: usize) -> NaiveDate {
        self.window.header_date(section)
    }

    /// State of the cell at `position` for the current selection and today.
    pub fn cell_state(&self, position: GridPosition) -> CellState {
        self.cell(position).state
    }

    pub fn cell(&self, position: GridPosition) -> Cell {
        let geometry = self.window.geometry(position.section);
        self.classify(&geometry, position.row)
    }

    /// Every cell of `section` together with its header date.
    pub fn month(&self, section: usize) -> MonthGrid {
        let geometry = self.window.geometry(section);
        MonthGrid {
            header_date: geometry.first_day,
            cells:       (0..geometry.cell_count)
                .map(|row| self.classify(&geometry, row))
                .collect(),
        }
    }

    fn classify(&self, geometry: &MonthGeometry, row: usize) -> Cell {
        let context = CellContext::new(
            geometry,
            row,
            self.today,
            self.selection,
            self.window.hides_dates_from_other_month(),
            self.window.disabled_before_today(),
        );
        Cell {
            date:  context.date,
            state: context.classify(),
        }
    }

    /// Handles a tap on the cell at `position`, ignoring cells that are not
    /// selectable.
    pub fn tap(&mut self, position: GridPosition) -> TapOutcome {
        let cell = self.cell(position);
        if !cell.is_selectable() {
            debug!(%position, date = %cell.date, state = %cell.state, "tap ignored");
            return TapOutcome::Ignored(cell.state);
        }

        let before = self.selection;
        let after = self.on_date_tapped(cell.date);
        if after == before {
            TapOutcome::Unchanged
        } else {
            TapOutcome::Changed(after)
        }
    }

    /// Applies a tap on `date` to the selection and returns the selection
    /// afterwards. The listener hears about it only if it changed.
    ///
    /// Callers are expected to pass dates of selectable cells; [`tap`](Self::tap)
    /// enforces that.
    pub fn on_date_tapped(&mut self, date: impl IntoCalendarDate) -> Selection {
        let date = date::truncate_to_date(date);
        let before = self.selection;
        let after = before.after_tap(date);
        if after == before {
            debug!(%date, selection = %before, "tap left selection unchanged");
            return before;
        }

        debug!(%date, old = %before, new = %after, "selection changed");
        self.selection = after;
        if let Some(listener) = self.listener.as_mut() {
            listener.selection_did_change(&after);
        }
        after
    }

    /// Cell showing the selection's start day, if anything is selected.
    pub fn resolve_scroll_target(&self) -> Option<GridPosition> {
        self.window.resolve_scroll_target(&self.selection)
    }

    /// Arms a scroll to the selection's start for when the grid first lays out.
    pub fn scroll_to_selection_on_appear(&mut self) {
        self.pending_scroll = self.resolve_scroll_target();
        if let Some(position) = self.pending_scroll {
            debug!(%position, "scroll target armed");
        }
    }

    /// Takes the armed scroll target. Returns it once, then `None`.
    pub fn take_scroll_target(&mut self) -> Option<GridPosition> {
        let position = self.pending_scroll.take();
        if let Some(position) = position {
            debug!(%position, "scroll target consumed");
        }
        position
    }
}

impl std::fmt::Debug for RangeCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeCalendar")
            .field("window", &self.window)
            .field("selection", &self.selection)
            .field("today", &self.today)
            .field("pending_scroll", &self.pending_scroll)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use chrono::NaiveDate;

    use crate::{CalendarConfig, CalendarWindow, WindowSpan};

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
    }

    pub fn window(year: u16, month: u8, span: WindowSpan) -> CalendarWindow {
        let config = CalendarConfig::starting_at(year, month)
            .expect("test start must be valid")
            .with_span(span);
        CalendarWindow::new(&config, ymd(i32::from(year), u32::from(month), 1)).expect("test window must be valid")
    }
}

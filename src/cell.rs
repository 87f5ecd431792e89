//! Per-cell display state.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::grid::MonthGeometry;
use crate::prelude::*;
use crate::selection::Selection;

/// What a single grid cell shows. Exactly one state per cell per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// Start of a range that also has an end.
    #[display(fmt = "first_day_selected")]
    FirstDaySelected,
    /// Start of a range without an end yet.
    #[display(fmt = "selected")]
    Selected,
    #[display(fmt = "last_day_selected")]
    LastDaySelected,
    #[display(fmt = "selected_in_the_middle")]
    SelectedInTheMiddle,
    /// Padding day of an adjacent month lying inside a range that crosses
    /// the month boundary. Renders the range band without a label.
    #[display(fmt = "hidden_selected_in_the_middle")]
    HiddenSelectedInTheMiddle,
    #[display(fmt = "unselected")]
    Unselected,
    #[display(fmt = "hidden")]
    Hidden,
    #[display(fmt = "today")]
    Today,
    #[display(fmt = "disabled")]
    Disabled,
}

impl CellState {
    /// Whether tapping a cell in this state may change the selection.
    pub const fn is_selectable(self) -> bool {
        !matches!(self, Self::Disabled | Self::Hidden | Self::HiddenSelectedInTheMiddle)
    }

    /// Whether the cell renders without a day label.
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden | Self::HiddenSelectedInTheMiddle)
    }

    /// Whether the cell is part of the current selection.
    pub const fn is_in_selection(self) -> bool {
        matches!(
            self,
            Self::FirstDaySelected
                | Self::Selected
                | Self::LastDaySelected
                | Self::SelectedInTheMiddle
                | Self::HiddenSelectedInTheMiddle
        )
    }
}

/// Everything the classifier needs to know about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellContext {
    pub date:                         NaiveDate,
    pub today:                        NaiveDate,
    pub selection:                    Selection,
    pub first_day_of_month:           NaiveDate,
    pub last_day_of_month:            NaiveDate,
    pub row:                          usize,
    pub leading_blanks:               usize,
    pub hides_dates_from_other_month: bool,
    pub disabled_before_today:        bool,
}

impl CellContext {
    /// Context for cell `row` of the month described by `geometry`.
    pub fn new(
        geometry: &MonthGeometry,
        row: usize,
        today: NaiveDate,
        selection: Selection,
        hides_dates_from_other_month: bool,
        disabled_before_today: bool,
    ) -> Self {
        Self {
            date: geometry.cell_date(row),
            today,
            selection,
            first_day_of_month: geometry.first_day,
            last_day_of_month: geometry.last_day,
            row,
            leading_blanks: geometry.leading_blanks,
            hides_dates_from_other_month,
            disabled_before_today,
        }
    }

    /// Classifies the cell. The first matching rule wins:
    ///
    /// 1. next-month padding is disabled, or hidden (inside a range crossing
    ///    the month end: hidden-in-the-middle),
    /// 2. previous-month padding likewise against the month start,
    /// 3. days of the month: disabled before today, then range start, range
    ///    end, inside the range, today, and otherwise unselected.
    pub fn classify(&self) -> CellState {
        let (start, end) = self.selection.dates();
        debug_assert!(
            !matches!((start, end), (Some(s), Some(e)) if s >= e),
            "range end must be after its start"
        );

        let fallback = if self.date == self.today { CellState::Today } else { CellState::Unselected };

        if self.row >= self.leading_blanks && self.date > self.last_day_of_month {
            let crosses_month_end =
                matches!((start, end), (Some(s), Some(e)) if s <= self.last_day_of_month && e > self.last_day_of_month);
            return self.padding_state(crosses_month_end);
        }

        if self.row < self.leading_blanks {
            let crosses_month_start = matches!(
                (start, end),
                (Some(s), Some(e)) if e >= self.first_day_of_month && s < self.first_day_of_month
            );
            return self.padding_state(crosses_month_start);
        }

        if self.disabled_before_today && self.date < self.today {
            return CellState::Disabled;
        }

        match (start, end) {
            (Some(s), end) if self.date == s => {
                if end.is_some() {
                    CellState::FirstDaySelected
                } else {
                    CellState::Selected
                }
            }
            (_, Some(e)) if self.date == e => CellState::LastDaySelected,
            (Some(s), Some(e)) if s <= self.date && self.date <= e => CellState::SelectedInTheMiddle,
            _ => fallback,
        }
    }

    const fn padding_state(&self, crosses_boundary: bool) -> CellState {
        if !self.hides_dates_from_other_month {
            CellState::Disabled
        } else if crosses_boundary {
            CellState::HiddenSelectedInTheMiddle
        } else {
            CellState::Hidden
        }
    }
}

/// A classified cell, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub date:  NaiveDate,
    pub state: CellState,
}

impl Cell {
    /// Day-of-month label, `None` for hidden cells.
    pub fn day_label(&self) -> Option<u32> {
        (!self.state.is_hidden()).then(|| self.date.day())
    }

    pub const fn is_selectable(&self) -> bool {
        self.state.is_selectable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;
    use crate::types::WeekdayNumber;

    // January 2024 in a Sunday-first grid: row 0 is 2023-12-31, rows 1..=31
    // are the month, rows 32..=34 are February 1-3.
    fn january(row: usize, today: NaiveDate, selection: Selection, hides: bool, disabled: bool) -> CellState {
        let geometry = MonthGeometry::new(ymd(2024, 1, 1), WeekdayNumber::SUNDAY);
        CellContext::new(&geometry, row, today, selection, hides, disabled).classify()
    }

    fn row_of(day: u32) -> usize {
        day as usize
    }

    fn range(start: NaiveDate, end: NaiveDate) -> Selection {
        Selection::range(start, end).expect("valid range")
    }

    #[test]
    fn test_today_disabled_and_unselected() {
        let today = ymd(2024, 1, 15);
        let nothing = Selection::empty();

        assert_eq!(january(row_of(15), today, nothing, false, true), CellState::Today);
        assert_eq!(january(row_of(10), today, nothing, false, true), CellState::Disabled);
        assert_eq!(january(row_of(20), today, nothing, false, true), CellState::Unselected);
        assert_eq!(
            january(row_of(10), today, nothing, false, false),
            CellState::Unselected,
            "past days stay selectable when not disabled"
        );
    }

    #[test]
    fn test_range_endpoints_and_middle() {
        let today = ymd(2024, 1, 1);
        let selection = range(ymd(2024, 1, 5), ymd(2024, 1, 10));

        assert_eq!(january(row_of(5), today, selection, false, true), CellState::FirstDaySelected);
        assert_eq!(january(row_of(7), today, selection, false, true), CellState::SelectedInTheMiddle);
        assert_eq!(january(row_of(10), today, selection, false, true), CellState::LastDaySelected);
        assert_eq!(january(row_of(4), today, selection, false, true), CellState::Unselected);
        assert_eq!(january(row_of(11), today, selection, false, true), CellState::Unselected);
    }

    #[test]
    fn test_start_without_end_is_selected() {
        let today = ymd(2024, 1, 1);
        let selection = Selection::single(ymd(2024, 1, 5));
        assert_eq!(january(row_of(5), today, selection, false, true), CellState::Selected);
        assert_eq!(january(row_of(6), today, selection, false, true), CellState::Unselected);
    }

    #[test]
    fn test_selection_wins_over_today() {
        let today = ymd(2024, 1, 15);
        assert_eq!(
            january(row_of(15), today, Selection::single(today), false, true),
            CellState::Selected
        );
        assert_eq!(
            january(row_of(15), today, range(ymd(2024, 1, 14), ymd(2024, 1, 16)), false, true),
            CellState::SelectedInTheMiddle
        );
    }

    #[test]
    fn test_disabled_before_today_wins_over_selection() {
        let today = ymd(2024, 1, 15);
        let selection = range(ymd(2024, 1, 5), ymd(2024, 1, 20));
        assert_eq!(january(row_of(5), today, selection, false, true), CellState::Disabled);
        assert_eq!(january(row_of(16), today, selection, false, true), CellState::SelectedInTheMiddle);
    }

    #[test]
    fn test_padding_days_are_disabled_without_hiding() {
        let today = ymd(2023, 12, 31);
        let selection = range(ymd(2023, 12, 20), ymd(2024, 2, 10));
        assert_eq!(january(0, today, selection, false, false), CellState::Disabled);
        assert_eq!(january(33, today, selection, false, false), CellState::Disabled);
        assert_eq!(
            january(0, today, Selection::empty(), false, false),
            CellState::Disabled,
            "padding never reports today"
        );
    }

    #[test]
    fn test_padding_days_hidden_outside_range() {
        let today = ymd(2023, 12, 1);
        let inside_january = range(ymd(2024, 1, 5), ymd(2024, 1, 10));
        assert_eq!(january(0, today, inside_january, true, true), CellState::Hidden);
        assert_eq!(january(33, today, inside_january, true, true), CellState::Hidden);
        assert_eq!(january(33, today, Selection::single(ymd(2024, 1, 20)), true, true), CellState::Hidden);
    }

    #[test]
    fn test_padding_days_inside_crossing_range() {
        let today = ymd(2023, 12, 1);

        let into_february = range(ymd(2024, 1, 28), ymd(2024, 2, 5));
        for row in 32..35 {
            assert_eq!(
                january(row, today, into_february, true, true),
                CellState::HiddenSelectedInTheMiddle,
                "row {row}"
            );
        }
        assert_eq!(january(0, today, into_february, true, true), CellState::Hidden);

        let from_december = range(ymd(2023, 12, 30), ymd(2024, 1, 3));
        assert_eq!(january(0, today, from_december, true, true), CellState::HiddenSelectedInTheMiddle);
        assert_eq!(january(33, today, from_december, true, true), CellState::Hidden);
    }

    #[test]
    fn test_boundary_band_covers_whole_padding() {
        // The band follows the month boundary, not the exact padding date
        let today = ymd(2023, 12, 1);
        let ends_on_first = range(ymd(2024, 1, 20), ymd(2024, 2, 1));
        assert_eq!(january(34, today, ends_on_first, true, true), CellState::HiddenSelectedInTheMiddle);
    }

    #[test]
    fn test_cell_labels() {
        let day = Cell { date: ymd(2024, 1, 9), state: CellState::Unselected };
        assert_eq!(day.day_label(), Some(9));
        assert!(day.is_selectable());

        let hidden = Cell { date: ymd(2024, 2, 1), state: CellState::HiddenSelectedInTheMiddle };
        assert_eq!(hidden.day_label(), None);
        assert!(!hidden.is_selectable());

        let disabled = Cell { date: ymd(2024, 2, 1), state: CellState::Disabled };
        assert_eq!(disabled.day_label(), Some(1));
        assert!(!disabled.is_selectable());
    }

    #[test]
    fn test_state_names() {
        assert_eq!(CellState::HiddenSelectedInTheMiddle.to_string(), "hidden_selected_in_the_middle");
        assert_eq!(
            serde_json::to_string(&CellState::FirstDaySelected).expect("failed to serialize state"),
            r#""first_day_selected""#
        );
        assert!(CellState::SelectedInTheMiddle.is_in_selection());
        assert!(!CellState::Today.is_in_selection());
    }
}

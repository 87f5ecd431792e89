//! Labels for the weekday strip the host places above the grid.

use crate::consts::DAYS_IN_WEEK;
use crate::types::WeekdayNumber;

/// Short weekday names indexed by weekday number - 1 (Sunday first).
pub const WEEKDAY_SYMBOLS: [&str; DAYS_IN_WEEK as usize] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday names in column order for a grid whose rows start on `first_weekday`.
pub fn weekday_labels(first_weekday: WeekdayNumber) -> [&'static str; DAYS_IN_WEEK as usize] {
    let mut labels = WEEKDAY_SYMBOLS;
    labels.rotate_left(usize::from(first_weekday.get() - 1));
    labels
}

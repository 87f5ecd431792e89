//! Calendar-aware date arithmetic used by the month grid.
//!
//! Every helper is total: when chrono cannot represent a result the input is
//! returned unchanged so the grid keeps rendering.

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, TimeZone};
use tracing::warn;

use crate::consts::MIN_DAY;
use crate::types::WeekdayNumber;

/// Anything that can be projected onto a calendar day.
pub trait IntoCalendarDate {
    fn into_calendar_date(self) -> NaiveDate;
}

impl IntoCalendarDate for NaiveDate {
    fn into_calendar_date(self) -> NaiveDate {
        self
    }
}

impl IntoCalendarDate for NaiveDateTime {
    fn into_calendar_date(self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> IntoCalendarDate for DateTime<Tz> {
    fn into_calendar_date(self) -> NaiveDate {
        self.date_naive()
    }
}

/// Drops the time of day, keeping the calendar day in the value's own time zone.
pub fn truncate_to_date(value: impl IntoCalendarDate) -> NaiveDate {
    value.into_calendar_date()
}

/// Today's date in the process-local calendar.
pub fn local_today() -> NaiveDate {
    truncate_to_date(Local::now())
}

/// Shifts `date` by `months`, clamping the day to the length of the target month.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let delta = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    };
    shifted.unwrap_or_else(|| {
        warn!(%date, months, "month arithmetic out of range, keeping input date");
        date
    })
}

/// Shifts `date` by `days`.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let delta = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(delta)
    } else {
        date.checked_sub_days(delta)
    };
    shifted.unwrap_or_else(|| {
        warn!(%date, days, "day arithmetic out of range, keeping input date");
        date
    })
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        // Only December of chrono's last representable year has no successor month
        .map_or(31, |last| last.day())
}

/// Weekday of `date`, Sunday = 1 through Saturday = 7.
pub fn weekday(date: NaiveDate) -> WeekdayNumber {
    WeekdayNumber::from(date.weekday())
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(u32::from(MIN_DAY)).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date)).unwrap_or(date)
}

/// Whole months from `from` to `to`, negative when `to` is earlier.
///
/// A month only counts once it is complete: Jan 31 to Feb 28 is 0 months,
/// Jan 15 to Mar 14 is 1.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if months > 0 && add_months(from, months) > to {
        months -= 1;
    } else if months < 0 && add_months(from, months) < to {
        months += 1;
    }
    months
}

/// Days from `from` to `to`, negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

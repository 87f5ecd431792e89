use crate::ConfigError;
use crate::consts::{DAYS_IN_WEEK, MAX_MONTH, MAX_YEAR, SUNDAY};
use crate::prelude::*;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ConfigError> {
        let non_zero = NonZeroU16::new(value).ok_or(ConfigError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ConfigError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ConfigError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        let non_zero = NonZeroU8::new(value).ok_or(ConfigError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ConfigError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weekday in the platform numbering, `1..=7` with Sunday = 1 and Saturday = 7.
///
/// Used both for the weekday of a date and for the calendar's first day of the
/// week. Uses `NonZeroU8` internally, so 0 is not a valid weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "u8", into = "u8")]
#[display(fmt = "{}", _0)]
pub struct WeekdayNumber(NonZeroU8);

impl WeekdayNumber {
    pub const SUNDAY: Self = Self(NonZeroU8::MIN);

    /// Creates a new weekday number, validating that it's in `1..=DAYS_IN_WEEK`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidWeekday` if the value is 0 or > 7.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        let non_zero = NonZeroU8::new(value).ok_or(ConfigError::InvalidWeekday(value))?;
        if value > DAYS_IN_WEEK {
            return Err(ConfigError::InvalidWeekday(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the weekday number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of days from `first` forward to `self`, always in `0..DAYS_IN_WEEK`
    pub const fn days_since(self, first: Self) -> u8 {
        (self.get() + DAYS_IN_WEEK - first.get()) % DAYS_IN_WEEK
    }
}

impl Default for WeekdayNumber {
    fn default() -> Self {
        Self::SUNDAY
    }
}

impl From<Weekday> for WeekdayNumber {
    fn from(weekday: Weekday) -> Self {
        // number_from_sunday is 1..=7
        let value = u8::try_from(weekday.number_from_sunday()).unwrap_or(SUNDAY);
        NonZeroU8::new(value).map_or(Self::SUNDAY, Self)
    }
}

impl From<WeekdayNumber> for Weekday {
    fn from(number: WeekdayNumber) -> Self {
        // Weekday counts from Monday = 0, so Sunday (1) maps to 6
        Self::try_from((number.get() + DAYS_IN_WEEK - 2) % DAYS_IN_WEEK).unwrap_or(Self::Sun)
    }
}

impl TryFrom<u8> for WeekdayNumber {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekdayNumber> for u8 {
    fn from(weekday: WeekdayNumber) -> Self {
        weekday.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ConfigError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ConfigError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_try_from_and_into_u16() {
        let year: Year = 2024.try_into().expect("2024 is a valid year");
        assert_eq!(year.get(), 2024);
        assert_eq!(u16::from(year), 2024);
        assert_eq!(year.to_string(), "2024");
    }

    #[test]
    fn test_month_bounds() {
        assert!(Month::new(1).is_ok());
        assert!(Month::new(12).is_ok());
        assert!(matches!(Month::new(0), Err(ConfigError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ConfigError::InvalidMonth(13))));
    }

    #[test]
    fn test_weekday_number_bounds() {
        assert!(WeekdayNumber::new(1).is_ok());
        assert!(WeekdayNumber::new(7).is_ok());
        assert!(matches!(WeekdayNumber::new(0), Err(ConfigError::InvalidWeekday(0))));
        assert!(matches!(WeekdayNumber::new(8), Err(ConfigError::InvalidWeekday(8))));
        assert_eq!(WeekdayNumber::default(), WeekdayNumber::SUNDAY);
        assert_eq!(WeekdayNumber::SUNDAY.to_string(), "1");
    }

    #[test]
    fn test_weekday_number_chrono_conversion() {
        struct TestCase {
            weekday: Weekday,
            number:  u8,
        }

        let cases = [
            TestCase { weekday: Weekday::Sun, number: 1 },
            TestCase { weekday: Weekday::Mon, number: 2 },
            TestCase { weekday: Weekday::Wed, number: 4 },
            TestCase { weekday: Weekday::Sat, number: 7 },
        ];

        for case in &cases {
            let number = WeekdayNumber::from(case.weekday);
            assert_eq!(number.get(), case.number, "number of {}", case.weekday);
            assert_eq!(Weekday::from(number), case.weekday, "weekday of {}", case.number);
        }
    }

    #[test]
    fn test_days_since_wraps_around_the_week() {
        let sunday = WeekdayNumber::SUNDAY;
        let monday = WeekdayNumber::new(2).expect("Monday is weekday 2");
        let saturday = WeekdayNumber::new(7).expect("Saturday is weekday 7");

        assert_eq!(sunday.days_since(sunday), 0);
        assert_eq!(monday.days_since(sunday), 1);
        assert_eq!(sunday.days_since(monday), 6);
        assert_eq!(sunday.days_since(saturday), 1);
        assert_eq!(saturday.days_since(sunday), 6);
    }

    #[test]
    fn test_serde_rejects_out_of_range_values() {
        let month: Month = serde_json::from_str("7").expect("7 deserializes as a month");
        assert_eq!(month.get(), 7);
        assert!(serde_json::from_str::<Month>("13").is_err());
        assert!(serde_json::from_str::<Year>("0").is_err());
        assert!(serde_json::from_str::<WeekdayNumber>("8").is_err());
    }
}

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Number of cells in one grid row
pub const DAYS_IN_WEEK: u8 = 7;

/// Number of sections spanned by one year of the window
pub const MONTHS_IN_YEAR: u32 = 12;

/// Weekday number of Sunday (weekdays are numbered 1..=7 starting on Sunday)
pub const SUNDAY: u8 = 1;
/// Weekday number of Monday
pub const MONDAY: u8 = 2;
/// Weekday number of Saturday
pub const SATURDAY: u8 = 7;

/// Separates start and end in the text form of a selection (ISO 8601 interval)
pub const RANGE_SEPARATOR: char = '/';

/// Earliest accepted birth year (inclusive)
pub const MIN_YEAR: u16 = 1900;

/// Latest accepted birth year (inclusive)
pub const MAX_YEAR: u16 = 2100;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Upper clamp bound for the day field while the month or year field
/// does not yet hold a valid value
pub const DAY_CLAMP_FALLBACK: u8 = 31;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Rendered width of the day field (digits)
pub const DAY_WIDTH: usize = 2;
/// Rendered width of the month field (digits)
pub const MONTH_WIDTH: usize = 2;
/// Rendered width of the year field (digits)
pub const YEAR_WIDTH: usize = 4;
/// Maximum characters kept in the name field
pub const NAME_MAX_CHARS: usize = 24;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

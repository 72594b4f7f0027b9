use crate::FieldError;
use crate::consts::{
    CENTURY_CYCLE, DAY_WIDTH, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR, MONTH_WIDTH, YEAR_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the accepted birth range
/// `MIN_YEAR..=MAX_YEAR` (1900..=2100).
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it falls within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidYear` if the value is outside the accepted range.
    pub fn new(value: u16) -> Result<Self, FieldError> {
        let non_zero = NonZeroU16::new(value).ok_or(FieldError::InvalidYear(value))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(FieldError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Parses a raw year field: exactly `YEAR_WIDTH` ASCII digits, in range.
    ///
    /// # Errors
    /// Returns `FieldError::Empty` for an empty field, `FieldError::InvalidFormat`
    /// if the text is not exactly four digits, and `FieldError::InvalidYear` if
    /// the parsed value is outside the accepted range.
    pub fn from_field(raw: &str) -> Result<Self, FieldError> {
        Self::new(parse_field(raw, YEAR_WIDTH)?)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = FieldError;

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
    /// Returns `FieldError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, FieldError> {
        let non_zero = NonZeroU8::new(value).ok_or(FieldError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(FieldError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Parses a raw month field: exactly `MONTH_WIDTH` ASCII digits, 01..=12.
    ///
    /// # Errors
    /// Returns `FieldError::Empty` for an empty field, `FieldError::InvalidFormat`
    /// if the text is not exactly two digits, and `FieldError::InvalidMonth` if
    /// the parsed value is 0 or > `MAX_MONTH`.
    pub fn from_field(raw: &str) -> Result<Self, FieldError> {
        let value = u8::try_from(parse_field(raw, MONTH_WIDTH)?)
            .map_err(|_| FieldError::InvalidFormat(raw.to_owned()))?;
        Self::new(value)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = FieldError;

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

/// A day value guaranteed to be valid for a given year and month.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// There is no context-free constructor: a day is only valid relative to a
/// specific month and year, so `Day` serializes but never deserializes on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `FieldError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, FieldError> {
        let non_zero = NonZeroU8::new(value).ok_or(FieldError::InvalidDay {
            month,
            day: value,
            year,
        })?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(FieldError::InvalidDay {
                month,
                day: value,
                year,
            });
        }

        Ok(Self(non_zero))
    }

    /// Parses a raw day field against its month and year fields: exactly
    /// `DAY_WIDTH` ASCII digits, in range for the month the other two fields
    /// denote.
    ///
    /// # Errors
    /// Returns the day field's own `FieldError::Empty`/`InvalidFormat` first,
    /// then whatever error the month or year field produces, then
    /// `FieldError::InvalidDay` for an out-of-range day.
    pub fn from_fields(raw: &str, month_raw: &str, year_raw: &str) -> Result<Self, FieldError> {
        let value = u8::try_from(parse_field(raw, DAY_WIDTH)?)
            .map_err(|_| FieldError::InvalidFormat(raw.to_owned()))?;
        let month = Month::from_field(month_raw)?;
        let year = Year::from_field(year_raw)?;
        Self::new(value, year.get(), month.get())
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Checks width and digit content of a raw field, then parses it.
/// Signs and whitespace are rejected here, not tolerated by the number parser.
fn parse_field(raw: &str, width: usize) -> Result<u16, FieldError> {
    if raw.is_empty() {
        return Err(FieldError::Empty);
    }
    if raw.len() != width || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::InvalidFormat(raw.to_owned()));
    }
    raw.parse::<u16>()
        .map_err(|_| FieldError::InvalidFormat(raw.to_owned()))
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Whether a raw year field holds exactly four digits within the accepted range.
#[must_use]
pub fn is_valid_year(raw: &str) -> bool {
    Year::from_field(raw).is_ok()
}

/// Whether a raw month field holds exactly two digits in 01..=12.
#[must_use]
pub fn is_valid_month(raw: &str) -> bool {
    Month::from_field(raw).is_ok()
}

/// Whether the three raw fields jointly denote a calendar-valid date.
///
/// Day validity is a cross-field predicate: an invalid month or year field
/// makes every day invalid, while the month and year fields stand alone.
#[must_use]
pub fn is_valid_day(raw: &str, month_raw: &str, year_raw: &str) -> bool {
    Day::from_fields(raw, month_raw, year_raw).is_ok()
}

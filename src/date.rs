use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Day, Month, Year};
use crate::{DATE_SEPARATOR, FieldError, prelude::*};

/// A complete, calendar-validated birthdate.
///
/// This is the typed value the three form fields jointly denote, for hosts
/// that want more than three strings back. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct Birthdate {
    year: Year,
    month: Month,
    day: Day,
}

/// Error type for birthdate assembly and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BirthdateError {
    /// A component field failed validation.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// The textual form is not `YYYY-MM-DD`.
    #[error("Invalid birthdate format: {0}")]
    InvalidFormat(String),
}

impl Birthdate {
    /// Creates a birthdate from already-validated components, re-checking the
    /// day against this particular month and year.
    ///
    /// # Errors
    /// Returns `BirthdateError::Field` if the day does not exist in the given
    /// month of the given year.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, BirthdateError> {
        // A typed Day proves validity for *some* month/year pair, not this one.
        let day = Day::new(day.get(), year.get(), month.get())?;
        Ok(Self { year, month, day })
    }

    /// Assembles a birthdate from the three raw field strings, using the same
    /// validation path as the form.
    ///
    /// # Errors
    /// Returns `BirthdateError::Field` with the first failing field's error.
    pub fn from_fields(
        day_raw: &str,
        month_raw: &str,
        year_raw: &str,
    ) -> Result<Self, BirthdateError> {
        let day = Day::from_fields(day_raw, month_raw, year_raw)?;
        let month = Month::from_field(month_raw)?;
        let year = Year::from_field(year_raw)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year component
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Returns the month component
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day component
    pub const fn day(&self) -> Day {
        self.day
    }
}

impl FromStr for Birthdate {
    type Err = BirthdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(BirthdateError::InvalidFormat(s.to_owned()));
        }
        Self::from_fields(parts[2], parts[1], parts[0])
    }
}

impl Serialize for Birthdate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Birthdate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

mod consts;
mod date;
mod prelude;
mod sanitize;
mod types;

pub use consts::*;
pub use date::{Birthdate, BirthdateError};
pub use sanitize::{sanitize_digits, sanitize_name};
pub use types::{
    Day, Month, Year, days_in_month, is_leap_year, is_valid_day, is_valid_month, is_valid_year,
};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Error produced when a single form field fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FieldError {
    #[display(fmt = "Invalid field value: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty field")]
    Empty,
}

impl std::error::Error for FieldError {}

/// One editable value in the onboarding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "name")]
    Name,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

/// A discrete input event delivered by the hosting UI.
///
/// Events arrive one at a time; every transition completes synchronously
/// before the next event is seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The field's text changed; `text` is the full new value.
    Edit { field: Field, text: String },
    /// The field lost input focus.
    Blur(Field),
    /// The submit control was pressed.
    Submit,
}

/// Outbound handoff emitted by a successful submit.
///
/// Carries no data: the destination screen is not parameterized by the
/// entered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Proceed,
}

/// Per-field error indicators for the hosting UI to render.
///
/// Each flag reflects only the most recent check of its own field; flags are
/// not kept mutually consistent mid-edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorFlags {
    pub name: bool,
    pub day: bool,
    pub month: bool,
    pub year: bool,
}

impl ErrorFlags {
    /// Whether any field is currently flagged
    #[must_use]
    pub const fn any(self) -> bool {
        self.name || self.day || self.month || self.year
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = false,
            Field::Day => self.day = false,
            Field::Month => self.month = false,
            Field::Year => self.year = false,
        }
    }
}

/// The onboarding form: four sanitized field values plus their error flags,
/// advanced exclusively through [`FormState::apply`].
///
/// The default value is the empty form. Values live only as long as the
/// screen; serde derives exist so a host can snapshot and restore them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormState {
    name: String,
    day: String,
    month: String,
    year: String,
    #[serde(default)]
    errors: ErrorFlags,
}

impl FormState {
    /// An empty form with no errors flagged
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sanitized name field
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current sanitized day field
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Current sanitized month field
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Current sanitized year field
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Current error flags
    pub const fn errors(&self) -> ErrorFlags {
        self.errors
    }

    /// Whether the form may be submitted right now: trimmed name non-empty
    /// and the three date fields jointly calendar-valid.
    ///
    /// Recomputed from the current values on every call.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && is_valid_day(&self.day, &self.month, &self.year)
    }

    /// The typed birthdate the three date fields currently denote.
    ///
    /// # Errors
    /// Returns the first failing field's error while the fields do not form a
    /// valid date.
    pub fn birthdate(&self) -> Result<Birthdate, BirthdateError> {
        Birthdate::from_fields(&self.day, &self.month, &self.year)
    }

    /// Advances the form by one event and returns the next state, plus the
    /// proceed signal when a submit passes the gate.
    ///
    /// Edits sanitize and store the new text. Blur normalizes the blurred
    /// date field in place (clamp into range, zero-pad), cascading onto the
    /// day field when the month or year changed underneath it. Submit
    /// re-checks every field, rewrites the error flags, and emits
    /// [`Signal::Proceed`] only when the name and the cross-field day check
    /// both pass.
    #[must_use]
    pub fn apply(mut self, event: Event) -> (Self, Option<Signal>) {
        match event {
            Event::Edit { field, text } => {
                self.edit(field, &text);
                (self, None)
            }
            Event::Blur(field) => {
                self.blur(field);
                (self, None)
            }
            Event::Submit => {
                let signal = self.submit();
                (self, signal)
            }
        }
    }

    fn edit(&mut self, field: Field, text: &str) {
        match field {
            Field::Name => self.name = sanitize_name(text),
            Field::Day => self.day = sanitize_digits(text, DAY_WIDTH),
            Field::Month => self.month = sanitize_digits(text, MONTH_WIDTH),
            Field::Year => self.year = sanitize_digits(text, YEAR_WIDTH),
        }
        // Editing retracts the field's last error; the next blur or submit re-checks it.
        self.errors.clear(field);
    }

    fn blur(&mut self, field: Field) {
        match field {
            Field::Name => {}
            Field::Day => {
                if self.normalize_day() {
                    self.errors.clear(Field::Day);
                }
            }
            Field::Month => {
                if self.normalize_month() {
                    self.errors.clear(Field::Month);
                    self.cascade_day(Field::Month);
                }
            }
            Field::Year => {
                if self.normalize_year() {
                    self.errors.clear(Field::Year);
                    self.cascade_day(Field::Year);
                }
            }
        }
    }

    /// Clamp bound for the day field given the current month/year fields.
    fn day_limit(&self) -> u8 {
        match (Month::from_field(&self.month), Year::from_field(&self.year)) {
            (Ok(month), Ok(year)) => days_in_month(year.get(), month.get()),
            _ => DAY_CLAMP_FALLBACK,
        }
    }

    /// Returns false when the field was empty and left untouched.
    fn normalize_day(&mut self) -> bool {
        let Ok(value) = self.day.parse::<u8>() else {
            return false;
        };
        let clamped = value.clamp(MIN_DAY, self.day_limit());
        self.day = format!("{clamped:02}");
        true
    }

    fn normalize_month(&mut self) -> bool {
        let Ok(value) = self.month.parse::<u8>() else {
            return false;
        };
        let clamped = value.clamp(1, MAX_MONTH);
        self.month = format!("{clamped:02}");
        true
    }

    fn normalize_year(&mut self) -> bool {
        let Ok(value) = self.year.parse::<u16>() else {
            return false;
        };
        let clamped = value.clamp(MIN_YEAR, MAX_YEAR);
        self.year = format!("{clamped:04}");
        true
    }

    /// Re-clamps a non-empty day after its month or year context changed.
    /// A month switch can silently shorten the day (31 becomes 30 for April).
    fn cascade_day(&mut self, source: Field) {
        if self.day.is_empty() {
            return;
        }
        if self.normalize_day() {
            self.errors.clear(Field::Day);
            trace!(day = %self.day, "day re-clamped after {source} blur");
        }
    }

    fn submit(&mut self) -> Option<Signal> {
        let name_ok = !self.name.trim().is_empty();
        let month_ok = is_valid_month(&self.month);
        let year_ok = is_valid_year(&self.year);
        let day_ok = is_valid_day(&self.day, &self.month, &self.year);

        self.errors = ErrorFlags {
            name: !name_ok,
            // The day flag stays quiet while month or year is at fault, so
            // the UI never double-flags a day failing only through context.
            day: self.day.is_empty() || (month_ok && year_ok && !day_ok),
            month: !month_ok,
            year: !year_ok,
        };

        if name_ok && day_ok {
            debug!("submit accepted");
            Some(Signal::Proceed)
        } else {
            debug!(flags = ?self.errors, "submit rejected");
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::types::{Day, Month, Year};

    pub fn year(value: u16) -> Year {
        Year::new(value).expect("test year should be valid")
    }

    pub fn month(value: u8) -> Month {
        Month::new(value).expect("test month should be valid")
    }

    pub fn day(value: u8, year: u16, month: u8) -> Day {
        Day::new(value, year, month).expect("test day should be valid")
    }
}

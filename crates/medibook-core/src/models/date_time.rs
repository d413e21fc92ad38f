//! Appointment date-times.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use super::{ModelError, ValueObject};

/// chrono format of an appointment date-time: `yyyy-MM-dd HH:mm`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Calendar date and wall-clock time of an appointment, to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppointmentDateTime(NaiveDateTime);

impl AppointmentDateTime {
    /// Parse and validate a date-time string.
    pub fn new(raw: &str) -> Result<Self, ModelError> {
        raw.parse()
    }

    /// The underlying chrono value.
    pub fn value(&self) -> NaiveDateTime {
        self.0
    }

    /// Strict parse: chrono rejects impossible dates, and the re-format check
    /// rejects fields that are not zero-padded (chrono alone accepts `11:0`).
    fn parse_strict(raw: &str) -> Option<NaiveDateTime> {
        let parsed = NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT).ok()?;
        (parsed.format(DATE_TIME_FORMAT).to_string() == raw).then_some(parsed)
    }
}

impl ValueObject for AppointmentDateTime {
    const TYPE_NAME: &'static str = "AppointmentDateTime";

    const MESSAGE_CONSTRAINTS: &'static str = "Appointment date-time should be in the format \
        yyyy-MM-dd HH:mm and must be a valid calendar date and time";

    fn is_valid(raw: &str) -> bool {
        Self::parse_strict(raw).is_some()
    }
}

impl FromStr for AppointmentDateTime {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
            .map(Self)
            .ok_or(ModelError::Constraint(Self::MESSAGE_CONSTRAINTS))
    }
}

impl fmt::Display for AppointmentDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

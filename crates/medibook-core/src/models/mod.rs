//! Domain models for the appointment book.

mod appointment;
mod book;
mod date_time;
mod nric;

pub use appointment::*;
pub use book::*;
pub use date_time::*;
pub use nric::*;

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Model errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A raw value failed its type's format check; carries the type's constraint message.
    #[error("{0}")]
    Constraint(&'static str),

    #[error("Operation would result in duplicate appointments")]
    DuplicateAppointment,

    #[error("Appointment not found")]
    AppointmentNotFound,
}

pub type ModelResult<T> = Result<T, ModelError>;

/// A string-backed value type whose only instances are ones that passed validation.
///
/// Parsing (`FromStr`) is the sole way to obtain a value, and `Display` yields the
/// canonical string that parses back to an equal value.
pub trait ValueObject: FromStr<Err = ModelError> + Display {
    /// Type name reported when a required field of this type is absent.
    const TYPE_NAME: &'static str;

    /// Message reported when a present value fails validation.
    const MESSAGE_CONSTRAINTS: &'static str;

    /// Format predicate.
    fn is_valid(raw: &str) -> bool;
}

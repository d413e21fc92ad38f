//! JSON storage layer for the appointment book.

mod appointment;
mod book;
mod json_file;

pub use appointment::*;
pub use book::*;
pub use json_file::*;

use thiserror::Error;

/// Data file used when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "data/appointmentbook.json";

/// A persisted value that cannot become a valid model object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalValueError {
    #[error("{field}'s field is missing!")]
    MissingField { field: &'static str },

    /// Message is the constraint description of the offending value type.
    #[error("{0}")]
    Constraint(&'static str),

    #[error("Appointments list contains duplicate appointment(s).")]
    DuplicateAppointment,
}

impl IllegalValueError {
    /// Missing-field error naming the field's value type, e.g. `"Nric"`.
    pub fn missing_field(field: &'static str) -> Self {
        IllegalValueError::MissingField { field }
    }
}

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Illegal value in data file: {0}")]
    IllegalValue(#[from] IllegalValueError),
}

pub type StorageResult<T> = Result<T, StorageError>;

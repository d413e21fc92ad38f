//! Persisted form of the whole appointment book.

use serde::{Deserialize, Serialize};

use super::{IllegalValueError, JsonAdaptedAppointment};
use crate::models::{AppointmentBook, ModelError};

/// The appointment book as stored in the data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonSerializableAppointmentBook {
    #[serde(default)]
    pub appointments: Vec<JsonAdaptedAppointment>,
}

impl JsonSerializableAppointmentBook {
    /// Convert to an [`AppointmentBook`], keeping record order.
    ///
    /// The first invalid record wins; a record repeating an earlier one is rejected.
    pub fn to_model_type(&self) -> Result<AppointmentBook, IllegalValueError> {
        let mut book = AppointmentBook::new();
        for record in &self.appointments {
            let appointment = record.to_model_type()?;
            book.add(appointment).map_err(|err| match err {
                ModelError::Constraint(message) => IllegalValueError::Constraint(message),
                _ => IllegalValueError::DuplicateAppointment,
            })?;
        }
        Ok(book)
    }
}

impl From<&AppointmentBook> for JsonSerializableAppointmentBook {
    fn from(book: &AppointmentBook) -> Self {
        Self {
            appointments: book.iter().map(JsonAdaptedAppointment::from).collect(),
        }
    }
}

//! Persisted form of a single appointment.

use serde::{Deserialize, Serialize};

use super::IllegalValueError;
use crate::models::{Appointment, AppointmentDateTime, ModelError, Nric, ValueObject};

/// An appointment as stored: three optional strings, validated on conversion.
///
/// A missing JSON key and `null` both read as an absent field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonAdaptedAppointment {
    #[serde(default)]
    pub doctor_nric: Option<String>,
    #[serde(default)]
    pub patient_nric: Option<String>,
    #[serde(default)]
    pub date_time: Option<String>,
}

impl JsonAdaptedAppointment {
    /// Build a record from raw field values in `(doctor, patient, date_time)` order.
    pub fn new(
        doctor_nric: Option<String>,
        patient_nric: Option<String>,
        date_time: Option<String>,
    ) -> Self {
        Self {
            doctor_nric,
            patient_nric,
            date_time,
        }
    }

    /// Convert to a validated [`Appointment`].
    ///
    /// Fields are checked doctor, then patient, then date-time; the first
    /// absent or invalid field is reported and nothing after it is examined.
    pub fn to_model_type(&self) -> Result<Appointment, IllegalValueError> {
        log::trace!("Converting stored appointment {:?}", self);

        let doctor_nric: Nric = require(self.doctor_nric.as_deref())?;
        let patient_nric: Nric = require(self.patient_nric.as_deref())?;
        let date_time: AppointmentDateTime = require(self.date_time.as_deref())?;

        Ok(Appointment::new(doctor_nric, patient_nric, date_time))
    }
}

impl From<&Appointment> for JsonAdaptedAppointment {
    fn from(appointment: &Appointment) -> Self {
        Self {
            doctor_nric: Some(appointment.doctor_nric().to_string()),
            patient_nric: Some(appointment.patient_nric().to_string()),
            date_time: Some(appointment.date_time().to_string()),
        }
    }
}

/// One validation step: absent, then format, then construction.
fn require<T: ValueObject>(raw: Option<&str>) -> Result<T, IllegalValueError> {
    let raw = raw.ok_or(IllegalValueError::missing_field(T::TYPE_NAME))?;
    if !T::is_valid(raw) {
        return Err(IllegalValueError::Constraint(T::MESSAGE_CONSTRAINTS));
    }
    raw.parse::<T>().map_err(|err| match err {
        ModelError::Constraint(message) => IllegalValueError::Constraint(message),
        _ => IllegalValueError::Constraint(T::MESSAGE_CONSTRAINTS),
    })
}

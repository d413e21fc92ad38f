//! Appointment model.

use std::fmt;

use super::{AppointmentDateTime, Nric};

/// An appointment between a doctor and a patient at a given date-time.
///
/// Immutable; edits produce a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Appointment {
    doctor_nric: Nric,
    patient_nric: Nric,
    date_time: AppointmentDateTime,
}

impl Appointment {
    /// Create an appointment from already-validated fields.
    pub fn new(doctor_nric: Nric, patient_nric: Nric, date_time: AppointmentDateTime) -> Self {
        Self {
            doctor_nric,
            patient_nric,
            date_time,
        }
    }

    pub fn doctor_nric(&self) -> &Nric {
        &self.doctor_nric
    }

    pub fn patient_nric(&self) -> &Nric {
        &self.patient_nric
    }

    pub fn date_time(&self) -> &AppointmentDateTime {
        &self.date_time
    }

    /// Identity used for uniqueness in an appointment book.
    pub fn is_same_appointment(&self, other: &Appointment) -> bool {
        self == other
    }

    /// Whether `nric` is the doctor or the patient of this appointment.
    pub fn involves(&self, nric: &Nric) -> bool {
        &self.doctor_nric == nric || &self.patient_nric == nric
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Doctor: {}; Patient: {}",
            self.date_time, self.doctor_nric, self.patient_nric
        )
    }
}

//! Fixture builders for tests.

use crate::logic::EditAppointmentDescriptor;
use crate::models::{Appointment, AppointmentDateTime, ModelResult, Nric};

pub const DEFAULT_DOCTOR_NRIC: &str = "S1234567A";
pub const DEFAULT_PATIENT_NRIC: &str = "T7654321B";
pub const DEFAULT_DATE_TIME: &str = "2024-03-15 14:30";

/// Builds [`Appointment`]s from raw strings, starting from the defaults above.
#[derive(Debug, Clone)]
pub struct AppointmentBuilder {
    doctor_nric: String,
    patient_nric: String,
    date_time: String,
}

impl Default for AppointmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentBuilder {
    pub fn new() -> Self {
        Self {
            doctor_nric: DEFAULT_DOCTOR_NRIC.into(),
            patient_nric: DEFAULT_PATIENT_NRIC.into(),
            date_time: DEFAULT_DATE_TIME.into(),
        }
    }

    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            doctor_nric: appointment.doctor_nric().to_string(),
            patient_nric: appointment.patient_nric().to_string(),
            date_time: appointment.date_time().to_string(),
        }
    }

    pub fn with_doctor_nric(mut self, doctor_nric: &str) -> Self {
        self.doctor_nric = doctor_nric.into();
        self
    }

    pub fn with_patient_nric(mut self, patient_nric: &str) -> Self {
        self.patient_nric = patient_nric.into();
        self
    }

    pub fn with_date_time(mut self, date_time: &str) -> Self {
        self.date_time = date_time.into();
        self
    }

    /// Validate the accumulated fields and build the appointment.
    pub fn build(&self) -> ModelResult<Appointment> {
        Ok(Appointment::new(
            Nric::new(&self.doctor_nric)?,
            Nric::new(&self.patient_nric)?,
            AppointmentDateTime::new(&self.date_time)?,
        ))
    }
}

/// Builds [`EditAppointmentDescriptor`]s.
#[derive(Debug, Clone, Default)]
pub struct EditAppointmentDescriptorBuilder {
    descriptor: EditAppointmentDescriptor,
}

impl EditAppointmentDescriptorBuilder {
    /// Start with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an independent copy of `descriptor`.
    pub fn from_descriptor(descriptor: &EditAppointmentDescriptor) -> Self {
        Self {
            descriptor: descriptor.clone(),
        }
    }

    /// Start with every field set to `appointment`'s current values.
    pub fn from_appointment(appointment: &Appointment) -> Self {
        let mut descriptor = EditAppointmentDescriptor::new();
        descriptor.set_date_time(*appointment.date_time());
        descriptor.set_doctor_nric(appointment.doctor_nric().clone());
        descriptor.set_patient_nric(appointment.patient_nric().clone());
        Self { descriptor }
    }

    pub fn with_date_time(mut self, date_time: &str) -> ModelResult<Self> {
        self.descriptor
            .set_date_time(AppointmentDateTime::new(date_time)?);
        Ok(self)
    }

    pub fn with_doctor_nric(mut self, doctor_nric: &str) -> ModelResult<Self> {
        self.descriptor.set_doctor_nric(Nric::new(doctor_nric)?);
        Ok(self)
    }

    pub fn with_patient_nric(mut self, patient_nric: &str) -> ModelResult<Self> {
        self.descriptor.set_patient_nric(Nric::new(patient_nric)?);
        Ok(self)
    }

    pub fn build(self) -> EditAppointmentDescriptor {
        self.descriptor
    }
}

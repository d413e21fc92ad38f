//! Editing an existing appointment.

use super::{CommandError, CommandOutcome, CommandResult};
use crate::models::{Appointment, AppointmentBook, AppointmentDateTime, ModelError, Nric};

/// Partial update for an appointment. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditAppointmentDescriptor {
    date_time: Option<AppointmentDateTime>,
    doctor_nric: Option<Nric>,
    patient_nric: Option<Nric>,
}

impl EditAppointmentDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_date_time(&mut self, date_time: AppointmentDateTime) {
        self.date_time = Some(date_time);
    }

    pub fn set_doctor_nric(&mut self, doctor_nric: Nric) {
        self.doctor_nric = Some(doctor_nric);
    }

    pub fn set_patient_nric(&mut self, patient_nric: Nric) {
        self.patient_nric = Some(patient_nric);
    }

    pub fn date_time(&self) -> Option<&AppointmentDateTime> {
        self.date_time.as_ref()
    }

    pub fn doctor_nric(&self) -> Option<&Nric> {
        self.doctor_nric.as_ref()
    }

    pub fn patient_nric(&self) -> Option<&Nric> {
        self.patient_nric.as_ref()
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.date_time.is_some() || self.doctor_nric.is_some() || self.patient_nric.is_some()
    }

    /// The appointment that results from applying this descriptor to `original`.
    pub fn apply_to(&self, original: &Appointment) -> Appointment {
        Appointment::new(
            self.doctor_nric
                .clone()
                .unwrap_or_else(|| original.doctor_nric().clone()),
            self.patient_nric
                .clone()
                .unwrap_or_else(|| original.patient_nric().clone()),
            self.date_time.unwrap_or(*original.date_time()),
        )
    }
}

/// Edits the appointment at a zero-based index in the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditAppointmentCommand {
    index: usize,
    descriptor: EditAppointmentDescriptor,
}

impl EditAppointmentCommand {
    pub fn new(index: usize, descriptor: EditAppointmentDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, book: &mut AppointmentBook) -> CommandResult<CommandOutcome> {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NotEdited);
        }

        let original = book.get(self.index).ok_or(CommandError::InvalidIndex)?;
        let edited = self.descriptor.apply_to(original);

        book.set(self.index, edited.clone()).map_err(|err| match err {
            ModelError::AppointmentNotFound => CommandError::InvalidIndex,
            _ => CommandError::DuplicateAppointment,
        })?;

        log::info!("Edited appointment {}: {}", self.index, edited);
        Ok(CommandOutcome::new(format!("Edited Appointment: {}", edited)))
    }
}

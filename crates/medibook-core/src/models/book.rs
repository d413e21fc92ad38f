//! In-memory appointment book.

use super::{Appointment, ModelError, ModelResult, Nric};

/// An ordered list of appointments with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an appointment to the end of the book.
    pub fn add(&mut self, appointment: Appointment) -> ModelResult<()> {
        if self.contains(&appointment) {
            return Err(ModelError::DuplicateAppointment);
        }
        self.appointments.push(appointment);
        Ok(())
    }

    /// Replace the appointment at `index`.
    ///
    /// The replacement may equal the appointment it replaces, but no other entry.
    pub fn set(&mut self, index: usize, edited: Appointment) -> ModelResult<()> {
        if index >= self.appointments.len() {
            return Err(ModelError::AppointmentNotFound);
        }
        let clashes = self
            .appointments
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.is_same_appointment(&edited));
        if clashes {
            return Err(ModelError::DuplicateAppointment);
        }
        self.appointments[index] = edited;
        Ok(())
    }

    /// Remove an appointment.
    pub fn remove(&mut self, appointment: &Appointment) -> ModelResult<()> {
        let position = self
            .appointments
            .iter()
            .position(|a| a.is_same_appointment(appointment))
            .ok_or(ModelError::AppointmentNotFound)?;
        self.appointments.remove(position);
        Ok(())
    }

    pub fn contains(&self, appointment: &Appointment) -> bool {
        self.appointments
            .iter()
            .any(|a| a.is_same_appointment(appointment))
    }

    pub fn get(&self, index: usize) -> Option<&Appointment> {
        self.appointments.get(index)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    /// Appointments where `nric` is either the doctor or the patient.
    pub fn appointments_for<'a>(&'a self, nric: &'a Nric) -> impl Iterator<Item = &'a Appointment> {
        self.appointments.iter().filter(move |a| a.involves(nric))
    }
}

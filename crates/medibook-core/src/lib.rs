//! Medibook Core Library
//!
//! Appointments between doctors and patients, identified by NRIC, with a
//! validated JSON storage format.
//!
//! # Architecture
//!
//! ```text
//!   data file (JSON)
//!         │
//!   JsonBookStorage::read_book
//!         │
//!   JsonSerializableAppointmentBook ── JsonAdaptedAppointment::to_model_type
//!         │                                (doctor → patient → date-time)
//!         ▼
//!   AppointmentBook  ◄── EditAppointmentCommand (EditAppointmentDescriptor)
//!         │
//!   JsonBookStorage::save_book
//!         ▼
//!   data file (JSON)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Value objects (`Nric`, `AppointmentDateTime`), `Appointment`, `AppointmentBook`
//! - [`storage`]: Persisted forms and the JSON file storage
//! - [`logic`]: Edit descriptor and edit command
//! - [`testutil`]: Fixture builders

pub mod logic;
pub mod models;
pub mod storage;
pub mod testutil;

// Re-export commonly used types
pub use logic::{CommandError, CommandOutcome, EditAppointmentCommand, EditAppointmentDescriptor};
pub use models::{
    Appointment, AppointmentBook, AppointmentDateTime, ModelError, Nric, ValueObject,
};
pub use storage::{
    IllegalValueError, JsonAdaptedAppointment, JsonBookStorage, JsonSerializableAppointmentBook,
    StorageError,
};

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum MedibookError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Command(#[from] CommandError),

    #[error("{0}")]
    Model(#[from] ModelError),
}

// =========================================================================
// Manager
// =========================================================================

/// An appointment book bound to its data file.
#[derive(Debug)]
pub struct AppointmentManager {
    storage: JsonBookStorage,
    book: AppointmentBook,
}

impl AppointmentManager {
    /// Load the book from `storage`; a missing data file starts an empty book.
    pub fn load(storage: JsonBookStorage) -> Result<Self, MedibookError> {
        let book = match storage.read_book()? {
            Some(book) => book,
            None => {
                log::info!(
                    "Starting with an empty appointment book at {}",
                    storage.file_path().display()
                );
                AppointmentBook::new()
            }
        };
        Ok(Self { storage, book })
    }

    pub fn book(&self) -> &AppointmentBook {
        &self.book
    }

    /// Add an appointment and persist the book.
    pub fn add_appointment(&mut self, appointment: Appointment) -> Result<(), MedibookError> {
        self.book.add(appointment)?;
        self.save()
    }

    /// Remove an appointment and persist the book.
    pub fn delete_appointment(&mut self, appointment: &Appointment) -> Result<(), MedibookError> {
        self.book.remove(appointment)?;
        self.save()
    }

    /// Run an edit and persist the book.
    pub fn edit_appointment(
        &mut self,
        command: &EditAppointmentCommand,
    ) -> Result<CommandOutcome, MedibookError> {
        let outcome = command.execute(&mut self.book)?;
        self.save()?;
        Ok(outcome)
    }

    pub fn save(&self) -> Result<(), MedibookError> {
        self.storage.save_book(&self.book)?;
        Ok(())
    }
}

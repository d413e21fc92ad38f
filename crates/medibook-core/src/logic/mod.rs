//! Commands that change the appointment book.

mod edit;

pub use edit::*;

use thiserror::Error;

/// Command errors. Messages are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("At least one field to edit must be provided.")]
    NotEdited,

    #[error("The appointment index provided is invalid")]
    InvalidIndex,

    #[error("This appointment already exists in the appointment book.")]
    DuplicateAppointment,
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Feedback to show the user.
    pub feedback: String,
}

impl CommandOutcome {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

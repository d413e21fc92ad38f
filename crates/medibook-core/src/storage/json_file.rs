//! Appointment book stored as a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use super::{JsonSerializableAppointmentBook, StorageResult, DEFAULT_DATA_FILE};
use crate::models::AppointmentBook;

/// Reads and writes the appointment book at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonBookStorage {
    file_path: PathBuf,
}

impl Default for JsonBookStorage {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl JsonBookStorage {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read the book. Returns `Ok(None)` if the data file does not exist.
    pub fn read_book(&self) -> StorageResult<Option<AppointmentBook>> {
        if !self.file_path.exists() {
            log::info!("Data file not found: {}", self.file_path.display());
            return Ok(None);
        }

        log::debug!("Reading appointment book from {}", self.file_path.display());
        let contents = fs::read_to_string(&self.file_path)?;
        let stored: JsonSerializableAppointmentBook = serde_json::from_str(&contents)?;

        match stored.to_model_type() {
            Ok(book) => Ok(Some(book)),
            Err(err) => {
                log::warn!(
                    "Illegal values found in {}: {}",
                    self.file_path.display(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Write the book, creating parent directories as needed.
    pub fn save_book(&self, book: &AppointmentBook) -> StorageResult<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let stored = JsonSerializableAppointmentBook::from(book);
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.file_path, json)?;

        log::debug!(
            "Saved {} appointment(s) to {}",
            book.len(),
            self.file_path.display()
        );
        Ok(())
    }
}

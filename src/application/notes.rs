//! Show, save and reset use cases

use crate::application::access::require_access;
use crate::domain::StorageAvailability;
use crate::error::{ExtnoteError, Result};
use crate::infrastructure::{TextStore, Volume};
use tracing::{debug, error};

/// Service behind the main screen: every call is gated on storage access
pub struct NoteService {
    volume: Volume,
}

impl NoteService {
    /// Create a new note service
    pub fn new(volume: Volume) -> Self {
        NoteService { volume }
    }

    /// Current file content
    pub fn show(&self) -> Result<String> {
        let store = self.open()?;
        store.read().inspect_err(|e| log_io_failure("reading", e))
    }

    /// Append input text to the file and return the new content
    pub fn save(&self, text: &str) -> Result<String> {
        let store = self.open()?;
        let content = store
            .append(text)
            .inspect_err(|e| log_io_failure("writing to", e))?;

        debug!(
            file = %store.path().display(),
            appended = text.len(),
            total = content.len(),
            "text appended"
        );
        Ok(content)
    }

    /// Discard the file content
    pub fn reset(&self) -> Result<()> {
        let store = self.open()?;
        store
            .reset()
            .inspect_err(|e| log_io_failure("writing to", e))?;

        debug!(file = %store.path().display(), "file reset");
        Ok(())
    }

    /// Save the input text, for a front end that closes right after.
    ///
    /// Nothing is written unless access is ready.
    pub fn save_and_exit(&self, text: &str) -> Result<String> {
        self.save(text)
    }

    fn open(&self) -> Result<TextStore> {
        // A config that cannot be read must not gate as "not authorized"
        let config = if self.volume.is_medium_available() {
            Some(self.volume.load_config()?)
        } else {
            None
        };

        require_access(&self.volume, self.volume.root())?;

        match config {
            Some(config) => Ok(TextStore::new(self.volume.root(), &config.file_name)),
            None => self.volume.text_store(),
        }
    }
}

fn log_io_failure(action: &str, err: &ExtnoteError) {
    if let ExtnoteError::Io(e) = err {
        error!(error = %e, "Error {} file", action);
    }
}

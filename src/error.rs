//! Error types for extnote

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for extnote
#[derive(Debug, Error)]
pub enum ExtnoteError {
    #[error("External memory isn't available: {0}")]
    MediumUnavailable(PathBuf),

    #[error("Permission to access external storage is pending: {0}")]
    AuthorizationPending(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ExtnoteError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ExtnoteError::MediumUnavailable(_) => 2,
            ExtnoteError::AuthorizationPending(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ExtnoteError::MediumUnavailable(path) => {
                format!(
                    "External memory isn't available: {}\n\n\
                    Suggestions:\n\
                    • Mount the storage volume and try again\n\
                    • Pass --root with an existing directory\n\
                    • Set EXTNOTE_ROOT environment variable to the storage path",
                    path.display()
                )
            }
            ExtnoteError::AuthorizationPending(path) => {
                format!(
                    "Permission to access external storage has been requested for {}\n\n\
                    Suggestions:\n\
                    • Run 'extnote grant' to allow writing to this volume\n\
                    • Run 'extnote deny' to refuse access\n\
                    • Retry the command after granting access",
                    path.display()
                )
            }
            ExtnoteError::Io(e) => {
                format!(
                    "Error accessing file: {}\n\n\
                    The file content is undefined after a failed write.\n\
                    Run 'extnote status' to check the storage volume",
                    e
                )
            }
            ExtnoteError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: extnote config file_name notes.txt",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ExtnoteError
pub type Result<T> = std::result::Result<T, ExtnoteError>;

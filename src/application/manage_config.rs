//! Config management use case

use crate::domain::StorageAvailability;
use crate::error::{ExtnoteError, Result};
use crate::infrastructure::config::validate_file_name;
use crate::infrastructure::{Config, Volume};

/// Service for managing volume configuration
pub struct ConfigService {
    volume: Volume,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(volume: Volume) -> Self {
        ConfigService { volume }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.load()?;

        match key {
            "file_name" => Ok(config.file_name),
            "access" => Ok(config.access.to_string()),
            _ => Err(ExtnoteError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: file_name, access",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.load()?;

        match key {
            "file_name" => {
                validate_file_name(value)?;
                config.file_name = value.to_string();
            }
            "access" => {
                return Err(ExtnoteError::Config(
                    "Cannot modify 'access' directly. Use 'extnote grant' or 'extnote deny'"
                        .to_string(),
                ));
            }
            _ => {
                return Err(ExtnoteError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: file_name",
                    key
                )));
            }
        }

        self.volume.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.load()
    }

    fn load(&self) -> Result<Config> {
        if !self.volume.is_medium_available() {
            return Err(ExtnoteError::MediumUnavailable(
                self.volume.root().to_path_buf(),
            ));
        }
        self.volume.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(Volume::new(temp.path().to_path_buf()))
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("file_name").unwrap(), "extFile.txt");
        assert_eq!(service.get("access").unwrap(), "unrequested");
    }

    #[test]
    fn test_set_file_name() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("file_name", "notes.txt").unwrap();
        assert_eq!(service.get("file_name").unwrap(), "notes.txt");
        assert_eq!(service.list().unwrap().file_name, "notes.txt");
    }

    #[test]
    fn test_set_invalid_file_name() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("file_name", "../escape.txt").is_err());
        assert_eq!(service.get("file_name").unwrap(), "extFile.txt");
    }

    #[test]
    fn test_access_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        match service.set("access", "granted").unwrap_err() {
            ExtnoteError::Config(msg) => assert!(msg.contains("extnote grant")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.get("editor").is_err());
        assert!(service.set("editor", "vim").is_err());
    }

    #[test]
    fn test_missing_medium() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(Volume::new(temp.path().join("gone")));

        assert!(matches!(
            service.get("file_name"),
            Err(ExtnoteError::MediumUnavailable(_))
        ));
    }
}

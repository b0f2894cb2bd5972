//! Per-volume configuration management

use crate::domain::AccessState;
use crate::error::{ExtnoteError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the text resource on a volume
pub const DEFAULT_FILE_NAME: &str = "extFile.txt";

/// Directory under the storage root holding extnote metadata
pub const CONFIG_DIR: &str = ".extnote";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default)]
    pub access: AccessState,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            file_name: default_file_name(),
            access: AccessState::default(),
            created: Utc::now(),
        }
    }

    /// Path of .extnote/config.toml under the given root
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join("config.toml")
    }

    /// Load config from .extnote/config.toml, falling back to defaults
    /// when the volume has never been configured
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let config_path = Self::path_in(root);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::new()),
            Err(e) => return Err(ExtnoteError::Io(e)),
        };

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ExtnoteError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .extnote/config.toml under the given root
    pub fn save_to_dir(&self, root: &Path) -> Result<()> {
        let config_dir = root.join(CONFIG_DIR);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(Self::path_in(root), contents)?;

        Ok(())
    }

    /// The resource must be a plain file name directly under the root
    pub fn validate(&self) -> Result<()> {
        validate_file_name(&self.file_name)
    }
}

/// Check that a resource name does not escape the storage root
pub fn validate_file_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name == CONFIG_DIR
        || name.contains('/')
        || name.contains('\\');

    if invalid {
        return Err(ExtnoteError::Config(format!(
            "Invalid file name: '{}'. Use a plain file name such as {}",
            name, DEFAULT_FILE_NAME
        )));
    }

    Ok(())
}

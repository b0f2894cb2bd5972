//! File system storage volume

use crate::domain::{AccessState, AuthorizationOutcome, StorageAvailability};
use crate::error::Result;
use crate::infrastructure::{Config, TextStore};
use std::path::{Path, PathBuf};

/// Environment variable naming the storage root
pub const ROOT_ENV_VAR: &str = "EXTNOTE_ROOT";

/// A storage root directory acting as the durable medium.
///
/// The medium counts as mounted while the root is an existing directory.
/// Write authorization is kept in the volume's config and only changes when
/// a request is issued or an outcome is delivered.
#[derive(Debug, Clone)]
pub struct Volume {
    root: PathBuf,
}

impl Volume {
    /// Create a volume rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Volume { root }
    }

    /// Pick the storage root: explicit path first, then EXTNOTE_ROOT,
    /// then the current directory
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(root) = explicit {
            return Ok(Volume::new(root));
        }

        if let Ok(root) = std::env::var(ROOT_ENV_VAR) {
            if !root.is_empty() {
                return Ok(Volume::new(PathBuf::from(root)));
            }
        }

        Ok(Volume::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Current persisted access state
    pub fn access_state(&self) -> Result<AccessState> {
        Ok(self.load_config()?.access)
    }

    /// Record the answer to an authorization request
    pub fn resolve_authorization(&self, outcome: AuthorizationOutcome) -> Result<()> {
        let mut config = self.load_config()?;
        config.access = AccessState::from(outcome);
        self.save_config(&config)
    }

    /// Text store for the configured resource on this volume
    pub fn text_store(&self) -> Result<TextStore> {
        let config = self.load_config()?;
        Ok(TextStore::new(&self.root, &config.file_name))
    }
}

impl StorageAvailability for Volume {
    fn is_medium_available(&self) -> bool {
        self.root.is_dir()
    }

    fn is_authorized(&self) -> bool {
        self.access_state()
            .map(|state| state.is_authorized())
            .unwrap_or(false)
    }

    fn request_authorization(&self) {
        // Callers load the config before gating, so only the write of the
        // request is left unreported; its outcome arrives later anyway.
        if let Ok(mut config) = self.load_config() {
            config.access = AccessState::Pending;
            let _ = self.save_config(&config);
        }
    }
}

//! Access gating and authorization use cases

use crate::domain::{AccessResult, AccessState, AuthorizationOutcome, StorageAvailability};
use crate::error::{ExtnoteError, Result};
use crate::infrastructure::Volume;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Turn a gating decision into a result the caller can propagate
pub fn require_access<A: StorageAvailability>(availability: &A, root: &Path) -> Result<()> {
    match availability.ensure_access() {
        AccessResult::Ready => {
            debug!(root = %root.display(), "storage access ready");
            Ok(())
        }
        AccessResult::MediumUnavailable => {
            warn!(root = %root.display(), "external memory isn't available");
            Err(ExtnoteError::MediumUnavailable(root.to_path_buf()))
        }
        AccessResult::AuthorizationPending => {
            warn!(root = %root.display(), "write authorization requested");
            Err(ExtnoteError::AuthorizationPending(root.to_path_buf()))
        }
    }
}

/// Snapshot of a volume as shown by `extnote status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeStatus {
    pub root: PathBuf,
    pub medium_available: bool,
    pub access: AccessState,
    pub file: PathBuf,
}

/// Service for delivering authorization outcomes and reporting status
pub struct AccessService {
    volume: Volume,
}

impl AccessService {
    /// Create a new access service
    pub fn new(volume: Volume) -> Self {
        AccessService { volume }
    }

    /// Deliver the answer to an authorization request
    pub fn resolve(&self, outcome: AuthorizationOutcome) -> Result<&'static str> {
        if !self.volume.is_medium_available() {
            return Err(ExtnoteError::MediumUnavailable(
                self.volume.root().to_path_buf(),
            ));
        }

        let previous = self.volume.access_state()?;
        self.volume.resolve_authorization(outcome)?;
        debug!(?previous, ?outcome, "authorization outcome recorded");

        Ok(outcome.message())
    }

    /// Report medium availability and access state without side effects
    pub fn status(&self) -> Result<VolumeStatus> {
        let medium_available = self.volume.is_medium_available();
        let (access, file) = if medium_available {
            (
                self.volume.access_state()?,
                self.volume.text_store()?.path().to_path_buf(),
            )
        } else {
            (
                AccessState::Unrequested,
                self.volume
                    .root()
                    .join(crate::infrastructure::DEFAULT_FILE_NAME),
            )
        };

        Ok(VolumeStatus {
            root: self.volume.root().to_path_buf(),
            medium_available,
            access,
            file,
        })
    }
}

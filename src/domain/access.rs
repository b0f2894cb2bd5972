//! Storage availability and write authorization

use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted authorization state of a storage volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccessState {
    /// Access has never been requested
    #[default]
    Unrequested,
    /// A request was issued and no outcome has been delivered yet
    Pending,
    /// Writing to the volume is allowed
    Granted,
    /// The last request was refused
    Denied,
}

impl AccessState {
    /// Only an explicit grant authorizes writes.
    pub fn is_authorized(&self) -> bool {
        matches!(self, AccessState::Granted)
    }
}

impl From<AuthorizationOutcome> for AccessState {
    fn from(outcome: AuthorizationOutcome) -> Self {
        match outcome {
            AuthorizationOutcome::Granted => AccessState::Granted,
            AuthorizationOutcome::Denied => AccessState::Denied,
        }
    }
}

impl fmt::Display for AccessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessState::Unrequested => "unrequested",
            AccessState::Pending => "pending",
            AccessState::Granted => "granted",
            AccessState::Denied => "denied",
        };
        f.write_str(name)
    }
}

/// Result of a single gating decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessResult {
    Ready,
    MediumUnavailable,
    AuthorizationPending,
}

/// Answer to an authorization request, delivered out of band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationOutcome {
    Granted,
    Denied,
}

impl AuthorizationOutcome {
    /// Message shown to the user when the outcome arrives
    pub fn message(&self) -> &'static str {
        match self {
            AuthorizationOutcome::Granted => "Permission to access external storage granted",
            AuthorizationOutcome::Denied => "Permission to access external storage denied",
        }
    }
}

/// Reports whether the durable store can currently be written.
///
/// Both queries are evaluated fresh on every call. `request_authorization`
/// is fire-and-forget: its outcome is delivered later through
/// [`AuthorizationOutcome`], and callers must check again before writing.
pub trait StorageAvailability {
    /// Whether the storage volume is mounted and reachable
    fn is_medium_available(&self) -> bool;

    /// Whether the caller currently holds write authorization
    fn is_authorized(&self) -> bool;

    /// Ask for write authorization without waiting for the answer
    fn request_authorization(&self);

    /// Gate a mutating operation.
    ///
    /// An unavailable medium short-circuits before authorization is checked
    /// or requested.
    fn ensure_access(&self) -> AccessResult {
        if !self.is_medium_available() {
            return AccessResult::MediumUnavailable;
        }

        if !self.is_authorized() {
            self.request_authorization();
            return AccessResult::AuthorizationPending;
        }

        AccessResult::Ready
    }
}

//! Domain layer - Storage gating and content rules

pub mod access;
pub mod content;

pub use access::{AccessResult, AccessState, AuthorizationOutcome, StorageAvailability};

//! Application layer - Use cases and orchestration

pub mod access;
pub mod manage_config;
pub mod notes;

pub use access::{require_access, AccessService, VolumeStatus};
pub use manage_config::ConfigService;
pub use notes::NoteService;

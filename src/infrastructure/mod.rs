//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod text_store;
pub mod volume;

pub use config::{Config, DEFAULT_FILE_NAME};
pub use text_store::TextStore;
pub use volume::{Volume, ROOT_ENV_VAR};

//! extnote - Append text to a file on a storage volume
//!
//! A single text file on an external storage root, guarded by a check that
//! the volume is mounted and that writing to it has been authorized.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ExtnoteError;

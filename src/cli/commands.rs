//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "extnote")]
#[command(about = "Append text to a file on external storage", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Storage root (default: $EXTNOTE_ROOT, then the current directory)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the file content
    Show,

    /// Append text to the file (no separator is inserted)
    Save {
        /// Text to append
        text: String,
    },

    /// Append text to the file and say goodbye
    Exit {
        /// Text to append
        text: String,
    },

    /// Discard the file content
    Reset,

    /// Allow writing to the storage volume
    Grant,

    /// Refuse writing to the storage volume
    Deny,

    /// Show storage availability and access state
    Status,

    /// Show the credits
    Credits,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

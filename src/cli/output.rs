//! Output formatting utilities

use crate::application::VolumeStatus;
use crate::infrastructure::Config;

/// Text of the credits screen
pub const CREDITS: &str = "\
extnote
Appends text to a single file on external storage.

Based on the ex11023 external storage exercise (Android, 2023).
Rewritten as a command-line tool.
";

/// Format file content for display
pub fn format_content(content: &str) -> String {
    if content.is_empty() {
        return "(empty)\n".to_string();
    }

    if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{}\n", content)
    }
}

/// Format a volume status report
pub fn format_status(status: &VolumeStatus) -> String {
    let mut output = String::new();
    output.push_str(&format!("root = {}\n", status.root.display()));
    output.push_str(&format!(
        "medium = {}\n",
        if status.medium_available {
            "available"
        } else {
            "unavailable"
        }
    ));
    if status.medium_available {
        output.push_str(&format!("access = {}\n", status.access));
    }
    output.push_str(&format!("file = {}\n", status.file.display()));
    output
}

/// Format all config values
pub fn format_config(config: &Config) -> String {
    format!(
        "file_name = {}\naccess = {}\n",
        config.file_name, config.access
    )
}

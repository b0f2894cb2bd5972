//! Single-file text store

use crate::domain::content::{compose_append, join_lines};
use crate::error::{ExtnoteError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Read, append and reset over one named text file.
///
/// The store does not check availability itself; callers gate every
/// mutating call with [`crate::domain::StorageAvailability::ensure_access`].
/// Writes truncate and rewrite in place, so a failed write leaves the
/// previous content undefined. There is no protection against two writers
/// racing a read-modify-write on the same file.
#[derive(Debug, Clone)]
pub struct TextStore {
    path: PathBuf,
}

impl TextStore {
    /// Create a store for `file_name` directly under `root`
    pub fn new(root: &Path, file_name: &str) -> Self {
        TextStore {
            path: root.join(file_name),
        }
    }

    /// Full path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole content, each line terminated by `\n`.
    ///
    /// A missing file reads as empty. `\r\n` terminators are normalized.
    pub fn read(&self) -> Result<String> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(String::new()),
            Err(e) => return Err(ExtnoteError::Io(e)),
        };

        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;

        Ok(join_lines(lines))
    }

    /// Replace the whole content with exactly `content`
    pub fn write(&self, content: &str) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, content).map_err(ExtnoteError::Io)
    }

    /// Append `text` with no separator and return the new content
    pub fn append(&self, text: &str) -> Result<String> {
        let previous = self.read()?;
        let content = compose_append(&previous, text);
        self.write(&content)?;
        Ok(content)
    }

    /// Discard all content
    pub fn reset(&self) -> Result<()> {
        self.write("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> TextStore {
        TextStore::new(temp.path(), "extFile.txt")
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        assert_eq!(store.read().unwrap(), "");
        assert!(!store.path().exists());
    }

    #[test]
    fn test_write_then_read_line_terminated() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.write("first\nsecond\n").unwrap();
        assert_eq!(store.read().unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_write_then_read_adds_final_newline() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.write("first\nsecond").unwrap();
        assert_eq!(store.read().unwrap(), "first\nsecond\n");
        // The file itself holds exactly what was written
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "first\nsecond");
    }

    #[test]
    fn test_read_normalizes_crlf() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(store.path(), "a\r\nb\r\n").unwrap();
        assert_eq!(store.read().unwrap(), "a\nb\n");
    }

    #[test]
    fn test_read_invalid_utf8_is_io_error() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(store.path(), [0xff, 0xfe, b'\n']).unwrap();
        assert!(matches!(store.read(), Err(ExtnoteError::Io(_))));
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("extFile.txt")).unwrap();
        let store = store_in(&temp);

        assert!(matches!(store.read(), Err(ExtnoteError::Io(_))));
    }

    #[test]
    fn test_write_to_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("extFile.txt")).unwrap();
        let store = store_in(&temp);

        assert!(matches!(store.write("x"), Err(ExtnoteError::Io(_))));
        assert!(matches!(store.append("x"), Err(ExtnoteError::Io(_))));
        assert!(matches!(store.reset(), Err(ExtnoteError::Io(_))));
    }

    #[test]
    fn test_reset_then_read_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.write("something\n").unwrap();
        store.reset().unwrap();

        assert_eq!(store.read().unwrap(), "");
        assert!(store.path().exists());
    }

    #[test]
    fn test_append_after_line_inserts_no_separator() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.write("a\n").unwrap();
        let content = store.append("b").unwrap();

        assert_eq!(content, "ab");
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "ab");
        assert_eq!(store.read().unwrap(), "ab\n");
    }

    #[test]
    fn test_append_twice_to_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.append("x").unwrap();
        let content = store.append("x").unwrap();

        assert_eq!(content, "xx");
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "xx");
    }

    #[test]
    fn test_append_preserves_prior_content() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.write("line one\nline two").unwrap();
        let before = store.read().unwrap();
        let content = store.append("\nline three").unwrap();

        assert_eq!(content, format!("{}\nline three", &before[..before.len() - 1]));
        assert_eq!(store.read().unwrap(), "line one\nline two\nline three\n");
    }

    #[test]
    fn test_append_swallows_newline_ending_previous_text() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        // "a\n" is stored as written, reads back as "a\n", and is stripped
        store.append("a\n").unwrap();
        let content = store.append("b").unwrap();

        assert_eq!(content, "ab");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let store = TextStore::new(&temp.path().join("nested/volume"), "extFile.txt");

        store.write("hello").unwrap();

        assert!(temp.path().join("nested/volume/extFile.txt").exists());
    }
}

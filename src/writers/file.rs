//! File writer implementation
//!
//! Every line is its own open-append-close transaction: nothing is buffered
//! and no handle outlives the call, so a line that was written survives a
//! crash right after the call returns.

use crate::core::{LogWriter, LoggerError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Appends UTF-8 lines to a file, creating it when absent.
#[derive(Debug, Clone, Default)]
pub struct FileWriter {
    #[cfg_attr(not(feature = "file-lock"), allow(dead_code))]
    lock: bool,
}

impl FileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold an exclusive advisory lock on the file while appending
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_text_logger::writers::FileWriter;
    ///
    /// let writer = FileWriter::new().with_lock(true);
    /// ```
    #[cfg(feature = "file-lock")]
    #[must_use]
    pub fn with_lock(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }

    fn append(&self, file: &File, destination: &Path, line: &str) -> Result<()> {
        #[cfg(feature = "file-lock")]
        let _guard = if self.lock {
            Some(FileLockGuard::acquire(file, destination)?)
        } else {
            None
        };

        let mut output = String::with_capacity(line.len() + LINE_ENDING.len());
        output.push_str(line);
        output.push_str(LINE_ENDING);

        let mut handle = file;
        handle
            .write_all(output.as_bytes())
            .and_then(|()| handle.flush())
            .map_err(|e| LoggerError::io_operation("appending to", destination, e))
    }
}

impl LogWriter for FileWriter {
    fn write_line(&self, destination: &Path, line: &str) -> Result<()> {
        if destination.as_os_str().is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(destination)
            .map_err(|e| LoggerError::io_operation("opening", destination, e))?;

        // `file` is dropped on every path out of here, closing the handle.
        self.append(&file, destination, line)
    }

    fn delete(&self, destination: &Path) {
        if destination.as_os_str().is_empty() {
            return;
        }
        let _ = fs::remove_file(destination);
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(feature = "file-lock")]
struct FileLockGuard<'a> {
    file: &'a File,
}

#[cfg(feature = "file-lock")]
impl<'a> FileLockGuard<'a> {
    fn acquire(file: &'a File, destination: &Path) -> Result<Self> {
        fs2::FileExt::lock_exclusive(file)
            .map_err(|e| LoggerError::io_operation("locking", destination, e))?;
        Ok(Self { file })
    }
}

#[cfg(feature = "file-lock")]
impl Drop for FileLockGuard<'_> {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appends_lines() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");
        let writer = FileWriter::new();

        writer.write_line(&path, "first").expect("write first");
        writer.write_line(&path, "second").expect("write second");

        let content = fs::read_to_string(&path).expect("read log");
        assert_eq!(content, format!("first{0}second{0}", LINE_ENDING));
    }

    #[test]
    fn test_appends_to_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("existing.log");
        fs::write(&path, format!("old{}", LINE_ENDING)).expect("seed file");

        FileWriter::new().write_line(&path, "new").expect("write");

        let content = fs::read_to_string(&path).expect("read log");
        assert_eq!(content.lines().collect::<Vec<_>>(), vec!["old", "new"]);
    }

    #[test]
    fn test_missing_directory_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("no_such_dir").join("app.log");

        let err = FileWriter::new().write_line(&path, "lost").unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }

    #[test]
    fn test_empty_destination_is_noop() {
        let writer = FileWriter::new();
        assert!(writer.write_line(Path::new(""), "ignored").is_ok());
        writer.delete(Path::new(""));
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("doomed.log");
        let writer = FileWriter::new();

        writer.write_line(&path, "bye").expect("write");
        assert!(path.exists());

        writer.delete(&path);
        assert!(!path.exists());

        // Deleting again is not an error
        writer.delete(&path);
    }

    #[cfg(feature = "file-lock")]
    #[test]
    fn test_locked_write() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("locked.log");
        let writer = FileWriter::new().with_lock(true);

        writer.write_line(&path, "one").expect("write one");
        writer.write_line(&path, "two").expect("write two");

        let content = fs::read_to_string(&path).expect("read log");
        assert_eq!(content.lines().count(), 2);
    }
}

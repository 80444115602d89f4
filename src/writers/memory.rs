//! In-memory writer
//!
//! Keeps every written line in memory instead of touching the filesystem.
//! Clones share the same buffer, so a handle kept by the caller sees what the
//! logger wrote.

use crate::core::{LogWriter, LoggerError, Result};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Shared {
    lines: Mutex<Vec<(PathBuf, String)>>,
    deleted: Mutex<Vec<PathBuf>>,
    fail_writes: AtomicBool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    shared: Arc<Shared>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with [`LoggerError::WriterError`].
    pub fn set_fail_writes(&self, fail: bool) {
        self.shared.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// All lines written so far, in order
    pub fn lines(&self) -> Vec<String> {
        self.shared
            .lines
            .lock()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Lines written to one destination
    pub fn lines_for(&self, destination: impl AsRef<Path>) -> Vec<String> {
        let destination = destination.as_ref();
        self.shared
            .lines
            .lock()
            .iter()
            .filter(|(path, _)| path == destination)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Destinations passed to `delete`, in order
    pub fn deleted(&self) -> Vec<PathBuf> {
        self.shared.deleted.lock().clone()
    }

    pub fn clear(&self) {
        self.shared.lines.lock().clear();
        self.shared.deleted.lock().clear();
    }
}

impl LogWriter for MemoryWriter {
    fn write_line(&self, destination: &Path, line: &str) -> Result<()> {
        if self.shared.fail_writes.load(Ordering::Relaxed) {
            return Err(LoggerError::writer(format!(
                "memory writer rejected line for '{}'",
                destination.display()
            )));
        }
        self.shared
            .lines
            .lock()
            .push((destination.to_path_buf(), line.to_string()));
        Ok(())
    }

    fn delete(&self, destination: &Path) {
        self.shared.lines.lock().retain(|(path, _)| path != destination);
        self.shared.deleted.lock().push(destination.to_path_buf());
    }

    fn name(&self) -> &str {
        "memory"
    }
}

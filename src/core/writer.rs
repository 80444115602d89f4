//! Writer trait for log destinations

use super::error::Result;
use std::path::Path;

/// Appends rendered lines to a destination and removes destinations.
///
/// Implementations must not keep the destination open between calls: each
/// `write_line` is a complete open, append, close transaction.
pub trait LogWriter: Send + Sync {
    /// Append `line` plus a line terminator to `destination`.
    fn write_line(&self, destination: &Path, line: &str) -> Result<()>;

    /// Remove `destination`. Failures are ignored.
    fn delete(&self, destination: &Path);

    fn name(&self) -> &str;
}

//! Writer implementations

#[cfg(feature = "console")]
pub mod console;
pub mod file;
pub mod memory;

#[cfg(feature = "console")]
pub use console::ConsoleMirror;
pub use file::FileWriter;
pub use memory::MemoryWriter;

pub use crate::core::LogWriter;

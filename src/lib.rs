//! # Rust Text Logger
//!
//! A minimal leveled text-log writer. Each call filters by level, renders one
//! timestamped line and appends it to a file that is opened and closed for
//! that single write, so nothing is lost if the process dies right after.
//!
//! ## Features
//!
//! - **Level Filtering**: `All`, `Info`, `Warning`, `Error`, `Critical`, `None`
//! - **Item Joining**: text, numbers and errors joined with a configurable delimiter
//! - **Cause Chains**: the causes of a logged error follow as indented lines
//! - **Pluggable**: formatter and writer are traits; every line can be observed
//!
//! ```no_run
//! use rust_text_logger::prelude::*;
//! use rust_text_logger::error;
//!
//! let logger = Logger::new("application.log");
//! error!(logger, "Count", 5, "items")?;
//! // [2025-01-08 10:30:45][ERROR] Count : 5 : items
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::writers::ConsoleMirror;
    pub use crate::writers::{FileWriter, MemoryWriter};
    pub use crate::core::{
        admits, CapturedError, EntryFormatter, ErrorValue, LineListener, LogItem, LogLevel,
        LogWriter, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
        TextFormatter, TimestampFormat,
    };
}

#[cfg(feature = "console")]
pub use writers::ConsoleMirror;
pub use writers::{FileWriter, MemoryWriter};
pub use core::{
    admits, CapturedError, EntryFormatter, ErrorValue, LineListener, LogItem, LogLevel, LogWriter,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, TextFormatter,
    TimestampFormat,
};

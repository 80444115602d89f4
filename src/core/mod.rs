//! Core logger types and traits

pub mod config;
pub mod error;
pub mod error_value;
pub mod formatter;
pub mod joiner;
pub mod listener;
pub mod log_item;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod template;
pub mod timestamp;
pub mod writer;

pub use config::{LoggerConfig, DIVIDER_WIDTH};
pub use error::{LoggerError, Result};
pub use error_value::{CapturedError, ErrorValue};
pub use formatter::{EntryFormatter, TextFormatter, INNER_EXCEPTION_TAG};
pub use joiner::{join_items, JoinedItems};
pub use listener::LineListener;
pub use log_item::{LogItem, NULL_ERROR_PLACEHOLDER, NULL_ITEM_PLACEHOLDER};
pub use log_level::{admits, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
pub use writer::LogWriter;

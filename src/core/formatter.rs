//! Line rendering
//!
//! [`EntryFormatter`] is the seam for changing how lines look without touching
//! how the logger filters, joins and writes them. Only `format_primary` must
//! be provided; the secondary and error renderings have default bodies.

use super::error::Result;
use super::error_value::ErrorValue;
use super::log_item::NULL_ERROR_PLACEHOLDER;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};

/// Tag placed in front of every expanded cause line
pub const INNER_EXCEPTION_TAG: &str = "[INNER EXCEPTION]";

pub trait EntryFormatter: Send + Sync {
    /// Render the main line of an entry.
    fn format_primary(&self, level: LogLevel, body: &str, timestamp: &DateTime<Local>) -> String;

    /// Render a continuation line.
    fn format_secondary(&self, prefix: &str, body: &str) -> String {
        format!("{}{}", prefix, body)
    }

    /// Render an error as `Type: Message`; `None` renders as a placeholder.
    fn format_error(&self, error: Option<&dyn ErrorValue>, use_qualified_name: bool) -> String {
        match error {
            Some(err) => {
                let type_name = if use_qualified_name {
                    err.qualified_type_name()
                } else {
                    err.type_name()
                };
                format!("{}: {}", type_name, err.message())
            }
            None => NULL_ERROR_PLACEHOLDER.to_string(),
        }
    }
}

/// Default formatter: `[<timestamp>][<LEVEL>] <body>`
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    timestamp_format: TimestampFormat,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp format for the primary line
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_text_logger::core::{TextFormatter, TimestampFormat};
    ///
    /// let formatter = TextFormatter::new().with_timestamp_format(TimestampFormat::Iso8601);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string.
    ///
    /// Returns [`LoggerError::FormatterError`](crate::LoggerError::FormatterError) if chrono cannot parse the pattern.
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Result<Self> {
        let format = TimestampFormat::Custom(format_str.to_string());
        format.validate()?;
        self.timestamp_format = format;
        Ok(self)
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }
}

impl EntryFormatter for TextFormatter {
    fn format_primary(&self, level: LogLevel, body: &str, timestamp: &DateTime<Local>) -> String {
        format!(
            "[{}][{}] {}",
            self.timestamp_format.format(timestamp),
            level.to_str(),
            body
        )
    }
}

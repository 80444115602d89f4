//! Timestamp formatting utilities
//!
//! Entries carry the local wall-clock time of the logging call. The default
//! rendering is a general date plus long time in year-first order, which
//! reads the same in every locale.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp format options for the primary line
///
/// # Examples
///
/// ```
/// use rust_text_logger::core::TimestampFormat;
/// use chrono::Local;
///
/// let format = TimestampFormat::General;
/// let timestamp = format.format(&Local::now());
/// // Output: "2025-01-08 10:30:45"
/// assert_eq!(timestamp.len(), 19);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// General date and long time: `2025-01-08 10:30:45`
    #[default]
    General,

    /// US general date and long time: `1/8/2025 10:30:45 AM`
    GeneralUs,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456789+01:00`
    Rfc3339,

    /// Custom strftime format
    ///
    /// A pattern that chrono cannot parse falls back to [`General`](Self::General)
    /// with a diagnostic on stderr; use [`validate`](Self::validate) to catch it early.
    ///
    /// ```
    /// use rust_text_logger::core::TimestampFormat;
    ///
    /// // Time of day only
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::General => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::GeneralUs => datetime.format("%-m/%-d/%Y %-I:%M:%S %p").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => {
                let items: Vec<Item<'_>> = StrftimeItems::new(format_str).collect();
                if items.iter().any(|item| matches!(item, Item::Error)) {
                    eprintln!(
                        "[LOGGER ERROR] Invalid timestamp pattern '{}', using general format",
                        format_str
                    );
                    return TimestampFormat::General.format(datetime);
                }
                datetime.format_with_items(items.into_iter()).to_string()
            }
        }
    }

    /// Check that a custom pattern is a valid strftime string
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = self {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::formatter(
                    "timestamp",
                    format!("invalid strftime pattern '{}'", format_str),
                ));
            }
        }
        Ok(())
    }

    /// Get a description of this format
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            TimestampFormat::General => "General date, long time (2025-01-08 10:30:45)",
            TimestampFormat::GeneralUs => "US general date, long time (1/8/2025 10:30:45 AM)",
            TimestampFormat::Iso8601 => "ISO 8601 with milliseconds (2025-01-08T10:30:45.123+01:00)",
            TimestampFormat::Rfc3339 => "RFC 3339 with offset",
            TimestampFormat::Custom(_) => "Custom strftime format",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .earliest()
            .expect("valid local datetime")
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_general_format() {
        let result = TimestampFormat::General.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45");
    }

    #[test]
    fn test_general_us_format() {
        let result = TimestampFormat::GeneralUs.format(&fixed_datetime());
        assert_eq!(result, "1/8/2025 10:30:45 AM");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45.123"));
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let format = TimestampFormat::Custom("%Q".to_string());
        let err = format.validate().unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));

        // Rendering never panics; it falls back to the general pattern
        assert_eq!(format.format(&fixed_datetime()), "2025-01-08 10:30:45");
    }

    #[test]
    fn test_validate_accepts_builtin_and_valid_custom() {
        assert!(TimestampFormat::General.validate().is_ok());
        assert!(TimestampFormat::Rfc3339.validate().is_ok());
        assert!(TimestampFormat::Custom("%H:%M:%S%.3f".to_string()).validate().is_ok());
        assert!(TimestampFormat::Custom("fixed".to_string()).validate().is_ok());
    }

    #[test]
    fn test_default_is_general() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::General);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::General).expect("serialize");
        assert_eq!(json, "\"General\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}

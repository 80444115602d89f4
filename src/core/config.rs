//! Logger configuration
//!
//! The configuration is read at call time, so changes made through the
//! logger's setters apply to the very next call.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default separator between joined items
pub const DEFAULT_ITEM_DELIMITER: &str = " : ";

/// Default prefix for continuation lines
pub const DEFAULT_SECONDARY_PREFIX: &str = "    ";

/// Default divider glyph
pub const DEFAULT_DIVIDER_CHAR: char = '-';

/// Default cap on expanded cause lines
pub const DEFAULT_MAX_CAUSE_DEPTH: usize = 64;

/// Number of glyphs in a divider line
pub const DIVIDER_WIDTH: usize = 79;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log file; `None` or an empty path disables all writes
    pub destination: Option<PathBuf>,
    /// Least severe level that is still written
    pub threshold: LogLevel,
    /// Emit one secondary line per cause of the first error item
    pub expand_chain: bool,
    /// Render errors with their fully-qualified type name
    pub use_qualified_type_name: bool,
    pub item_delimiter: String,
    pub secondary_prefix: String,
    pub divider_enabled: bool,
    pub divider_char: char,
    /// Maximum number of cause lines per entry; `None` walks the whole chain
    pub max_cause_depth: Option<usize>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            destination: None,
            threshold: LogLevel::All,
            expand_chain: true,
            use_qualified_type_name: false,
            item_delimiter: DEFAULT_ITEM_DELIMITER.to_string(),
            secondary_prefix: DEFAULT_SECONDARY_PREFIX.to_string(),
            divider_enabled: true,
            divider_char: DEFAULT_DIVIDER_CHAR,
            max_cause_depth: Some(DEFAULT_MAX_CAUSE_DEPTH),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: LogLevel) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_expand_chain(mut self, expand: bool) -> Self {
        self.expand_chain = expand;
        self
    }

    #[must_use]
    pub fn with_qualified_type_name(mut self, qualified: bool) -> Self {
        self.use_qualified_type_name = qualified;
        self
    }

    #[must_use]
    pub fn with_item_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.item_delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_secondary_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.secondary_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_divider(mut self, enabled: bool, glyph: char) -> Self {
        self.divider_enabled = enabled;
        self.divider_char = glyph;
        self
    }

    #[must_use]
    pub fn with_max_cause_depth(mut self, depth: Option<usize>) -> Self {
        self.max_cause_depth = depth;
        self
    }

    /// The destination, treating an empty path as absent
    pub fn active_destination(&self) -> Option<&Path> {
        self.destination
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Reject values that would break the one-line-per-write layout.
    pub fn validate(&self) -> Result<()> {
        if self.divider_char.is_control() {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("divider_char {:?} is a control character", self.divider_char),
            ));
        }
        if contains_line_break(&self.item_delimiter) {
            return Err(LoggerError::config(
                "LoggerConfig",
                "item_delimiter must not contain a line break",
            ));
        }
        if contains_line_break(&self.secondary_prefix) {
            return Err(LoggerError::config(
                "LoggerConfig",
                "secondary_prefix must not contain a line break",
            ));
        }
        Ok(())
    }
}

fn contains_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.destination, None);
        assert_eq!(config.threshold, LogLevel::All);
        assert!(config.expand_chain);
        assert!(!config.use_qualified_type_name);
        assert_eq!(config.item_delimiter, " : ");
        assert!(config.divider_enabled);
        assert_eq!(config.divider_char, '-');
        assert_eq!(config.max_cause_depth, Some(DEFAULT_MAX_CAUSE_DEPTH));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_destination_is_inactive() {
        let config = LoggerConfig::new().with_destination("");
        assert!(config.active_destination().is_none());

        let config = LoggerConfig::new().with_destination("app.log");
        assert_eq!(config.active_destination(), Some(Path::new("app.log")));
    }

    #[test]
    fn test_builder_pattern() {
        let config = LoggerConfig::new()
            .with_threshold(LogLevel::Warning)
            .with_expand_chain(false)
            .with_qualified_type_name(true)
            .with_item_delimiter(" | ")
            .with_secondary_prefix("\t")
            .with_divider(false, '=')
            .with_max_cause_depth(None);

        assert_eq!(config.threshold, LogLevel::Warning);
        assert!(!config.expand_chain);
        assert!(config.use_qualified_type_name);
        assert_eq!(config.item_delimiter, " | ");
        assert_eq!(config.secondary_prefix, "\t");
        assert!(!config.divider_enabled);
        assert_eq!(config.divider_char, '=');
        assert_eq!(config.max_cause_depth, None);
    }

    #[test]
    fn test_validate_rejects_line_breaks() {
        assert!(LoggerConfig::new().with_item_delimiter("\n").validate().is_err());
        assert!(LoggerConfig::new().with_secondary_prefix("\r\n").validate().is_err());
        assert!(LoggerConfig::new().with_divider(true, '\u{7}').validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"threshold":"Warning","destination":"app.log"}"#)
                .expect("deserialize config");
        assert_eq!(config.threshold, LogLevel::Warning);
        assert_eq!(config.destination, Some(PathBuf::from("app.log")));
        assert_eq!(config.item_delimiter, DEFAULT_ITEM_DELIMITER);
    }
}

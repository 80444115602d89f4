//! Log level definitions and the admission rule

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity levels, most permissive first.
///
/// As a threshold, a level names the least severe entry that still gets
/// written: `All` lets everything through, `None` blocks everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    All = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
    None = 5,
}

impl LogLevel {
    /// Every level in ascending severity order
    pub const ALL_LEVELS: [LogLevel; 6] = [
        LogLevel::All,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::None,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::All => "ALL",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
            LogLevel::None => "NONE",
        }
    }

    /// Whether an entry at this level passes `threshold`.
    #[inline]
    pub fn admitted_by(self, threshold: LogLevel) -> bool {
        admits(self, threshold)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::All => BrightBlack,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Critical => BrightRed,
            LogLevel::None => White,
        }
    }
}

/// Returns true iff an entry at `entry_level` is written under `threshold`.
///
/// `None` as threshold rejects everything, `All` admits everything, and equal
/// levels are admitted.
#[inline]
pub fn admits(entry_level: LogLevel, threshold: LogLevel) -> bool {
    threshold != LogLevel::None && entry_level >= threshold
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(LogLevel::All),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            "NONE" | "OFF" => Ok(LogLevel::None),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_threshold_blocks_everything() {
        for level in LogLevel::ALL_LEVELS {
            assert!(!admits(level, LogLevel::None), "{} passed None", level);
        }
    }

    #[test]
    fn test_all_threshold_admits_everything() {
        for level in LogLevel::ALL_LEVELS {
            assert!(admits(level, LogLevel::All), "{} rejected by All", level);
        }
    }

    #[test]
    fn test_warning_threshold() {
        assert!(!admits(LogLevel::Info, LogLevel::Warning));
        assert!(admits(LogLevel::Warning, LogLevel::Warning));
        assert!(admits(LogLevel::Error, LogLevel::Warning));
        assert!(admits(LogLevel::Critical, LogLevel::Warning));
    }

    #[test]
    fn test_admitted_by_matches_free_function() {
        for level in LogLevel::ALL_LEVELS {
            for threshold in LogLevel::ALL_LEVELS {
                assert_eq!(level.admitted_by(threshold), admits(level, threshold));
            }
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("Critical".parse::<LogLevel>(), Ok(LogLevel::Critical));
        assert_eq!("off".parse::<LogLevel>(), Ok(LogLevel::None));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(LogLevel::default(), LogLevel::All);
    }
}

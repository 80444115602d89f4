//! Logging macros for heterogeneous item lists.
//!
//! Each argument after the logger (and level) is converted with
//! `LogItem::from`, so strings, numbers, booleans, `Option`s and captured
//! errors can be mixed freely. Every macro evaluates to the `Result<()>` of
//! the underlying call.
//!
//! # Examples
//!
//! ```
//! use rust_text_logger::prelude::*;
//! use rust_text_logger::{info, error};
//!
//! let logger = Logger::disabled();
//!
//! info!(logger, "Server started")?;
//!
//! let port = 8080;
//! info!(logger, "Listening", port)?;
//!
//! let err = CapturedError::new("net::BindError", "address in use");
//! error!(logger, "Startup failed", err)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log items at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_text_logger::prelude::*;
/// # let logger = Logger::disabled();
/// use rust_text_logger::log;
/// log!(logger, LogLevel::Info, "Simple message")?;
/// log!(logger, LogLevel::Error, "Error code", 500)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr) => {
        $logger.log($level, ::std::vec::Vec::<$crate::LogItem>::new())
    };
    ($logger:expr, $level:expr, $($item:expr),+ $(,)?) => {
        $logger.log($level, [$($crate::LogItem::from($item)),+])
    };
}

/// Log a compile-time formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_text_logger::prelude::*;
/// # let logger = Logger::disabled();
/// use rust_text_logger::log_fmt;
/// log_fmt!(logger, LogLevel::Warning, "Retry {} of {}", 3, 5)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log_fmt {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, [$crate::LogItem::from(format!($($arg)+))])
    };
}

/// Log an info-level entry.
///
/// # Examples
///
/// ```
/// # use rust_text_logger::prelude::*;
/// # let logger = Logger::disabled();
/// use rust_text_logger::info;
/// info!(logger, "Processing", 100, "items")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $item)*)
    };
}

/// Log a warning-level entry.
///
/// # Examples
///
/// ```
/// # use rust_text_logger::prelude::*;
/// # let logger = Logger::disabled();
/// use rust_text_logger::warning;
/// warning!(logger, "Low disk space")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warning $(, $item)*)
    };
}

/// Log an error-level entry.
///
/// # Examples
///
/// ```
/// # use rust_text_logger::prelude::*;
/// # let logger = Logger::disabled();
/// use rust_text_logger::error;
/// error!(logger, "Failed to connect to database")?;
/// error!(logger, "Error code", 500, "Internal error")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $item)*)
    };
}

/// Log a critical-level entry.
///
/// # Examples
///
/// ```
/// # use rust_text_logger::prelude::*;
/// # let logger = Logger::disabled();
/// use rust_text_logger::critical;
/// critical!(logger, "Unable to recover", CapturedError::new("io::Error", "disk full"))?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Critical $(, $item)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{EntryFormatter, LogLevel, Logger};
    use crate::writers::MemoryWriter;
    use chrono::{DateTime, Local};

    struct Plain;

    impl EntryFormatter for Plain {
        fn format_primary(&self, level: LogLevel, body: &str, _: &DateTime<Local>) -> String {
            format!("{} {}", level, body)
        }
    }

    fn logger() -> (Logger, MemoryWriter) {
        let writer = MemoryWriter::new();
        let logger = Logger::builder()
            .destination("macros.log")
            .formatter(Plain)
            .writer(writer.clone())
            .build();
        (logger, writer)
    }

    #[test]
    fn test_log_macro() {
        let (logger, writer) = logger();
        log!(logger, LogLevel::Info, "Test message").unwrap();
        log!(logger, LogLevel::Info, "Value", 42, true).unwrap();
        log!(logger, LogLevel::Info).unwrap();
        assert_eq!(
            writer.lines(),
            vec!["INFO Test message", "INFO Value : 42 : true", "INFO "]
        );
    }

    #[test]
    fn test_level_macros() {
        let (logger, writer) = logger();
        info!(logger, "i").unwrap();
        warning!(logger, "w", 1).unwrap();
        error!(logger, "e", 2.5).unwrap();
        critical!(logger, "c", None::<&str>).unwrap();
        assert_eq!(
            writer.lines(),
            vec!["INFO i", "WARNING w : 1", "ERROR e : 2.5", "CRITICAL c : null"]
        );
    }

    #[test]
    fn test_log_fmt_macro() {
        let (logger, writer) = logger();
        log_fmt!(logger, LogLevel::Warning, "Retry {} of {}", 1, 3).unwrap();
        assert_eq!(writer.lines(), vec!["WARNING Retry 1 of 3"]);
    }
}

//! Console mirror for written lines

use crate::core::{LineListener, LogLevel};
use colored::Colorize;
use std::sync::Arc;

/// Echoes every written line to the terminal.
///
/// Lines tagged `ERROR` or `CRITICAL` go to stderr, everything else to
/// stdout. Cause lines and dividers carry no tag and go to stdout.
///
/// # Example
///
/// ```
/// use rust_text_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .listener(ConsoleMirror::new().into_listener())
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleMirror {
    use_colors: bool,
}

impl ConsoleMirror {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn into_listener(self) -> LineListener {
        Arc::new(move |line: &str| self.print(line))
    }

    fn print(&self, line: &str) {
        let tagged = level_tag(line);
        let level = tagged.map(|(_, level)| level);
        let output = match tagged {
            Some((start, level)) if self.use_colors => {
                let tag = format!("[{}]", level.to_str());
                let end = start + tag.len();
                format!(
                    "{}{}{}",
                    &line[..start],
                    tag.color(level.color_code()),
                    &line[end..]
                )
            }
            _ => line.to_string(),
        };

        match level {
            Some(LogLevel::Error | LogLevel::Critical) => eprintln!("{}", output),
            _ => println!("{}", output),
        }
    }
}

impl Default for ConsoleMirror {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the `][LEVEL]` tag the default formatter puts after the timestamp.
///
/// Only the first `][` is considered, so level names inside the body are
/// ignored. Returns the byte offset of the tag's opening bracket.
fn level_tag(line: &str) -> Option<(usize, LogLevel)> {
    let start = line.find("][")? + 1;
    let rest = &line[start + 1..];
    let name = &rest[..rest.find(']')?];
    LogLevel::ALL_LEVELS
        .into_iter()
        .find(|level| level.to_str() == name)
        .map(|level| (start, level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tag_detection() {
        assert_eq!(
            level_tag("[2025-01-08 10:30:45][ERROR] boom"),
            Some((21, LogLevel::Error))
        );
        assert_eq!(
            level_tag("[2025-01-08 10:30:45][WARNING] low disk"),
            Some((21, LogLevel::Warning))
        );
        assert_eq!(level_tag("    [INNER EXCEPTION] Io: denied"), None);
        assert_eq!(level_tag(&"-".repeat(79)), None);
    }

    #[test]
    fn test_level_tag_ignores_body() {
        assert_eq!(
            level_tag("[2025-01-08 10:30:45][WARNING] saw ][INFO] upstream"),
            Some((21, LogLevel::Warning))
        );
        assert_eq!(
            level_tag("[2025-01-08 10:30:45][INFO] peer sent ][CRITICAL]"),
            Some((21, LogLevel::Info))
        );
        assert_eq!(level_tag("[fixed][bogus] ][ERROR]"), None);
    }

    #[test]
    fn test_listener_does_not_panic() {
        let listener = ConsoleMirror::with_colors(false).into_listener();
        listener("[2025-01-08 10:30:45][INFO] hello");
        listener("[2025-01-08 10:30:45][CRITICAL] oh no");
    }
}

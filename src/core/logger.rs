//! Main logger implementation

use super::{
    config::{LoggerConfig, DIVIDER_WIDTH},
    error::{LoggerError, Result},
    error_value::ErrorValue,
    formatter::{EntryFormatter, TextFormatter, INNER_EXCEPTION_TAG},
    joiner::join_items,
    listener::{notify_all, LineListener},
    log_item::LogItem,
    log_level::{admits, LogLevel},
    metrics::LoggerMetrics,
    template::render_template,
    writer::LogWriter,
};
use crate::writers::FileWriter;
use chrono::Local;
use parking_lot::{ReentrantMutex, RwLock};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Leveled text logger.
///
/// Every call is synchronous: the entry is filtered, rendered and appended
/// before the call returns, and the destination is opened and closed once per
/// line. Configuration lives behind a lock and is read at the start of every
/// call, so it may be changed at any time through a shared reference.
pub struct Logger {
    config: RwLock<LoggerConfig>,
    formatter: Arc<dyn EntryFormatter>,
    writer: Arc<dyn LogWriter>,
    listeners: RwLock<Vec<LineListener>>,
    metrics: Arc<LoggerMetrics>,
    /// Keeps the lines of one entry together; re-entrant so listeners may log
    emit_lock: ReentrantMutex<()>,
}

impl Logger {
    /// Logger writing to `destination` with default settings
    #[must_use]
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self::with_config(LoggerConfig::new().with_destination(destination))
    }

    /// Logger with no destination; every call is a no-op until one is set
    #[must_use]
    pub fn disabled() -> Self {
        Self::with_config(LoggerConfig::new())
    }

    /// Logger from an existing configuration.
    ///
    /// The configuration is taken as is; use [`LoggerConfig::validate`] or
    /// [`LoggerBuilder::try_build`] to reject invalid delimiters and glyphs.
    #[must_use]
    pub fn with_config(config: LoggerConfig) -> Self {
        Self {
            config: RwLock::new(config),
            formatter: Arc::new(TextFormatter::new()),
            writer: Arc::new(FileWriter::new()),
            listeners: RwLock::new(Vec::new()),
            metrics: Arc::new(LoggerMetrics::new()),
            emit_lock: ReentrantMutex::new(()),
        }
    }

    /// Log `items` joined with the configured delimiter.
    ///
    /// When chain expansion is on and one of the items is an error, the
    /// causes of the first such error follow as secondary lines, nearest
    /// cause first.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_text_logger::prelude::*;
    ///
    /// let logger = Logger::new("app.log");
    /// logger.log(LogLevel::Info, [LogItem::from("Loaded"), LogItem::from(12), LogItem::from("rows")])?;
    /// # Ok::<(), LoggerError>(())
    /// ```
    pub fn log<I>(&self, level: LogLevel, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<LogItem>,
    {
        let config = self.config.read().clone();
        if !self.admit(level, &config) {
            return Ok(());
        }
        let Some(destination) = config.active_destination() else {
            return Ok(());
        };
        self.metrics.record_entry_logged();

        let items: Vec<LogItem> = items.into_iter().map(Into::into).collect();
        let timestamp = Local::now();
        let joined = join_items(&items, &config.item_delimiter, |err| {
            self.formatter
                .format_error(Some(err), config.use_qualified_type_name)
        });
        let primary = self.formatter.format_primary(level, &joined.body, &timestamp);

        let _guard = self.emit_lock.lock();
        self.emit(destination, &primary)?;

        if config.expand_chain {
            if let Some(error) = joined.first_error {
                self.emit_causes(&config, destination, error)?;
            }
        }
        Ok(())
    }

    /// Log a runtime positional template such as `"{0} of {1} done"`.
    ///
    /// The template is rendered only if `level` passes the threshold. A
    /// malformed template or a missing argument is returned as
    /// [`LoggerError::FormatterError`](crate::LoggerError::FormatterError) and
    /// nothing is written. Causes of error arguments are not expanded.
    pub fn log_formatted(&self, level: LogLevel, template: &str, args: &[LogItem]) -> Result<()> {
        let config = self.config.read().clone();
        if !self.admit(level, &config) {
            return Ok(());
        }
        let Some(destination) = config.active_destination() else {
            return Ok(());
        };

        let timestamp = Local::now();
        let body = render_template(template, args, |err| {
            self.formatter
                .format_error(Some(err), config.use_qualified_type_name)
        })?;
        self.metrics.record_entry_logged();
        let primary = self.formatter.format_primary(level, &body, &timestamp);

        let _guard = self.emit_lock.lock();
        self.emit(destination, &primary)
    }

    #[inline]
    pub fn info<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<LogItem>,
    {
        self.log(LogLevel::Info, items)
    }

    #[inline]
    pub fn warning<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<LogItem>,
    {
        self.log(LogLevel::Warning, items)
    }

    #[inline]
    pub fn error<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<LogItem>,
    {
        self.log(LogLevel::Error, items)
    }

    #[inline]
    pub fn critical<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<LogItem>,
    {
        self.log(LogLevel::Critical, items)
    }

    #[inline]
    pub fn info_formatted(&self, template: &str, args: &[LogItem]) -> Result<()> {
        self.log_formatted(LogLevel::Info, template, args)
    }

    #[inline]
    pub fn warning_formatted(&self, template: &str, args: &[LogItem]) -> Result<()> {
        self.log_formatted(LogLevel::Warning, template, args)
    }

    #[inline]
    pub fn error_formatted(&self, template: &str, args: &[LogItem]) -> Result<()> {
        self.log_formatted(LogLevel::Error, template, args)
    }

    #[inline]
    pub fn critical_formatted(&self, template: &str, args: &[LogItem]) -> Result<()> {
        self.log_formatted(LogLevel::Critical, template, args)
    }

    /// Write a divider line of the configured glyph.
    pub fn divider(&self) -> Result<()> {
        let glyph = self.config.read().divider_char;
        self.divider_with(glyph)
    }

    /// Write a divider line of `glyph`.
    ///
    /// Dividers ignore the per-entry threshold: they are written whenever
    /// dividers are enabled and the threshold is not [`LogLevel::None`].
    /// A control character glyph is rejected with
    /// [`LoggerError::InvalidConfiguration`](crate::LoggerError::InvalidConfiguration).
    pub fn divider_with(&self, glyph: char) -> Result<()> {
        if glyph.is_control() {
            return Err(LoggerError::config(
                "Logger",
                format!("divider glyph {:?} is a control character", glyph),
            ));
        }
        let config = self.config.read().clone();
        if config.threshold == LogLevel::None || !config.divider_enabled {
            return Ok(());
        }
        let Some(destination) = config.active_destination() else {
            return Ok(());
        };

        let line: String = std::iter::repeat(glyph).take(DIVIDER_WIDTH).collect();
        let _guard = self.emit_lock.lock();
        self.emit(destination, &line)
    }

    /// Remove the destination file. Never fails.
    pub fn delete(&self) {
        let config = self.config.read().clone();
        if let Some(destination) = config.active_destination() {
            let _guard = self.emit_lock.lock();
            self.writer.delete(destination);
        }
    }

    /// Register a callback for every attempted line write.
    pub fn subscribe(&self, listener: LineListener) {
        self.listeners.write().push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Get the logger metrics for observability
    ///
    /// # Example
    ///
    /// ```
    /// use rust_text_logger::Logger;
    ///
    /// let logger = Logger::disabled();
    /// let metrics = logger.metrics();
    /// println!("Written: {}", metrics.lines_written());
    /// println!("Failure rate: {:.2}%", metrics.failure_rate());
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn writer_name(&self) -> &str {
        self.writer.name()
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.config.read().clone()
    }

    /// Replace the whole configuration after validating it.
    pub fn set_config(&self, config: LoggerConfig) -> Result<()> {
        config.validate()?;
        *self.config.write() = config;
        Ok(())
    }

    /// Mutate the configuration under the lock.
    ///
    /// The result is validated; on failure the previous configuration is kept.
    pub fn update_config<F>(&self, update: F) -> Result<()>
    where
        F: FnOnce(&mut LoggerConfig),
    {
        self.try_update(update)
    }

    pub fn destination(&self) -> Option<PathBuf> {
        self.config.read().destination.clone()
    }

    pub fn set_destination(&self, destination: impl Into<PathBuf>) {
        self.config.write().destination = Some(destination.into());
    }

    /// Disable all writes by removing the destination
    pub fn clear_destination(&self) {
        self.config.write().destination = None;
    }

    pub fn threshold(&self) -> LogLevel {
        self.config.read().threshold
    }

    pub fn set_threshold(&self, threshold: LogLevel) {
        self.config.write().threshold = threshold;
    }

    pub fn set_expand_chain(&self, expand: bool) {
        self.config.write().expand_chain = expand;
    }

    pub fn set_use_qualified_type_name(&self, qualified: bool) {
        self.config.write().use_qualified_type_name = qualified;
    }

    /// Rejects delimiters containing a line break.
    pub fn set_item_delimiter(&self, delimiter: impl Into<String>) -> Result<()> {
        let delimiter = delimiter.into();
        self.try_update(|c| c.item_delimiter = delimiter)
    }

    /// Rejects prefixes containing a line break.
    pub fn set_secondary_prefix(&self, prefix: impl Into<String>) -> Result<()> {
        let prefix = prefix.into();
        self.try_update(|c| c.secondary_prefix = prefix)
    }

    pub fn set_divider_enabled(&self, enabled: bool) {
        self.config.write().divider_enabled = enabled;
    }

    /// Rejects control characters.
    pub fn set_divider_char(&self, glyph: char) -> Result<()> {
        self.try_update(|c| c.divider_char = glyph)
    }

    pub fn set_max_cause_depth(&self, depth: Option<usize>) {
        self.config.write().max_cause_depth = depth;
    }

    /// Threshold check; the entry is counted as logged only once it is emitted
    fn admit(&self, level: LogLevel, config: &LoggerConfig) -> bool {
        let admitted = admits(level, config.threshold);
        if !admitted {
            self.metrics.record_entry_filtered();
        }
        admitted
    }

    /// Apply `update` to a copy of the configuration and keep it only if valid
    fn try_update<F>(&self, update: F) -> Result<()>
    where
        F: FnOnce(&mut LoggerConfig),
    {
        let mut config = self.config.write();
        let mut candidate = config.clone();
        update(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }

    fn emit_causes(
        &self,
        config: &LoggerConfig,
        destination: &Path,
        error: &dyn ErrorValue,
    ) -> Result<()> {
        let mut cause = error.cause();
        let mut depth = 0usize;

        while let Some(current) = cause {
            if config.max_cause_depth.is_some_and(|max| depth >= max) {
                let notice = format!(
                    "{} ... cause chain truncated after {} levels",
                    INNER_EXCEPTION_TAG, depth
                );
                let line = self.formatter.format_secondary(&config.secondary_prefix, &notice);
                return self.emit(destination, &line);
            }

            let rendered = self
                .formatter
                .format_error(Some(current), config.use_qualified_type_name);
            let body = format!("{} {}", INNER_EXCEPTION_TAG, rendered);
            let line = self.formatter.format_secondary(&config.secondary_prefix, &body);
            self.emit(destination, &line)?;

            cause = current.cause();
            depth += 1;
        }
        Ok(())
    }

    /// Write one line, record the outcome and notify listeners.
    fn emit(&self, destination: &Path, line: &str) -> Result<()> {
        let result = self.writer.write_line(destination, line);
        match &result {
            Ok(()) => self.metrics.record_line_written(),
            Err(_) => self.metrics.record_write_failure(),
        };

        // Listeners may subscribe or log from inside the callback.
        let listeners = self.listeners.read().clone();
        notify_all(&listeners, line);

        result
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_text_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .destination("service.log")
///     .threshold(LogLevel::Warning)
///     .item_delimiter(" | ")
///     .qualified_type_name(true)
///     .writer(MemoryWriter::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    formatter: Option<Arc<dyn EntryFormatter>>,
    writer: Option<Arc<dyn LogWriter>>,
    listeners: Vec<LineListener>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            formatter: None,
            writer: None,
            listeners: Vec::new(),
        }
    }

    /// Start from an existing configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.config.destination = Some(destination.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, threshold: LogLevel) -> Self {
        self.config.threshold = threshold;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn expand_chain(mut self, expand: bool) -> Self {
        self.config.expand_chain = expand;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn qualified_type_name(mut self, qualified: bool) -> Self {
        self.config.use_qualified_type_name = qualified;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn item_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.item_delimiter = delimiter.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn secondary_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.secondary_prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn divider_enabled(mut self, enabled: bool) -> Self {
        self.config.divider_enabled = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn divider_char(mut self, glyph: char) -> Self {
        self.config.divider_char = glyph;
        self
    }

    /// Cap the number of cause lines per entry; `None` walks the whole chain
    #[must_use = "builder methods return a new value"]
    pub fn max_cause_depth(mut self, depth: Option<usize>) -> Self {
        self.config.max_cause_depth = depth;
        self
    }

    /// Replace the default [`TextFormatter`]
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: EntryFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Replace the default [`FileWriter`]
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: LogWriter + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Arc::new(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn listener(mut self, listener: LineListener) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Build the Logger without validating the configuration
    pub fn build(self) -> Logger {
        let mut logger = Logger::with_config(self.config);
        if let Some(formatter) = self.formatter {
            logger.formatter = formatter;
        }
        if let Some(writer) = self.writer {
            logger.writer = writer;
        }
        *logger.listeners.get_mut() = self.listeners;
        logger
    }

    /// Build the Logger after validating the configuration
    pub fn try_build(self) -> Result<Logger> {
        self.config.validate()?;
        Ok(self.build())
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

//! Main logger implementation

use super::{
    access_timer::RequestTimer,
    channel::Channel,
    config::LoggerConfig,
    error::Result,
    fan_out::{FanOut, SinkSpec},
    formatter::{FormatterConfig, RecordFormatter},
    log_data::LogData,
    log_level::LogLevel,
    log_record::{AccessLogRecord, GenericLogRecord, LogRecord, ResponseMeta},
    metrics::LoggerMetrics,
    sink::Sink,
};
use crate::appenders::FileSink;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Leveled logger with one fan-out per channel
///
/// The threshold and sinks are fixed at construction. A `Logger` is
/// `Send + Sync`; share it with `Arc` and hand it to whatever needs to log.
///
/// # Example
///
/// ```no_run
/// use rust_leveled_logger::prelude::*;
///
/// let logger = Logger::new(
///     LoggerConfig::new(LogLevel::All)
///         .with_path(Channel::Error, "error.log")
///         .with_path(Channel::Access, "access.log"),
/// )?;
///
/// logger.info("Server started");
/// logger.error_with_data("Upstream failed", LogData::new().with_field("code", 502));
/// # Ok::<(), rust_leveled_logger::LoggerError>(())
/// ```
pub struct Logger {
    threshold: LogLevel,
    /// Indexed by `Channel as usize`
    channels: Vec<FanOut>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Build a logger from `config`: every channel writes to its console
    /// stream, and to its file when a path is configured.
    ///
    /// Fails if any configured file cannot be opened.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let mut builder = Self::builder().threshold(config.level);
        for channel in Channel::ALL {
            if let Some(path) = config.path(channel) {
                builder = builder.file(channel, path);
            }
        }
        builder.build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Whether a call at `level` would produce output
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.threshold.satisfies(level)
    }

    /// Write a generic record through the channel of `level`
    ///
    /// Levels without a generic channel (`None`, `Access`, `All`) are ignored.
    pub fn log(&self, level: LogLevel, message: impl Into<String>, data: Option<LogData>) {
        let Some(channel) = Channel::for_generic_level(level) else {
            return;
        };
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let record = GenericLogRecord::new(level, message).with_data(data);
        self.channel(channel).write(&LogRecord::Generic(record));
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message, None);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message, None);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message, None);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message, None);
    }

    pub fn error_with_data(&self, message: impl Into<String>, data: LogData) {
        self.log(LogLevel::Error, message, Some(data));
    }

    pub fn warn_with_data(&self, message: impl Into<String>, data: LogData) {
        self.log(LogLevel::Warn, message, Some(data));
    }

    pub fn debug_with_data(&self, message: impl Into<String>, data: LogData) {
        self.log(LogLevel::Debug, message, Some(data));
    }

    pub fn info_with_data(&self, message: impl Into<String>, data: LogData) {
        self.log(LogLevel::Info, message, Some(data));
    }

    /// Record one completed request that started at `started_at`
    ///
    /// Access records obey the threshold like every other level: they are
    /// written only when the threshold is `Access` or `All`.
    pub fn access(&self, started_at: DateTime<Utc>, meta: &ResponseMeta) {
        if !self.is_enabled(LogLevel::Access) {
            self.metrics.record_filtered();
            return;
        }
        self.write_access(AccessLogRecord::completed(started_at, meta));
    }

    /// Write a fully formed access record
    pub fn access_record(&self, record: AccessLogRecord) {
        if !self.is_enabled(LogLevel::Access) {
            self.metrics.record_filtered();
            return;
        }
        self.write_access(record);
    }

    /// Start timing a request; pass the timer back with
    /// [`RequestTimer::finish`] once the response is known.
    pub fn start_request(&self) -> RequestTimer {
        RequestTimer::start()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Names of the sinks behind `channel`, in write order
    pub fn sink_names(&self, channel: Channel) -> Vec<&str> {
        self.channel(channel).sink_names()
    }

    /// Flush every channel, returning the first error
    pub fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for fan_out in &self.channels {
            if let Err(e) = fan_out.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn write_access(&self, record: AccessLogRecord) {
        self.channel(Channel::Access).write(&LogRecord::Access(record));
    }

    fn channel(&self, channel: Channel) -> &FanOut {
        &self.channels[channel as usize]
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let failures = self.metrics.write_failures();
        if failures > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down after {} failed sink writes",
                failures
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Every channel starts with its console stream; files and custom sinks are
/// appended after it in the order they are added. Channels given the same
/// file path share one open handle.
///
/// # Example
/// ```
/// use rust_leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let buffer = Arc::new(WriterSink::new("memory", Vec::new(), RecordStyle::Json));
///
/// let logger = Logger::builder()
///     .threshold(LogLevel::Info)
///     .console(false)
///     .sink(Channel::Info, buffer.clone())
///     .build()
///     .unwrap();
///
/// logger.info("captured");
/// assert!(buffer.with_writer(|w| !w.is_empty()));
/// ```
pub struct LoggerBuilder {
    threshold: LogLevel,
    console: bool,
    formatter: FormatterConfig,
    files: Vec<(Channel, PathBuf)>,
    sinks: Vec<(Channel, Arc<dyn Sink>)>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: LogLevel::All,
            console: true,
            formatter: FormatterConfig::default(),
            files: Vec::new(),
            sinks: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    /// Enable or disable the default console stream of every channel
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, config: FormatterConfig) -> Self {
        self.formatter = config;
        self
    }

    /// Append JSON records of `channel` to the file at `path`
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, channel: Channel, path: impl Into<PathBuf>) -> Self {
        self.files.push((channel, path.into()));
        self
    }

    /// Add a custom sink to `channel`
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, channel: Channel, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push((channel, sink));
        self
    }

    /// Open every sink and build the Logger
    ///
    /// Fails if the formatter configuration is invalid or a file cannot be
    /// opened.
    pub fn build(self) -> Result<Logger> {
        self.formatter.timestamp_format.validate()?;

        let metrics = Arc::new(LoggerMetrics::new());
        let formatter = RecordFormatter::new(self.formatter.shared());

        let mut open_files: HashMap<PathBuf, Arc<dyn Sink>> = HashMap::new();
        let mut channels = Vec::with_capacity(Channel::ALL.len());

        for channel in Channel::ALL {
            let mut specs = Vec::new();
            if self.console {
                specs.push(SinkSpec::Console(channel.console_target()));
            }

            for (_, path) in self.files.iter().filter(|(c, _)| *c == channel) {
                let sink = match open_files.get(path) {
                    Some(sink) => Arc::clone(sink),
                    None => {
                        let sink: Arc<dyn Sink> = Arc::new(FileSink::open(path.clone())?);
                        open_files.insert(path.clone(), Arc::clone(&sink));
                        sink
                    }
                };
                specs.push(SinkSpec::Custom(sink));
            }

            for (_, sink) in self.sinks.iter().filter(|(c, _)| *c == channel) {
                specs.push(SinkSpec::Custom(Arc::clone(sink)));
            }

            channels.push(FanOut::open(specs, &formatter, Arc::clone(&metrics))?);
        }

        Ok(Logger {
            threshold: self.threshold,
            channels,
            metrics,
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

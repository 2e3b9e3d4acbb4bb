//! Record rendering
//!
//! Every record has two renderings:
//! - a human-readable console line (colored level tag for generic records,
//!   Apache common log layout for access records)
//! - a single-line JSON object for files, never containing ANSI escapes

use super::error::Result;
use super::log_level::LogLevel;
use super::log_record::{sanitize, AccessLogRecord, GenericLogRecord, LogRecord};
use super::timestamp::TimestampFormat;
use std::sync::Arc;

const ANSI_RESET: &str = "\x1b[0m";

/// Which rendering a sink writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordStyle {
    /// Human-readable line, colored when the formatter allows it
    #[default]
    Console,
    /// One JSON object per line
    Json,
}

/// Configuration for log formatting
///
/// Shared by all console sinks of a logger.
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::{FormatterConfig, TimestampFormat};
///
/// let config = FormatterConfig::new()
///     .with_timestamp_format(TimestampFormat::Rfc3339Millis)
///     .with_colors(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Timestamp format for console lines
    pub timestamp_format: TimestampFormat,
    /// Whether to wrap the level tag in ANSI color codes
    pub use_colors: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            use_colors: true,
        }
    }
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Wrap this config in an Arc for sharing across sinks
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Renders records for console and file sinks
#[derive(Debug, Clone, Default)]
pub struct RecordFormatter {
    config: Arc<FormatterConfig>,
}

impl RecordFormatter {
    pub fn new(config: Arc<FormatterConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Render `record` in the given style, newline-terminated
    pub fn render(&self, style: RecordStyle, record: &LogRecord) -> Result<String> {
        match style {
            RecordStyle::Console => Ok(self.console_line(record)),
            RecordStyle::Json => Self::json_line(record),
        }
    }

    pub fn console_line(&self, record: &LogRecord) -> String {
        match record {
            LogRecord::Generic(r) => self.generic_console_line(r),
            LogRecord::Access(r) => self.access_console_line(r),
        }
    }

    /// JSON rendering used by file sinks
    ///
    /// A payload that fails to serialize is dropped and the record is
    /// written without it.
    pub fn json_line(record: &LogRecord) -> Result<String> {
        let mut line = match record {
            LogRecord::Generic(r) => match serde_json::to_string(r) {
                Ok(json) => json,
                Err(_) if r.data.is_some() => {
                    let mut stripped = r.clone();
                    stripped.data = None;
                    serde_json::to_string(&stripped)?
                }
                Err(e) => return Err(e.into()),
            },
            LogRecord::Access(r) => serde_json::to_string(r)?,
        };
        line.push('\n');
        Ok(line)
    }

    /// `[LEVEL]`, wrapped in the level's color when colors are enabled
    ///
    /// The escape codes come straight from `colored::Color` instead of
    /// `Colorize`, so `use_colors` alone decides; colored's own terminal and
    /// `NO_COLOR` detection is bypassed.
    pub fn level_tag(&self, level: LogLevel) -> String {
        match level.color() {
            Some(color) if self.config.use_colors => {
                format!("\x1b[{}m[{}]{}", color.to_fg_str(), level, ANSI_RESET)
            }
            _ => format!("[{}]", level),
        }
    }

    fn generic_console_line(&self, record: &GenericLogRecord) -> String {
        let mut line = format!(
            "{} {} {}",
            self.level_tag(record.level),
            self.config.timestamp_format.format(&record.time),
            record.message
        );

        if let Some(json) = record.payload().and_then(|data| data.to_json().ok()) {
            line.push(' ');
            line.push_str(&json);
        }

        line.push('\n');
        line
    }

    /// Request fields are escaped like generic messages.
    fn access_console_line(&self, record: &AccessLogRecord) -> String {
        let ip = if record.ip.is_empty() {
            "-".to_string()
        } else {
            sanitize(&record.ip)
        };
        format!(
            "{} - - [{}] \"{} {} {}\" {} - {:?}\n",
            ip,
            self.config.timestamp_format.format(&record.time),
            sanitize(&record.method),
            sanitize(&record.url),
            sanitize(&record.protocol),
            record.http_status_code,
            record.response_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_data::LogData;
    use crate::core::log_record::ResponseMeta;
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    fn formatter(use_colors: bool) -> RecordFormatter {
        RecordFormatter::new(FormatterConfig::new().with_colors(use_colors).shared())
    }

    fn fixed_time() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap()
    }

    #[test]
    fn test_level_tag_colors() {
        let f = formatter(true);
        assert_eq!(f.level_tag(LogLevel::Error), "\x1b[31m[ERROR]\x1b[0m");
        assert_eq!(f.level_tag(LogLevel::Warn), "\x1b[33m[WARN]\x1b[0m");
        assert_eq!(f.level_tag(LogLevel::Info), "\x1b[32m[INFO]\x1b[0m");
        assert_eq!(f.level_tag(LogLevel::Debug), "\x1b[36m[DEBUG]\x1b[0m");
    }

    #[test]
    fn test_level_tag_plain() {
        assert_eq!(formatter(false).level_tag(LogLevel::Error), "[ERROR]");
    }

    #[test]
    fn test_generic_console_line() {
        let record: LogRecord = GenericLogRecord::new(LogLevel::Warn, "Warning")
            .with_time(fixed_time())
            .with_data(LogData::new().with_field("code", 123))
            .into();

        assert_eq!(
            formatter(false).console_line(&record),
            "[WARN] 2025-01-08T10:30:45+00:00 Warning {\"code\":123}\n"
        );
    }

    #[test]
    fn test_generic_console_line_without_data() {
        let record: LogRecord = GenericLogRecord::new(LogLevel::Info, "started")
            .with_time(fixed_time())
            .into();

        let line = formatter(true).console_line(&record);
        assert!(line.starts_with("\x1b[32m[INFO]\x1b[0m "));
        assert!(line.ends_with("started\n"));
    }

    #[test]
    fn test_json_line_has_no_escapes() {
        let record: LogRecord = GenericLogRecord::new(LogLevel::Error, "boom")
            .with_data(LogData::new().with_field("k", "v"))
            .into();

        let line = RecordFormatter::json_line(&record).unwrap();
        assert!(!line.contains('\x1b'));
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed["level"], "ERROR");
        assert_eq!(parsed["data"]["k"], "v");
    }

    #[test]
    fn test_access_console_line() {
        let meta = ResponseMeta::new("GET", "/ping", "HTTP/1.1").with_client_addr("127.0.0.1");
        let record: LogRecord =
            AccessLogRecord::with_duration(fixed_time(), Duration::from_micros(1500), &meta).into();

        assert_eq!(
            formatter(true).console_line(&record),
            "127.0.0.1 - - [2025-01-08T10:30:45+00:00] \"GET /ping HTTP/1.1\" 200 - 1.5ms\n"
        );
    }

    #[test]
    fn test_access_console_line_unknown_client() {
        let meta = ResponseMeta::new("GET", "/", "HTTP/1.0").with_status(404);
        let record: LogRecord =
            AccessLogRecord::with_duration(fixed_time(), Duration::from_millis(2), &meta).into();

        let line = formatter(false).console_line(&record);
        assert!(line.starts_with("- - - ["));
        assert!(line.contains("\" 404 - 2ms"));
    }

    #[test]
    fn test_access_console_line_escapes_request_fields() {
        let meta = ResponseMeta::new(
            "GET",
            "/a\n10.0.0.9 - - [x] \"GET /admin HTTP/1.1\" 200 - 1ms",
            "HTTP/1.1\r",
        )
        .with_client_addr("10.0.0.1\t");
        let record: LogRecord =
            AccessLogRecord::with_duration(fixed_time(), Duration::from_millis(1), &meta).into();

        let line = formatter(false).console_line(&record);
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.ends_with(" 200 - 1ms\n"));
        assert!(line.starts_with("10.0.0.1\\t - - ["));
        assert!(line.contains("\"GET /a\\n10.0.0.9 - - [x]"));
        assert!(line.contains("HTTP/1.1\\r\" 200"));
    }

    #[test]
    fn test_render_dispatches_on_style() {
        let record: LogRecord = GenericLogRecord::new(LogLevel::Debug, "x").into();
        let f = formatter(true);

        let console = f.render(RecordStyle::Console, &record).unwrap();
        let json = f.render(RecordStyle::Json, &record).unwrap();
        assert!(console.starts_with("\x1b[36m"));
        assert!(json.starts_with('{'));
    }
}

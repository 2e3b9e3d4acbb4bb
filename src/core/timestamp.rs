//! Timestamp formatting for console output
//!
//! File output always carries RFC 3339 timestamps (chrono's serde form); the
//! console timestamp can be switched to any of the formats below.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options for console lines
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Rfc3339Millis;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with full precision and offset: `2025-01-08T10:30:45.123456+00:00`
    #[default]
    Rfc3339,

    /// RFC 3339 with milliseconds and `Z`: `2025-01-08T10:30:45.123Z`
    Rfc3339Millis,

    /// Apache common log format: `08/Jan/2025:10:30:45 +0000`
    CommonLog,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_leveled_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%Y-%m-%d".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Reject custom format strings with unknown or incomplete specifiers
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = self {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("invalid strftime format '{}'", format_str),
                ));
            }
        }
        Ok(())
    }

    /// Format `datetime`
    ///
    /// An invalid custom format falls back to RFC 3339.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Rfc3339Millis => {
                datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
            }
            TimestampFormat::CommonLog => datetime.format("%d/%b/%Y:%H:%M:%S %z").to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => datetime.to_rfc3339(),
                }
            }
        }
    }
}

//! Log record structures
//!
//! Two record shapes flow through the logger: generic leveled messages and
//! HTTP access records. Both are ephemeral; they are built per call, rendered
//! by every sink of the channel and dropped.

use super::log_data::LogData;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A leveled message with an optional structured payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericLogRecord {
    pub time: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "GenericLogRecord::data_is_empty")]
    pub data: Option<LogData>,
}

/// Sanitize log text to prevent log injection attacks
///
/// Replaces newlines, carriage returns, and tabs with escape sequences
/// so one record can never masquerade as several.
pub(crate) fn sanitize(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

impl GenericLogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self {
            time: Utc::now(),
            level,
            message: sanitize(&message),
            data: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: impl Into<Option<LogData>>) -> Self {
        self.data = data.into();
        self
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    /// Payload worth rendering: present and non-empty
    pub fn payload(&self) -> Option<&LogData> {
        self.data.as_ref().filter(|d| !d.is_empty())
    }

    fn data_is_empty(data: &Option<LogData>) -> bool {
        data.as_ref().map_or(true, LogData::is_empty)
    }
}

/// What an HTTP middleware knows once a response has been produced
///
/// # Example
///
/// ```
/// use rust_leveled_logger::ResponseMeta;
///
/// let meta = ResponseMeta::new("GET", "/ping", "HTTP/1.1")
///     .with_status(204)
///     .with_client_addr("10.0.0.7")
///     .with_user_agent("curl/8.5.0");
/// assert_eq!(meta.status, 204);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub method: String,
    pub url: String,
    pub protocol: String,
    pub user_agent: String,
    pub client_addr: String,
    pub status: u16,
}

impl ResponseMeta {
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            protocol: protocol.into(),
            user_agent: String::new(),
            client_addr: String::new(),
            status: 200,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_client_addr(mut self, client_addr: impl Into<String>) -> Self {
        self.client_addr = client_addr.into();
        self
    }
}

/// One completed HTTP request/response cycle
///
/// `time` is the moment the request started; `response_time` is how long the
/// handler took. In JSON the duration is an integer number of nanoseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessLogRecord {
    pub time: DateTime<Utc>,
    pub protocol: String,
    pub http_status_code: u16,
    #[serde(with = "duration_nanos")]
    pub response_time: Duration,
    pub user_agent: String,
    pub url: String,
    pub ip: String,
    pub method: String,
}

impl AccessLogRecord {
    /// Build a record for a request that started at `started_at` and has
    /// just completed.
    pub fn completed(started_at: DateTime<Utc>, meta: &ResponseMeta) -> Self {
        let response_time = (Utc::now() - started_at).to_std().unwrap_or_default();
        Self::with_duration(started_at, response_time, meta)
    }

    pub fn with_duration(
        started_at: DateTime<Utc>,
        response_time: Duration,
        meta: &ResponseMeta,
    ) -> Self {
        Self {
            time: started_at,
            protocol: meta.protocol.clone(),
            http_status_code: meta.status,
            response_time,
            user_agent: meta.user_agent.clone(),
            url: meta.url.clone(),
            ip: meta.client_addr.clone(),
            method: meta.method.clone(),
        }
    }
}

/// Any record a channel can carry
#[derive(Debug, Clone, PartialEq)]
pub enum LogRecord {
    Generic(GenericLogRecord),
    Access(AccessLogRecord),
}

impl LogRecord {
    pub fn level(&self) -> LogLevel {
        match self {
            LogRecord::Generic(r) => r.level,
            LogRecord::Access(_) => LogLevel::Access,
        }
    }

    pub fn time(&self) -> DateTime<Utc> {
        match self {
            LogRecord::Generic(r) => r.time,
            LogRecord::Access(r) => r.time,
        }
    }
}

impl From<GenericLogRecord> for LogRecord {
    fn from(record: GenericLogRecord) -> Self {
        LogRecord::Generic(record)
    }
}

impl From<AccessLogRecord> for LogRecord {
    fn from(record: AccessLogRecord) -> Self {
        LogRecord::Access(record)
    }
}

mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_nanos)
    }
}

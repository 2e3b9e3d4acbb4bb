//! Core logger types and traits

pub mod access_timer;
pub mod channel;
pub mod config;
pub mod error;
pub mod fan_out;
pub mod formatter;
pub mod log_data;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use access_timer::RequestTimer;
pub use channel::Channel;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use fan_out::{FanOut, SinkSpec};
pub use formatter::{FormatterConfig, RecordFormatter, RecordStyle};
pub use log_data::{FieldValue, LogData};
pub use log_level::LogLevel;
pub use log_record::{AccessLogRecord, GenericLogRecord, LogRecord, ResponseMeta};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::TimestampFormat;

//! # Rust Leveled Logger
//!
//! A leveled logging library that routes records to per-channel sinks.
//!
//! ## Features
//!
//! - **Fixed Level Order**: `None < Error < Debug < Warn < Info < Access < All`
//! - **Channels**: Error, Warn, Debug, Info and Access, each with its own sinks
//! - **Fan-out**: every record goes to the console and, optionally, a file
//! - **Two Renderings**: colored console lines and JSON Lines files
//! - **Access Records**: Apache common log lines for HTTP middleware
//! - **Thread Safe**: one record is never interleaved with another

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleSink, ConsoleTarget, FileSink, WriterSink};
    pub use crate::core::{
        AccessLogRecord, Channel, FanOut, FieldValue, FormatterConfig, GenericLogRecord, LogData,
        LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        RecordFormatter, RecordStyle, RequestTimer, ResponseMeta, Result, Sink, SinkSpec,
        TimestampFormat,
    };
}

pub use crate::appenders::{ConsoleSink, ConsoleTarget, FileSink, WriterSink};
pub use crate::core::{
    AccessLogRecord, Channel, FanOut, FieldValue, FormatterConfig, GenericLogRecord, LogData,
    LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
    RecordFormatter, RecordStyle, RequestTimer, ResponseMeta, Result, Sink, SinkSpec,
    TimestampFormat,
};

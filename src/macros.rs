//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The logger is
//! always passed explicitly.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::{info, log_data, warn};
//!
//! let logger = Logger::builder().console(false).build().unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With a structured payload
//! warn!(logger, data: log_data! { "free_mb" => 12, "mount" => "/var" }, "Disk almost full");
//! ```

/// Build a [`LogData`](crate::LogData) payload from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::{log_data, FieldValue};
///
/// let data = log_data! { "code" => 123, "detail" => "timeout", "retry" => false };
/// assert_eq!(data.get("code"), Some(&FieldValue::Int(123)));
///
/// let empty = log_data! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! log_data {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::LogData::new()$(.with_field($key, $value))*
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().console(false).build().unwrap();
/// use rust_leveled_logger::{log, log_data};
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(logger, LogLevel::Debug, data: log_data! { "k" => "v" }, "With data");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, data: $data:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), Some($data))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), None)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().console(false).build().unwrap();
/// use rust_leveled_logger::error;
/// error!(logger, "Connection failed");
/// error!(logger, "Failed to open file: {}", "config.toml");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, data: $data:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, data: $data, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().console(false).build().unwrap();
/// use rust_leveled_logger::warn;
/// warn!(logger, "Deprecated API used");
/// warn!(logger, "Memory usage: {}%", 85);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, data: $data:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, data: $data, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().console(false).build().unwrap();
/// use rust_leveled_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, data: $data:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, data: $data, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().console(false).build().unwrap();
/// use rust_leveled_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "User {} logged in", "alice");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, data: $data:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, data: $data, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

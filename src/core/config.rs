//! Logger configuration
//!
//! A threshold plus one optional file path per channel. An empty path means
//! the channel only writes to its console stream.

use super::channel::Channel;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Construction-time configuration of a [`Logger`](crate::Logger)
///
/// Every field is optional when deserializing; a missing `level` means
/// [`LogLevel::All`].
///
/// # Example
///
/// ```
/// use rust_leveled_logger::{Channel, LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::new(LogLevel::Warn)
///     .with_path(Channel::Error, "error.log")
///     .with_path(Channel::Warn, "error.log");
/// assert_eq!(config.path(Channel::Warn), Some("error.log"));
/// assert_eq!(config.path(Channel::Info), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub error: String,
    pub warn: String,
    pub debug: String,
    pub info: String,
    pub access: String,
}

impl LoggerConfig {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_path(mut self, channel: Channel, path: impl Into<String>) -> Self {
        *self.path_mut(channel) = path.into();
        self
    }

    /// Configured file path of `channel`, `None` when console-only
    pub fn path(&self, channel: Channel) -> Option<&str> {
        let path = match channel {
            Channel::Error => &self.error,
            Channel::Warn => &self.warn,
            Channel::Debug => &self.debug,
            Channel::Info => &self.info,
            Channel::Access => &self.access,
        };
        (!path.is_empty()).then_some(path.as_str())
    }

    fn path_mut(&mut self, channel: Channel) -> &mut String {
        match channel {
            Channel::Error => &mut self.error,
            Channel::Warn => &mut self.warn,
            Channel::Debug => &mut self.debug,
            Channel::Info => &mut self.info,
            Channel::Access => &mut self.access,
        }
    }
}

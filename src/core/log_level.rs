//! Log level definitions and the fixed severity order

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity levels in their fixed order.
///
/// The order is `None < Error < Debug < Warn < Info < Access < All`. A logger
/// configured with threshold `T` emits a call at level `L` iff `T >= L`.
/// `None` never satisfies anything and `All` satisfies everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    None = 0,
    Error = 1,
    Debug = 2,
    Warn = 3,
    Info = 4,
    Access = 5,
    #[default]
    All = 6,
}

impl LogLevel {
    pub const VALUES: [LogLevel; 7] = [
        LogLevel::None,
        LogLevel::Error,
        LogLevel::Debug,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Access,
        LogLevel::All,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Access => "ACCESS",
            LogLevel::All => "ALL",
        }
    }

    /// Whether a logger with `self` as threshold emits calls at `level`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_leveled_logger::LogLevel;
    ///
    /// assert!(LogLevel::Warn.satisfies(LogLevel::Error));
    /// assert!(!LogLevel::Warn.satisfies(LogLevel::Info));
    /// assert!(!LogLevel::None.satisfies(LogLevel::Error));
    /// assert!(LogLevel::All.satisfies(LogLevel::Access));
    /// ```
    #[inline]
    pub fn satisfies(self, level: LogLevel) -> bool {
        level != LogLevel::None && self >= level
    }

    /// Console color of the level tag, if the level has one
    pub fn color(&self) -> Option<colored::Color> {
        match self {
            LogLevel::Error => Some(colored::Color::Red),
            LogLevel::Warn => Some(colored::Color::Yellow),
            LogLevel::Info => Some(colored::Color::Green),
            LogLevel::Debug => Some(colored::Color::Cyan),
            LogLevel::None | LogLevel::Access | LogLevel::All => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NONE" | "OFF" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "DEBUG" => Ok(LogLevel::Debug),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "ACCESS" => Ok(LogLevel::Access),
            "ALL" => Ok(LogLevel::All),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

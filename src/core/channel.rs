//! Severity channels

use super::log_level::LogLevel;
use crate::appenders::ConsoleTarget;
use std::fmt;

/// One severity category with its own sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Error,
    Warn,
    Debug,
    Info,
    Access,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Error,
        Channel::Warn,
        Channel::Debug,
        Channel::Info,
        Channel::Access,
    ];

    /// Level a record on this channel is checked against
    pub fn level(self) -> LogLevel {
        match self {
            Channel::Error => LogLevel::Error,
            Channel::Warn => LogLevel::Warn,
            Channel::Debug => LogLevel::Debug,
            Channel::Info => LogLevel::Info,
            Channel::Access => LogLevel::Access,
        }
    }

    /// Channel carrying generic records of `level`
    ///
    /// `None`, `Access` and `All` have no generic channel.
    pub fn for_generic_level(level: LogLevel) -> Option<Channel> {
        match level {
            LogLevel::Error => Some(Channel::Error),
            LogLevel::Warn => Some(Channel::Warn),
            LogLevel::Debug => Some(Channel::Debug),
            LogLevel::Info => Some(Channel::Info),
            LogLevel::None | LogLevel::Access | LogLevel::All => None,
        }
    }

    /// Error and Warn go to stderr, everything else to stdout
    pub fn console_target(self) -> ConsoleTarget {
        match self {
            Channel::Error | Channel::Warn => ConsoleTarget::Stderr,
            Channel::Debug | Channel::Info | Channel::Access => ConsoleTarget::Stdout,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Error => "error",
            Channel::Warn => "warn",
            Channel::Debug => "debug",
            Channel::Info => "info",
            Channel::Access => "access",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Console sink implementation

use crate::core::{LogRecord, RecordFormatter, Result, Sink};
use std::io::Write;

/// Standard stream a console sink writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

impl ConsoleTarget {
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}

pub struct ConsoleSink {
    target: ConsoleTarget,
    formatter: RecordFormatter,
}

impl ConsoleSink {
    pub fn new(target: ConsoleTarget, formatter: RecordFormatter) -> Self {
        Self { target, formatter }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleTarget::Stdout, RecordFormatter::default())
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleTarget::Stderr, RecordFormatter::default())
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Sink for ConsoleSink {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let line = self.formatter.console_line(record);

        // The std stream lock keeps one record's bytes together
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(line.as_bytes())?,
            ConsoleTarget::Stderr => std::io::stderr().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        self.target.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GenericLogRecord, LogLevel};

    #[test]
    fn test_console_sink_names() {
        assert_eq!(ConsoleSink::stdout().name(), "stdout");
        assert_eq!(ConsoleSink::stderr().name(), "stderr");
    }

    #[test]
    fn test_console_sink_append_does_not_fail() {
        let sink = ConsoleSink::stdout();
        let record: LogRecord = GenericLogRecord::new(LogLevel::Info, "console test").into();
        assert!(sink.append(&record).is_ok());
        assert!(sink.flush().is_ok());
    }
}

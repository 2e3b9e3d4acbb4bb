//! Sink over any `std::io::Write`
//!
//! Useful for piping records into a socket, a pipe or an in-memory buffer.

use crate::core::{LogRecord, RecordFormatter, RecordStyle, Result, Sink};
use parking_lot::Mutex;
use std::io::Write;

pub struct WriterSink<W: Write + Send> {
    name: String,
    style: RecordStyle,
    formatter: RecordFormatter,
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(name: impl Into<String>, writer: W, style: RecordStyle) -> Self {
        Self {
            name: name.into(),
            style,
            formatter: RecordFormatter::default(),
            writer: Mutex::new(writer),
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: RecordFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Run `f` against the underlying writer while holding its lock
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.writer.lock())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let rendered = self.formatter.render(self.style, record)?;
        self.writer.lock().write_all(rendered.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

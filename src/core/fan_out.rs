//! Writer fan-out: one logical sink over an ordered list of sinks

use super::{
    channel::Channel,
    error::Result,
    formatter::RecordFormatter,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    sink::Sink,
};
use crate::appenders::{ConsoleSink, ConsoleTarget, FileSink};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Descriptor of one sink to open
#[derive(Clone)]
pub enum SinkSpec {
    /// A standard stream, rendered as console lines
    Console(ConsoleTarget),
    /// An append-only JSON Lines file
    File(PathBuf),
    /// An already constructed sink, possibly shared with other channels
    Custom(Arc<dyn Sink>),
}

impl fmt::Debug for SinkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkSpec::Console(target) => f.debug_tuple("Console").field(target).finish(),
            SinkSpec::File(path) => f.debug_tuple("File").field(path).finish(),
            SinkSpec::Custom(sink) => f.debug_tuple("Custom").field(&sink.name()).finish(),
        }
    }
}

impl SinkSpec {
    fn open(self, formatter: &RecordFormatter) -> Result<Arc<dyn Sink>> {
        let sink: Arc<dyn Sink> = match self {
            SinkSpec::Console(target) => Arc::new(ConsoleSink::new(target, formatter.clone())),
            SinkSpec::File(path) => Arc::new(FileSink::open(path)?),
            SinkSpec::Custom(sink) => sink,
        };
        Ok(sink)
    }
}

/// Replicates every record to all of its sinks
///
/// A failing sink never prevents the others from receiving the record, and
/// failures are never returned to the caller: they are counted in
/// [`LoggerMetrics`] and the first one is reported once on stderr.
pub struct FanOut {
    sinks: Vec<Arc<dyn Sink>>,
    metrics: Arc<LoggerMetrics>,
}

impl FanOut {
    /// Open every descriptor in order
    ///
    /// Fails on the first sink that cannot be opened.
    pub fn open(
        specs: Vec<SinkSpec>,
        formatter: &RecordFormatter,
        metrics: Arc<LoggerMetrics>,
    ) -> Result<Self> {
        let sinks = specs
            .into_iter()
            .map(|spec| spec.open(formatter))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { sinks, metrics })
    }

    /// The channel's default console stream, plus `path` when it is non-empty
    pub fn for_channel(
        channel: Channel,
        path: &str,
        formatter: &RecordFormatter,
        metrics: Arc<LoggerMetrics>,
    ) -> Result<Self> {
        let mut specs = vec![SinkSpec::Console(channel.console_target())];
        if !path.is_empty() {
            specs.push(SinkSpec::File(PathBuf::from(path)));
        }
        Self::open(specs, formatter, metrics)
    }

    /// Send `record` to every sink
    ///
    /// Each sink is isolated with `catch_unwind`, so a panicking sink is
    /// treated like one that returned an error.
    pub fn write(&self, record: &LogRecord) {
        let mut has_error = false;

        for sink in &self.sinks {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                sink.append(record)
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    self.report_failure(sink.name(), &e.to_string());
                    has_error = true;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    self.report_failure(sink.name(), &format!("panicked: {}", panic_msg));
                    has_error = true;
                }
            }
        }

        if !has_error {
            self.metrics.record_written();
        }
    }

    /// Flush every sink, returning the first error after trying all of them
    pub fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    fn report_failure(&self, sink_name: &str, message: &str) {
        if self.metrics.record_write_failure() == 0 {
            eprintln!(
                "[LOGGER ERROR] Sink '{}' failed: {}. Further failures are only counted.",
                sink_name, message
            );
        }
    }
}

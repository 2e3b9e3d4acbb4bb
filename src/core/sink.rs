//! Sink trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// A destination for rendered records
///
/// Sinks are shared between threads and channels, so `append` takes `&self`
/// and each implementation serializes its own writes: the bytes of one
/// record must never interleave with another record's bytes.
pub trait Sink: Send + Sync {
    fn append(&self, record: &LogRecord) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}

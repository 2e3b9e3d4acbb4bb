//! Sink implementations

pub mod console;
pub mod file;
pub mod writer;

pub use console::{ConsoleSink, ConsoleTarget};
pub use file::FileSink;
pub use writer::WriterSink;

pub use crate::core::Sink;

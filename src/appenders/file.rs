//! File sink implementation

use crate::core::{LogRecord, LoggerError, RecordFormatter, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only JSON Lines file
///
/// Writes are unbuffered: each record is rendered to one string and handed
/// to the file with a single `write_all` while the handle's lock is held.
pub struct FileSink {
    path: PathBuf,
    name: String,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    ///
    /// On Unix a newly created file gets mode `0o660`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let mut options = OpenOptions::new();
        options.read(true).append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o660);
        }

        let file = options
            .open(&path)
            .map_err(|e| LoggerError::file_open(&path, e))?;

        Ok(Self {
            name: format!("file:{}", path.display()),
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let line = RecordFormatter::json_line(record)?;
        self.file.lock().write_all(line.as_bytes()).map_err(|e| {
            LoggerError::io_operation("writing log file", self.path.display().to_string(), e)
        })
    }

    fn flush(&self) -> Result<()> {
        self.file.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

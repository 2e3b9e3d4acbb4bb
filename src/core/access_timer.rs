//! Request timing for HTTP middleware
//!
//! A middleware starts a timer before handing the request to its handler and
//! finishes it with the response metadata afterwards:
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//!
//! let logger = Logger::builder().console(false).build()?;
//!
//! let timer = logger.start_request();
//! // ... run the real handler ...
//! timer.finish(&logger, &ResponseMeta::new("GET", "/ping", "HTTP/1.1").with_status(200));
//! # Ok::<(), rust_leveled_logger::LoggerError>(())
//! ```

use super::log_record::ResponseMeta;
use super::logger::Logger;
use chrono::{DateTime, Utc};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimer {
    started_at: DateTime<Utc>,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn elapsed(&self) -> Duration {
        (Utc::now() - self.started_at).to_std().unwrap_or_default()
    }

    /// Emit the access record for this request
    pub fn finish(self, logger: &Logger, meta: &ResponseMeta) {
        logger.access(self.started_at, meta);
    }
}

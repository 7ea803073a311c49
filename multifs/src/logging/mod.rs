//! Process-wide leveled log sink.
//!
//! The [`Logger`] is configured once from [`LogSettings`] during startup and
//! then shared by every worker thread. Writes are serialized by a single
//! mutex so lines from concurrent callers never interleave.
//!
//! # Line Format
//!
//! ```text
//! multifs [2016-05-04 12:30:00] (debug): [ThreadId(3)] message
//! multifs [2016-05-04 12:30:00] (info): [ThreadId(3)] message
//! multifs [2016-05-04 12:30:00]: [ThreadId(1)] message
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use multifs::logging::{LogLayer, LogLevel, LogSettings, Logger};
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let settings = LogSettings::default().with_file("/tmp/multifs.log");
//! let logger = Arc::new(Logger::open(&settings)?);
//!
//! logger.log(LogLevel::Msg, format_args!("started"));
//!
//! // Route `tracing` events to the same file.
//! let subscriber = tracing_subscriber::registry().with(LogLayer::new(logger.clone()));
//! # Ok::<(), multifs::config::ConfigError>(())
//! ```

mod layer;
mod level;
mod logger;

use std::path::PathBuf;

pub use layer::LogLayer;
pub use level::LogLevel;
pub use logger::Logger;

/// Minimum level used when `loglevel` is not given: only [`LogLevel::Msg`].
pub const DEFAULT_LOG_LEVEL: i32 = LogLevel::Msg as i32;

/// Log sink configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Messages below this level are dropped.
    ///
    /// Kept as a plain integer: values above [`LogLevel::Msg`] silence the
    /// log entirely, negative values let everything through.
    pub min_level: i32,

    /// File to append to. Logging is disabled when unset.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            min_level: DEFAULT_LOG_LEVEL,
            file: None,
        }
    }
}

impl LogSettings {
    /// Set the log file.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Set the minimum level.
    pub fn with_min_level(mut self, level: i32) -> Self {
        self.min_level = level;
        self
    }

    /// Whether a message at `level` passes the minimum level.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level as i32 >= self.min_level
    }
}

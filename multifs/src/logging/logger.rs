//! The shared log sink.

use std::fmt::{self, Write as _};
use std::fs::OpenOptions;
use std::io::Write;

use parking_lot::Mutex;

use super::level::LogLevel;
use super::LogSettings;
use crate::config::{ConfigError, ConfigResult};
use crate::FS_NAME;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

type Sink = Box<dyn Write + Send>;

/// Thread-safe leveled log writer.
///
/// A logger without a sink accepts every call and writes nothing. With a sink,
/// each accepted message becomes exactly one line, written while holding the
/// sink's lock.
pub struct Logger {
    min_level: i32,
    sink: Option<Mutex<Sink>>,
}

impl Logger {
    /// A logger that never writes.
    pub fn disabled() -> Self {
        Self {
            min_level: super::DEFAULT_LOG_LEVEL,
            sink: None,
        }
    }

    /// Open the log file named by `settings`, appending to it.
    ///
    /// Without a file in `settings` the logger is [`Logger::disabled`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::LogFileOpen`] when the file can not be opened; there is
    /// no fallback destination.
    pub fn open(settings: &LogSettings) -> ConfigResult<Self> {
        let Some(path) = settings.file.as_ref() else {
            return Ok(Self::disabled().with_min_level(settings.min_level));
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ConfigError::LogFileOpen {
                path: path.clone(),
                source,
            })?;

        Ok(Self::with_writer(settings.min_level, file))
    }

    /// A logger writing to an arbitrary sink.
    pub fn with_writer(min_level: i32, writer: impl Write + Send + 'static) -> Self {
        Self {
            min_level,
            sink: Some(Mutex::new(Box::new(writer))),
        }
    }

    fn with_min_level(mut self, min_level: i32) -> Self {
        self.min_level = min_level;
        self
    }

    /// Whether a message at `level` would be written.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.sink.is_some() && level as i32 >= self.min_level
    }

    /// Write one log line.
    ///
    /// Returns the number of bytes written, or 0 when the message was filtered
    /// out, no sink is configured, or the write failed.
    pub fn log(&self, level: LogLevel, message: fmt::Arguments<'_>) -> usize {
        let Some(sink) = self.sink.as_ref() else {
            return 0;
        };
        if (level as i32) < self.min_level {
            return 0;
        }

        let line = format_line(level, message);

        let mut sink = sink.lock();
        match sink.write_all(line.as_bytes()).and_then(|_| sink.flush()) {
            Ok(()) => line.len(),
            Err(_) => 0,
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("enabled", &self.sink.is_some())
            .finish()
    }
}

/// Render `multifs [timestamp] (tag): [thread] message\n`.
///
/// A message whose formatting fails partway is written as far as it got.
fn format_line(level: LogLevel, message: fmt::Arguments<'_>) -> String {
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
    let thread = std::thread::current().id();

    let mut line = String::with_capacity(96);
    let _ = write!(
        line,
        "{} [{}]{}: [{:?}] ",
        FS_NAME,
        timestamp,
        level.tag(),
        thread
    );
    let _ = line.write_fmt(message);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

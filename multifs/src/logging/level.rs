//! Log severity levels.

/// Severity of a log message, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Verbose diagnostics.
    Debug = 0,
    /// Routine operational messages.
    Info = 1,
    /// Messages that are always worth writing.
    Msg = 2,
}

impl LogLevel {
    /// Tag written after the timestamp; empty for [`LogLevel::Msg`].
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Debug => " (debug)",
            LogLevel::Info => " (info)",
            LogLevel::Msg => "",
        }
    }
}

impl From<&tracing::Level> for LogLevel {
    fn from(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::TRACE | tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            _ => LogLevel::Msg,
        }
    }
}

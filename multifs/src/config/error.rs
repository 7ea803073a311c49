//! Configuration error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration assembly.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fatal errors raised while assembling the mount configuration.
///
/// None of these are recoverable: the caller reports them and exits with a
/// non-zero status without producing a partial configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Fewer than two backends plus a mountpoint were given.
    #[error("at least two directories and a mountpoint are required, got {found} path(s)")]
    InsufficientDirectories { found: usize },

    /// The working directory could not be determined.
    #[error("can not determine current directory: {source}")]
    CurrentDir {
        #[source]
        source: io::Error,
    },

    /// A backend path could not be stat'ed.
    #[error("can not stat '{}': {source}", path.display())]
    StatFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A backend path exists but is not a directory.
    #[error("'{}' - is not directory", path.display())]
    NotADirectory { path: PathBuf },

    /// The log file could not be opened for appending.
    #[error("can not open file '{}': {source}", path.display())]
    LogFileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An `-o` option was malformed.
    #[error("invalid option '{option}': {reason}")]
    InvalidOption { option: String, reason: String },
}

impl ConfigError {
    /// Whether the caller should print usage along with the error.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            ConfigError::InsufficientDirectories { .. } | ConfigError::InvalidOption { .. }
        )
    }
}

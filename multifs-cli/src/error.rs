//! CLI error types.

use multifs::config::ConfigError;
use thiserror::Error;

/// Errors that end the `multifs` process with a failure status.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be assembled.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("failed to install log subscriber: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),
}

impl CliError {
    /// Whether usage should be printed after the error.
    pub fn is_usage_error(&self) -> bool {
        match self {
            CliError::Config(e) => e.is_usage_error(),
            CliError::Tracing(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_passes_through() {
        let err: CliError = ConfigError::InsufficientDirectories { found: 1 }.into();
        assert!(err.to_string().contains("got 1 path(s)"));
        assert!(err.is_usage_error());
    }
}

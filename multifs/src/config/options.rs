//! Named `-o` mount options.
//!
//! Options arrive as comma-separated `key[=value]` lists, possibly spread over
//! several `-o` arguments. The keys consumed here are:
//!
//! - `mlimit=<threshold>`: move limit, see [`Threshold::parse`]
//! - `logfile=<path>`: enables the log file
//! - `loglevel=<integer>`: minimum log level (default 2)
//!
//! Anything else is kept, in order, for the mount layer.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

use super::error::{ConfigError, ConfigResult};
use super::list::split_list;
use super::threshold::Threshold;
use crate::logging::LogSettings;

const MLIMIT: &[u8] = b"mlimit";
const LOGFILE: &[u8] = b"logfile";
const LOGLEVEL: &[u8] = b"loglevel";

/// Named options parsed from `-o` arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountOptions {
    /// Raw `mlimit` value, parsed into a [`Threshold`] at assembly.
    pub mlimit: Option<String>,

    /// Log file and minimum level.
    pub log: LogSettings,

    /// Options not consumed here, forwarded to the mount layer byte for byte.
    pub passthrough: Vec<OsString>,
}

impl MountOptions {
    /// Parse a sequence of `-o` option lists.
    ///
    /// Later occurrences of a key override earlier ones. Lists are split on
    /// raw bytes; `logfile` paths and pass-through options need not be UTF-8.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidOption`] when a consumed key has no value or
    /// `loglevel` is not an integer.
    pub fn parse<I, S>(lists: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut options = MountOptions::default();
        for list in lists {
            for entry in split_list(list.as_ref()) {
                options.apply(entry)?;
            }
        }
        Ok(options)
    }

    fn apply(&mut self, entry: &OsStr) -> ConfigResult<()> {
        let bytes = entry.as_bytes();
        let (key, value) = match bytes.iter().position(|&b| b == b'=') {
            Some(eq) => (&bytes[..eq], Some(OsStr::from_bytes(&bytes[eq + 1..]))),
            None => (bytes, None),
        };

        match (key, value) {
            (MLIMIT, Some(value)) => self.mlimit = Some(value.to_string_lossy().into_owned()),
            (LOGFILE, Some(value)) => self.log.file = Some(PathBuf::from(value)),
            (LOGLEVEL, Some(value)) => {
                let level = value
                    .to_str()
                    .and_then(|v| v.trim().parse::<i32>().ok())
                    .ok_or_else(|| ConfigError::InvalidOption {
                        option: entry.to_string_lossy().into_owned(),
                        reason: "loglevel must be an integer".to_string(),
                    })?;
                self.log.min_level = level;
            }
            (MLIMIT | LOGFILE | LOGLEVEL, None) => {
                return Err(ConfigError::InvalidOption {
                    option: entry.to_string_lossy().into_owned(),
                    reason: format!("expected {}=<value>", String::from_utf8_lossy(key)),
                });
            }
            _ => self.passthrough.push(entry.to_os_string()),
        }
        Ok(())
    }

    /// Set the move limit.
    pub fn with_mlimit(mut self, mlimit: impl Into<String>) -> Self {
        self.mlimit = Some(mlimit.into());
        self
    }

    /// Set the log settings.
    pub fn with_log(mut self, log: LogSettings) -> Self {
        self.log = log;
        self
    }

    /// The move limit these options describe.
    pub fn threshold(&self) -> Threshold {
        Threshold::parse_opt(self.mlimit.as_deref())
    }
}

//! The assembled mount configuration.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

use super::backend::BackendDirectory;
use super::builder::DirectoryListBuilder;
use super::dedupe::{dedupe_backends, DuplicateDirectory};
use super::error::{ConfigError, ConfigResult};
use super::identity::IdentityProbe;
use super::options::MountOptions;
use super::threshold::Threshold;
use crate::logging::LogSettings;
use crate::FS_NAME;

/// Startup configuration for one mount.
///
/// Built once by [`MountConfig::assemble`] and never mutated afterwards; share
/// it by reference (or behind an `Arc`) with everything that needs it.
#[derive(Debug, Clone)]
pub struct MountConfig {
    backends: Vec<BackendDirectory>,
    mountpoint: PathBuf,
    threshold: Threshold,
    log: LogSettings,
    passthrough: Vec<OsString>,
}

/// Result of [`MountConfig::assemble`].
#[derive(Debug)]
pub struct Assembly {
    /// The validated configuration.
    pub config: MountConfig,

    /// Backends dropped as duplicates, in removal order.
    pub duplicates: Vec<DuplicateDirectory>,
}

impl MountConfig {
    /// Assemble the configuration from positional tokens and named options.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Positional arguments, each possibly comma-joined
    /// * `options` - Parsed `-o` options
    /// * `cwd` - Directory relative paths are resolved against
    /// * `probe` - Filesystem identity probe used for deduplication
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - fewer than three paths were given
    /// - a surviving backend can not be stat'ed
    /// - a surviving backend is not a directory
    pub fn assemble<S: AsRef<OsStr>>(
        tokens: &[S],
        options: MountOptions,
        cwd: impl Into<PathBuf>,
        probe: &dyn IdentityProbe,
    ) -> ConfigResult<Assembly> {
        let mut builder = DirectoryListBuilder::new(cwd);
        for token in tokens {
            builder.push_token(token.as_ref());
        }
        let (mut backends, mountpoint) = builder.finish()?;

        let duplicates = dedupe_backends(&mut backends, probe);

        for backend in &backends {
            validate_backend(backend.path())?;
        }

        let config = MountConfig {
            threshold: options.threshold(),
            backends,
            mountpoint,
            log: options.log,
            passthrough: options.passthrough,
        };

        tracing::info!(
            backends = config.backends.len(),
            mountpoint = %config.mountpoint.display(),
            threshold = %config.threshold,
            "mount configuration assembled"
        );

        Ok(Assembly { config, duplicates })
    }

    /// Backend directories in priority order.
    pub fn backends(&self) -> &[BackendDirectory] {
        &self.backends
    }

    /// The directory the union is mounted on.
    pub fn mountpoint(&self) -> &Path {
        &self.mountpoint
    }

    /// The move limit.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Log file and minimum level.
    pub fn log_settings(&self) -> &LogSettings {
        &self.log
    }

    /// Mount options not consumed by multifs itself.
    pub fn passthrough_options(&self) -> &[OsString] {
        &self.passthrough
    }

    /// Filesystem name shown in the mount table: backends joined by `;`.
    ///
    /// Path bytes are copied unchanged.
    pub fn fsname(&self) -> OsString {
        let mut name = Vec::new();
        for (i, backend) in self.backends.iter().enumerate() {
            if i > 0 {
                name.push(b';');
            }
            name.extend_from_slice(backend.path().as_os_str().as_bytes());
        }
        OsString::from_vec(name)
    }

    /// Arguments handed to the mount layer after the program name.
    ///
    /// The mountpoint comes first, then the `subtype`/`fsname` option, then
    /// each pass-through option as its own `-o`.
    pub fn mount_args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(2 + 2 * self.passthrough.len());
        args.push(self.mountpoint.clone().into_os_string());
        let mut fs_option = OsString::from(format!("-osubtype={},fsname=", FS_NAME));
        fs_option.push(self.fsname());
        args.push(fs_option);
        for option in &self.passthrough {
            args.push(OsString::from("-o"));
            args.push(option.clone());
        }
        args
    }
}

/// A backend must exist and be a directory.
fn validate_backend(path: &Path) -> ConfigResult<()> {
    let meta = std::fs::metadata(path).map_err(|source| ConfigError::StatFailed {
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ConfigError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

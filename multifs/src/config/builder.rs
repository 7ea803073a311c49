//! Directory list collection from positional arguments.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::backend::BackendDirectory;
use super::error::{ConfigError, ConfigResult};
use super::list::split_list;

/// Minimum number of resolved paths: two backends plus the mountpoint.
pub const MIN_RESOLVED_PATHS: usize = 3;

/// Collects positional path tokens into an ordered directory list.
///
/// Each token may hold several comma-separated paths. Absolute paths are kept
/// verbatim; relative paths are joined onto the working directory captured
/// when the builder was created. Order is preserved and nothing is
/// deduplicated here. The last path collected becomes the mountpoint.
///
/// # Example
///
/// ```
/// use multifs::config::DirectoryListBuilder;
///
/// let mut builder = DirectoryListBuilder::new("/home/user");
/// builder.push_token("/mnt/a,disk2");
/// builder.push_token("/mnt/all");
///
/// let (backends, mountpoint) = builder.finish()?;
/// assert_eq!(backends[1].path(), std::path::Path::new("/home/user/disk2"));
/// assert_eq!(mountpoint, std::path::PathBuf::from("/mnt/all"));
/// # Ok::<(), multifs::config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryListBuilder {
    cwd: PathBuf,
    paths: Vec<PathBuf>,
}

impl DirectoryListBuilder {
    /// Create a builder resolving relative paths against `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            paths: Vec::new(),
        }
    }

    /// Create a builder using the process working directory.
    pub fn from_current_dir() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().map_err(|source| ConfigError::CurrentDir { source })?;
        Ok(Self::new(cwd))
    }

    /// The directory relative paths are resolved against.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Add every comma-separated path in `token`.
    ///
    /// Empty segments (`a,,b` or a trailing comma) are skipped. Tokens are
    /// split as raw bytes, so names that are not valid UTF-8 are kept as-is.
    pub fn push_token(&mut self, token: impl AsRef<OsStr>) -> &mut Self {
        for part in split_list(token.as_ref()) {
            self.push_path(part);
        }
        self
    }

    /// Add a single path, resolving it if relative.
    pub fn push_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        let resolved = if path.has_root() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        };
        tracing::debug!(path = %resolved.display(), "collected directory");
        self.paths.push(resolved);
        self
    }

    /// Number of paths collected so far, mountpoint included.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the collected paths in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// Split the collected paths into backends and the mountpoint.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InsufficientDirectories`] when fewer than
    /// [`MIN_RESOLVED_PATHS`] paths were collected.
    pub fn finish(self) -> ConfigResult<(Vec<BackendDirectory>, PathBuf)> {
        let mut paths = self.paths;
        if paths.len() < MIN_RESOLVED_PATHS {
            return Err(ConfigError::InsufficientDirectories { found: paths.len() });
        }

        let mountpoint = match paths.pop() {
            Some(mountpoint) => mountpoint,
            None => return Err(ConfigError::InsufficientDirectories { found: 0 }),
        };
        let backends = paths.into_iter().map(BackendDirectory::new).collect();
        Ok((backends, mountpoint))
    }
}

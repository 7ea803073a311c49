//! Backend directory entries.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::identity::{FsIdentity, IdentityProbe};

/// One underlying storage directory aggregated under the mountpoint.
///
/// The filesystem identity is probed lazily, at most once per entry, and the
/// result (including "no identity") is cached for the life of the entry.
#[derive(Debug)]
pub struct BackendDirectory {
    path: PathBuf,
    identity: OnceLock<Option<FsIdentity>>,
}

impl BackendDirectory {
    /// Create an entry for an already-resolved path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            identity: OnceLock::new(),
        }
    }

    /// The resolved path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Filesystem identity, probing on first use.
    pub fn identity(&self, probe: &dyn IdentityProbe) -> Option<FsIdentity> {
        *self.identity.get_or_init(|| probe.identity(&self.path))
    }

    /// Whether both entries spell exactly the same path.
    ///
    /// This compares raw bytes; `/a/b` and `/a/b/` are different text even
    /// though [`Path`] equality treats them as equal.
    pub fn same_text(&self, other: &BackendDirectory) -> bool {
        self.path.as_os_str() == other.path.as_os_str()
    }

    /// Consume the entry, returning the path.
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl Clone for BackendDirectory {
    fn clone(&self) -> Self {
        let identity = OnceLock::new();
        if let Some(resolved) = self.identity.get() {
            let _ = identity.set(*resolved);
        }
        Self {
            path: self.path.clone(),
            identity,
        }
    }
}

impl PartialEq for BackendDirectory {
    fn eq(&self, other: &Self) -> bool {
        self.same_text(other)
    }
}

impl Eq for BackendDirectory {}

impl std::fmt::Display for BackendDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

//! Filesystem identity probing.
//!
//! Two paths name the same directory when they resolve to the same
//! `(device, inode)` pair, which catches aliases created by symlinks and bind
//! mounts. Probing goes through the [`IdentityProbe`] trait so that the
//! deduplication policy can be tested without building real aliases.

use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// The `(device, inode)` pair identifying an underlying filesystem object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FsIdentity {
    /// Device id (`st_dev`).
    pub device: u64,
    /// Inode number (`st_ino`).
    pub inode: u64,
}

impl FsIdentity {
    /// Create an identity, treating a zero device or inode as unknown.
    pub fn new(device: u64, inode: u64) -> Option<Self> {
        if device == 0 || inode == 0 {
            return None;
        }
        Some(Self { device, inode })
    }
}

/// Resolves a path to its filesystem identity.
///
/// A probe failure is reported as `None`, never as an error: a path with no
/// identity simply cannot be matched as an alias of another path.
pub trait IdentityProbe {
    /// Probe the identity of `path`, following symlinks.
    fn identity(&self, path: &Path) -> Option<FsIdentity>;
}

/// Probes identity with `stat(2)` via [`std::fs::metadata`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StatProbe;

impl IdentityProbe for StatProbe {
    fn identity(&self, path: &Path) -> Option<FsIdentity> {
        match std::fs::metadata(path) {
            Ok(meta) => FsIdentity::new(meta.dev(), meta.ino()),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "identity probe failed");
                None
            }
        }
    }
}

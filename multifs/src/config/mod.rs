//! Startup configuration for a multifs mount.
//!
//! Configuration is assembled exactly once, single-threaded, before the mount
//! starts serving requests. The result is an immutable [`MountConfig`] that is
//! handed by reference to everything that needs it.
//!
//! # Pipeline
//!
//! 1. [`DirectoryListBuilder`] splits comma-joined tokens, resolves relative
//!    paths against the working directory, and separates the mountpoint.
//! 2. [`dedupe_backends`] drops later entries that name the same directory,
//!    either textually or by filesystem identity.
//! 3. Every surviving backend must exist and be a directory.
//! 4. [`MountOptions`] supplies the move limit and log settings.
//!
//! # Example
//!
//! ```no_run
//! use multifs::config::{MountConfig, MountOptions, StatProbe};
//!
//! let tokens = vec!["/mnt/disk1,/mnt/disk2".to_string(), "/mnt/all".to_string()];
//! let options = MountOptions::parse(["mlimit=4G,loglevel=1"])?;
//! let assembly = MountConfig::assemble(&tokens, options, "/home/user", &StatProbe)?;
//!
//! for dup in &assembly.duplicates {
//!     eprintln!("dropped {}", dup.removed.display());
//! }
//! println!("mount to {}", assembly.config.mountpoint().display());
//! # Ok::<(), multifs::config::ConfigError>(())
//! ```

mod backend;
mod builder;
mod dedupe;
mod error;
mod identity;
mod list;
mod mount;
mod options;
mod threshold;

pub use backend::BackendDirectory;
pub use builder::{DirectoryListBuilder, MIN_RESOLVED_PATHS};
pub use dedupe::{dedupe_backends, DuplicateDirectory};
pub use error::{ConfigError, ConfigResult};
pub use identity::{FsIdentity, IdentityProbe, StatProbe};
pub use mount::{Assembly, MountConfig};
pub use options::MountOptions;
pub use threshold::{Threshold, DEFAULT_MOVE_LIMIT, MINIMUM_MOVE_LIMIT};

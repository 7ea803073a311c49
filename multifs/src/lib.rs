//! multifs - join several directories into a single mount.
//!
//! This library assembles the startup configuration consumed by the mount
//! layer: the ordered, deduplicated backend directory list, the mountpoint,
//! the space-based move limit, and the process-wide log sink.
//!
//! # Architecture
//!
//! ```text
//! argv tokens ──► DirectoryListBuilder ──► dedupe_backends ──► validate
//!                                                                 │
//! -o mlimit=... ──► Threshold::parse ─────────────────────────────┤
//! -o logfile=...,loglevel=... ──► LogSettings ────────────────────┤
//!                                                                 ▼
//!                                                           MountConfig
//!                                                                 │
//!                                          Logger::open(&config.log_settings())
//! ```

pub mod config;
pub mod logging;

/// Version string reported by `--version` and the startup banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filesystem name used as the mount subtype and log line prefix.
pub const FS_NAME: &str = "multifs";

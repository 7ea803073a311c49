//! Integration tests for mount configuration assembly.
//!
//! These tests run the whole startup pipeline against real directories:
//! - token splitting and relative path resolution
//! - deduplication through symlinks
//! - backend validation
//! - move limit and log settings from `-o` options
//!
//! Run with: `cargo test --test config_pipeline`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use multifs::config::{
    dedupe_backends, BackendDirectory, ConfigError, DirectoryListBuilder, MountConfig,
    MountOptions, StatProbe, Threshold,
};
use multifs::logging::{LogLevel, Logger};

// ============================================================================
// Helper Functions
// ============================================================================

/// Create `count` backend directories and a mountpoint under a fresh temp dir.
fn make_tree(count: usize) -> (TempDir, Vec<PathBuf>, PathBuf) {
    let root = TempDir::new().unwrap();
    let backends: Vec<PathBuf> = (0..count)
        .map(|i| {
            let path = root.path().join(format!("disk{}", i));
            std::fs::create_dir(&path).unwrap();
            path
        })
        .collect();
    let mountpoint = root.path().join("mnt");
    std::fs::create_dir(&mountpoint).unwrap();
    (root, backends, mountpoint)
}

/// Join paths into comma-separated tokens, cutting after each index in `splits`.
fn group_into_tokens(paths: &[PathBuf], splits: &[bool]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        current.push(path.to_string_lossy().into_owned());
        let cut = splits.get(i).copied().unwrap_or(true);
        if cut || i + 1 == paths.len() {
            tokens.push(current.join(","));
            current.clear();
        }
    }
    tokens
}

fn paths_of(config: &MountConfig) -> Vec<PathBuf> {
    config
        .backends()
        .iter()
        .map(|b| b.path().to_path_buf())
        .collect()
}

// ============================================================================
// Integration Tests
// ============================================================================

#[test]
fn test_symlinked_backend_is_dropped() {
    let (root, backends, mountpoint) = make_tree(2);
    let alias = root.path().join("alias");
    std::os::unix::fs::symlink(&backends[0], &alias).unwrap();

    let tokens = vec![
        backends[0].to_string_lossy().into_owned(),
        backends[1].to_string_lossy().into_owned(),
        alias.to_string_lossy().into_owned(),
        mountpoint.to_string_lossy().into_owned(),
    ];

    let assembly =
        MountConfig::assemble(&tokens, MountOptions::default(), "/", &StatProbe).unwrap();

    assert_eq!(paths_of(&assembly.config), backends);
    assert_eq!(assembly.duplicates.len(), 1);
    assert_eq!(assembly.duplicates[0].kept, backends[0]);
    assert_eq!(assembly.duplicates[0].removed, alias);

    let diagnostic = assembly.duplicates[0].to_string();
    assert!(diagnostic.contains(&*alias.to_string_lossy()));
    assert!(diagnostic.contains(&*backends[0].to_string_lossy()));
}

#[test]
fn test_identical_unprobeable_paths_still_deduplicate() {
    let mut builder = DirectoryListBuilder::new("/");
    builder
        .push_token("/does/not/exist,/does/not/exist,/other/missing")
        .push_token("/mnt");
    let (mut backends, _) = builder.finish().unwrap();

    let dups = dedupe_backends(&mut backends, &StatProbe);

    assert_eq!(dups.len(), 1);
    let remaining: Vec<&Path> = backends.iter().map(BackendDirectory::path).collect();
    assert_eq!(
        remaining,
        vec![Path::new("/does/not/exist"), Path::new("/other/missing")]
    );
}

#[test]
fn test_one_backend_plus_mountpoint_is_rejected() {
    let (_root, backends, mountpoint) = make_tree(1);
    let tokens = vec![
        backends[0].to_string_lossy().into_owned(),
        mountpoint.to_string_lossy().into_owned(),
    ];

    let err = MountConfig::assemble(&tokens, MountOptions::default(), "/", &StatProbe)
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InsufficientDirectories { found: 2 }
    ));
}

#[test]
fn test_options_flow_into_config() {
    let (root, backends, mountpoint) = make_tree(2);
    let log_path = root.path().join("multifs.log");
    let options = MountOptions::parse([format!(
        "mlimit=50%,logfile={},loglevel=1,allow_other",
        log_path.display()
    )])
    .unwrap();

    let mut tokens = group_into_tokens(&backends, &[]);
    tokens.push(mountpoint.to_string_lossy().into_owned());

    let config = MountConfig::assemble(&tokens, options, "/", &StatProbe)
        .unwrap()
        .config;

    assert_eq!(config.threshold(), Threshold::Percent(50));
    assert_eq!(config.passthrough_options(), &[OsString::from("allow_other")]);

    let logger = Logger::open(config.log_settings()).unwrap();
    assert_eq!(logger.log(LogLevel::Debug, format_args!("quiet")), 0);
    assert!(logger.log(LogLevel::Info, format_args!("loud")) > 0);

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("(info)"));
    assert!(!contents.contains("quiet"));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Distinct backends survive assembly unchanged however they are grouped.
    #[test]
    fn test_grouping_roundtrip(count in 2usize..6, splits in prop::collection::vec(any::<bool>(), 6)) {
        let (_root, backends, mountpoint) = make_tree(count);

        let mut all = backends.clone();
        all.push(mountpoint.clone());
        let tokens = group_into_tokens(&all, &splits);

        let config = MountConfig::assemble(&tokens, MountOptions::default(), "/", &StatProbe)
            .unwrap()
            .config;

        prop_assert_eq!(paths_of(&config), backends);
        prop_assert_eq!(config.mountpoint(), mountpoint.as_path());
    }

    /// A second deduplication pass never removes anything.
    #[test]
    fn test_dedupe_idempotent(picks in prop::collection::vec(0usize..4, 2..10)) {
        let (_root, backends, _mountpoint) = make_tree(4);

        let mut list: Vec<BackendDirectory> = picks
            .iter()
            .map(|&i| BackendDirectory::new(backends[i].clone()))
            .collect();

        dedupe_backends(&mut list, &StatProbe);
        let once: Vec<PathBuf> = list.iter().map(|b| b.path().to_path_buf()).collect();

        let second = dedupe_backends(&mut list, &StatProbe);
        let twice: Vec<PathBuf> = list.iter().map(|b| b.path().to_path_buf()).collect();

        prop_assert!(second.is_empty());
        prop_assert_eq!(once, twice);
    }
}

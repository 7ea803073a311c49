//! End-to-end tests for the `multifs` binary.
//!
//! Run with: `cargo test -p multifs-cli --test cli`

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn multifs<S: AsRef<OsStr>>(args: &[S], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_multifs"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run multifs")
}

fn make_dirs(root: &TempDir, names: &[&str]) {
    for name in names {
        std::fs::create_dir(root.path().join(name)).unwrap();
    }
}

#[test]
fn test_version_exits_zero_on_stderr() {
    let root = TempDir::new().unwrap();
    let out = multifs(&["--bogus", "-V"], root.path());

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("multifs version: "));
}

#[test]
fn test_successful_configuration() {
    let root = TempDir::new().unwrap();
    make_dirs(&root, &["a", "b", "mnt"]);

    let out = multifs(&["a,b,a", "mnt", "-o", "allow_other,mlimit=20%"], root.path());
    assert!(out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Duplicate directories"));
    assert_eq!(stderr.matches("added to list").count(), 2);
    assert!(stderr.contains("mount to: "));

    let stdout = String::from_utf8_lossy(&out.stdout);
    let args: Vec<&str> = stdout.lines().collect();
    assert!(args[0].ends_with("/mnt"));
    assert!(args[1].starts_with("-osubtype=multifs,fsname="));
    assert_eq!(&args[2..], &["-o", "allow_other"]);
}

#[test]
fn test_flags_forwarded_after_mount_options() {
    let root = TempDir::new().unwrap();
    make_dirs(&root, &["a", "b", "mnt"]);

    let out = multifs(&["-d", "a", "b", "mnt", "-o", "ro"], root.path());
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let args: Vec<&str> = stdout.lines().collect();
    assert!(args[0].ends_with("/mnt"));
    assert_eq!(&args[2..], &["-o", "ro", "-d"]);
}

#[test]
fn test_non_utf8_directory_passed_through() {
    let root = TempDir::new().unwrap();
    make_dirs(&root, &["a", "mnt"]);
    let odd = OsStr::from_bytes(b"c\xff");
    std::fs::create_dir(root.path().join(odd)).unwrap();

    let mut dirs = OsString::from("a,");
    dirs.push(odd);
    let out = multifs(&[dirs, OsString::from("mnt")], root.path());
    assert!(out.status.success());

    let fsname_line = out
        .stdout
        .split(|&b| b == b'\n')
        .nth(1)
        .unwrap();
    assert!(fsname_line.starts_with(b"-osubtype=multifs,fsname="));
    assert!(fsname_line.ends_with(b"/c\xff"));
}

#[test]
fn test_too_few_directories_fails_with_usage() {
    let root = TempDir::new().unwrap();
    make_dirs(&root, &["a", "mnt"]);

    let out = multifs(&["a", "mnt"], root.path());
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("at least two directories"));
    assert!(stderr.contains("Usage:"));
}

#[test]
fn test_non_directory_backend_fails() {
    let root = TempDir::new().unwrap();
    make_dirs(&root, &["a", "mnt"]);
    std::fs::write(root.path().join("file"), b"x").unwrap();

    let out = multifs(&["a", "file", "mnt"], root.path());
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("is not directory"));
}

#[test]
fn test_log_file_receives_banner() {
    let root = TempDir::new().unwrap();
    make_dirs(&root, &["a", "b", "mnt"]);
    let log = root.path().join("multifs.log");
    let option = format!("logfile={}", log.display());

    let out = multifs(&["a", "b", "mnt", "-o", option.as_str()], root.path());
    assert!(out.status.success());

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains(">>>>> multifs "));
    assert!(contents.contains(" started <<<<<"));
}

#[test]
fn test_unopenable_log_file_fails() {
    let root = TempDir::new().unwrap();
    make_dirs(&root, &["a", "b", "mnt"]);

    let out = multifs(
        &["a", "b", "mnt", "-o", "logfile=missing/dir/multifs.log"],
        root.path(),
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("can not open file"));
}

#[test]
fn test_log_file_not_created_when_directories_rejected() {
    let root = TempDir::new().unwrap();
    make_dirs(&root, &["a", "mnt"]);
    let log = root.path().join("multifs.log");
    let option = format!("logfile={}", log.display());

    let out = multifs(&["a", "mnt", "-o", option.as_str()], root.path());
    assert!(!out.status.success());
    assert!(!log.exists());
}

#[test]
fn test_debug_file_notice_precedes_log_open_failure() {
    let root = TempDir::new().unwrap();
    make_dirs(&root, &["a", "b", "mnt"]);

    let out = multifs(
        &["a", "b", "mnt", "-o", "logfile=missing/dir/multifs.log"],
        root.path(),
    );
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    let notice = stderr.find("using debug file").unwrap();
    let failure = stderr.find("can not open file").unwrap();
    assert!(notice < failure);
}

#[test]
fn test_bad_loglevel_fails() {
    let root = TempDir::new().unwrap();
    make_dirs(&root, &["a", "b", "mnt"]);

    let out = multifs(&["a", "b", "mnt", "-o", "loglevel=high"], root.path());
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("loglevel must be an integer"));
}

//! Startup messages written to stderr.

use std::io::{self, Write};

use multifs::config::{DuplicateDirectory, MountConfig};
use multifs::FS_NAME;

/// One diagnostic per backend dropped as a duplicate.
pub fn write_duplicates(out: &mut impl Write, duplicates: &[DuplicateDirectory]) -> io::Result<()> {
    for duplicate in duplicates {
        writeln!(out, "{}: {}", FS_NAME, duplicate)?;
    }
    Ok(())
}

/// The accepted backends, the mountpoint, and the log file in use.
pub fn write_config(out: &mut impl Write, config: &MountConfig) -> io::Result<()> {
    for backend in config.backends() {
        writeln!(out, "{}: directory '{}' added to list", FS_NAME, backend)?;
    }
    writeln!(out, "{}: mount to: {}", FS_NAME, config.mountpoint().display())?;

    let log = config.log_settings();
    if let Some(file) = &log.file {
        writeln!(
            out,
            "{}: using debug file: {}, loglevel={}",
            FS_NAME,
            file.display(),
            log.min_level
        )?;
    }
    Ok(())
}

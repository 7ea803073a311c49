//! Command-line argument definitions.

use std::ffi::{OsStr, OsString};

use clap::{ArgAction, Parser};
use multifs::config::MountConfig;

/// Join several directories into a single mount.
///
/// The last directory is the mountpoint; every earlier one is a backend.
/// Directories may be given as separate arguments or joined with commas.
#[derive(Debug, Parser)]
#[command(name = "multifs", disable_version_flag = true)]
pub struct Cli {
    /// Backend directories followed by the mountpoint
    #[arg(value_name = "DIR", value_parser = clap::value_parser!(OsString))]
    pub dirs: Vec<OsString>,

    /// Mount options: mlimit=<size>, logfile=<path>, loglevel=<n>, or any mount option
    #[arg(
        short = 'o',
        value_name = "OPTIONS",
        action = ArgAction::Append,
        value_parser = clap::value_parser!(OsString)
    )]
    pub options: Vec<OsString>,

    /// Stay in the foreground
    #[arg(short = 'f')]
    pub foreground: bool,

    /// Enable mount layer debug output (implies -f)
    #[arg(short = 'd')]
    pub debug: bool,

    /// Serve requests on a single thread
    #[arg(short = 's')]
    pub single_threaded: bool,

    /// Print version and exit
    #[arg(short = 'V', long = "version")]
    pub version: bool,
}

impl Cli {
    /// Mount layer flags, in the order they are forwarded.
    pub fn mount_flags(&self) -> Vec<OsString> {
        [
            (self.foreground, "-f"),
            (self.debug, "-d"),
            (self.single_threaded, "-s"),
        ]
        .into_iter()
        .filter(|(set, _)| *set)
        .map(|(_, flag)| OsString::from(flag))
        .collect()
    }

    /// Full argument vector for the mount layer: the mountpoint and options
    /// from `config`, then the forwarded flags.
    pub fn mount_command(&self, config: &MountConfig) -> Vec<OsString> {
        let mut args = config.mount_args();
        args.extend(self.mount_flags());
        args
    }
}

/// Whether the raw arguments ask for the version.
///
/// Checked before anything else is parsed, so a version request succeeds even
/// alongside otherwise invalid arguments.
pub fn version_requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter()
        .skip(1)
        .any(|arg| arg.as_ref() == "-V" || arg.as_ref() == "--version")
}

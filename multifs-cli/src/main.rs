//! multifs CLI - assemble and hand off a multi-directory mount.
//!
//! Parses the command line into a [`MountConfig`], reports the accepted
//! directories on stderr, opens the log file, and prints the argument vector
//! for the mount layer on stdout, one argument per line, bytes unchanged.

mod cli;
mod error;
mod report;

use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use multifs::config::{ConfigError, MountConfig, MountOptions, StatProbe};
use multifs::logging::{LogLayer, LogLevel, Logger};
use multifs::{FS_NAME, VERSION};

use cli::{version_requested, Cli};
use error::CliError;

fn main() -> ExitCode {
    if version_requested(std::env::args_os()) {
        eprintln!("{} version: {}", FS_NAME, VERSION);
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", FS_NAME, e);
            if e.is_usage_error() {
                eprintln!();
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let options = MountOptions::parse(&cli.options)?;

    let cwd = std::env::current_dir().map_err(|source| ConfigError::CurrentDir { source })?;
    let assembly = MountConfig::assemble(&cli.dirs, options, cwd, &StatProbe)?;
    let config = assembly.config;

    let mut stderr = io::stderr().lock();
    // Startup messages are best effort; a closed stderr is not fatal.
    let _ = report::write_duplicates(&mut stderr, &assembly.duplicates);
    let _ = report::write_config(&mut stderr, &config);
    drop(stderr);

    // The log file is only created once the directories have been accepted
    // and the "using debug file" notice is out.
    let logger = Arc::new(Logger::open(config.log_settings())?);
    init_tracing(Arc::clone(&logger))?;

    logger.log(
        LogLevel::Msg,
        format_args!(" >>>>> {} {} started <<<<<", FS_NAME, VERSION),
    );

    let mount_args = cli.mount_command(&config);
    tracing::debug!(count = mount_args.len(), "handing arguments to the mount layer");

    let mut stdout = io::stdout().lock();
    for arg in mount_args {
        let _ = stdout.write_all(arg.as_bytes());
        let _ = stdout.write_all(b"\n");
    }
    let _ = stdout.flush();

    Ok(())
}

/// Route `tracing` events to the log file, and to stderr when `RUST_LOG` is set.
fn init_tracing(logger: Arc<Logger>) -> Result<(), CliError> {
    let console = std::env::var_os("RUST_LOG").is_some().then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_filter(EnvFilter::from_default_env())
    });

    tracing_subscriber::registry()
        .with(LogLayer::new(logger))
        .with(console)
        .try_init()?;
    Ok(())
}

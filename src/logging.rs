//! Debug log setup. The log is written off-thread; keep the returned guard
//! alive until the terminal has been restored so the last lines land.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Truncates the log file and installs the global subscriber. Returns
/// `None` when a subscriber is already installed.
pub fn init(config: &Config) -> io::Result<Option<WorkerGuard>> {
    let log_path = config.log_file();
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = log_path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"))?;

    fs::create_dir_all(dir)?;
    fs::File::create(log_path)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(config)));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Ok(Some(guard)),
        Err(_) => Ok(None),
    }
}

fn default_level(config: &Config) -> &'static str {
    if config.debug() {
        "debug"
    } else {
        "info"
    }
}

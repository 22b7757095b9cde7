//! Logging setup for hosts embedding the cursor engine.
//!
//! The library itself only emits `tracing` events; hosts that have no
//! subscriber of their own can call [`init_logging`] to get a compact
//! console layer plus a per-session log file. Filtering follows the
//! `RUST_LOG` environment variable and defaults to `info`.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the file writer alive; dropping it flushes and closes the
/// log file.
pub struct LogGuard {
    _file_guard: WorkerGuard,
}

/// Install a global subscriber writing to stdout and a log file.
///
/// The log file is truncated at every call so each session starts with
/// a clean file.
///
/// # Errors
///
/// Fails if the log directory cannot be created, the file cannot be
/// truncated, or a global subscriber is already installed.
pub fn init_logging(log_dir: impl AsRef<Path>, log_file: &str) -> io::Result<LogGuard> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir)?;
    fs::write(log_dir.join(log_file), "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .compact();
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .compact();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_and_truncates_log_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log_path = dir.path().join("geocursor.log");
        fs::write(&log_path, "stale contents").expect("seed file");

        let guard = init_logging(dir.path(), "geocursor.log");
        assert!(guard.is_ok(), "first init should succeed");
        let contents = fs::read_to_string(&log_path).expect("log file exists");
        assert!(contents.is_empty(), "previous session's log is cleared");

        // Second init must fail cleanly instead of panicking
        assert!(init_logging(dir.path(), "geocursor.log").is_err());
    }
}

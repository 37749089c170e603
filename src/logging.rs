//! File-backed tracing setup.
//!
//! Records go to `logs/taskkeeper.log`; stdout stays reserved for the
//! user-facing command output.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Directory the log file lives in, relative to the working directory.
pub const LOG_DIR: &str = "logs";

/// Log file name inside [`LOG_DIR`].
pub const LOG_FILE: &str = "taskkeeper.log";

/// Installs the global subscriber with a non-blocking file writer.
///
/// Returns the appender guard, which the caller must hold for the process
/// lifetime so buffered records are flushed on exit. Safe to call more than
/// once: repeated calls leave the existing subscriber in place and return
/// `None`. If the log directory cannot be created, logging is disabled and
/// the process carries on.
pub fn init() -> Option<WorkerGuard> {
    if let Err(err) = fs::create_dir_all(LOG_DIR) {
        eprintln!("Warning: could not create log directory '{LOG_DIR}': {err}");
        return None;
    }

    let file = tracing_appender::rolling::never(LOG_DIR, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()
        .map(|()| guard)
}

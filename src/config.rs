//! Backing-file path resolution.
//!
//! The path is threaded explicitly into the store; defaulting happens here,
//! at the CLI boundary, never inside the store itself.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the backing file location.
pub const TASKS_FILE_ENV: &str = "TASKS_FILE_PATH";

/// Fallback when neither the flag nor the environment names a file.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Resolves the backing file path: explicit override, then environment,
/// then the default.
pub fn tasks_file(override_path: Option<PathBuf>) -> PathBuf {
    override_path
        .or_else(|| env::var_os(TASKS_FILE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE))
}

//! Error types for the task store.

/// Failures the store can hit while reading, writing, or validating tasks.
///
/// `Io` and `Parse` never cross the store's public API; `load` converts them
/// to an empty collection and a log record. Only `EmptyDescription` is ever
/// returned to a caller, from `add`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file contents are not a valid task collection.
    #[error("invalid task data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A task was submitted with no description.
    #[error("task description cannot be empty")]
    EmptyDescription,
}

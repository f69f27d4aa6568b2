//! Error types shared by the store, presenter, and prioritizer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// A caller-supplied value was rejected before any I/O happened:
    /// empty task text, a priority outside 1..=3, or an unrecognized
    /// priority word.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No task with the given id exists in the collection.
    #[error("task {0} not found")]
    NotFound(i64),

    /// The tasks file could not be read, parsed, or written. A missing
    /// file is not a storage error; loads treat it as an empty collection.
    #[error("storage error: {0}")]
    Storage(String),

    /// The prioritization service failed or returned a reply that could
    /// not be applied.
    #[error("prioritization failed: {0}")]
    Collaborator(String),
}

impl From<std::io::Error> for TaskError {
    fn from(err: std::io::Error) -> Self {
        TaskError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(err: serde_json::Error) -> Self {
        TaskError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;

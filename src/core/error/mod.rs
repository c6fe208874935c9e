//! Errors

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a queue operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// `peek` or `dequeue` on a queue holding no elements
    #[error("queue is empty")]
    EmptyQueue,
}

/// Crate level errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Queue contract violation
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// Io error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde json error
    #[error("failed to serialize log entry: {0}")]
    Json(#[from] serde_json::Error),

    /// A token that is not a valid integer
    #[error("expected an integer, found `{token}`")]
    Parse { token: String },

    /// Input ended before all announced operations were read
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Bad command line or environment
    #[error("invalid configuration: {0}")]
    Config(String),
}

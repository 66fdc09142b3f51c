use thiserror::Error;

/// Errors raised by byte sinks and sources.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Failure reported by the wrapped reader or writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink was already closed.
    #[error("stream is closed")]
    Closed,

    /// `reset` was called without a prior `mark`.
    #[error("reset called without a valid mark")]
    NoMark,

    /// More than `limit` bytes were consumed since the mark.
    #[error("mark invalidated: read past limit of {limit} bytes")]
    MarkInvalidated { limit: usize },
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Faults that abort the current input or session. None of these are
/// recoverable: a desynchronized commit/challenge/open cycle can no longer
/// guarantee soundness, so every detected fault ends the remaining rounds.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("invalid coloring: {0}")]
    InvalidColoring(String),

    #[error("no commitment for vertex {0} in the current round")]
    UnknownVertex(u32),

    #[error("protocol violation: {0}")]
    Protocol(String),

    #[error("channel error: {0}")]
    Io(#[from] std::io::Error),

    #[error("message decode error: {0}")]
    Codec(#[from] serde_json::Error),
}

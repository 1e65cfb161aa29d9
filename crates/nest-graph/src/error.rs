//! Network-model error type.

use thiserror::Error;

/// Errors produced while building an anthill network.
///
/// All of these are fatal at build time: no simulation is attempted against
/// a graph that failed to build.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("room {0:?} is already declared")]
    DuplicateRoom(String),

    #[error("unknown room {0:?}")]
    UnknownRoom(String),

    #[error("room {room:?} has zero capacity")]
    ZeroCapacity { room: String },

    #[error("no {0} room designated")]
    MissingTerminal(&'static str),

    #[error("source and sink are the same room {0:?}")]
    SourceIsSink(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

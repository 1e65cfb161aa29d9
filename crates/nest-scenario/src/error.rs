//! Scenario error and warning types.

use std::fmt;

use thiserror::Error;

use nest_graph::GraphError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario has no `f=<count>` header")]
    MissingAntCount,

    #[error("line {line}: invalid ant count {token:?}")]
    InvalidAntCount { line: usize, token: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// A recoverable parsing problem: the line was skipped or defaulted and
/// the scenario remains usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioWarning {
    /// 1-based line number in the scenario file.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScenarioWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

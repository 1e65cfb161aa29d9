use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    /// The sink is unreachable from the source in the built graph.
    /// Fatal for the run; distinct from a mid-run deadlock.
    #[error("no path exists from source to sink")]
    NoPathExists,
}

pub type PathResult<T> = Result<T, PathError>;

//! Scheduler error type.
//!
//! Deadlock is *not* an error: it terminates the run with the partial step
//! log preserved and is reported through [`Outcome`][crate::Outcome].  The
//! variants here are construction failures and internal faults that abort
//! the run entirely.

use thiserror::Error;

use nest_core::Tick;

#[derive(Debug, Error)]
pub enum SimError {
    /// The scheduler was handed an empty path set.  Upstream this is
    /// `NoPathExists`; it is re-checked here so a mis-wired caller cannot
    /// start a run that can never move.
    #[error("no available paths — every ant would be stranded at the source")]
    NoPaths,

    /// A supplied path does not run from the source node to the sink node.
    #[error("path {index} does not run from source to sink")]
    MalformedPath { index: usize },

    /// A room's committed occupancy exceeded its capacity.  Structurally
    /// unreachable given the legality rules; triggering it means a logic
    /// defect, so the full occupancy dump rides along for diagnosis.
    #[error(
        "capacity invariant violated at {tick}: room {room:?} holds {occupancy}/{capacity}\n{dump}"
    )]
    CapacityViolation {
        room: String,
        capacity: u32,
        occupancy: u32,
        tick: Tick,
        dump: String,
    },

    /// The run exceeded the configured tick budget without completing or
    /// deadlocking.  Indicates a livelocking policy, not a solvable input.
    #[error("tick limit of {limit} exceeded — policy is not making progress")]
    TickLimitExceeded { limit: u64 },
}

pub type SimResult<T> = Result<T, SimError>;

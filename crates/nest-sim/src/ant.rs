//! Ant state.

use nest_core::{AntId, FlowNodeId};

/// Where an ant is in its lifecycle.
///
/// Transitions are strictly monotonic: `AtSource → InTransit → AtSink`,
/// never backwards.  An ant at the sink is immutable for the rest of the
/// run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AntState {
    /// Waiting in the (unconstrained) source room.
    AtSource,
    /// Parked at a flow-graph node — always a room's exit node, so the
    /// ant is ready to depart on its next legal hop.
    InTransit(FlowNodeId),
    /// Delivered.
    AtSink,
}

/// One ant.
///
/// `path` and `progress` record where along the available paths the ant
/// currently sits; the fixed policy treats them as the assignment, the
/// adaptive policy overwrites them whenever it switches routes.
#[derive(Debug)]
pub struct Ant {
    pub id: AntId,
    pub state: AntState,
    /// Index into the scheduler's path set.
    pub path: usize,
    /// Node index of the ant's position within that path.
    pub progress: usize,
}

impl Ant {
    pub fn at_source(id: AntId, path: usize) -> Self {
        Ant {
            id,
            state: AntState::AtSource,
            path,
            progress: 0,
        }
    }

    pub fn arrived(&self) -> bool {
        self.state == AntState::AtSink
    }
}

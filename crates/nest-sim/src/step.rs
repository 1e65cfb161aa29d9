//! The emitted schedule: one `Step` per tick, immutable once recorded.

use nest_core::{AntId, RoomId, Tick};

/// A single inter-room hop.  Internal entry→exit relabeling inside the
/// destination room is part of the same hop and never recorded separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub ant: AntId,
    pub from: RoomId,
    pub to: RoomId,
}

/// All moves executed in one tick, in staging order (ascending ant id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub tick: Tick,
    pub moves: Vec<Move>,
}

impl Step {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

//! The `Path` type.

use nest_core::{FlowNodeId, RoomId};
use nest_graph::FlowGraph;

/// An ordered node sequence from the source node to the sink node.
///
/// Paths include both halves of each split room they traverse, so the node
/// count over-states travel distance; [`real_hop_len`](Self::real_hop_len)
/// is the metric schedules care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub nodes: Vec<FlowNodeId>,
}

impl Path {
    pub fn new(nodes: Vec<FlowNodeId>) -> Self {
        Path { nodes }
    }

    /// Number of inter-room transitions, excluding the internal
    /// entry→exit hop inside each split room.  This is the number of ticks
    /// an unobstructed ant needs to walk the path.
    pub fn real_hop_len(&self, graph: &FlowGraph) -> usize {
        self.nodes
            .windows(2)
            .filter(|w| graph.room_of(w[0]) != graph.room_of(w[1]))
            .count()
    }

    /// Like [`real_hop_len`](Self::real_hop_len) but counted from node
    /// index `from` onward — the remaining distance of an ant mid-path.
    pub fn real_hops_from(&self, graph: &FlowGraph, from: usize) -> usize {
        self.nodes[from..]
            .windows(2)
            .filter(|w| graph.room_of(w[0]) != graph.room_of(w[1]))
            .count()
    }

    /// The rooms visited, consecutive duplicates collapsed.
    pub fn rooms(&self, graph: &FlowGraph) -> Vec<RoomId> {
        let mut rooms: Vec<RoomId> = Vec::with_capacity(self.nodes.len());
        for &n in &self.nodes {
            let r = graph.room_of(n);
            if rooms.last() != Some(&r) {
                rooms.push(r);
            }
        }
        rooms
    }

    /// Index of the first occurrence of `node`, if the path visits it.
    pub fn position_of(&self, node: FlowNodeId) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }
}

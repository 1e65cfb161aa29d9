//! The built flow graph.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `FlowNodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! out_edge_ids[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Edge attribute arrays (`edge_from`, `edge_to`, `edge_cap`) are indexed by
//! `FlowEdgeId` in insertion order, *not* CSR order, so that every forward
//! edge sits immediately before its zero-capacity residual twin and
//! `FlowEdgeId::rev()` (= `id ^ 1`) stays valid.  The CSR arrays map a
//! node's adjacency slots back to those stable edge ids.
//!
//! Residual twins are real entries in the adjacency structure: breadth-first
//! search over the residual graph must be able to walk a reverse edge once
//! the forward edge carries flow.

use std::fmt;

use nest_core::{FlowEdgeId, FlowNodeId, RoomId};

/// Edge capacity standing in for "unconstrained" (source/sink internal
/// capacity, unbounded tunnels).  Half of `u32::MAX` so sums of two
/// capacities cannot overflow during bottleneck arithmetic.
pub const UNBOUNDED_CAPACITY: u32 = u32::MAX / 2;

/// Structural role of a flow-graph node.
///
/// Legality and logging decisions dispatch on this tag; node *names* are a
/// parsing-boundary concern and never inspected after construction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// The single unconstrained node of the source room.
    Source,
    /// The single unconstrained node of the sink room.
    Sink,
    /// The arrival half of an ordinary room's split pair.
    RoomEntry,
    /// The departure half of an ordinary room's split pair.
    RoomExit,
}

/// Immutable capacitated flow graph over an anthill.
///
/// Construct via [`AnthillBuilder`][crate::AnthillBuilder]; all fields are
/// private and the graph never changes after `build()`.
pub struct FlowGraph {
    // ── Room data (indexed by RoomId, insertion order) ────────────────────
    pub(crate) room_names: Vec<String>,
    pub(crate) room_capacity: Vec<u32>,
    pub(crate) room_entry: Vec<FlowNodeId>,
    pub(crate) room_exit: Vec<FlowNodeId>,
    pub(crate) tunnels: Vec<(RoomId, RoomId)>,
    pub(crate) source: RoomId,
    pub(crate) sink: RoomId,

    // ── Node data (indexed by FlowNodeId) ─────────────────────────────────
    pub(crate) node_kind: Vec<NodeKind>,
    pub(crate) node_room: Vec<RoomId>,

    // ── CSR adjacency over stable edge ids ────────────────────────────────
    pub(crate) node_out_start: Vec<u32>,
    pub(crate) out_edge_ids: Vec<FlowEdgeId>,

    // ── Edge data (indexed by FlowEdgeId, insertion order, rev = id ^ 1) ──
    pub(crate) edge_from: Vec<FlowNodeId>,
    pub(crate) edge_to: Vec<FlowNodeId>,
    pub(crate) edge_cap: Vec<u32>,
}

impl FlowGraph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.room_names.len()
    }

    pub fn node_count(&self) -> usize {
        self.node_kind.len()
    }

    /// Total directed edges, residual twins included.
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    // ── Rooms ─────────────────────────────────────────────────────────────

    pub fn source_room(&self) -> RoomId {
        self.source
    }

    pub fn sink_room(&self) -> RoomId {
        self.sink
    }

    pub fn room_name(&self, room: RoomId) -> &str {
        &self.room_names[room.index()]
    }

    pub fn room_capacity(&self, room: RoomId) -> u32 {
        self.room_capacity[room.index()]
    }

    /// All room names, indexed by `RoomId`.  Used by reporters.
    pub fn room_names(&self) -> &[String] {
        &self.room_names
    }

    /// `true` for the source and sink rooms, whose occupancy is never
    /// constrained or checked.
    pub fn is_terminal(&self, room: RoomId) -> bool {
        room == self.source || room == self.sink
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    /// Entry node of `room`.  For terminals this is the room's single node.
    pub fn entry(&self, room: RoomId) -> FlowNodeId {
        self.room_entry[room.index()]
    }

    /// Exit node of `room`.  For terminals this is the room's single node.
    pub fn exit(&self, room: RoomId) -> FlowNodeId {
        self.room_exit[room.index()]
    }

    /// The node ants depart from: the source room's single node.
    pub fn source_node(&self) -> FlowNodeId {
        self.room_exit[self.source.index()]
    }

    /// The node ants arrive at: the sink room's single node.
    pub fn sink_node(&self) -> FlowNodeId {
        self.room_entry[self.sink.index()]
    }

    pub fn kind(&self, node: FlowNodeId) -> NodeKind {
        self.node_kind[node.index()]
    }

    /// The room a node belongs to.  Every node belongs to exactly one room.
    pub fn room_of(&self, node: FlowNodeId) -> RoomId {
        self.node_room[node.index()]
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// Iterator over the `FlowEdgeId`s of all outgoing edges from `node`,
    /// residual twins included.  Contiguous scan — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: FlowNodeId) -> impl Iterator<Item = FlowEdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        self.out_edge_ids[start..end].iter().copied()
    }

    #[inline]
    pub fn edge_from(&self, edge: FlowEdgeId) -> FlowNodeId {
        self.edge_from[edge.index()]
    }

    #[inline]
    pub fn edge_to(&self, edge: FlowEdgeId) -> FlowNodeId {
        self.edge_to[edge.index()]
    }

    #[inline]
    pub fn edge_cap(&self, edge: FlowEdgeId) -> u32 {
        self.edge_cap[edge.index()]
    }
}

/// Room-level adjacency dump for diagnostics, source room first.
impl fmt::Display for FlowGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "====Graph of the anthill====")?;

        let mut neighbors: Vec<Vec<RoomId>> = vec![Vec::new(); self.room_count()];
        for &(a, b) in &self.tunnels {
            neighbors[a.index()].push(b);
            neighbors[b.index()].push(a);
        }

        let ordered = std::iter::once(self.source)
            .chain((0..self.room_count() as u32).map(RoomId).filter(|&r| r != self.source));
        for room in ordered {
            write!(f, "{} ==> ", self.room_name(room))?;
            for &n in &neighbors[room.index()] {
                write!(f, "{} ", self.room_name(n))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

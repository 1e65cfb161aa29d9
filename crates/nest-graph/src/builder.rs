//! Anthill builder — the only place room *names* exist.
//!
//! The builder accepts rooms and tunnels in declaration order, keyed by
//! name, and keeps a name→id lookup that is discarded at `build()`.
//! Downstream crates work exclusively with dense integer ids.

use rustc_hash::FxHashMap;

use nest_core::{FlowEdgeId, FlowNodeId, RoomId};

use crate::graph::{FlowGraph, NodeKind, UNBOUNDED_CAPACITY};
use crate::{GraphError, GraphResult};

/// Whether a tunnel itself limits concurrent traversal.
///
/// This is a network-construction parameter, not a scheduling rule: it sets
/// the capacity of the two directed edges each tunnel becomes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum TunnelCapacity {
    /// Each tunnel contributes capacity 1 per direction to the flow
    /// network, so at most one extracted path may use it.
    One,
    /// No tunnel-level limit; only room capacities constrain movement.
    /// The default — matches networks where tunnels are wide enough to
    /// never be the bottleneck.
    #[default]
    Unbounded,
}

impl TunnelCapacity {
    fn edge_cap(self) -> u32 {
        match self {
            TunnelCapacity::One => 1,
            TunnelCapacity::Unbounded => UNBOUNDED_CAPACITY,
        }
    }
}

/// Incrementally describe an anthill, then call [`build`](Self::build) to
/// run the split-node transform and obtain an immutable [`FlowGraph`].
///
/// # Example
///
/// ```
/// use nest_graph::AnthillBuilder;
///
/// let mut b = AnthillBuilder::new();
/// b.add_room("S_v", 100)?;
/// b.add_room("A", 2)?;
/// b.add_room("S_d", 100)?;
/// b.add_tunnel("S_v", "A")?;
/// b.add_tunnel("A", "S_d")?;
/// b.source("S_v")?;
/// b.sink("S_d")?;
/// let graph = b.build()?;
/// assert_eq!(graph.room_count(), 3);
/// # Ok::<(), nest_graph::GraphError>(())
/// ```
pub struct AnthillBuilder {
    names: Vec<String>,
    capacities: Vec<u32>,
    tunnels: Vec<(RoomId, RoomId)>,
    index: FxHashMap<String, RoomId>,
    source: Option<RoomId>,
    sink: Option<RoomId>,
    tunnel_capacity: TunnelCapacity,
}

impl AnthillBuilder {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            capacities: Vec::new(),
            tunnels: Vec::new(),
            index: FxHashMap::default(),
            source: None,
            sink: None,
            tunnel_capacity: TunnelCapacity::default(),
        }
    }

    /// Set the tunnel-capacity policy applied to every tunnel at `build()`.
    pub fn tunnel_capacity(&mut self, policy: TunnelCapacity) -> &mut Self {
        self.tunnel_capacity = policy;
        self
    }

    /// Register a room and return its `RoomId` (sequential from 0).
    ///
    /// Re-declaring a name is rejected rather than overwriting: a scenario
    /// that lists a room twice is ambiguous about the intended capacity.
    pub fn add_room(&mut self, name: &str, capacity: u32) -> GraphResult<RoomId> {
        if self.index.contains_key(name) {
            return Err(GraphError::DuplicateRoom(name.to_string()));
        }
        if capacity == 0 {
            return Err(GraphError::ZeroCapacity { room: name.to_string() });
        }
        let id = RoomId(self.names.len() as u32);
        self.index.insert(name.to_string(), id);
        self.names.push(name.to_string());
        self.capacities.push(capacity);
        Ok(id)
    }

    /// Register an undirected tunnel between two already-declared rooms.
    pub fn add_tunnel(&mut self, a: &str, b: &str) -> GraphResult<()> {
        let a = self.lookup(a)?;
        let b = self.lookup(b)?;
        self.tunnels.push((a, b));
        Ok(())
    }

    /// Designate the source room (where all ants start).
    pub fn source(&mut self, name: &str) -> GraphResult<()> {
        self.source = Some(self.lookup(name)?);
        Ok(())
    }

    /// Designate the sink room (where all ants must arrive).
    pub fn sink(&mut self, name: &str) -> GraphResult<()> {
        self.sink = Some(self.lookup(name)?);
        Ok(())
    }

    pub fn room_count(&self) -> usize {
        self.names.len()
    }

    fn lookup(&self, name: &str) -> GraphResult<RoomId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownRoom(name.to_string()))
    }

    /// Run the split-node transform and freeze the graph.
    ///
    /// Node assignment: terminals get one unconstrained node each; every
    /// other room gets an entry node and an exit node joined by an internal
    /// edge of capacity = room capacity.  Each tunnel `a - b` becomes the
    /// directed edges `exit(a) → entry(b)` and `exit(b) → entry(a)`, each
    /// at the tunnel-policy capacity.  Every directed edge is immediately
    /// followed by its zero-capacity residual twin so `FlowEdgeId::rev()`
    /// is a pure bit flip.
    pub fn build(self) -> GraphResult<FlowGraph> {
        let source = self.source.ok_or(GraphError::MissingTerminal("source"))?;
        let sink = self.sink.ok_or(GraphError::MissingTerminal("sink"))?;
        if source == sink {
            return Err(GraphError::SourceIsSink(self.names[source.index()].clone()));
        }

        let room_count = self.names.len();

        // ── Assign nodes ──────────────────────────────────────────────────
        let mut room_entry = vec![FlowNodeId::INVALID; room_count];
        let mut room_exit = vec![FlowNodeId::INVALID; room_count];
        let mut node_kind: Vec<NodeKind> = Vec::new();
        let mut node_room: Vec<RoomId> = Vec::new();

        for r in 0..room_count {
            let room = RoomId(r as u32);
            if room == source || room == sink {
                let n = FlowNodeId(node_kind.len() as u32);
                node_kind.push(if room == source { NodeKind::Source } else { NodeKind::Sink });
                node_room.push(room);
                room_entry[r] = n;
                room_exit[r] = n;
            } else {
                let entry = FlowNodeId(node_kind.len() as u32);
                node_kind.push(NodeKind::RoomEntry);
                node_room.push(room);
                let exit = FlowNodeId(node_kind.len() as u32);
                node_kind.push(NodeKind::RoomExit);
                node_room.push(room);
                room_entry[r] = entry;
                room_exit[r] = exit;
            }
        }

        // ── Assign edges (forward/residual pairs) ─────────────────────────
        let mut edge_from: Vec<FlowNodeId> = Vec::new();
        let mut edge_to: Vec<FlowNodeId> = Vec::new();
        let mut edge_cap: Vec<u32> = Vec::new();

        let mut push_pair = |from: FlowNodeId, to: FlowNodeId, cap: u32| {
            edge_from.push(from);
            edge_to.push(to);
            edge_cap.push(cap);
            edge_from.push(to);
            edge_to.push(from);
            edge_cap.push(0);
        };

        // Internal edges: entry → exit, capacity = room capacity.
        for r in 0..room_count {
            let room = RoomId(r as u32);
            if room != source && room != sink {
                push_pair(room_entry[r], room_exit[r], self.capacities[r]);
            }
        }

        // Tunnel edges, both directions.
        let tcap = self.tunnel_capacity.edge_cap();
        for &(a, b) in &self.tunnels {
            push_pair(room_exit[a.index()], room_entry[b.index()], tcap);
            push_pair(room_exit[b.index()], room_entry[a.index()], tcap);
        }

        // ── Build CSR over stable edge ids ────────────────────────────────
        let node_count = node_kind.len();
        let edge_count = edge_from.len();

        let mut node_out_start = vec![0u32; node_count + 1];
        for &from in &edge_from {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }

        let mut cursor = node_out_start.clone();
        let mut out_edge_ids = vec![FlowEdgeId::INVALID; edge_count];
        for e in 0..edge_count {
            let slot = cursor[edge_from[e].index()];
            out_edge_ids[slot as usize] = FlowEdgeId(e as u32);
            cursor[edge_from[e].index()] += 1;
        }

        Ok(FlowGraph {
            room_names: self.names,
            room_capacity: self.capacities,
            room_entry,
            room_exit,
            tunnels: self.tunnels,
            source,
            sink,
            node_kind,
            node_room,
            node_out_start,
            out_edge_ids,
            edge_from,
            edge_to,
            edge_cap,
        })
    }
}

impl Default for AnthillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

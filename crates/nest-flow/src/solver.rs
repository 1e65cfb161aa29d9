//! Edmonds–Karp solver internals.

use std::collections::VecDeque;

use nest_core::{FlowEdgeId, FlowNodeId};
use nest_graph::FlowGraph;

// ── FlowAssignment ────────────────────────────────────────────────────────────

/// A feasible flow: per-edge values satisfying capacity and conservation.
///
/// Flow is signed — pushing `f` along a forward edge records `-f` on its
/// residual twin, so `residual(e) = cap(e) - flow(e)` holds uniformly for
/// both halves of every pair.
#[derive(Debug, Clone)]
pub struct FlowAssignment {
    /// Flow on each edge, indexed by `FlowEdgeId`.
    pub edge_flow: Vec<i64>,
    /// The achieved maximum flow value F.
    pub value: u64,
}

impl FlowAssignment {
    /// Remaining residual capacity of `edge` under this assignment.
    #[inline]
    pub fn residual(&self, graph: &FlowGraph, edge: FlowEdgeId) -> i64 {
        graph.edge_cap(edge) as i64 - self.edge_flow[edge.index()]
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// Compute the maximum flow from the graph's source node to its sink node.
///
/// An unreachable sink is not an error here: the result simply has
/// `value == 0`, and path extraction reports the condition downstream.
pub fn max_flow(graph: &FlowGraph) -> FlowAssignment {
    let source = graph.source_node();
    let sink = graph.sink_node();

    let mut flow = FlowAssignment {
        edge_flow: vec![0; graph.edge_count()],
        value: 0,
    };

    // prev_edge[v] = edge that reached v on the current BFS layer;
    // FlowEdgeId::INVALID marks unreached nodes (and doubles as the
    // visited set).
    let mut prev_edge = vec![FlowEdgeId::INVALID; graph.node_count()];
    let mut queue: VecDeque<FlowNodeId> = VecDeque::new();

    loop {
        // ── BFS for the shortest augmenting path ──────────────────────────
        prev_edge.fill(FlowEdgeId::INVALID);
        queue.clear();
        queue.push_back(source);

        let mut reached_sink = false;
        'bfs: while let Some(node) = queue.pop_front() {
            for edge in graph.out_edges(node) {
                let next = graph.edge_to(edge);
                if next == source
                    || prev_edge[next.index()] != FlowEdgeId::INVALID
                    || flow.residual(graph, edge) <= 0
                {
                    continue;
                }
                prev_edge[next.index()] = edge;
                if next == sink {
                    reached_sink = true;
                    break 'bfs;
                }
                queue.push_back(next);
            }
        }
        if !reached_sink {
            break;
        }

        // ── Bottleneck along the found path ───────────────────────────────
        let mut bottleneck = i64::MAX;
        let mut node = sink;
        while node != source {
            let edge = prev_edge[node.index()];
            bottleneck = bottleneck.min(flow.residual(graph, edge));
            node = graph.edge_from(edge);
        }

        // ── Push, mirroring onto residual twins ───────────────────────────
        let mut node = sink;
        while node != source {
            let edge = prev_edge[node.index()];
            flow.edge_flow[edge.index()] += bottleneck;
            flow.edge_flow[edge.rev().index()] -= bottleneck;
            node = graph.edge_from(edge);
        }
        flow.value += bottleneck as u64;
    }

    flow
}

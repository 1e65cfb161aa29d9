//! Path extraction strategies.

use nest_core::{FlowEdgeId, FlowNodeId};
use nest_flow::FlowAssignment;
use nest_graph::FlowGraph;

use crate::path::Path;
use crate::{PathError, PathResult};

/// How to derive `availablePaths` from the solved flow.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PathStrategy {
    /// Peel bottleneck-saturated paths off the flow assignment.  Each
    /// path is backed by real throughput; the count is bounded by the
    /// edge count, not the flow value.
    FlowDecomposition,
    /// Enumerate all simple capacity-positive paths up to `max_paths`,
    /// sorted shortest-first.  Gives adaptive policies alternatives the
    /// max flow alone would not surface.
    Enumeration { max_paths: usize },
}

/// Derive the usable path set for the given strategy.
///
/// Fails with [`PathError::NoPathExists`] when no source→sink path can be
/// produced — an unreachable sink under either strategy.
pub fn extract(
    graph: &FlowGraph,
    flow: &FlowAssignment,
    strategy: PathStrategy,
) -> PathResult<Vec<Path>> {
    let paths = match strategy {
        PathStrategy::FlowDecomposition => decompose(graph, flow),
        PathStrategy::Enumeration { max_paths } => enumerate(graph, max_paths),
    };
    if paths.is_empty() {
        return Err(PathError::NoPathExists);
    }
    Ok(paths)
}

// ── Flow decomposition ────────────────────────────────────────────────────────

/// Repeatedly walk from the source following edges with strictly positive
/// remaining flow until the sink is reached, then subtract the walk's
/// bottleneck along the walked edges.  Saturating each walk keeps the path
/// count bounded by the edge count even when unbounded tunnels push the
/// flow value to `UNBOUNDED_CAPACITY`; one recorded path serves any number
/// of ants.  A walk that gets stuck (only possible if the residual
/// bookkeeping left a cycle) ends extraction.
fn decompose(graph: &FlowGraph, flow: &FlowAssignment) -> Vec<Path> {
    let source = graph.source_node();
    let sink = graph.sink_node();

    let mut remaining = flow.edge_flow.clone();
    let mut paths: Vec<Path> = Vec::new();
    let mut visited = vec![false; graph.node_count()];

    'outer: loop {
        visited.fill(false);
        visited[source.index()] = true;

        let mut nodes = vec![source];
        let mut walked: Vec<FlowEdgeId> = Vec::new();
        let mut node = source;

        while node != sink {
            // First positive-flow edge in adjacency order keeps the walk
            // deterministic.
            let step = graph.out_edges(node).find(|&e| {
                remaining[e.index()] > 0 && !visited[graph.edge_to(e).index()]
            });
            let Some(edge) = step else {
                break 'outer;
            };
            node = graph.edge_to(edge);
            visited[node.index()] = true;
            nodes.push(node);
            walked.push(edge);
        }

        let Some(bottleneck) = walked.iter().map(|&e| remaining[e.index()]).min() else {
            break;
        };
        for e in walked {
            remaining[e.index()] -= bottleneck;
        }
        paths.push(Path::new(nodes));
    }

    paths
}

// ── Path enumeration ──────────────────────────────────────────────────────────

/// Depth-first enumeration of simple paths over positive-capacity edges.
///
/// Residual twins carry zero capacity, so only real edges are walked.
/// Collection stops at `max_paths`; the DFS visits adjacency slots in CSR
/// order, so which paths survive the cap is deterministic.
fn enumerate(graph: &FlowGraph, max_paths: usize) -> Vec<Path> {
    let source = graph.source_node();
    let sink = graph.sink_node();

    let mut visited = vec![false; graph.node_count()];
    let mut stack = vec![source];
    let mut found: Vec<Path> = Vec::new();
    visited[source.index()] = true;
    dfs(graph, sink, max_paths, &mut visited, &mut stack, &mut found);

    // Shortest real routes first; room-name order breaks length ties so
    // runs are reproducible regardless of insertion order upstream.
    found.sort_by_cached_key(|p| {
        let names: Vec<String> = p
            .rooms(graph)
            .into_iter()
            .map(|r| graph.room_name(r).to_string())
            .collect();
        (p.real_hop_len(graph), names)
    });
    found
}

fn dfs(
    graph: &FlowGraph,
    sink: FlowNodeId,
    max_paths: usize,
    visited: &mut Vec<bool>,
    stack: &mut Vec<FlowNodeId>,
    found: &mut Vec<Path>,
) {
    if found.len() >= max_paths {
        return;
    }
    let node = *stack.last().unwrap_or(&sink);
    if node == sink {
        found.push(Path::new(stack.clone()));
        return;
    }
    for edge in graph.out_edges(node) {
        if graph.edge_cap(edge) == 0 {
            continue;
        }
        let next = graph.edge_to(edge);
        if visited[next.index()] {
            continue;
        }
        visited[next.index()] = true;
        stack.push(next);
        dfs(graph, sink, max_paths, visited, stack, found);
        stack.pop();
        visited[next.index()] = false;
    }
}

//! Routing policies and the trait seam between them and the tick loop.

use nest_core::{AntRng, FlowNodeId, Tick};
use nest_graph::{FlowGraph, NodeKind};
use nest_path::Path;

use crate::ant::{Ant, AntState};

// ── TickView ──────────────────────────────────────────────────────────────────

/// Read-only view of the world handed to a policy while planning one ant's
/// hop.  `staged` already reflects moves staged earlier in the same tick.
pub struct TickView<'a> {
    pub graph: &'a FlowGraph,
    pub paths: &'a [Path],
    /// Per-room staged occupancy (terminal rooms stay at zero and are
    /// never consulted).
    pub staged: &'a [u32],
    pub tick: Tick,
}

// ── HopPlan ───────────────────────────────────────────────────────────────────

/// A policy's proposal for one ant: advance to node index `to_idx` on path
/// `path`.  The scheduler validates legality; a rejected plan simply means
/// the ant stays put this tick.
#[derive(Copy, Clone, Debug)]
pub struct HopPlan {
    pub path: usize,
    pub to_idx: usize,
}

// ── PathPolicy ────────────────────────────────────────────────────────────────

/// Pluggable next-hop selection.
///
/// Implementations must be deterministic: any randomness comes from the
/// per-ant `AntRng`, which is seeded from the run seed and the ant id.
pub trait PathPolicy {
    /// Propose the ant's next hop, or `None` if the ant has nowhere to go.
    fn plan(&self, ant: &Ant, view: &TickView<'_>, rng: &mut AntRng) -> Option<HopPlan>;
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Node index of the ant's position on `path` — 0 at the source, otherwise
/// the first occurrence of its current node.  `None` when the path does not
/// pass through the ant's position (or the ant already arrived).
fn position_on(path: &Path, ant: &Ant) -> Option<usize> {
    match ant.state {
        AntState::AtSource => Some(0),
        AntState::InTransit(node) => path.position_of(node),
        AntState::AtSink => None,
    }
}

/// The next node index an ant resting at `from_idx` would occupy: the sink
/// node, or the exit node of the next room (skipping its entry half, which
/// is crossed in the same tick).
fn next_stop(graph: &FlowGraph, path: &Path, from_idx: usize) -> Option<usize> {
    let next = *path.nodes.get(from_idx + 1)?;
    match graph.kind(next) {
        NodeKind::Sink => Some(from_idx + 1),
        NodeKind::RoomEntry => Some(from_idx + 2),
        // Paths park ants on exit nodes, so the node after a stop is never
        // another exit, a source, or out of range.
        NodeKind::RoomExit | NodeKind::Source => None,
    }
}

// ── FixedPathPolicy ───────────────────────────────────────────────────────────

/// Every ant follows the single path assigned to it at build time
/// (round-robin over the available set) and waits whenever the next room
/// is full.
pub struct FixedPathPolicy;

impl PathPolicy for FixedPathPolicy {
    fn plan(&self, ant: &Ant, view: &TickView<'_>, _rng: &mut AntRng) -> Option<HopPlan> {
        let path = &view.paths[ant.path];
        let to_idx = next_stop(view.graph, path, ant.progress)?;
        Some(HopPlan { path: ant.path, to_idx })
    }
}

// ── AdaptivePolicy ────────────────────────────────────────────────────────────

/// Congestion penalty that makes a full room effectively unreachable while
/// still letting jitter order the remaining candidates.
const BLOCKED_PENALTY: f64 = 1e6;

/// Width of the deterministic per-ant jitter term.  Small enough that it
/// only ever decides exact score ties.
const JITTER: f64 = 0.125;

/// Tuning knobs for [`AdaptivePolicy`].
#[derive(Copy, Clone, Debug)]
pub struct AdaptiveConfig {
    /// Score contribution per remaining real hop.  Negative prefers
    /// shorter remaining routes.
    pub hop_weight: f64,
    /// Score subtracted per ant already staged in the candidate's next
    /// room, steering ants away from crowded corridors.
    pub congestion_factor: f64,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        AdaptiveConfig {
            hop_weight: -1.0,
            congestion_factor: 0.25,
        }
    }
}

/// Re-scores every available path each tick and follows the best one:
///
/// `score = remaining_real_hops × hop_weight − congestion + jitter`
///
/// The jitter term is smaller than any other score difference, so it only
/// decides exact ties.
///
/// A candidate whose next room is already at staged capacity is penalized
/// by [`BLOCKED_PENALTY`] rather than excluded, so when every route is
/// blocked the proposal is still well-defined (and simply fails the
/// scheduler's legality check).
pub struct AdaptivePolicy {
    pub config: AdaptiveConfig,
}

impl AdaptivePolicy {
    pub fn new(config: AdaptiveConfig) -> Self {
        AdaptivePolicy { config }
    }
}

impl Default for AdaptivePolicy {
    fn default() -> Self {
        AdaptivePolicy::new(AdaptiveConfig::default())
    }
}

impl PathPolicy for AdaptivePolicy {
    fn plan(&self, ant: &Ant, view: &TickView<'_>, rng: &mut AntRng) -> Option<HopPlan> {
        let graph = view.graph;
        let mut best: Option<(f64, HopPlan)> = None;

        for (path_idx, path) in view.paths.iter().enumerate() {
            let Some(pos) = position_on(path, ant) else {
                continue;
            };
            let Some(to_idx) = next_stop(graph, path, pos) else {
                continue;
            };

            let remaining = path.real_hops_from(graph, pos);
            let dest = dest_room_penalty(graph, view.staged, path.nodes[to_idx], &self.config);
            let jitter: f64 = rng.gen_range(0.0..JITTER);
            let score = remaining as f64 * self.config.hop_weight - dest + jitter;

            if best.is_none_or(|(s, _)| score > s) {
                best = Some((score, HopPlan { path: path_idx, to_idx }));
            }
        }

        best.map(|(_, plan)| plan)
    }
}

fn dest_room_penalty(
    graph: &FlowGraph,
    staged: &[u32],
    target: FlowNodeId,
    config: &AdaptiveConfig,
) -> f64 {
    let room = graph.room_of(target);
    if graph.is_terminal(room) {
        return 0.0;
    }
    let occupancy = staged[room.index()];
    let mut penalty = occupancy as f64 * config.congestion_factor;
    if occupancy >= graph.room_capacity(room) {
        penalty += BLOCKED_PENALTY;
    }
    penalty
}

//! Fluent builder for constructing a [`Scheduler`].

use nest_core::{AntId, AntRng};
use nest_graph::FlowGraph;
use nest_path::Path;

use crate::ant::Ant;
use crate::policy::PathPolicy;
use crate::{Scheduler, SimError, SimResult};

/// Default tick budget.  Orders of magnitude above any solvable scenario;
/// exceeding it means a policy is livelocking, not that the input is large.
const DEFAULT_MAX_TICKS: u64 = 100_000;

/// Fluent builder for [`Scheduler<P>`].
///
/// # Required inputs
///
/// - the built [`FlowGraph`]
/// - the extracted path set (validated source→sink, non-empty)
/// - the ant count
/// - `P: PathPolicy` — the routing policy
///
/// # Example
///
/// ```rust,ignore
/// let mut scheduler = SchedulerBuilder::new(graph, paths, 10, FixedPathPolicy)
///     .seed(42)
///     .build()?;
/// let report = scheduler.run(&mut NoopObserver)?;
/// ```
pub struct SchedulerBuilder<P: PathPolicy> {
    graph: FlowGraph,
    paths: Vec<Path>,
    ant_count: usize,
    policy: P,
    seed: u64,
    max_ticks: u64,
}

impl<P: PathPolicy> SchedulerBuilder<P> {
    pub fn new(graph: FlowGraph, paths: Vec<Path>, ant_count: usize, policy: P) -> Self {
        Self {
            graph,
            paths,
            ant_count,
            policy,
            seed: 0,
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }

    /// Seed for the per-ant RNGs.  The same seed always reproduces the
    /// same schedule.  Default: 0.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Override the safety tick budget.
    pub fn max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Validate inputs and return a ready-to-run [`Scheduler`].
    pub fn build(self) -> SimResult<Scheduler<P>> {
        if self.paths.is_empty() {
            return Err(SimError::NoPaths);
        }
        let source = self.graph.source_node();
        let sink = self.graph.sink_node();
        for (index, path) in self.paths.iter().enumerate() {
            if path.nodes.first() != Some(&source) || path.nodes.last() != Some(&sink) {
                return Err(SimError::MalformedPath { index });
            }
        }

        // Round-robin path assignment; only the fixed policy keeps it.
        let ants: Vec<Ant> = (0..self.ant_count)
            .map(|i| Ant::at_source(AntId(i as u32), i % self.paths.len()))
            .collect();
        let rngs: Vec<AntRng> = (0..self.ant_count)
            .map(|i| AntRng::new(self.seed, AntId(i as u32)))
            .collect();

        Ok(Scheduler::from_parts(
            self.graph,
            self.paths,
            self.policy,
            ants,
            rngs,
            self.max_ticks,
        ))
    }
}

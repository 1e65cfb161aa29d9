//! `nest-flow` — maximum flow over anthill flow graphs.
//!
//! Implements Edmonds–Karp: repeatedly find the shortest (fewest-edges)
//! augmenting path from source to sink through the residual graph with
//! breadth-first search, push the path's bottleneck residual capacity, and
//! mirror the push onto the residual twins.  Terminates in O(V·E)
//! augmentations; the final value equals the network's min-cut and bounds
//! the per-tick throughput any schedule can sustain through the bottleneck.

pub mod solver;

#[cfg(test)]
mod tests;

pub use solver::{max_flow, FlowAssignment};

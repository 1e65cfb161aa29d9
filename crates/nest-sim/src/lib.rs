//! `nest-sim` — the discrete-time ant scheduler.
//!
//! # Two-phase tick loop
//!
//! ```text
//! loop:
//!   ① Snapshot  — copy committed room occupancy into the staged counts.
//!   ② Plan      — for each un-arrived ant in ascending AntId order, ask the
//!                 PathPolicy for a candidate hop against the staged counts
//!                 (later ants see earlier ants' staged moves, so convoys
//!                 can chain through freed rooms within one tick).
//!   ③ Legality  — destination sink is always legal; any other destination
//!                 room must have staged occupancy strictly below capacity.
//!   ④ Stage     — apply legal hops to the staged counts, advance the ant,
//!                 log one inter-room move (the entry→exit relabel inside
//!                 the destination room is merged into the same hop).
//!   ⑤ Commit    — staged counts become the new occupancy; any room over
//!                 capacity is a fatal CapacityViolation.
//!   ⑥ Terminate — all ants at the sink → Complete; a zero-move tick with
//!                 ants remaining → Deadlock (partial step log preserved).
//! ```
//!
//! The loop is single-threaded and fully deterministic: identical graph,
//! paths, ant count, and seed always produce byte-identical step logs.
//!
//! # Pluggability
//!
//! Routing decisions go through the [`PathPolicy`] trait so the tick loop
//! is written once.  [`FixedPathPolicy`] pins each ant to one path for the
//! whole run; [`AdaptivePolicy`] re-scores every available path each tick.

pub mod ant;
pub mod builder;
pub mod error;
pub mod observer;
pub mod policy;
pub mod scheduler;
pub mod step;

#[cfg(test)]
mod tests;

pub use ant::{Ant, AntState};
pub use builder::SchedulerBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use policy::{AdaptiveConfig, AdaptivePolicy, FixedPathPolicy, HopPlan, PathPolicy, TickView};
pub use scheduler::{Outcome, RunReport, Scheduler};
pub use step::{Move, Step};

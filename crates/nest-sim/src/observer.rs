//! Run observer trait for progress reporting.

use nest_core::Tick;

use crate::scheduler::Outcome;
use crate::step::Step;

/// Callbacks invoked by [`Scheduler::run`][crate::Scheduler::run] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait RunObserver {
    /// Called at the very start of each tick, before any planning.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick's moves are committed, empty ticks included.
    fn on_tick_end(&mut self, _step: &Step) {}

    /// Called once when the run stops.
    fn on_run_end(&mut self, _outcome: Outcome, _final_tick: Tick) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

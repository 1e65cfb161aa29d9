//! The `Scheduler` struct and its tick loop.

use std::fmt::Write as _;

use nest_core::{AntRng, RoomId, Tick};
use nest_graph::FlowGraph;
use nest_path::Path;

use crate::ant::{Ant, AntState};
use crate::observer::RunObserver;
use crate::policy::{PathPolicy, TickView};
use crate::step::{Move, Step};
use crate::{SimError, SimResult};

// ── Run results ───────────────────────────────────────────────────────────────

/// Why a run stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Every ant reached the sink.
    Complete,
    /// A tick produced zero moves while ants remained un-arrived.  No
    /// backtracking or relaxation is attempted; retrying would reproduce
    /// the same schedule.
    Deadlock,
}

/// The result of a run: the outcome plus the full step log up to the point
/// the run stopped (deadlocked runs keep their partial log).
#[derive(Debug)]
pub struct RunReport {
    pub outcome: Outcome,
    pub steps: Vec<Step>,
    /// Ticks executed (equals `steps.len()`).
    pub ticks: u64,
    /// Ants that reached the sink.
    pub delivered: usize,
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Drives all ants tick by tick until completion or deadlock.
///
/// Owns every piece of mutable run state — ant positions, room occupancy,
/// the step log.  Single-threaded by design: each tick stages all moves
/// against the running staged counts, then commits them atomically.
///
/// Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
pub struct Scheduler<P: PathPolicy> {
    graph: FlowGraph,
    paths: Vec<Path>,
    policy: P,
    ants: Vec<Ant>,
    rngs: Vec<AntRng>,
    /// Committed occupancy per room.  Terminal rooms stay at zero.
    occupancy: Vec<u32>,
    tick: Tick,
    steps: Vec<Step>,
    max_ticks: u64,
}

impl<P: PathPolicy> Scheduler<P> {
    pub(crate) fn from_parts(
        graph: FlowGraph,
        paths: Vec<Path>,
        policy: P,
        ants: Vec<Ant>,
        rngs: Vec<AntRng>,
        max_ticks: u64,
    ) -> Self {
        let occupancy = vec![0; graph.room_count()];
        Scheduler {
            graph,
            paths,
            policy,
            ants,
            rngs,
            occupancy,
            tick: Tick::ZERO,
            steps: Vec::new(),
            max_ticks,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every ant arrives or the run deadlocks.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        let outcome = loop {
            if self.all_arrived() {
                break Outcome::Complete;
            }
            if self.tick.0 >= self.max_ticks {
                return Err(SimError::TickLimitExceeded { limit: self.max_ticks });
            }

            observer.on_tick_start(self.tick);
            let step = self.process_tick()?;
            observer.on_tick_end(&step);

            if step.is_empty() {
                break Outcome::Deadlock;
            }
            self.steps.push(step);
            self.tick.advance();
        };

        observer.on_run_end(outcome, self.tick);
        Ok(RunReport {
            outcome,
            ticks: self.steps.len() as u64,
            delivered: self.ants.iter().filter(|a| a.arrived()).count(),
            steps: std::mem::take(&mut self.steps),
        })
    }

    /// Execute exactly one tick.  Exposed for incremental stepping and
    /// property checks in tests; [`run`](Self::run) is the normal driver.
    pub fn step_once(&mut self) -> SimResult<Step> {
        let step = self.process_tick()?;
        if !step.is_empty() {
            self.steps.push(step.clone());
            self.tick.advance();
        }
        Ok(step)
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn occupancy(&self, room: RoomId) -> u32 {
        self.occupancy[room.index()]
    }

    /// `(at_source, in_transit, at_sink)` counts.  Their sum is the total
    /// ant count at every observable instant.
    pub fn census(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for ant in &self.ants {
            match ant.state {
                AntState::AtSource => counts.0 += 1,
                AntState::InTransit(_) => counts.1 += 1,
                AntState::AtSink => counts.2 += 1,
            }
        }
        counts
    }

    fn all_arrived(&self) -> bool {
        self.ants.iter().all(|a| a.arrived())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self) -> SimResult<Step> {
        // ── Phase 1: snapshot ─────────────────────────────────────────────
        let mut staged = self.occupancy.clone();
        let mut moves: Vec<Move> = Vec::new();

        let graph = &self.graph;
        let paths = &self.paths;
        let policy = &self.policy;
        let tick = self.tick;

        // ── Phase 2: plan + stage, ascending ant id ───────────────────────
        for (ant, rng) in self.ants.iter_mut().zip(self.rngs.iter_mut()) {
            if ant.arrived() {
                continue;
            }

            let plan = {
                let view = TickView { graph, paths, staged: &staged, tick };
                policy.plan(ant, &view, rng)
            };
            let Some(plan) = plan else { continue };

            let target = paths[plan.path].nodes[plan.to_idx];
            let to_room = graph.room_of(target);
            let from_room = match ant.state {
                AntState::AtSource => graph.source_room(),
                AntState::InTransit(node) => graph.room_of(node),
                AntState::AtSink => unreachable!("arrived ants are skipped"),
            };

            // ── Phase 3: legality against staged counts ───────────────────
            let legal = graph.is_terminal(to_room)
                || staged[to_room.index()] < graph.room_capacity(to_room);
            if !legal {
                continue;
            }

            // ── Phase 4: stage the hop ────────────────────────────────────
            if !graph.is_terminal(from_room) {
                staged[from_room.index()] -= 1;
            }
            if !graph.is_terminal(to_room) {
                staged[to_room.index()] += 1;
            }

            ant.path = plan.path;
            ant.progress = plan.to_idx;
            ant.state = if to_room == graph.sink_room() {
                AntState::AtSink
            } else {
                AntState::InTransit(target)
            };
            moves.push(Move { ant: ant.id, from: from_room, to: to_room });
        }

        // ── Phase 5: commit + safety check ────────────────────────────────
        self.occupancy = staged;
        self.check_capacity_invariant()?;

        Ok(Step { tick, moves })
    }

    /// Committed occupancy must respect every non-terminal room's capacity.
    /// The legality rules make a violation structurally unreachable, so
    /// tripping this is a logic defect and aborts with the full state.
    fn check_capacity_invariant(&self) -> SimResult<()> {
        for r in 0..self.graph.room_count() as u32 {
            let room = RoomId(r);
            if self.graph.is_terminal(room) {
                continue;
            }
            let occupancy = self.occupancy[room.index()];
            let capacity = self.graph.room_capacity(room);
            if occupancy > capacity {
                return Err(SimError::CapacityViolation {
                    room: self.graph.room_name(room).to_string(),
                    capacity,
                    occupancy,
                    tick: self.tick,
                    dump: self.state_dump(),
                });
            }
        }
        Ok(())
    }

    fn state_dump(&self) -> String {
        let mut dump = String::from("rooms:\n");
        for r in 0..self.graph.room_count() as u32 {
            let room = RoomId(r);
            let _ = writeln!(
                dump,
                "  {} {}/{}",
                self.graph.room_name(room),
                self.occupancy[room.index()],
                self.graph.room_capacity(room),
            );
        }
        dump.push_str("ants:\n");
        for ant in &self.ants {
            let _ = writeln!(dump, "  {} {:?}", ant.id, ant.state);
        }
        dump
    }

    #[cfg(test)]
    pub(crate) fn corrupt_occupancy_for_test(&mut self, room: RoomId, value: u32) {
        self.occupancy[room.index()] = value;
    }
}

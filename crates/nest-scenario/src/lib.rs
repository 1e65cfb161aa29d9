//! `nest-scenario` — the scenario-file boundary.
//!
//! # File format
//!
//! ```text
//! f=10           # total ant count (required header)
//! # comment      # ignored
//! S_v{100}       # room with explicit capacity
//! S2             # room, capacity defaults to 1
//! S_v - S2       # tunnel between two declared rooms
//! ```
//!
//! Room names not starting with `S` are normalized with an `S` prefix, so
//! `1 - 2` and `S1 - S2` describe the same tunnel.  The source is the room
//! named `S_v`, the sink `S_d` — a naming convention of the format, applied
//! here at the boundary and nowhere else.
//!
//! # Error recovery
//!
//! Malformed capacities and structurally invalid lines are *recoverable*:
//! parsing continues, the offending line defaults or is skipped, and a
//! [`ScenarioWarning`] is returned to the caller.  A missing `f=` header,
//! unknown tunnel endpoints, and missing terminals are fatal.

pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{ScenarioError, ScenarioResult, ScenarioWarning};
pub use loader::{load_scenario, parse_scenario, ScenarioFile, SINK_NAME, SOURCE_NAME};

//! `nest-core` — foundational types for the antnest ant-routing toolkit.
//!
//! This crate is a dependency of every other `nest-*` crate.  It intentionally
//! has no `nest-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `AntId`, `RoomId`, `FlowNodeId`, `FlowEdgeId`     |
//! | [`tick`]  | `Tick` — the discrete simulation time counter     |
//! | [`rng`]   | `AntRng` — deterministic per-ant RNG              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod rng;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{AntId, FlowEdgeId, FlowNodeId, RoomId};
pub use rng::AntRng;
pub use tick::Tick;

//! `nest-graph` — anthill network model and flow-graph construction.
//!
//! An anthill is a set of capacity-limited rooms joined by undirected
//! tunnels.  Room capacity is a *vertex* constraint; standard max-flow
//! solvers only understand *edge* constraints, so [`AnthillBuilder::build`]
//! applies the split-node transform: each ordinary room becomes an entry
//! node and an exit node joined by a directed internal edge whose capacity
//! is the room capacity.  Tunnels become directed edges between one room's
//! exit and the other's entry (and the reverse).  The source and sink are
//! unconstrained and stay single nodes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`builder`] | `AnthillBuilder` — name-keyed construction boundary  |
//! | [`graph`]   | `FlowGraph` (CSR, paired residual edges), `NodeKind` |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                       |

pub mod builder;
pub mod error;
pub mod graph;


pub use builder::{AnthillBuilder, TunnelCapacity};
pub use error::{GraphError, GraphResult};
pub use graph::{FlowGraph, NodeKind, UNBOUNDED_CAPACITY};

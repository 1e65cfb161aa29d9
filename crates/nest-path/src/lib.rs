//! `nest-path` — turning a flow solution into usable ant paths.
//!
//! Two strategies are exposed as an explicit [`PathStrategy`] policy:
//!
//! 1. **Flow decomposition** — walk edges carrying strictly positive
//!    remaining flow from source to sink, peeling off each walk's full
//!    bottleneck.  One path per saturated walk, so the count stays small
//!    even when unbounded tunnels make the flow value itself enormous.
//! 2. **Path enumeration** — depth-first enumeration of all simple paths
//!    over positive-*capacity* edges up to a configured count, sorted by
//!    real hop count with a lexicographic room-name tie-break.
//!
//! Either way the result is the `availablePaths` set the scheduler's path
//! policies consume.  An empty result is [`PathError::NoPathExists`] — the
//! sink is unreachable and zero ants will ever move.

pub mod error;
pub mod extractor;
pub mod path;


pub use error::{PathError, PathResult};
pub use extractor::{extract, PathStrategy};
pub use path::Path;

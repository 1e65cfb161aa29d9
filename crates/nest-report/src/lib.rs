//! `nest-report` — converting a run's step log into external output.
//!
//! Two backends implement the [`ReportWriter`] trait:
//!
//! | Backend          | Output                                             |
//! |------------------|----------------------------------------------------|
//! | [`TextReporter`] | The classic human-readable block-per-tick log      |
//! | [`CsvReporter`]  | One `tick,ant,from,to` row per move, for analysis  |
//!
//! Reporters only *render*; the schedule itself is fixed by the scheduler.
//! The single reporting knob, [`ReportOptions::show_empty_ticks`], controls
//! whether a tick without inter-room moves appears as a placeholder block
//! or is omitted.

pub mod csv;
pub mod error;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvReporter;
pub use error::{ReportError, ReportResult};
pub use text::{ReportOptions, TextReporter};
pub use writer::ReportWriter;

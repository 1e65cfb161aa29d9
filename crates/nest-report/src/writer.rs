//! The `ReportWriter` trait implemented by all backend reporters.

use nest_sim::RunReport;

use crate::ReportResult;

/// Trait implemented by the text and CSV reporters.
///
/// `room_names` is indexed by `RoomId` — pass `FlowGraph::room_names()`
/// from the graph the run was scheduled on.
pub trait ReportWriter {
    /// Render the full step log of one run.
    fn write_run(&mut self, report: &RunReport, room_names: &[String]) -> ReportResult<()>;

    /// Flush the underlying sink.  Idempotent.
    fn finish(&mut self) -> ReportResult<()>;
}

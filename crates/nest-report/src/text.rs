//! Human-readable text backend.
//!
//! Renders the historical anthill log format:
//!
//! ```text
//!
//!         === E 1 ===
//!     Ant 1 - S_v to S1
//!     Ant 2 - S_v to S1
//! ```
//!
//! Step indices and ant ids are 1-based externally; internal ids stay
//! 0-based.

use std::io::Write;

use nest_sim::RunReport;

use crate::writer::ReportWriter;
use crate::ReportResult;

/// Rendering knobs.  These affect presentation only, never the schedule.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReportOptions {
    /// Render ticks with zero inter-room moves as a placeholder block
    /// instead of omitting them.
    pub show_empty_ticks: bool,
}

/// Writes the block-per-tick text log to any `io::Write` sink.
pub struct TextReporter<W: Write> {
    out: W,
    options: ReportOptions,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, options: ReportOptions) -> Self {
        TextReporter { out, options }
    }

    /// Recover the sink (e.g. a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TextReporter<W> {
    fn write_run(&mut self, report: &RunReport, room_names: &[String]) -> ReportResult<()> {
        for step in &report.steps {
            if step.moves.is_empty() && !self.options.show_empty_ticks {
                continue;
            }
            writeln!(self.out, "\n        === E {} ===", step.tick.0 + 1)?;
            if step.moves.is_empty() {
                writeln!(self.out, "    (no movement)")?;
                continue;
            }
            for m in &step.moves {
                writeln!(
                    self.out,
                    "    Ant {} - {} to {}",
                    m.ant.0 + 1,
                    room_names[m.from.index()],
                    room_names[m.to.index()],
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

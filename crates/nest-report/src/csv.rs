//! CSV output backend.
//!
//! One row per inter-room move: `tick,ant,from,to`.  Tick and ant indices
//! match the text reporter's 1-based external numbering so the two outputs
//! cross-reference cleanly.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use nest_sim::RunReport;

use crate::writer::ReportWriter;
use crate::ReportResult;

/// Writes the move log as CSV to any `io::Write` sink.
pub struct CsvReporter<W: Write> {
    writer: Writer<W>,
    finished: bool,
}

impl CsvReporter<File> {
    /// Open (or create) `path` and write the header row.
    pub fn from_path(path: &Path) -> ReportResult<Self> {
        let file = File::create(path)?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvReporter<W> {
    /// Wrap any writer and emit the header row.
    pub fn from_writer(out: W) -> ReportResult<Self> {
        let mut writer = Writer::from_writer(out);
        writer.write_record(["tick", "ant", "from", "to"])?;
        Ok(CsvReporter { writer, finished: false })
    }

    /// Flush and recover the sink (e.g. a `Vec<u8>` in tests).
    pub fn into_inner(self) -> ReportResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()).into())
    }
}

impl<W: Write> ReportWriter for CsvReporter<W> {
    fn write_run(&mut self, report: &RunReport, room_names: &[String]) -> ReportResult<()> {
        for step in &report.steps {
            for m in &step.moves {
                self.writer.write_record(&[
                    (step.tick.0 + 1).to_string(),
                    (m.ant.0 + 1).to_string(),
                    room_names[m.from.index()].clone(),
                    room_names[m.to.index()].clone(),
                ])?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}

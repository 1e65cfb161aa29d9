//! Unit tests for nest-report.
//!
//! Reports are rendered into in-memory buffers from hand-built run logs so
//! the exact bytes can be asserted.

#[cfg(test)]
mod helpers {
    use nest_core::{AntId, RoomId, Tick};
    use nest_sim::{Move, Outcome, RunReport, Step};

    pub fn room_names() -> Vec<String> {
        ["S_v", "A", "B", "S_d"].map(String::from).to_vec()
    }

    /// Hand-built two-tick log: both ants leave the source, then ant 1
    /// reaches the sink.
    pub fn small_report() -> RunReport {
        let steps = vec![
            Step {
                tick: Tick(0),
                moves: vec![
                    Move { ant: AntId(0), from: RoomId(0), to: RoomId(1) },
                    Move { ant: AntId(1), from: RoomId(0), to: RoomId(1) },
                ],
            },
            Step {
                tick: Tick(1),
                moves: vec![Move { ant: AntId(0), from: RoomId(1), to: RoomId(3) }],
            },
        ];
        RunReport { outcome: Outcome::Complete, ticks: 2, delivered: 1, steps }
    }

    pub fn report_with_empty_tick() -> RunReport {
        let steps = vec![
            Step {
                tick: Tick(0),
                moves: vec![Move { ant: AntId(0), from: RoomId(0), to: RoomId(1) }],
            },
            Step { tick: Tick(1), moves: vec![] },
        ];
        RunReport { outcome: Outcome::Deadlock, ticks: 2, delivered: 0, steps }
    }
}

#[cfg(test)]
mod text {
    use super::helpers;
    use crate::{ReportOptions, ReportWriter, TextReporter};

    fn render(report: &nest_sim::RunReport, options: ReportOptions) -> String {
        let mut reporter = TextReporter::new(Vec::new(), options);
        reporter.write_run(report, &helpers::room_names()).unwrap();
        reporter.finish().unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn block_per_tick_with_one_based_numbering() {
        let text = render(&helpers::small_report(), ReportOptions::default());
        assert_eq!(
            text,
            "\n        === E 1 ===\n\
             \x20   Ant 1 - S_v to A\n\
             \x20   Ant 2 - S_v to A\n\
             \n        === E 2 ===\n\
             \x20   Ant 1 - A to S_d\n"
        );
    }

    #[test]
    fn empty_ticks_omitted_by_default() {
        let text = render(&helpers::report_with_empty_tick(), ReportOptions::default());
        assert!(!text.contains("=== E 2 ==="));
        assert!(!text.contains("no movement"));
    }

    #[test]
    fn empty_ticks_rendered_as_placeholder_when_enabled() {
        let text = render(
            &helpers::report_with_empty_tick(),
            ReportOptions { show_empty_ticks: true },
        );
        assert!(text.contains("=== E 2 ==="));
        assert!(text.contains("    (no movement)"));
    }
}

#[cfg(test)]
mod csv {
    use super::helpers;
    use crate::{CsvReporter, ReportWriter};

    #[test]
    fn one_row_per_move_plus_header() {
        let mut reporter = CsvReporter::from_writer(Vec::new()).unwrap();
        reporter
            .write_run(&helpers::small_report(), &helpers::room_names())
            .unwrap();
        reporter.finish().unwrap();

        let bytes = reporter.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "tick,ant,from,to");
        assert_eq!(lines[1], "1,1,S_v,A");
        assert_eq!(lines[3], "2,1,A,S_d");
    }
}

//! Unit tests for nest-scenario.
//!
//! All parsing tests run against in-memory cursors; no fixture files.

#[cfg(test)]
mod parsing {
    use std::io::Cursor;

    use crate::{parse_scenario, ScenarioError};

    fn parse(text: &str) -> (crate::ScenarioFile, Vec<crate::ScenarioWarning>) {
        parse_scenario(Cursor::new(text)).unwrap()
    }

    #[test]
    fn full_scenario() {
        let (file, warnings) = parse(
            "f=3\n\
             # the vestibule\n\
             S_v{100}\n\
             S1{2}\n\
             S2\n\
             S_d{100}\n\
             S_v - S1\n\
             S1 - S2\n\
             S2 - S_d\n",
        );
        assert!(warnings.is_empty());
        assert_eq!(file.ant_count, 3);
        assert_eq!(file.rooms.len(), 4);
        assert_eq!(file.rooms[1], ("S1".to_string(), 2));
        // Capacity defaults to 1 when omitted.
        assert_eq!(file.rooms[2], ("S2".to_string(), 1));
        assert_eq!(file.tunnels.len(), 3);
    }

    #[test]
    fn missing_header_is_fatal() {
        let result = parse_scenario(Cursor::new("S_v\nS_d\nS_v - S_d\n"));
        assert!(matches!(result, Err(ScenarioError::MissingAntCount)));
    }

    #[test]
    fn non_positive_ant_count_is_fatal() {
        let result = parse_scenario(Cursor::new("f=0\nS_v\nS_d\n"));
        assert!(matches!(result, Err(ScenarioError::InvalidAntCount { .. })));
    }

    #[test]
    fn malformed_capacity_warns_and_defaults() {
        let (file, warnings) = parse("f=1\nS_v\nS1{lots}\nS_d\n");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line, 3);
        assert_eq!(file.rooms[1], ("S1".to_string(), 1));
    }

    #[test]
    fn malformed_tunnel_warns_and_skips() {
        let (file, warnings) = parse("f=1\nS_v\nS_d\nS_v - \nS_v - S_d\n");
        assert_eq!(warnings.len(), 1);
        assert_eq!(file.tunnels.len(), 1);
    }

    #[test]
    fn bare_names_gain_the_s_prefix() {
        let (file, _) = parse("f=1\nS_v\n1\nS_d\nS_v - 1\n1 - S_d\n");
        assert_eq!(file.rooms[1].0, "S1");
        assert_eq!(file.tunnels[0], ("S_v".to_string(), "S1".to_string()));
    }

    #[test]
    fn comments_and_blank_lines_ignored() {
        let (file, warnings) = parse("\n# hello\nf=2\n\nS_v\nS_d\n# done\n");
        assert!(warnings.is_empty());
        assert_eq!(file.ant_count, 2);
        assert_eq!(file.rooms.len(), 2);
    }
}

#[cfg(test)]
mod building {
    use std::io::Cursor;

    use nest_graph::{GraphError, TunnelCapacity};

    use crate::{parse_scenario, ScenarioError};

    fn build(text: &str) -> Result<nest_graph::FlowGraph, ScenarioError> {
        let (file, _) = parse_scenario(Cursor::new(text)).unwrap();
        file.build_anthill(TunnelCapacity::Unbounded)
    }

    #[test]
    fn valid_scenario_builds() {
        let g = build("f=2\nS_v{100}\nS1\nS_d{100}\nS_v - S1\nS1 - S_d\n").unwrap();
        assert_eq!(g.room_count(), 3);
        assert_eq!(g.room_name(g.source_room()), "S_v");
        assert_eq!(g.room_name(g.sink_room()), "S_d");
    }

    #[test]
    fn unknown_tunnel_endpoint_is_fatal() {
        let result = build("f=1\nS_v\nS_d\nS_v - S9\n");
        assert!(matches!(
            result,
            Err(ScenarioError::Graph(GraphError::UnknownRoom(name))) if name == "S9"
        ));
    }

    #[test]
    fn missing_source_room_is_fatal() {
        let result = build("f=1\nS1\nS_d\nS1 - S_d\n");
        assert!(matches!(
            result,
            Err(ScenarioError::Graph(GraphError::MissingTerminal("source")))
        ));
    }

    #[test]
    fn duplicate_room_is_fatal() {
        let result = build("f=1\nS_v\nS_v\nS_d\n");
        assert!(matches!(
            result,
            Err(ScenarioError::Graph(GraphError::DuplicateRoom(_)))
        ));
    }
}

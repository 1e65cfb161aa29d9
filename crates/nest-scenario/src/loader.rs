//! Scenario parsing and anthill construction.

use std::io::{BufRead, BufReader};
use std::path::Path;

use nest_graph::{AnthillBuilder, FlowGraph, GraphError, TunnelCapacity};

use crate::{ScenarioError, ScenarioResult, ScenarioWarning};

/// Room name designating the source by convention.
pub const SOURCE_NAME: &str = "S_v";
/// Room name designating the sink by convention.
pub const SINK_NAME: &str = "S_d";

// ── ScenarioFile ──────────────────────────────────────────────────────────────

/// A parsed scenario: declaration-ordered rooms and tunnels plus the ant
/// count.  Purely textual — graph validation happens in
/// [`build_anthill`](Self::build_anthill).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioFile {
    pub ant_count: usize,
    /// `(name, capacity)` in declaration order.
    pub rooms: Vec<(String, u32)>,
    pub tunnels: Vec<(String, String)>,
}

impl ScenarioFile {
    /// Feed the declarations into an [`AnthillBuilder`] and build the flow
    /// graph.  Duplicate rooms, unknown tunnel endpoints, and missing
    /// terminals surface as fatal errors here, in file order.
    pub fn build_anthill(&self, policy: TunnelCapacity) -> ScenarioResult<FlowGraph> {
        let mut builder = AnthillBuilder::new();
        builder.tunnel_capacity(policy);
        for (name, capacity) in &self.rooms {
            builder.add_room(name, *capacity)?;
        }
        for (a, b) in &self.tunnels {
            builder.add_tunnel(a, b)?;
        }
        if !self.rooms.iter().any(|(n, _)| n == SOURCE_NAME) {
            return Err(GraphError::MissingTerminal("source").into());
        }
        if !self.rooms.iter().any(|(n, _)| n == SINK_NAME) {
            return Err(GraphError::MissingTerminal("sink").into());
        }
        builder.source(SOURCE_NAME)?;
        builder.sink(SINK_NAME)?;
        Ok(builder.build()?)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and parse a scenario file.
pub fn load_scenario(path: &Path) -> ScenarioResult<(ScenarioFile, Vec<ScenarioWarning>)> {
    let file = std::fs::File::open(path)?;
    parse_scenario(BufReader::new(file))
}

/// Like [`load_scenario`] but accepts any `BufRead` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn parse_scenario<R: BufRead>(
    reader: R,
) -> ScenarioResult<(ScenarioFile, Vec<ScenarioWarning>)> {
    let mut ant_count: Option<usize> = None;
    let mut rooms: Vec<(String, u32)> = Vec::new();
    let mut tunnels: Vec<(String, String)> = Vec::new();
    let mut warnings: Vec<ScenarioWarning> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // ── Header: f=<count> ─────────────────────────────────────────────
        if let Some(token) = line.strip_prefix("f=") {
            let token = token.trim();
            match token.parse::<usize>() {
                Ok(n) if n > 0 => ant_count = Some(n),
                _ => {
                    return Err(ScenarioError::InvalidAntCount {
                        line: line_no,
                        token: token.to_string(),
                    });
                }
            }
            continue;
        }

        // ── Tunnel: <a> - <b> ─────────────────────────────────────────────
        if line.contains('-') {
            let mut parts = line.splitn(2, '-');
            let a = parts.next().unwrap_or("").trim();
            let b = parts.next().unwrap_or("").trim();
            if a.is_empty() || b.is_empty() || b.contains('-') {
                warnings.push(ScenarioWarning {
                    line: line_no,
                    message: format!("skipping malformed tunnel line {line:?}"),
                });
                continue;
            }
            tunnels.push((normalize(a), normalize(b)));
            continue;
        }

        // ── Room: <name> or <name>{<capacity>} ────────────────────────────
        let (name, capacity) = match line.split_once('{') {
            None => (line, 1),
            Some((name, rest)) => {
                let token = rest.trim_end_matches('}').trim();
                match token.parse::<u32>() {
                    Ok(c) if c > 0 => (name.trim(), c),
                    _ => {
                        warnings.push(ScenarioWarning {
                            line: line_no,
                            message: format!(
                                "invalid capacity {token:?} for room {name:?}, defaulting to 1"
                            ),
                        });
                        (name.trim(), 1)
                    }
                }
            }
        };
        if name.is_empty() {
            warnings.push(ScenarioWarning {
                line: line_no,
                message: format!("skipping malformed room line {line:?}"),
            });
            continue;
        }
        rooms.push((normalize(name), capacity));
    }

    let ant_count = ant_count.ok_or(ScenarioError::MissingAntCount)?;
    Ok((ScenarioFile { ant_count, rooms, tunnels }, warnings))
}

/// Historical format quirk: bare names gain an `S` prefix, so `1` and `S1`
/// are the same room.
fn normalize(name: &str) -> String {
    if name.starts_with('S') {
        name.to_string()
    } else {
        format!("S{name}")
    }
}

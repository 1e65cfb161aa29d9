//! `nest` — run an anthill scenario end to end: parse, solve the max flow,
//! extract paths, schedule the ants, and print the tick-by-tick movement log.
//!
//! With no scenario argument the binary lists `scenarios/` and asks for a
//! numeric pick on stdin, matching how the simulator has always been driven
//! interactively.
//!
//! Run with:
//!   cargo run -p nest-cli --release -- scenarios/anthill.txt

use std::io::{self, BufRead, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use nest_flow::max_flow;
use nest_graph::{FlowGraph, TunnelCapacity};
use nest_path::{extract, PathStrategy};
use nest_report::{CsvReporter, ReportOptions, ReportWriter, TextReporter};
use nest_scenario::load_scenario;
use nest_sim::{
    AdaptivePolicy, FixedPathPolicy, NoopObserver, Outcome, PathPolicy, RunReport,
    SchedulerBuilder,
};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "nest")]
#[command(about = "Anthill ant-routing simulator")]
struct Cli {
    /// Scenario file to run.  Omit to pick one interactively.
    scenario: Option<PathBuf>,

    /// Directory listed by the interactive picker.
    #[arg(long, default_value = "scenarios")]
    scenario_dir: PathBuf,

    /// Keep every ant on its assigned path (no per-tick re-scoring).
    #[arg(long, conflicts_with = "adaptive")]
    fixed: bool,

    /// Re-score candidate paths every tick (the default policy).
    #[arg(long)]
    adaptive: bool,

    /// Enumerate all simple source→sink paths instead of decomposing
    /// the max flow.
    #[arg(long)]
    enumerate: bool,

    /// Cap on enumerated paths (only with --enumerate).
    #[arg(long, default_value_t = 64)]
    max_paths: usize,

    /// Limit each tunnel to one traversal per tick and direction.
    #[arg(long)]
    narrow_tunnels: bool,

    /// Render ticks with no movement instead of omitting them.
    #[arg(long)]
    show_empty_ticks: bool,

    /// Also write every move as a CSV row (tick,ant,from,to) to this file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Seed for the adaptive policy's tie-breaking jitter.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

// ── Scenario picker ───────────────────────────────────────────────────────────

/// List `dir` (sorted by name) and read a 1-based pick from stdin.
fn pick_scenario(dir: &Path) -> Result<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("cannot list scenario directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    if files.is_empty() {
        bail!("no scenario files in {}", dir.display());
    }

    println!("Available scenarios:");
    for (i, path) in files.iter().enumerate() {
        println!("  {}) {}", i + 1, path.display());
    }
    print!("Pick a scenario [1-{}]: ", files.len());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let pick: usize = line
        .trim()
        .parse()
        .with_context(|| format!("not a number: {:?}", line.trim()))?;
    if pick == 0 || pick > files.len() {
        bail!("selection {pick} out of range 1-{}", files.len());
    }
    Ok(files[pick - 1].clone())
}

// ── Run ───────────────────────────────────────────────────────────────────────

fn run_schedule<P: PathPolicy>(
    graph: FlowGraph,
    paths: Vec<nest_path::Path>,
    ant_count: usize,
    policy: P,
    seed: u64,
) -> Result<(RunReport, Vec<String>)> {
    let room_names = graph.room_names().to_vec();
    let mut scheduler = SchedulerBuilder::new(graph, paths, ant_count, policy)
        .seed(seed)
        .build()?;
    let report = scheduler.run(&mut NoopObserver)?;
    Ok((report, room_names))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let scenario_path = match &cli.scenario {
        Some(path) => path.clone(),
        None => pick_scenario(&cli.scenario_dir)?,
    };

    // 1. Parse.
    let (file, warnings) = load_scenario(&scenario_path)
        .with_context(|| format!("cannot read scenario {}", scenario_path.display()))?;
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    // 2. Build the anthill.
    let tunnel_capacity = if cli.narrow_tunnels {
        TunnelCapacity::One
    } else {
        TunnelCapacity::Unbounded
    };
    let graph = file.build_anthill(tunnel_capacity)?;
    println!("{graph}");

    // 3. Max flow + paths.
    let flow = max_flow(&graph);
    let strategy = if cli.enumerate {
        PathStrategy::Enumeration { max_paths: cli.max_paths }
    } else {
        PathStrategy::FlowDecomposition
    };
    let paths = extract(&graph, &flow, strategy)?;
    println!(
        "Max flow: {} ant(s)/tick over {} path(s), {} ant(s) to route",
        flow.value,
        paths.len(),
        file.ant_count,
    );

    // 4. Schedule.  Adaptive is the default; --fixed pins assignments.
    let (report, room_names) = if cli.fixed {
        run_schedule(graph, paths, file.ant_count, FixedPathPolicy, cli.seed)?
    } else {
        run_schedule(graph, paths, file.ant_count, AdaptivePolicy::default(), cli.seed)?
    };

    // 5. Report.
    let options = ReportOptions { show_empty_ticks: cli.show_empty_ticks };
    let mut text = TextReporter::new(io::stdout().lock(), options);
    text.write_run(&report, &room_names)?;
    text.finish()?;

    if let Some(csv_path) = &cli.csv {
        let mut csv = CsvReporter::from_path(csv_path)
            .with_context(|| format!("cannot create {}", csv_path.display()))?;
        csv.write_run(&report, &room_names)?;
        csv.finish()?;
        println!("\nWrote {} tick(s) to {}", report.ticks, csv_path.display());
    }

    match report.outcome {
        Outcome::Complete => println!(
            "\nAll {} ant(s) delivered in {} tick(s).",
            report.delivered, report.ticks,
        ),
        Outcome::Deadlock => bail!(
            "deadlock after {} tick(s): {} of {} ant(s) delivered",
            report.ticks,
            report.delivered,
            file.ant_count,
        ),
    }

    Ok(())
}

// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod task;
pub mod types;

use std::io::{Read, Write};

use serde_json::Value;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::dag::DependencyGraph;
use crate::engine::extract_records;
use crate::errors::{Result, ScheduleError, TaskplanError};
use crate::task::TaskSet;
use crate::types::OutputFormat;

pub use crate::engine::{Planner, Schedule, ScheduleOptions};

/// Order raw task records with default options.
pub fn schedule(records: &[Value]) -> std::result::Result<Vec<String>, ScheduleError> {
    Planner::default()
        .plan(records)
        .map(|schedule| schedule.recommended_order)
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file, then CLI overrides)
/// - reading the payload from a file or stdin
/// - planning
/// - rendering to stdout
///
/// Returns the process exit code: 0 when an order was produced, 1 when the
/// payload was rejected.
pub fn run(args: CliArgs) -> Result<i32> {
    let cfg = load_or_default(args.config.as_deref())?;

    let mut options = cfg.schedule_options();
    if let Some(order) = args.title_order {
        options.title_order = order;
    }
    options.cycle_witness |= args.witness;
    let format = args.format.unwrap_or(cfg.output.format);
    debug!(?options, ?format, "resolved options");

    let payload = read_payload(&args)?;
    let planner = Planner::new(options);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.dry_run {
        let outcome = extract_records(&payload).and_then(|records| planner.inspect(records));
        return match outcome {
            Ok((tasks, graph)) => {
                print_dry_run(&mut out, &tasks, &graph)?;
                Ok(0)
            }
            Err(err) => {
                render_error(&mut out, &err, format)?;
                Ok(1)
            }
        };
    }

    match planner.plan_payload(&payload) {
        Ok(schedule) => {
            render_schedule(&mut out, &schedule, format)?;
            Ok(0)
        }
        Err(err) => {
            render_error(&mut out, &err, format)?;
            Ok(1)
        }
    }
}

fn read_payload(args: &CliArgs) -> Result<Value> {
    let raw = match args.input_path() {
        Some(path) => {
            debug!(path = %path.display(), "reading payload");
            std::fs::read_to_string(path)?
        }
        None => {
            debug!("reading payload from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    serde_json::from_str(&raw).map_err(TaskplanError::from)
}

/// Print the order: numbered lines, or the `{"recommendedOrder": [...]}`
/// document.
pub fn render_schedule(out: &mut impl Write, schedule: &Schedule, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, schedule)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (idx, title) in schedule.recommended_order.iter().enumerate() {
                writeln!(out, "{:>3}. {title}", idx + 1)?;
            }
        }
    }
    Ok(())
}

/// Print a rejection: `error: <message>`, or the `{"error": "..."}`
/// document.
pub fn render_error(out: &mut impl Write, err: &ScheduleError, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &serde_json::json!({ "error": err.to_string() }))?;
            writeln!(out)?;
        }
        OutputFormat::Text => writeln!(out, "error: {err}")?,
    }
    Ok(())
}

/// Dry-run output: tasks, deadlines, effort and dependencies.
fn print_dry_run(out: &mut impl Write, tasks: &TaskSet, graph: &DependencyGraph) -> Result<()> {
    writeln!(out, "taskplan dry-run")?;
    writeln!(out, "  tasks = {}", tasks.len())?;
    writeln!(out, "  dependency edges = {}", graph.edge_count())?;
    writeln!(out)?;

    for task in tasks.iter() {
        writeln!(out, "  - {}", task.title)?;
        writeln!(out, "      due: {}", task.due)?;
        writeln!(out, "      estimated_hours: {}", task.estimated_hours)?;
        if !task.dependencies.is_empty() {
            writeln!(out, "      dependencies: {:?}", task.dependencies)?;
        }
        let dependents = graph.dependents_of(&task.title);
        if !dependents.is_empty() {
            writeln!(out, "      unblocks: {:?}", dependents)?;
        }
    }

    debug!("dry-run complete (no ordering)");
    Ok(())
}

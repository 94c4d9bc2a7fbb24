//! Timed solver runs and the JSON and CSV records derived from them.

use std::io::Write;
use std::time::{Duration, Instant};

use knapsack_core::{Instance, Outcome, Scaled, SolveResult, Solver, Strategy};
use serde::Serialize;

use crate::CliError;

/// Header row of sweep CSV output.
pub(crate) const CSV_HEADER: &str =
    "algorithm,item_count,capacity,total_value,total_weight,time_ms,outcome";

/// A solver result with the wall-clock time it took.
#[derive(Debug, Clone)]
pub(crate) struct TimedRun {
    pub(crate) result: SolveResult,
    pub(crate) elapsed: Duration,
}

impl TimedRun {
    /// Elapsed time in milliseconds; skipped runs report zero.
    pub(crate) fn millis(&self) -> f64 {
        if self.result.outcome.is_skipped() {
            0.0
        } else {
            as_millis(self.elapsed)
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "timings are reported as fractional milliseconds"
)]
fn as_millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000.0
}

/// Run `solver` on `instance` and time it.
pub(crate) fn run_timed(solver: &dyn Solver, instance: &Instance) -> Result<TimedRun, CliError> {
    let strategy = solver.strategy();
    log::debug!("running {strategy} on {} items", instance.len());
    let started = Instant::now();
    let result = solver
        .solve(instance)
        .map_err(|source| CliError::Solve { strategy, source })?;
    let elapsed = started.elapsed();
    if !result.outcome.is_skipped() {
        log::info!(
            "{strategy}: value {} weight {} in {:.3} ms",
            result.value,
            result.weight,
            as_millis(elapsed)
        );
    }
    Ok(TimedRun { result, elapsed })
}

/// One entry of the `solve` command's JSON report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RunRecord {
    pub(crate) strategy: Strategy,
    pub(crate) outcome: Outcome,
    pub(crate) value: f64,
    pub(crate) weight: f64,
    pub(crate) chosen: Vec<usize>,
    pub(crate) states_explored: u64,
    pub(crate) time_ms: f64,
}

impl From<&TimedRun> for RunRecord {
    fn from(run: &TimedRun) -> Self {
        let result = &run.result;
        Self {
            strategy: result.strategy,
            outcome: result.outcome,
            value: result.value(),
            weight: result.weight(),
            chosen: result.selection.chosen().collect(),
            states_explored: result.diagnostics.states_explored,
            time_ms: run.millis(),
        }
    }
}

/// The `solve` command's JSON report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SolveReport {
    pub(crate) item_count: usize,
    pub(crate) capacity: u32,
    pub(crate) runs: Vec<RunRecord>,
}

/// Write `report` as pretty JSON followed by a newline.
pub(crate) fn write_json_report(
    writer: &mut dyn Write,
    report: &SolveReport,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .map_err(CliError::WriteOutput)
}

/// One row of sweep CSV output.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CsvRow {
    pub(crate) strategy: Strategy,
    pub(crate) item_count: usize,
    pub(crate) capacity: u32,
    pub(crate) total_value: Scaled,
    pub(crate) total_weight: Scaled,
    pub(crate) time_ms: f64,
    pub(crate) outcome: Outcome,
}

impl CsvRow {
    pub(crate) fn new(instance: &Instance, run: &TimedRun) -> Self {
        Self {
            strategy: run.result.strategy,
            item_count: instance.len(),
            capacity: instance.capacity(),
            total_value: run.result.value,
            total_weight: run.result.weight,
            time_ms: run.millis(),
            outcome: run.result.outcome,
        }
    }

    pub(crate) fn write(&self, writer: &mut dyn Write) -> Result<(), CliError> {
        writeln!(
            writer,
            "{},{},{},{},{},{:.3},{}",
            self.strategy.label(),
            self.item_count,
            self.capacity,
            self.total_value,
            self.total_weight,
            self.time_ms,
            self.outcome.label()
        )
        .map_err(CliError::WriteOutput)
    }
}

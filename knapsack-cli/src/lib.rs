//! Command-line interface for running and comparing knapsack solvers.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use knapsack_core::SolverLimits;

mod error;
mod fs;
mod generate;
mod instance_file;
mod report;
mod solve;
mod sweep;

pub use error::CliError;

use generate::{GenerateArgs, run_generate};
use solve::{SolveArgs, run_solve};
use sweep::{SweepArgs, run_sweep};

const ARG_INSTANCE: &str = "instance";
const ARG_ITEMS: &str = "items";
const ARG_SEED: &str = "seed";
const ARG_CAPACITY: &str = "capacity";
const ARG_OUTPUT: &str = "output";
const ARG_STRATEGY: &str = "strategy";
const ARG_ITEM_COUNTS: &str = "item-counts";
const ARG_CAPACITIES: &str = "capacities";
const ARG_EXHAUSTIVE_MAX_ITEMS: &str = "exhaustive-max-items";
const ARG_BRANCH_AND_BOUND_MAX_ITEMS: &str = "branch-and-bound-max-items";
const ARG_DP_MAX_TABLE_BYTES: &str = "dp-max-table-bytes";
const ENV_SOLVE_INSTANCE: &str = "KNAPSACK_CMDS_SOLVE_INSTANCE_PATH";
const ENV_GENERATE_ITEMS: &str = "KNAPSACK_CMDS_GENERATE_ITEMS";

/// Seed used when none is configured.
const DEFAULT_SEED: u64 = 42;

/// Run the knapsack CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, when an
/// instance cannot be read, when a solver fails, or when output cannot be
/// written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
        Command::Generate(args) => run_generate(args),
        Command::Sweep(args) => run_sweep(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "knapsack",
    about = "Solve 0/1 knapsack instances with four strategies and compare them",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve an instance file and print a JSON report.
    Solve(SolveArgs),
    /// Write a seeded random instance.
    Generate(GenerateArgs),
    /// Run every strategy over a grid of item counts and capacities.
    Sweep(SweepArgs),
}

/// Solver ceilings as optionally supplied by a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LimitOverrides {
    exhaustive_max_items: Option<usize>,
    branch_and_bound_max_items: Option<usize>,
    dp_max_table_bytes: Option<u64>,
}

impl LimitOverrides {
    fn resolve(self) -> SolverLimits {
        let defaults = SolverLimits::default();
        SolverLimits {
            exhaustive_max_items: self
                .exhaustive_max_items
                .unwrap_or(defaults.exhaustive_max_items),
            branch_and_bound_max_items: self
                .branch_and_bound_max_items
                .unwrap_or(defaults.branch_and_bound_max_items),
            dp_max_table_bytes: self
                .dp_max_table_bytes
                .unwrap_or(defaults.dp_max_table_bytes),
        }
    }
}

#[cfg(test)]
mod tests;

//! Sweep command: every strategy over a grid of item counts and capacities.

use std::io::{BufWriter, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use knapsack_core::{Instance, SolverLimits};
use knapsack_solvers::portfolio;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::generate::{generated_instance, random_items};
use crate::report::{CSV_HEADER, CsvRow, run_timed};
use crate::{
    ARG_BRANCH_AND_BOUND_MAX_ITEMS, ARG_CAPACITIES, ARG_DP_MAX_TABLE_BYTES,
    ARG_EXHAUSTIVE_MAX_ITEMS, ARG_ITEM_COUNTS, ARG_OUTPUT, ARG_SEED, CliError, DEFAULT_SEED,
    LimitOverrides,
};

/// Item counts swept when none are configured.
pub(crate) const DEFAULT_ITEM_COUNTS: [usize; 31] = [
    4, 10, 15, 20, 25, 30, 32, 35, 40, 45, 50, 60, 70, 80, 90, 100, 150, 200, 250, 300, 350, 400,
    450, 500, 750, 1_000, 1_500, 2_000, 3_000, 4_000, 5_000,
];

/// Capacities swept when none are configured.
pub(crate) const DEFAULT_CAPACITIES: [u32; 3] = [10_000, 100_000, 1_000_000];

/// Output file used when none is configured.
const DEFAULT_OUTPUT: &str = "results.csv";

/// `(weight, value)` pairs of the fixed instance solved before the sweep.
const REFERENCE_PAIRS: [(f64, f64); 4] = [(2.0, 3.0), (3.0, 4.0), (4.0, 5.0), (5.0, 6.0)];

/// Capacity of the fixed instance solved before the sweep.
const REFERENCE_CAPACITY: u32 = 7;

/// CLI arguments for the `sweep` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve a small fixed instance, then one seeded random \
                 instance per item count at every capacity, with all four \
                 strategies. One CSV row is written per solver run.",
    about = "Compare the strategies across instance sizes"
)]
#[ortho_config(prefix = "KNAPSACK")]
pub(crate) struct SweepArgs {
    /// Comma-separated item counts.
    #[arg(long = ARG_ITEM_COUNTS, value_name = "counts", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) item_counts: Option<Vec<usize>>,
    /// Comma-separated capacities.
    #[arg(long = ARG_CAPACITIES, value_name = "capacities", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) capacities: Option<Vec<u32>>,
    /// Seed for the random number generator.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// CSV file to write.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Largest instance exhaustive search will enumerate.
    #[arg(long = ARG_EXHAUSTIVE_MAX_ITEMS, value_name = "count")]
    #[serde(default)]
    pub(crate) exhaustive_max_items: Option<usize>,
    /// Largest instance branch and bound will search.
    #[arg(long = ARG_BRANCH_AND_BOUND_MAX_ITEMS, value_name = "count")]
    #[serde(default)]
    pub(crate) branch_and_bound_max_items: Option<usize>,
    /// Largest dynamic-programming table in bytes.
    #[arg(long = ARG_DP_MAX_TABLE_BYTES, value_name = "bytes")]
    #[serde(default)]
    pub(crate) dp_max_table_bytes: Option<u64>,
}

impl SweepArgs {
    pub(crate) fn into_config(self) -> Result<SweepConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SweepConfig::try_from(merged)
    }
}

/// Resolved `sweep` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SweepConfig {
    pub(crate) item_counts: Vec<usize>,
    pub(crate) capacities: Vec<u32>,
    pub(crate) seed: u64,
    pub(crate) output: Utf8PathBuf,
    pub(crate) limits: SolverLimits,
}

impl TryFrom<SweepArgs> for SweepConfig {
    type Error = CliError;

    fn try_from(args: SweepArgs) -> Result<Self, Self::Error> {
        let item_counts = args
            .item_counts
            .unwrap_or_else(|| DEFAULT_ITEM_COUNTS.to_vec());
        if item_counts.is_empty() {
            return Err(CliError::EmptyList {
                field: ARG_ITEM_COUNTS,
            });
        }
        let capacities = args
            .capacities
            .unwrap_or_else(|| DEFAULT_CAPACITIES.to_vec());
        if capacities.is_empty() {
            return Err(CliError::EmptyList {
                field: ARG_CAPACITIES,
            });
        }
        let limits = LimitOverrides {
            exhaustive_max_items: args.exhaustive_max_items,
            branch_and_bound_max_items: args.branch_and_bound_max_items,
            dp_max_table_bytes: args.dp_max_table_bytes,
        }
        .resolve();
        Ok(Self {
            item_counts,
            capacities,
            seed: args.seed.unwrap_or(DEFAULT_SEED),
            output: args.output.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT)),
            limits,
        })
    }
}

pub(crate) fn run_sweep(args: SweepArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let file = crate::fs::create_file(&config.output).map_err(|source| CliError::CreateOutput {
        path: config.output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let rows = run_sweep_with(&config, &mut writer)?;
    writer.flush().map_err(CliError::WriteOutput)?;
    log::info!("wrote {rows} rows to {}", config.output);
    Ok(())
}

/// Write the CSV header and one row per solver run, returning the row count.
pub(crate) fn run_sweep_with(config: &SweepConfig, writer: &mut dyn Write) -> Result<usize, CliError> {
    writeln!(writer, "{CSV_HEADER}").map_err(CliError::WriteOutput)?;
    let mut rows = 0;

    let reference = Instance::from_pairs(REFERENCE_CAPACITY, &REFERENCE_PAIRS).map_err(
        |source| CliError::InvalidInstance {
            path: Utf8PathBuf::from("<reference>"),
            source,
        },
    )?;
    rows += solve_all(config, &reference, writer)?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    for &count in &config.item_counts {
        let items = random_items(&mut rng, count);
        for &capacity in &config.capacities {
            log::info!("sweeping {count} items at capacity {capacity}");
            let instance = generated_instance(items.clone(), capacity)?;
            rows += solve_all(config, &instance, writer)?;
        }
    }
    Ok(rows)
}

fn solve_all(
    config: &SweepConfig,
    instance: &Instance,
    writer: &mut dyn Write,
) -> Result<usize, CliError> {
    let solvers = portfolio(&config.limits);
    for solver in &solvers {
        let run = run_timed(solver.as_ref(), instance)?;
        CsvRow::new(instance, &run).write(writer)?;
    }
    Ok(solvers.len())
}

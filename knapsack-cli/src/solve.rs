//! Solve command implementation for the knapsack CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use knapsack_core::{SolverLimits, Strategy};
use knapsack_solvers::solver_for;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::instance_file::load_instance;
use crate::report::{RunRecord, SolveReport, run_timed, write_json_report};
use crate::{
    ARG_BRANCH_AND_BOUND_MAX_ITEMS, ARG_DP_MAX_TABLE_BYTES, ARG_EXHAUSTIVE_MAX_ITEMS,
    ARG_INSTANCE, ARG_STRATEGY, CliError, ENV_SOLVE_INSTANCE, LimitOverrides,
};

/// Which strategies the `solve` command runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum StrategyChoice {
    /// Every strategy, in reporting order.
    #[default]
    All,
    /// Subset enumeration.
    Exhaustive,
    /// Table over items and capacity.
    DynamicProgramming,
    /// Density-ordered heuristic.
    Greedy,
    /// Bounded depth-first search.
    BranchAndBound,
}

impl StrategyChoice {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            Self::All => Strategy::ALL.to_vec(),
            Self::Exhaustive => vec![Strategy::Exhaustive],
            Self::DynamicProgramming => vec![Strategy::DynamicProgramming],
            Self::Greedy => vec![Strategy::Greedy],
            Self::BranchAndBound => vec![Strategy::BranchAndBound],
        }
    }
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve a knapsack instance stored as JSON. The file holds a \
                 capacity and a list of items, each with a weight and a value \
                 of at most two decimal places. Every selected strategy is \
                 timed and reported as JSON on stdout.",
    about = "Solve a knapsack instance file"
)]
#[ortho_config(prefix = "KNAPSACK")]
pub(crate) struct SolveArgs {
    /// Path to a JSON instance file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) instance_path: Option<Utf8PathBuf>,
    /// Strategy to run; defaults to all four.
    #[arg(long = ARG_STRATEGY, value_enum)]
    #[serde(default)]
    pub(crate) strategy: Option<StrategyChoice>,
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

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    pub(crate) instance_path: Utf8PathBuf,
    pub(crate) strategies: Vec<Strategy>,
    pub(crate) limits: SolverLimits,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.instance_path, ARG_INSTANCE)
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let instance_path = args.instance_path.ok_or(CliError::MissingArgument {
            field: ARG_INSTANCE,
            env: ENV_SOLVE_INSTANCE,
        })?;
        let limits = LimitOverrides {
            exhaustive_max_items: args.exhaustive_max_items,
            branch_and_bound_max_items: args.branch_and_bound_max_items,
            dp_max_table_bytes: args.dp_max_table_bytes,
        }
        .resolve();
        Ok(Self {
            instance_path,
            strategies: args.strategy.unwrap_or_default().strategies(),
            limits,
        })
    }
}

/// Fail unless `path` names an existing regular file.
fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match crate::fs::is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_solve_with(&config, &mut stdout)
}

pub(crate) fn run_solve_with(config: &SolveConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = execute_solve(config)?;
    write_json_report(writer, &report)
}

pub(crate) fn execute_solve(config: &SolveConfig) -> Result<SolveReport, CliError> {
    config.validate_sources()?;
    let instance = load_instance(&config.instance_path)?;
    log::info!(
        "loaded {} items with capacity {} from {}",
        instance.len(),
        instance.capacity(),
        config.instance_path
    );
    let runs = config
        .strategies
        .iter()
        .map(|&strategy| {
            let solver = solver_for(strategy, &config.limits);
            run_timed(solver.as_ref(), &instance).map(|run| RunRecord::from(&run))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SolveReport {
        item_count: instance.len(),
        capacity: instance.capacity(),
        runs,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}

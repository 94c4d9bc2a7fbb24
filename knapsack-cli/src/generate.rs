//! Seeded random instances.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use knapsack_core::{Instance, Item, Scaled};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::instance_file::{save_instance, write_instance};
use crate::{
    ARG_CAPACITY, ARG_ITEMS, ARG_OUTPUT, ARG_SEED, CliError, DEFAULT_SEED, ENV_GENERATE_ITEMS,
};

/// Capacity written when none is configured.
const DEFAULT_CAPACITY: u32 = 10_000;

/// Weight range in hundredths: 1.00 to 100.00.
const WEIGHT_RANGE: std::ops::RangeInclusive<u64> = 100..=10_000;

/// Value range in hundredths: 100.00 to 1000.00.
const VALUE_RANGE: std::ops::RangeInclusive<u64> = 10_000..=100_000;

/// Draw `count` items numbered from 1.
pub(crate) fn random_items(rng: &mut ChaCha8Rng, count: usize) -> Vec<Item> {
    (1..=count)
        .map(|index| {
            let weight = Scaled::from_raw(rng.gen_range(WEIGHT_RANGE));
            let value = Scaled::from_raw(rng.gen_range(VALUE_RANGE));
            Item::from_scaled(index, weight, value)
        })
        .collect()
}

/// Build an instance from generated items.
pub(crate) fn generated_instance(items: Vec<Item>, capacity: u32) -> Result<Instance, CliError> {
    Instance::new(items, capacity).map_err(|source| CliError::InvalidInstance {
        path: Utf8PathBuf::from("<generated>"),
        source,
    })
}

/// CLI arguments for the `generate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Generate a random knapsack instance. Weights are drawn \
                 uniformly from 1.00 to 100.00 and values from 100.00 to \
                 1000.00, both in steps of 0.01. The same seed always yields \
                 the same instance.",
    about = "Write a seeded random instance"
)]
#[ortho_config(prefix = "KNAPSACK")]
pub(crate) struct GenerateArgs {
    /// Number of items to generate.
    #[arg(long = ARG_ITEMS, value_name = "count")]
    #[serde(default)]
    pub(crate) items: Option<usize>,
    /// Seed for the random number generator.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Knapsack capacity written to the instance.
    #[arg(long = ARG_CAPACITY, value_name = "capacity")]
    #[serde(default)]
    pub(crate) capacity: Option<u32>,
    /// File to write; stdout when omitted.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl GenerateArgs {
    pub(crate) fn into_config(self) -> Result<GenerateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GenerateConfig::try_from(merged)
    }
}

/// Resolved `generate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenerateConfig {
    pub(crate) items: usize,
    pub(crate) seed: u64,
    pub(crate) capacity: u32,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = CliError;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        let items = args.items.ok_or(CliError::MissingArgument {
            field: ARG_ITEMS,
            env: ENV_GENERATE_ITEMS,
        })?;
        Ok(Self {
            items,
            seed: args.seed.unwrap_or(DEFAULT_SEED),
            capacity: args.capacity.unwrap_or(DEFAULT_CAPACITY),
            output: args.output,
        })
    }
}

impl GenerateConfig {
    pub(crate) fn instance(&self) -> Result<Instance, CliError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        generated_instance(random_items(&mut rng, self.items), self.capacity)
    }
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    match config.output.as_deref() {
        Some(path) => generate_to_file(&config, path),
        None => {
            let mut stdout = std::io::stdout().lock();
            generate_to_writer(&config, &mut stdout)
        }
    }
}

pub(crate) fn generate_to_writer(
    config: &GenerateConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    write_instance(writer, &config.instance()?)
}

fn generate_to_file(config: &GenerateConfig, path: &Utf8Path) -> Result<(), CliError> {
    let instance = config.instance()?;
    save_instance(path, &instance)?;
    log::info!(
        "wrote {} items (seed {}) to {path}",
        instance.len(),
        config.seed
    );
    Ok(())
}

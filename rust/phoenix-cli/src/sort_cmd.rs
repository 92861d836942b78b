//! `phoenix sort`: sort integers given on the command line.

use std::path::Path;

use clap::ValueEnum;
use phoenix_core::{is_greater, is_lesser, PhoenixConfig, SortAlgorithm, Vector, VectorConfig};
use tracing::info;

use crate::error::CliError;

/// Direction of the sorted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

/// The `phoenix.toml` governing `start`, or defaults when none is found.
pub fn load_config(start: &Path) -> Result<PhoenixConfig, CliError> {
    Ok(PhoenixConfig::discover(start)?
        .map(|(_path, config)| config)
        .unwrap_or_default())
}

/// Parse every value as an integer into a vector grown by the configured
/// increment.
pub fn parse_values(values: &[String], config: &VectorConfig) -> Result<Vector<i64>, CliError> {
    let mut parsed = Vector::with_config(config);
    for value in values {
        let number = value
            .trim()
            .parse::<i64>()
            .map_err(|source| CliError::InvalidValue {
                value: value.clone(),
                source,
            })?;
        parsed.append(number);
    }
    Ok(parsed)
}

/// Parse and sort `values`.
///
/// `algorithm` falls back to the configured one. Bogo sort refuses inputs
/// longer than `sort.bogo_limit` before doing any work.
pub fn sort_values(
    values: &[String],
    algorithm: Option<SortAlgorithm>,
    order: Order,
    config: &PhoenixConfig,
) -> Result<Vector<i64>, CliError> {
    let algorithm = algorithm.unwrap_or(config.sort.algorithm);
    if algorithm == SortAlgorithm::Bogo && values.len() > config.sort.bogo_limit {
        return Err(CliError::BogoLimit {
            len: values.len(),
            limit: config.sort.bogo_limit,
        });
    }

    let mut numbers = parse_values(values, &config.vector)?;
    info!(%algorithm, ?order, len = numbers.size(), "sorting values");
    match order {
        Order::Ascending => algorithm.sort_by(&mut numbers, is_greater),
        Order::Descending => algorithm.sort_by(&mut numbers, is_lesser),
    }
    Ok(numbers)
}

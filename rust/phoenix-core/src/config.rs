//! Configuration file parsing for `phoenix.toml`.
//!
//! Searches the starting directory then its ancestors. When no file is found
//! every setting falls back to its default.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::sort::SortAlgorithm;

/// File name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "phoenix.toml";

/// Capacity added to a [`Vector`](crate::Vector) each time an append finds
/// it full.
pub const DEFAULT_GROWTH_INCREMENT: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(n) => n,
    None => unreachable!(),
};

/// Longest input the command line will hand to bogo sort.
pub const DEFAULT_BOGO_LIMIT: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid toml in '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct PhoenixConfig {
    #[serde(default)]
    pub vector: VectorConfig,
    #[serde(default)]
    pub sort: SortConfig,
}

/// Construction-time settings of a vector.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct VectorConfig {
    /// Slots added per reallocation. Must be positive.
    #[serde(default = "default_growth_increment")]
    pub growth_increment: NonZeroUsize,
}

impl Default for VectorConfig {
    fn default() -> Self {
        VectorConfig {
            growth_increment: DEFAULT_GROWTH_INCREMENT,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// Algorithm used when none is named on the command line.
    #[serde(default)]
    pub algorithm: SortAlgorithm,
    /// Inputs longer than this are refused by bogo sort.
    #[serde(default = "default_bogo_limit")]
    pub bogo_limit: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            algorithm: SortAlgorithm::default(),
            bogo_limit: DEFAULT_BOGO_LIMIT,
        }
    }
}

fn default_growth_increment() -> NonZeroUsize {
    DEFAULT_GROWTH_INCREMENT
}

fn default_bogo_limit() -> usize {
    DEFAULT_BOGO_LIMIT
}

impl PhoenixConfig {
    /// Walk from `start` through its ancestors and load the first
    /// `phoenix.toml` found, returning its path alongside the config.
    pub fn discover(start: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        for dir in start.ancestors() {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                let cfg = Self::load_from(&config_path)?;
                debug!(path = %config_path.display(), "loaded configuration");
                return Ok(Some((config_path, cfg)));
            }
        }
        Ok(None)
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Generate a default `phoenix.toml` template.
    pub fn default_template() -> &'static str {
        r#"# Phoenix configuration

[vector]
# Slots added to a vector's capacity whenever an append finds it full.
growth_increment = 16

[sort]
# insertion, bubble, selection or bogo
algorithm = "insertion"
# Bogo sort runs in factorial time; longer inputs are refused.
bogo_limit = 8
"#
    }
}

impl FromStr for PhoenixConfig {
    type Err = toml::de::Error;

    /// Parse a TOML string directly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use phoenix_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("'{value}' is not an integer: {source}")]
    InvalidValue {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("bogo sort accepts at most {limit} values, got {len} (see sort.bogo_limit)")]
    BogoLimit { len: usize, limit: usize },

    #[error("{} already exists, not overwriting", .0.display())]
    AlreadyExists(PathBuf),

    #[error("cannot write '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

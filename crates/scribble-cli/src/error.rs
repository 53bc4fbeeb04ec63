//! CLI errors.

use scribble_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid samples: {0}")]
    Samples(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type CliResult<T> = Result<T, CliError>;

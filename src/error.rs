//! Error types
//!
//! Nothing in the game core is fatal; these cover configuration, the word
//! list, and the HTTP dictionary client.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors loading the word list for the dictionary service.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("word list is empty")]
    Empty,
    #[error("word list has no `{0}` column")]
    MissingColumn(String),
}

/// Errors talking to the dictionary service. Never shown to the player;
/// every variant is treated as "word does not exist".
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("invalid dictionary url: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("dictionary returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Errors reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("round length must be at least one second")]
    ZeroRound,
}

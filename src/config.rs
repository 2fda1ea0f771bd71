//! Configuration for the game client
//!
//! Values come from, in order of precedence:
//! - command line flags (or their `SANARUUTU_*` environment variables)
//! - `config.toml` in the per-user config directory
//! - built-in defaults

use crate::app::state::{GameSettings, DEFAULT_ROUND_SECONDS};
use crate::error::ConfigError;
use crate::network::client::DEFAULT_DICTIONARY_URL;
use clap::Parser;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the config file inside the config directory
const CONFIG_FILE: &str = "config.toml";

/// Default log file name inside the data directory
const LOG_FILE: &str = "sanaruutu.log";

/// Terminal word grid game.
#[derive(Debug, Clone, Default, Parser)]
#[command(version)]
pub struct Args {
    /// Base URL of the dictionary service
    #[arg(long, env = "SANARUUTU_DICTIONARY_URL")]
    pub dictionary_url: Option<String>,

    /// Round length in seconds
    #[arg(long, env = "SANARUUTU_ROUND_SECONDS")]
    pub round_seconds: Option<u32>,

    /// Config file to read instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub dictionary_url: Option<String>,
    pub round_seconds: Option<u32>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Parse a config file body
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(path, &text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary_url: String,
    pub game: GameSettings,
    /// `None` when no data directory could be determined
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration for this process
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let dirs = project_dirs();
        let file = match args
            .config
            .clone()
            .or_else(|| dirs.as_ref().map(|d| d.config_dir().join(CONFIG_FILE)))
        {
            Some(path) => FileConfig::load(&path)?,
            None => FileConfig::default(),
        };
        let default_log = dirs.as_ref().map(|d| d.data_dir().join(LOG_FILE));
        Self::merge(args, file, default_log)
    }

    /// Combine flags, file values and defaults
    pub fn merge(
        args: &Args,
        file: FileConfig,
        default_log: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let round_seconds = args
            .round_seconds
            .or(file.round_seconds)
            .unwrap_or(DEFAULT_ROUND_SECONDS);
        if round_seconds == 0 {
            return Err(ConfigError::ZeroRound);
        }

        Ok(Self {
            dictionary_url: args
                .dictionary_url
                .clone()
                .or(file.dictionary_url)
                .unwrap_or_else(|| DEFAULT_DICTIONARY_URL.to_string()),
            game: GameSettings {
                round_seconds,
                ..GameSettings::default()
            },
            log_file: args.log_file.clone().or(file.log_file).or(default_log),
        })
    }
}

/// OS-standard directories for this application
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("fi", "sanaruutu", "sanaruutu")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    #[test]
    fn test_defaults() {
        let config = Config::merge(&Args::default(), FileConfig::default(), None).unwrap();
        assert_eq!(config.dictionary_url, "http://localhost:3000");
        assert_eq!(config.game, GameSettings::default());
        assert_eq!(config.game.round_seconds, 90);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_file_values() {
        let file = FileConfig::parse(
            &path(),
            "dictionary_url = \"http://192.168.0.73:3000\"\nround_seconds = 120\n",
        )
        .unwrap();
        let config = Config::merge(&Args::default(), file, None).unwrap();
        assert_eq!(config.dictionary_url, "http://192.168.0.73:3000");
        assert_eq!(config.game.round_seconds, 120);
    }

    #[test]
    fn test_args_override_file() {
        let file = FileConfig {
            dictionary_url: Some("http://file:3000".into()),
            round_seconds: Some(120),
            log_file: Some("file.log".into()),
        };
        let args = Args {
            dictionary_url: Some("http://flag:3000".into()),
            round_seconds: Some(30),
            log_file: Some("flag.log".into()),
            config: None,
        };
        let config = Config::merge(&args, file, Some("default.log".into())).unwrap();
        assert_eq!(config.dictionary_url, "http://flag:3000");
        assert_eq!(config.game.round_seconds, 30);
        assert_eq!(config.log_file, Some(PathBuf::from("flag.log")));
    }

    #[test]
    fn test_default_log_location_used_last() {
        let config = Config::merge(
            &Args::default(),
            FileConfig::default(),
            Some("default.log".into()),
        )
        .unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("default.log")));
    }

    #[test]
    fn test_zero_round_rejected() {
        let args = Args {
            round_seconds: Some(0),
            ..Args::default()
        };
        assert!(matches!(
            Config::merge(&args, FileConfig::default(), None),
            Err(ConfigError::ZeroRound)
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = FileConfig::parse(&path(), "colour = \"red\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_default() {
        let missing = std::env::temp_dir().join("sanaruutu-no-such-dir/config.toml");
        assert_eq!(FileConfig::load(&missing).unwrap(), FileConfig::default());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "sanaruutu",
            "--dictionary-url",
            "http://example:3000",
            "--round-seconds",
            "60",
        ]);
        assert_eq!(args.dictionary_url.as_deref(), Some("http://example:3000"));
        assert_eq!(args.round_seconds, Some(60));
    }
}

//! Runtime configuration
//!
//! Read from an optional TOML file, then overridden by command line flags.

use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the `characters/`, `locations/` and `weapons/` portrait folders
    pub portraits_dir: PathBuf,

    /// Fixed seed for reproducible games
    pub seed: Option<u64>,

    /// Log destination. Nothing is logged when unset, the terminal belongs to the UI.
    pub log_file: Option<PathBuf>,

    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            portraits_dir: PathBuf::from("images"),
            seed: None,
            log_file: None,
            log_filter: "marvel_clue=info,clue=info".to_string(),
        }
    }
}

impl Config {
    /// Load a config file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Defaults when no file is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("seed = 42\nportraits_dir = \"assets/marvel\"\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.portraits_dir, PathBuf::from("assets/marvel"));
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_filter, Config::default().log_filter);
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clue.toml");
        std::fs::write(&path, "log_file = \"clue.log\"\nlog_filter = \"debug\"\n").unwrap();

        let config = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("clue.log")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn missing_or_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(&dir.path().join("nope.toml")).is_err());

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "seed = \"not a number\"").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}

//! Configuration management for bus-reservation
//!
//! Config stored at: ~/.config/bus-reservation/config.json

use std::path::{Path, PathBuf};

use busres_domain::service::FareRates;
use busres_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ticket ledger file, appended to on every booking
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,

    /// Per-km fare rate for each bus variant
    #[serde(default)]
    pub fare_rates: FareRates,

    /// Optional TOML fleet definition replacing the built-in buses
    #[serde(default)]
    pub fleet_file: Option<PathBuf>,

    /// Default output format for `fleet` (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("tickets.txt")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_path: default_ledger_path(),
            fare_rates: FareRates::default(),
            fleet_file: None,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("bus-reservation");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bus Reservation Configuration")?;
        writeln!(f, "=============================")?;
        writeln!(f)?;
        writeln!(f, "Ledger file:    {}", self.ledger_path.display())?;
        writeln!(
            f,
            "Fleet file:     {}",
            self.fleet_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f, "Rate AC:        {}/km", self.fare_rates.ac)?;
        writeln!(f, "Rate Non-AC:    {}/km", self.fare_rates.non_ac)?;
        writeln!(f, "Rate Sleeper:   {}/km", self.fare_rates.sleeper)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use busres_types::Error;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ledger_path, PathBuf::from("tickets.txt"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            ledger_path: PathBuf::from("/var/tmp/receipts.txt"),
            output_format: OutputFormat::Json,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "fare_rates": { "sleeper": 3.5 } }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.fare_rates.sleeper, 3.5);
        assert_eq!(config.fare_rates.ac, 2.5);
        assert_eq!(config.ledger_path, PathBuf::from("tickets.txt"));
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }
}

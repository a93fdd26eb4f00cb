//! Fleet definition loader from TOML

use std::fs;
use std::path::Path;

use busres_domain::model::Bus;
use busres_domain::service::FareRates;
use busres_domain::Fleet;
use busres_types::{BusKind, ConfigError, Error, Result};
use serde::Deserialize;

/// Container for parsing fleet.toml
#[derive(Debug, Deserialize)]
struct FleetFile {
    buses: Vec<BusEntry>,
}

#[derive(Debug, Deserialize)]
struct BusEntry {
    id: u32,
    kind: BusKind,
    capacity: u32,
    route: Vec<String>,
}

/// Builds a fleet from a TOML definition. Rates always come from config.
pub struct FleetLoader;

impl FleetLoader {
    pub fn load_from_file(path: &Path, rates: &FareRates) -> Result<Fleet> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read fleet file {}: {}",
                path.display(),
                e
            )))
        })?;

        Self::load_from_str(&content, rates)
    }

    pub fn load_from_str(toml_content: &str, rates: &FareRates) -> Result<Fleet> {
        let file: FleetFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse fleet TOML: {}",
                e
            )))
        })?;

        let buses = file
            .buses
            .into_iter()
            .map(|b| Bus::new(b.id, b.kind, b.capacity, b.route, rates))
            .collect();

        Ok(Fleet::from_buses(buses)?)
    }
}

//! Repository adapters for persistence layer

use busres_domain::Fleet;
use busres_infra::persistence::FileTicketLedger;
use busres_infra::FleetLoader;
use busres_types::Result;

use crate::config::Config;

/// Open the file-based ticket ledger named in config
pub fn open_ledger(config: &Config) -> FileTicketLedger {
    FileTicketLedger::new(config.ledger_path.clone())
}

/// Build the fleet: from the configured TOML file, or the built-in buses
pub fn open_fleet(config: &Config) -> Result<Fleet> {
    match config.fleet_file {
        Some(ref path) => FleetLoader::load_from_file(path, &config.fare_rates),
        None => Ok(Fleet::standard(&config.fare_rates)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_uses_builtin_fleet() {
        let fleet = open_fleet(&Config::default()).unwrap();
        assert_eq!(fleet.buses().len(), 3);
    }

    #[test]
    fn test_fleet_file_replaces_builtin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fleet.toml");
        std::fs::write(
            &path,
            "[[buses]]\nid = 42\nkind = \"ac\"\ncapacity = 1\nroute = [\"X\", \"Y\"]\n",
        )
        .unwrap();
        let config = Config {
            fleet_file: Some(path),
            ..Config::default()
        };
        let fleet = open_fleet(&config).unwrap();
        assert_eq!(fleet.buses().len(), 1);
        assert!(fleet.get(42).is_some());
    }
}

//! Command handlers

use std::io;
use std::path::{Path, PathBuf};

use busres_app::repository::{open_fleet, open_ledger};
use busres_app::{Config, Console};
use busres_types::{OutputFormat, Result};
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::output::output_fleet;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Commands::Run) => cmd_run(&load_config(cli.ledger)?),

        Some(Commands::Fleet { format }) => {
            let config = load_config(cli.ledger)?;
            let output_format = format.unwrap_or(config.output_format);
            cmd_fleet(&config, output_format)
        }

        // Loads on its own so that --reset still works on a broken file
        Some(Commands::Config {
            show,
            set_ledger,
            set_fleet_file,
            set_output,
            reset,
        }) => cmd_config(
            &Config::config_path()?,
            show,
            set_ledger,
            set_fleet_file,
            set_output,
            reset,
        ),
    }
}

/// Load config and apply command-line overrides
fn load_config(ledger: Option<PathBuf>) -> Result<Config> {
    let mut config = Config::load()?;

    if let Some(ledger) = ledger {
        config.ledger_path = ledger;
    }

    Ok(config)
}

fn cmd_run(config: &Config) -> Result<()> {
    let mut fleet = open_fleet(config)?;
    let ledger = open_ledger(config);
    info!(ledger = %config.ledger_path.display(), buses = fleet.buses().len(), "console started");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run(&mut fleet, ledger)
}

fn cmd_fleet(config: &Config, output_format: OutputFormat) -> Result<()> {
    let fleet = open_fleet(config)?;
    output_fleet(output_format, &fleet)
}

fn cmd_config(
    config_path: &Path,
    show: bool,
    set_ledger: Option<PathBuf>,
    set_fleet_file: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    let mut config = if reset {
        println!("Configuration reset to defaults.");
        Config::default()
    } else {
        Config::load_from(config_path)?
    };

    let mut changed = reset;

    if let Some(path) = set_ledger {
        println!("Ledger file set to: {}", path.display());
        config.ledger_path = path;
        changed = true;
    }

    if let Some(path) = set_fleet_file {
        println!("Fleet file set to: {}", path.display());
        config.fleet_file = Some(path);
        changed = true;
    }

    if let Some(format) = set_output {
        config.output_format = format;
        println!("Output format set to: {}", format);
        changed = true;
    }

    if changed {
        config.save_to(config_path)?;
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

//! CLI definition using clap

use std::path::PathBuf;

use busres_types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bus-reservation")]
#[command(version)]
#[command(about = "Book and cancel bus tickets from the console")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Ticket ledger file override
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive booking console (default)
    Run,

    /// Print the fleet and exit
    Fleet {
        /// Output format (json, table). Uses config value if not specified.
        #[arg(long, short = 'f')]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set ledger file path
        #[arg(long)]
        set_ledger: Option<PathBuf>,

        /// Set TOML fleet definition file
        #[arg(long)]
        set_fleet_file: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

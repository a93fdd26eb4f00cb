//! Bus Reservation - console ticket booking
//!
//! An interactive tool for booking and cancelling bus tickets against a
//! fixed fleet, with every issued ticket appended to a ledger file.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "busres_cli=debug,busres_app=debug,busres_domain=debug,busres_infra=debug"
    } else {
        "warn"
    };

    // stdout belongs to the console prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

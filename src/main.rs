//! Backtest report CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use report_config::load_config;
use report_logging::setup_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config =
        load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    // CLI flags win over the configuration file
    let log_level = cli
        .log_level
        .map_or(config.logging.level.as_str(), |level| level.as_str());
    setup_logging(log_level, cli.json_logs || config.logging.format.is_json());

    if cli.list {
        cli::commands::list::run(&cli, &config)
    } else {
        cli::commands::generate::run(&cli, &config)
    }
}

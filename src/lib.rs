pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::Basket;
use anyhow::Result;
use tracing::{debug, info};

pub use crate::cli::calc::CalcOptions;

/// Commands that run against a loaded configuration.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Basket,
    Calc(CalcOptions),
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("CPI calculator starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Basket => {
            cli::basket::run(Basket::standard());
            Ok(())
        }
        AppCommand::Calc(options) => cli::calc::run(&config, &options),
    }
}

pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use std::time::Duration;
use tracing::{debug, info};

pub enum AppCommand {
    /// Render the HTML report, optionally opening it in the default viewer.
    Report { open: bool },
    /// Print the rates as a terminal table.
    Show,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxmean starting...");

    let config = match config_path {
        Some(path) => crate::core::config::AppConfig::load_from_path(path)?,
        None => crate::core::config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let ecb = &config.providers.ecb;
    let source = providers::EcbProvider::new(&ecb.base_url, Duration::from_secs(ecb.timeout_secs));

    match command {
        AppCommand::Report { open } => {
            cli::report::run(&source, &config.watch_list, &config.report, open).await?;
        }
        AppCommand::Show => cli::show::run(&source, &config.watch_list).await?,
    }
    Ok(())
}

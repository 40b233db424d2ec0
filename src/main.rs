use anyhow::Result;
use clap::{Parser, Subcommand};
use fxmean::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration, at --config-path when given
    Setup,
    /// Write the HTML exchange rate report and open it (default)
    Report {
        /// Write the report without opening it
        #[arg(long)]
        no_open: bool,
    },
    /// Display exchange rates in the terminal
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config_path = cli.config_path.as_deref();
    let result = match cli.command {
        Some(Commands::Setup) => fxmean::cli::setup::setup(config_path),
        Some(Commands::Show) => fxmean::run_command(fxmean::AppCommand::Show, config_path).await,
        Some(Commands::Report { no_open }) => {
            fxmean::run_command(fxmean::AppCommand::Report { open: !no_open }, config_path).await
        }
        None => fxmean::run_command(fxmean::AppCommand::Report { open: true }, config_path).await,
    };

    if let Err(e) = &result {
        tracing::error!(error = %format!("{e:#}"), "Application failed");
    }
    result
}

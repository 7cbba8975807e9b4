use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use ipc::core::log::init_logging;
use std::path::PathBuf;

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
    /// Create default configuration
    Setup,
    /// Display the CPI basket
    Basket,
    /// Calculate the share of each expenditure in your total
    Calc {
        /// YAML file mapping basket items to monthly amounts
        #[arg(short, long)]
        entries: Option<PathBuf>,

        /// Set an amount, as "<item>=<amount>" (repeatable)
        #[arg(short, long = "set", value_name = "ITEM=AMOUNT")]
        set: Vec<String>,

        /// Prompt for every basket item
        #[arg(short, long)]
        interactive: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Your own monthly CPI figure in percent, shown next to the reference series
        #[arg(long, value_name = "PERCENT")]
        monthly_ipc: Option<f64>,
    },
}

impl From<Commands> for ipc::AppCommand {
    fn from(cmd: Commands) -> ipc::AppCommand {
        match cmd {
            Commands::Basket => ipc::AppCommand::Basket,
            Commands::Calc {
                entries,
                set,
                interactive,
                json,
                monthly_ipc,
            } => ipc::AppCommand::Calc(ipc::CalcOptions {
                entries_path: entries,
                assignments: set,
                interactive,
                json,
                monthly_ipc,
            }),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => ipc::cli::setup::setup_at_path(path),
            None => ipc::cli::setup::setup(),
        },
        Some(cmd) => ipc::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

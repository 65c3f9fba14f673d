use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli_commands::Commands;

const LOG_ENV: &str = "RELSTAGE_LOG";

#[derive(Parser)]
#[command(name = "relstage")]
#[command(about = "Stage channel promotions before releasing them", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    crate::cli_exec::handle_command(cli.command)
}

// Logs go to stderr so JSON on stdout stays parseable.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Marquee CLI - Command-line interface
//!
//! Provides command-line access to Marquee movie search.

mod commands;

use clap::Parser;
use marquee_core::tracing_setup::{self, CliLogLevel};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Search TMDB for movies from the terminal or a web UI")]
struct Cli {
    /// Console log verbosity; the full debug log always lands in ./logs
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_setup::init_tracing(cli.log_level.as_tracing_level(), None)?;

    commands::handle_command(cli.command).await?;

    Ok(())
}

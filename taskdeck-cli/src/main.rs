//! Taskdeck CLI - Command-line interface
//!
//! Provides command-line access to the task manager: running the API server
//! and working with tasks from the terminal.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "A small task manager with an HTTP API")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    commands::handle_command(cli.command).await?;

    Ok(())
}

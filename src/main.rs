//! dvrbar binary entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{Cli, Command, ConfigAction};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Status(args) => commands::status::handle_status(&args),
        Command::Watch(args) => commands::watch::handle_watch(&args),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
        },
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "dvrbar", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Route diagnostics to stderr, filtered by RUST_LOG.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

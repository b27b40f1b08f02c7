//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "dvrbar",
    version = dvrbar::version_string(),
    about = "DVR seek-bar timeline engine with a terminal preview player"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate one playback snapshot and print the derived control states
    Status(StatusArgs),

    /// Watch a simulated live stream through the DVR seek bar
    Watch(WatchArgs),

    /// Inspect or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct StatusArgs {
    /// Seekable window start in seconds
    #[arg(long, default_value_t = 0.0)]
    pub window_start: f64,

    /// Seekable window end (the live edge) in seconds
    #[arg(long)]
    pub window_end: f64,

    /// Playback position in seconds
    #[arg(long)]
    pub position: f64,

    /// Treat the player as paused
    #[arg(long)]
    pub paused: bool,

    /// Behind-live threshold override in seconds
    #[arg(long)]
    pub behind_threshold: Option<f64>,

    /// Emit JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct WatchArgs {
    /// DVR window depth in seconds
    #[arg(long)]
    pub depth: Option<f64>,

    /// Start playback this many seconds behind the live edge
    #[arg(long, default_value_t = 0.0)]
    pub start_behind: f64,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn status_parses_window_flags() {
        let cli = Cli::try_parse_from([
            "dvrbar",
            "status",
            "--window-end",
            "1800",
            "--position",
            "1675",
        ])
        .unwrap();

        match cli.command {
            Command::Status(args) => {
                assert_eq!(args.window_start, 0.0);
                assert_eq!(args.window_end, 1800.0);
                assert_eq!(args.position, 1675.0);
                assert!(!args.paused);
                assert!(!args.json);
            }
            _ => panic!("expected status subcommand"),
        }
    }

    #[test]
    fn status_requires_window_end_and_position() {
        assert!(Cli::try_parse_from(["dvrbar", "status"]).is_err());
        assert!(Cli::try_parse_from(["dvrbar", "status", "--window-end", "10"]).is_err());
    }
}

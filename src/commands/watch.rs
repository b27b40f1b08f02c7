//! Watch subcommand handler

use anyhow::{bail, Result};

use dvrbar::config::Config;
use dvrbar::player;
use dvrbar::sim::LiveFeed;

use crate::cli::WatchArgs;

/// Start the preview player against a simulated live stream.
#[cfg(not(tarpaulin_include))]
pub fn handle_watch(args: &WatchArgs) -> Result<()> {
    let config = Config::load()?;
    let depth = args.depth.unwrap_or(config.playback.dvr_depth_secs);

    if !depth.is_finite() || depth <= 0.0 {
        bail!("DVR depth must be a positive number of seconds");
    }
    if !args.start_behind.is_finite() || args.start_behind < 0.0 {
        bail!("Start offset must be a non-negative number of seconds");
    }

    let mut feed = LiveFeed::new(depth);
    if args.start_behind > 0.0 {
        feed.start_behind(args.start_behind);
    }

    player::run(&mut feed, &config)
}

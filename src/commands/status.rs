//! Status subcommand handler
//!
//! One-shot evaluation: build a snapshot from the command-line flags,
//! run it through the timeline engine, and print the resulting frame.

use anyhow::{bail, Result};

use dvrbar::config::Config;
use dvrbar::theme::current_theme;
use dvrbar::timeline::{
    format_duration, Frame, IndicatorState, LiveButton, SeekableWindow, Snapshot, TimelineEngine,
};

use crate::cli::StatusArgs;

pub fn handle_status(args: &StatusArgs) -> Result<()> {
    if !args.window_start.is_finite() || !args.window_end.is_finite() {
        bail!("Window bounds must be finite numbers");
    }
    if args.window_end < args.window_start {
        bail!(
            "Window end ({}) precedes window start ({})",
            args.window_end,
            args.window_start
        );
    }

    let config = Config::load()?;
    let behind_threshold = args
        .behind_threshold
        .unwrap_or(config.playback.behind_threshold_secs);

    let mut engine = TimelineEngine::new(behind_threshold, config.playback.onair_window_secs);
    engine.mark_ready();

    let frame = engine.update(&Snapshot {
        window: SeekableWindow::single(args.window_start, args.window_end),
        current_time: args.position,
        paused: args.paused,
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
        return Ok(());
    }

    print_frame(&frame);
    Ok(())
}

/// Print the human-readable frame block.
fn print_frame(frame: &Frame) {
    let theme = current_theme();

    let button = match frame.live_button {
        LiveButton::Onair => theme.live_text("onair"),
        LiveButton::Off => theme.primary_text("off"),
    };
    let indicator = match frame.delay_state {
        IndicatorState::Active => theme.primary_text("active"),
        IndicatorState::Inactive => theme.primary_text("inactive"),
    };
    let delay = if frame.delay_label.is_empty() {
        theme.secondary_text("-")
    } else {
        theme.accent_text(&frame.delay_label)
    };

    println!("{}{}", theme.secondary_text(&label("live button")), button);
    println!("{}{}", theme.secondary_text(&label("indicator")), indicator);
    println!("{}{}", theme.secondary_text(&label("delay")), delay);
    println!(
        "{}{}",
        theme.secondary_text(&label("bar")),
        theme.primary_text(&format!("{:.2}%", frame.bar_fraction * 100.0))
    );
    println!(
        "{}{}",
        theme.secondary_text(&label("to live edge")),
        theme.primary_text(&format_duration(frame.time_to_live_edge))
    );
    println!(
        "{}{}",
        theme.secondary_text(&label("window")),
        theme.primary_text(&format_duration(frame.window_duration))
    );
}

fn label(name: &str) -> String {
    format!("{:<14}", name)
}

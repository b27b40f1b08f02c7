//! Terminal preview player
//!
//! Drives the DVR timeline engine against a live feed and renders the
//! seek bar, live button, and delay indicator in a raw-mode terminal.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: terminal geometry and render scheduling (InputResult)
//! - `input`: keyboard and mouse handling
//! - `render`: ANSI chrome rendering (header, bar, key hints)
//! - `error`: typed player failures
//!
//! The loop is the host dispatcher of the timeline model: one snapshot
//! is read and one frame computed per tick, so position, duration, and
//! classification always come from the same notification.

pub mod error;
pub(crate) mod input;
pub mod render;
pub mod state;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use tracing::info;

use crate::config::Config;
use crate::sim::LiveFeed;
use crate::timeline::{Frame, TimelineEngine};

pub use error::PlayerError;
pub use state::{InputResult, PlayerState};

/// Tick length of the player loop; also bounds input latency.
const TICK: Duration = Duration::from_millis(50);

/// Run the preview player until the user quits.
///
/// Sets up the raw-mode terminal, marks the timeline ready, and loops
/// over input events and feed snapshots. The terminal is restored even
/// when the loop errors.
pub fn run(feed: &mut LiveFeed, config: &Config) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        return Err(PlayerError::NotATty.into());
    }

    let (cols, rows) = terminal::size().map_err(PlayerError::Io)?;
    if cols < PlayerState::MIN_COLS || rows < PlayerState::CHROME_ROWS {
        return Err(PlayerError::TerminalTooSmall { cols, rows }.into());
    }

    let mut state = PlayerState::new(cols, rows);
    let mut engine = TimelineEngine::new(
        config.playback.behind_threshold_secs,
        config.playback.onair_window_secs,
    );

    terminal::enable_raw_mode().map_err(PlayerError::Io)?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )
    .map_err(PlayerError::Io)?;

    // Terminal is up: the host-ready signal for the timeline
    engine.mark_ready();
    info!(depth = feed.dvr_depth_secs(), "preview player started");

    let result = event_loop(&mut stdout, &mut state, &mut engine, feed, config);

    // Restore the terminal even when the loop errored
    let _ = execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();

    result
}

fn event_loop(
    stdout: &mut io::Stdout,
    state: &mut PlayerState,
    engine: &mut TimelineEngine,
    feed: &mut LiveFeed,
    config: &Config,
) -> Result<()> {
    let mut last_frame: Option<Frame> = None;

    loop {
        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if input::handle_key_event(key, state, feed, engine, &config.playback)
                        == InputResult::Quit
                    {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse_event(mouse, state, feed, engine, &config.playback);
                }
                Event::Resize(new_cols, new_rows) => {
                    state.handle_resize(new_cols, new_rows);
                }
                _ => {}
            }
        }

        let snapshot = feed.snapshot();
        let frame = engine.update(&snapshot);

        if state.needs_render || last_frame.as_ref() != Some(&frame) {
            let clock = chrono::Local::now().format("%H:%M:%S").to_string();
            render::render_all(stdout, state.term_cols, &frame, engine.is_paused(), &clock)?;
            stdout.flush()?;
            state.needs_render = false;
            last_frame = Some(frame);
        }
    }
}

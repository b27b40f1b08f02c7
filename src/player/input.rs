//! Input handling for the preview player.
//!
//! Keyboard drives pause/resume, step seeks, go-live, and quit; the
//! mouse seeks by clicking on the bar row. Every seek goes through the
//! timeline position mapper so targets stay inside the seekable
//! window.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::PlaybackConfig;
use crate::player::render::{bar_width, BAR_ROW, BAR_START_COL};
use crate::player::state::{InputResult, PlayerState};
use crate::sim::LiveFeed;
use crate::timeline::{go_live_target, time_for_pointer, TimelineEngine};

/// Handle a keyboard event.
pub fn handle_key_event(
    key: KeyEvent,
    state: &mut PlayerState,
    feed: &mut LiveFeed,
    engine: &mut TimelineEngine,
    playback: &PlaybackConfig,
) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Pause / resume ===
        KeyCode::Char(' ') => {
            feed.toggle_pause();
            engine.set_paused(feed.is_paused());
            state.needs_render = true;
            InputResult::Continue
        }

        // === Go live ===
        KeyCode::Char('l') => {
            let snapshot = feed.snapshot();
            let target = go_live_target(&snapshot.window, playback.live_edge_guard_secs);
            feed.seek_to(target);
            feed.resume();
            engine.set_paused(false);
            state.needs_render = true;
            InputResult::Continue
        }

        // === Step seeks ===
        KeyCode::Left => {
            let snapshot = feed.snapshot();
            feed.seek_to(snapshot.current_time - playback.seek_step_secs);
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Right => {
            let snapshot = feed.snapshot();
            feed.seek_to(snapshot.current_time + playback.seek_step_secs);
            state.needs_render = true;
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Handle a mouse event: left click on the bar row seeks to that
/// position and resumes playback.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    state: &mut PlayerState,
    feed: &mut LiveFeed,
    engine: &mut TimelineEngine,
    playback: &PlaybackConfig,
) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if mouse.row == BAR_ROW {
            let width = bar_width(state.term_cols);

            if width > 0
                && mouse.column >= BAR_START_COL
                && mouse.column < BAR_START_COL + width as u16
            {
                let ratio = (mouse.column - BAR_START_COL) as f64 / width as f64;

                let snapshot = feed.snapshot();
                let target =
                    time_for_pointer(ratio, &snapshot.window, playback.live_edge_guard_secs);
                feed.seek_to(target);

                // A click-seek resumes playback at the new position
                feed.resume();
                engine.set_paused(false);
                state.needs_render = true;
            }
        }
    }

    InputResult::Continue
}

//! Seek-bar chrome rendering for the preview player.
//!
//! Three rows drawn with raw ANSI writes: a header with the live
//! button, delay label, and live-edge clock; the DVR bar itself; and a
//! key-hint row. Each row is built into a single string to minimize
//! syscalls.

use std::io::{self, Write};

use anyhow::Result;

use crate::theme::ansi::{CYAN, DARK_GREY, GREEN, GREY, RED, RESET, WHITE, YELLOW};
use crate::timeline::{format_duration, Frame, IndicatorState, LiveButton};

/// Row the seek bar is drawn on (0-indexed); the mouse handler maps
/// clicks on this row back into seek targets.
pub const BAR_ROW: u16 = 1;

/// Column the bar starts at.
pub const BAR_START_COL: u16 = 1;

/// Columns reserved to the right of the bar for the time display.
pub const BAR_RESERVED_COLS: usize = 17;

/// Width of the bar for a given terminal width.
pub fn bar_width(term_cols: u16) -> usize {
    (term_cols as usize).saturating_sub(BAR_RESERVED_COLS + BAR_START_COL as usize)
}

/// Build the bar character array.
///
/// Returns `(bar_chars, filled_count)`: filled positions up to the
/// playhead, the playhead glyph itself, and the unfilled remainder.
pub fn build_bar_chars(bar_width: usize, fraction: f64) -> (Vec<char>, usize) {
    let filled = (bar_width as f64 * fraction.clamp(0.0, 1.0)) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for slot in bar.iter_mut().take(filled) {
        *slot = '━';
    }
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the header row: live button, delay label, live-edge clock.
pub fn render_header(stdout: &mut io::Stdout, width: u16, row: u16, frame: &Frame, clock: &str) -> Result<()> {
    let mut output = String::with_capacity(width as usize + 32);
    let mut visible_len: usize = 0;

    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push(' ');
    visible_len += 1;

    // Live button
    match frame.live_button {
        LiveButton::Onair => output.push_str(RED),
        LiveButton::Off => output.push_str(DARK_GREY),
    }
    output.push_str("● LIVE");
    visible_len += 6;

    // Delay label, only present while behind live
    if !frame.delay_label.is_empty() {
        output.push(' ');
        output.push_str(YELLOW);
        output.push_str(&frame.delay_label);
        visible_len += 1 + frame.delay_label.len();
    }

    // Indicator state as a plain word, mirroring the delay styling
    let state_word = match frame.delay_state {
        IndicatorState::Active => "",
        IndicatorState::Inactive => " (off air)",
    };
    output.push_str(DARK_GREY);
    output.push_str(state_word);
    visible_len += state_word.len();

    // Right side: wall clock of the live edge
    let right = format!("edge {} ", clock);
    let padding = (width as usize).saturating_sub(visible_len + right.len());
    for _ in 0..padding {
        output.push(' ');
    }
    output.push_str(GREY);
    output.push_str(&right);

    output.push_str(RESET);
    write!(stdout, "{}", output)?;

    Ok(())
}

/// Render the DVR seek bar with its time display.
pub fn render_bar(stdout: &mut io::Stdout, width: u16, row: u16, frame: &Frame) -> Result<()> {
    let bar_width = bar_width(width);
    let (bar, filled) = build_bar_chars(bar_width, frame.bar_fraction);

    let position_secs = (frame.window_duration - frame.time_to_live_edge).max(0.0);
    let time_display = format!(
        " {}/{}",
        format_duration(position_secs),
        format_duration(frame.window_duration)
    );

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push(' ');

    let fill_color = match frame.live_button {
        LiveButton::Onair => GREEN,
        LiveButton::Off => YELLOW,
    };

    output.push_str(fill_color);
    for (i, &c) in bar.iter().enumerate() {
        if i == filled {
            output.push_str(WHITE);
            output.push(c);
            output.push_str(fill_color);
        } else if i < filled {
            output.push(c);
        } else {
            output.push_str(DARK_GREY);
            output.push(c);
            output.push_str(fill_color);
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    // Pad to full width to overwrite any leftover content
    let used_width = 1 + bar_width + time_display.len();
    let remaining = (width as usize).saturating_sub(used_width);
    for _ in 0..remaining {
        output.push(' ');
    }

    output.push_str(RESET);
    write!(stdout, "{}", output)?;

    Ok(())
}

/// Render the key-hint row.
pub fn render_hints(stdout: &mut io::Stdout, width: u16, row: u16, paused: bool) -> Result<()> {
    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0;

    output.push_str(&format!("\x1b[{};1H", row + 1));

    output.push_str(WHITE);
    output.push(' ');
    visible_len += 1;

    // State icon (▶ and ⏸ are double-width unicode)
    let state = if paused { "▶  " } else { "⏸  " };
    output.push_str(state);
    visible_len += 4;

    let play_action = if paused { ":play " } else { ":pause " };
    output.push_str(CYAN);
    output.push_str("space");
    visible_len += 5;
    output.push_str(DARK_GREY);
    output.push_str(play_action);
    visible_len += play_action.len();
    output.push_str(CYAN);
    output.push('l');
    visible_len += 1;
    output.push_str(DARK_GREY);
    output.push_str(":live ");
    visible_len += 6;
    output.push_str(CYAN);
    output.push_str("←→");
    visible_len += 2;
    output.push_str(DARK_GREY);
    output.push_str(":seek ");
    visible_len += 6;
    output.push_str(CYAN);
    output.push_str("click");
    visible_len += 5;
    output.push_str(DARK_GREY);
    output.push_str(":jump ");
    visible_len += 6;
    output.push_str(CYAN);
    output.push('q');
    visible_len += 1;
    output.push_str(DARK_GREY);
    output.push_str(":quit");
    visible_len += 5;

    let padding = (width as usize).saturating_sub(visible_len);
    for _ in 0..padding {
        output.push(' ');
    }

    output.push_str(RESET);
    write!(stdout, "{}", output)?;

    Ok(())
}

/// Render all three chrome rows.
pub fn render_all(stdout: &mut io::Stdout, width: u16, frame: &Frame, paused: bool, clock: &str) -> Result<()> {
    render_header(stdout, width, 0, frame, clock)?;
    render_bar(stdout, width, BAR_ROW, frame)?;
    render_hints(stdout, width, 2, paused)?;
    Ok(())
}

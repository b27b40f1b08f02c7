//! Player state management
//!
//! The preview player's UI is three chrome rows (header, seek bar, key
//! hints); all playback state lives in the feed and the timeline
//! engine, so the player itself only tracks terminal geometry and
//! render scheduling.

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the player loop
    Continue,
    /// Exit the player
    Quit,
}

/// Terminal-facing state for the preview player.
#[derive(Debug)]
pub struct PlayerState {
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// True when the chrome needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    /// Rows of chrome (header + seek bar + key hints)
    pub const CHROME_ROWS: u16 = 3;

    /// Narrowest terminal the bar renders usefully in
    pub const MIN_COLS: u16 = 40;

    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            term_cols,
            term_rows,
            needs_render: true,
        }
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.needs_render = true;
    }
}

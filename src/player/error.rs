//! Preview player errors.

/// Errors that can occur while running the preview player.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("stdout is not a terminal; the preview player needs an interactive session")]
    NotATty,

    #[error("Terminal too small ({cols}x{rows}); the seek bar needs at least 40x3")]
    TerminalTooSmall { cols: u16, rows: u16 },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

//! dvrbar - DVR seek-bar timeline engine
//!
//! The pure math behind a live-with-rewind (DVR) seek bar: tracking
//! the seekable window a stream reports, mapping between playback time
//! and bar coordinates, and classifying how far behind the live edge
//! playback sits. A terminal preview player and a one-shot `status`
//! command sit on top as thin adapters.
//!
//! ```
//! use dvrbar::timeline::{SeekableWindow, Snapshot, TimelineEngine};
//!
//! let mut engine = TimelineEngine::new(20.0, 30.0);
//! engine.mark_ready();
//!
//! let frame = engine.update(&Snapshot {
//!     window: SeekableWindow::single(0.0, 1800.0),
//!     current_time: 1675.0,
//!     paused: false,
//! });
//! assert_eq!(frame.delay_label, "-2:05");
//! ```

pub mod config;
pub mod player;
pub mod sim;
pub mod theme;
pub mod timeline;

pub use config::Config;
pub use timeline::{Frame, SeekableWindow, Snapshot, TimelineEngine};

/// Version string shown by `--version`.
///
/// Dev builds carry the git SHA and build date; builds with the
/// `release` feature show a clean `version (date)` string.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = env!("DVRBAR_BUILD_DATE");

    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => {
            let short = sha.get(..7).unwrap_or(sha);
            format!("{} ({} {})", version, short, date)
        }
        _ => format!("{} ({})", version, date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_contains_package_version() {
        assert!(version_string().contains(env!("CARGO_PKG_VERSION")));
    }
}

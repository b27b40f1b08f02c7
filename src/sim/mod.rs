//! Simulated live stream feed
//!
//! Drives the preview player with DVR semantics: the live edge
//! advances with wall-clock time, the seekable window trails it by at
//! most the configured depth, and the playback position either tracks
//! the live edge or sits at a viewer-chosen delay behind it.
//!
//! Pausing freezes the position while the stream keeps running, so a
//! paused viewer falls behind live - and a viewer paused longer than
//! the DVR depth gets dragged forward by the sliding window start,
//! just like an expiring rewind buffer.

use std::time::Instant;

use tracing::debug;

use crate::timeline::{SeekableWindow, Snapshot};

/// A simulated live stream with a sliding DVR window.
#[derive(Debug)]
pub struct LiveFeed {
    origin: Instant,
    dvr_depth_secs: f64,
    /// How far playback trails the live edge while playing
    delay_secs: f64,
    paused: bool,
    /// Stream time at which the viewer paused
    paused_since_secs: f64,
}

impl LiveFeed {
    /// Start a live stream anchored at the current instant.
    pub fn new(dvr_depth_secs: f64) -> Self {
        Self {
            origin: Instant::now(),
            dvr_depth_secs,
            delay_secs: 0.0,
            paused: false,
            paused_since_secs: 0.0,
        }
    }

    /// Begin playback this many seconds behind the live edge.
    pub fn start_behind(&mut self, secs: f64) {
        self.delay_secs = secs.clamp(0.0, self.dvr_depth_secs);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn dvr_depth_secs(&self) -> f64 {
        self.dvr_depth_secs
    }

    /// Seconds of stream elapsed since the feed started.
    fn elapsed(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    /// Delay including time accumulated while paused.
    fn effective_delay(&self, elapsed: f64) -> f64 {
        if self.paused {
            self.delay_secs + (elapsed - self.paused_since_secs).max(0.0)
        } else {
            self.delay_secs
        }
    }

    /// Current playback snapshot for the timeline engine.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_at(self.elapsed())
    }

    fn snapshot_at(&self, elapsed: f64) -> Snapshot {
        let live_edge = elapsed;
        let window_start = (elapsed - self.dvr_depth_secs).max(0.0);
        let position = (live_edge - self.effective_delay(elapsed)).max(window_start);

        Snapshot {
            window: SeekableWindow::single(window_start, live_edge),
            current_time: position,
            paused: self.paused,
        }
    }

    /// Freeze the playback position. The stream keeps advancing.
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused_since_secs = self.elapsed();
            self.paused = true;
            debug!(delay = self.delay_secs, "feed paused");
        }
    }

    /// Resume playback where it froze; the pause time becomes delay.
    pub fn resume(&mut self) {
        if self.paused {
            let elapsed = self.elapsed();
            self.delay_secs = self.effective_delay(elapsed).min(self.dvr_depth_secs);
            self.paused = false;
            debug!(delay = self.delay_secs, "feed resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Seek to an absolute stream time. Targets outside the window
    /// clamp to it; a paused feed stays paused at the new position.
    pub fn seek_to(&mut self, target: f64) {
        let elapsed = self.elapsed();
        self.seek_to_at(target, elapsed);
    }

    fn seek_to_at(&mut self, target: f64, elapsed: f64) {
        let live_edge = elapsed;
        self.delay_secs = (live_edge - target).clamp(0.0, self.dvr_depth_secs);
        if self.paused {
            self.paused_since_secs = elapsed;
        }
        debug!(delay = self.delay_secs, "seek");
    }
}

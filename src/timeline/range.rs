//! Seekable-range tracking for live streams.
//!
//! A live playback engine reports what it can currently seek into as a
//! list of time ranges. Only the first (primary) range drives the DVR
//! window; additional ranges are ignored. An empty window is a normal
//! transient state - streams report no seekable range during startup
//! and teardown.

/// A contiguous interval of seekable time, in seconds.
///
/// Invariant: `end >= start`. Ranges are built from engine-reported
/// floats, so a malformed pair is tolerated by clamping the duration
/// at zero instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    /// Start of the range (seconds)
    pub start: f64,
    /// End of the range (seconds); the live edge for the primary range
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        debug_assert!(end >= start, "time range end precedes start");
        Self { start, end }
    }

    /// Span of the range in seconds, never negative.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }
}

/// The seekable window reported by a playback engine.
///
/// Owned transiently by each update cycle: callers rebuild it from the
/// engine's current report on every position update, nothing persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeekableWindow {
    ranges: Vec<TimeRange>,
}

impl SeekableWindow {
    /// Window with no seekable ranges.
    pub fn empty() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Window with a single range, the common live-stream case.
    pub fn single(start: f64, end: f64) -> Self {
        Self {
            ranges: vec![TimeRange::new(start, end)],
        }
    }

    /// Window from an engine-reported range list. Order is preserved;
    /// only the first range is ever consulted.
    pub fn from_ranges(ranges: Vec<TimeRange>) -> Self {
        Self { ranges }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The primary (first) range, if any.
    pub fn primary(&self) -> Option<&TimeRange> {
        self.ranges.first()
    }

    /// Start of the primary range.
    pub fn start(&self) -> Option<f64> {
        self.primary().map(|r| r.start)
    }

    /// End of the primary range; the "now" point of a live stream.
    pub fn live_edge(&self) -> Option<f64> {
        self.primary().map(|r| r.end)
    }

    /// Total seekable span in seconds.
    ///
    /// Returns `0.0` for an empty window; absence of data is a silent
    /// zero-duration state, not an error.
    pub fn total_duration(&self) -> f64 {
        self.primary().map_or(0.0, TimeRange::duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_has_zero_duration() {
        let window = SeekableWindow::empty();
        assert_eq!(window.total_duration(), 0.0);
        assert!(window.is_empty());
        assert!(window.primary().is_none());
        assert!(window.live_edge().is_none());
    }

    #[test]
    fn single_range_duration() {
        let window = SeekableWindow::single(120.0, 1920.0);
        assert_eq!(window.total_duration(), 1800.0);
        assert_eq!(window.start(), Some(120.0));
        assert_eq!(window.live_edge(), Some(1920.0));
    }

    #[test]
    fn extra_ranges_are_ignored() {
        let window = SeekableWindow::from_ranges(vec![
            TimeRange::new(0.0, 600.0),
            TimeRange::new(700.0, 900.0),
        ]);
        // Only the first range counts
        assert_eq!(window.total_duration(), 600.0);
        assert_eq!(window.live_edge(), Some(600.0));
    }

    #[test]
    fn zero_length_range_is_valid() {
        let window = SeekableWindow::single(30.0, 30.0);
        assert_eq!(window.total_duration(), 0.0);
        assert!(!window.is_empty());
    }

    #[test]
    fn range_contains_bounds() {
        let range = TimeRange::new(10.0, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(15.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(9.9));
        assert!(!range.contains(20.1));
    }
}

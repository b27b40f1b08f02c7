//! Position mapping between playback time and seek-bar coordinates.
//!
//! Converts a current time into the clamped display fraction that sizes
//! the bar, and a normalized pointer position (click/drag on the bar)
//! into an absolute target time inside the seekable window.
//!
//! All numeric guards follow one policy: invalid input fails soft to
//! zero, never to an error.

use crate::timeline::range::SeekableWindow;

/// How far a live-edge seek target stays behind the edge, in seconds.
///
/// Seeking to exactly the live edge is ambiguous on most playback
/// engines; targets at or past the edge land this far behind instead.
pub const LIVE_EDGE_GUARD_SECS: f64 = 0.1;

/// Fraction of the seekable window elapsed at `current_time`, in `[0, 1]`.
///
/// NaN, negative, and infinite fractions collapse to `0.0` before use;
/// a finite overshoot clamps to `1.0`. An empty or zero-duration window
/// yields `0.0`.
pub fn percent_for_time(current_time: f64, window: &SeekableWindow) -> f64 {
    let Some(range) = window.primary() else {
        return 0.0;
    };

    let progress = (current_time - range.start) / range.duration();

    // Protect against no duration and other division issues
    if !progress.is_finite() || progress < 0.0 {
        0.0
    } else {
        progress.min(1.0)
    }
}

/// Absolute target time for a normalized pointer position on the bar.
///
/// `normalized` is the pointer's distance along the bar in `[0, 1]`;
/// out-of-range and non-finite values are sanitized first. The result
/// is `start + normalized * duration`, kept strictly behind the live
/// edge by `guard` seconds (floored at the window start). An empty
/// window yields `0.0`.
pub fn time_for_pointer(normalized: f64, window: &SeekableWindow, guard: f64) -> f64 {
    let Some(range) = window.primary() else {
        return 0.0;
    };

    let distance = if normalized.is_finite() {
        normalized.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let target = range.start + distance * range.duration();
    if target >= range.end {
        (range.end - guard).max(range.start)
    } else {
        target
    }
}

/// Seek target for the "go live" control: the live edge, kept behind
/// it by the same `guard` as pointer seeks. An empty window yields
/// `0.0`.
pub fn go_live_target(window: &SeekableWindow, guard: f64) -> f64 {
    let Some(range) = window.primary() else {
        return 0.0;
    };

    (range.end - guard).max(range.start)
}

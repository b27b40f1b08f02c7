//! Delay formatting and live/behind classification.
//!
//! Delay is measured as how far behind the live edge playback sits:
//! the delta `current_time - live_edge` is negative while trailing.
//! Within the threshold the stream counts as live and no label is
//! shown; past it the delta is rendered as a signed duration label.

/// Default cutoff for counting playback as behind live, in seconds.
pub const DEFAULT_BEHIND_THRESHOLD_SECS: f64 = 20.0;

/// Whether playback is at the live edge or trailing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveStatus {
    Live,
    Behind,
}

/// Classification of the current delay, with its display label.
///
/// Derived on every update, never stored. The label is empty for
/// [`LiveStatus::Live`] and the formatted signed delta for
/// [`LiveStatus::Behind`].
#[derive(Debug, Clone, PartialEq)]
pub struct DelayClassification {
    pub status: LiveStatus,
    pub label: String,
}

/// Render an absolute duration as `H:MM:SS`, `M:SS`, or `Ns`.
///
/// Leading zero-valued units are omitted: hours when zero, minutes
/// when both hours and minutes are zero. Seconds-only durations render
/// as `"<n>s"` rather than `"0:SS"`. Negative input renders the same
/// format prefixed with `-`. Fractional seconds are dropped.
///
/// | input  | output    |
/// |--------|-----------|
/// | 45     | "45s"     |
/// | 125    | "2:05"    |
/// | 3725   | "1:02:05" |
/// | -40    | "-40s"    |
pub fn format_duration(seconds: f64) -> String {
    let negative = seconds < 0.0;
    let total = if seconds.is_finite() {
        seconds.abs().floor() as i64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    let mut time = String::new();
    if hours != 0 {
        time.push_str(&format!("{}:", hours));
    }
    if minutes != 0 || !time.is_empty() {
        // Minutes only get zero-padded when an hours field precedes them
        if time.is_empty() {
            time.push_str(&format!("{}:", minutes));
        } else {
            time.push_str(&format!("{:02}:", minutes));
        }
    }
    if time.is_empty() {
        time = format!("{}s", secs);
    } else {
        time.push_str(&format!("{:02}", secs));
    }

    if negative {
        format!("-{}", time)
    } else {
        time
    }
}

/// Classify how far behind the live edge playback sits.
///
/// The delta is floored before comparison: playback more than
/// `threshold_secs` behind the edge is [`LiveStatus::Behind`] with a
/// formatted label; anything else (including a position past the edge)
/// is [`LiveStatus::Live`] with an empty label. A non-finite delta
/// fails soft to live.
pub fn classify_delay(
    current_time: f64,
    live_edge: f64,
    threshold_secs: f64,
) -> DelayClassification {
    let delta = (current_time - live_edge).floor();

    if delta.is_finite() && delta < -threshold_secs {
        DelayClassification {
            status: LiveStatus::Behind,
            label: format_duration(delta),
        }
    } else {
        DelayClassification {
            status: LiveStatus::Live,
            label: String::new(),
        }
    }
}

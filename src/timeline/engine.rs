//! Timeline lifecycle engine.
//!
//! Consumes per-notification playback snapshots and derives the control
//! states a seek-bar surface renders: bar fraction, live-button state,
//! and the delay indicator with its label.
//!
//! Lifecycle: the engine starts `Idle` and produces idle frames until
//! the host signals readiness. Once `Ready`, every update reclassifies
//! the stream as live or behind-live. Pause is an orthogonal overlay:
//! it forces the indicator inactive regardless of the computed delay
//! until the next update reclassifies.

use serde::Serialize;
use tracing::{debug, info};

use crate::timeline::delay::{classify_delay, LiveStatus};
use crate::timeline::position::percent_for_time;
use crate::timeline::range::SeekableWindow;

/// Default width of the on-air window for the live button, in seconds.
pub const DEFAULT_ONAIR_WINDOW_SECS: f64 = 30.0;

/// Engine lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    /// Host has not signaled readiness yet
    #[default]
    Idle,
    /// Host is ready; updates classify normally
    Ready,
}

/// Live-button state: lit while playback is close enough to the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveButton {
    Onair,
    Off,
}

/// Delay-indicator styling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorState {
    Active,
    Inactive,
}

/// One playback notification from the host: the seekable window, the
/// playback position, and whether the host is paused.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub window: SeekableWindow,
    pub current_time: f64,
    pub paused: bool,
}

/// Derived control states for one snapshot.
///
/// Purely derived, never stored: identical snapshots yield identical
/// frames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Fraction of the window elapsed, clamped to `[0, 1]`
    pub bar_fraction: f64,
    /// Live-button state
    pub live_button: LiveButton,
    /// Formatted delay label; empty while live
    pub delay_label: String,
    /// Delay-indicator styling
    pub delay_state: IndicatorState,
    /// Seconds between the position and the live edge, clamped at zero
    pub time_to_live_edge: f64,
    /// Total seekable span backing the bar, in seconds
    pub window_duration: f64,
}

impl Frame {
    /// Frame rendered before readiness or without a seekable range.
    fn idle() -> Self {
        Self {
            bar_fraction: 0.0,
            live_button: LiveButton::Off,
            delay_label: String::new(),
            delay_state: IndicatorState::Inactive,
            time_to_live_edge: 0.0,
            window_duration: 0.0,
        }
    }
}

/// The DVR timeline state machine.
#[derive(Debug)]
pub struct TimelineEngine {
    behind_threshold_secs: f64,
    onair_window_secs: f64,
    phase: LifecyclePhase,
    status: LiveStatus,
    paused: bool,
}

impl TimelineEngine {
    /// Create an engine with the given thresholds.
    ///
    /// `behind_threshold_secs` drives the delay indicator (how far
    /// behind live still counts as live); `onair_window_secs` drives
    /// the live button.
    pub fn new(behind_threshold_secs: f64, onair_window_secs: f64) -> Self {
        Self {
            behind_threshold_secs,
            onair_window_secs,
            phase: LifecyclePhase::Idle,
            status: LiveStatus::Live,
            paused: false,
        }
    }

    /// Host readiness signal; transitions `Idle -> Ready`.
    pub fn mark_ready(&mut self) {
        if self.phase == LifecyclePhase::Idle {
            info!("timeline ready");
        }
        self.phase = LifecyclePhase::Ready;
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Last computed classification.
    pub fn status(&self) -> LiveStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Host pause/play signal. Pausing forces the indicator inactive
    /// until the next update reclassifies.
    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.paused {
            debug!(paused, "pause overlay toggled");
        }
        self.paused = paused;
    }

    /// Indicator styling as of the last update, with the pause overlay
    /// applied.
    pub fn indicator(&self) -> IndicatorState {
        if self.paused || self.status == LiveStatus::Behind {
            IndicatorState::Inactive
        } else {
            IndicatorState::Active
        }
    }

    /// Process one playback snapshot into a renderable frame.
    ///
    /// Before readiness, and whenever the window reports no seekable
    /// range (a normal transient state during startup and teardown),
    /// this yields an idle frame and leaves the classification
    /// untouched.
    pub fn update(&mut self, snapshot: &Snapshot) -> Frame {
        if self.phase == LifecyclePhase::Idle {
            return Frame::idle();
        }

        let Some(live_edge) = snapshot.window.live_edge() else {
            return Frame::idle();
        };

        self.paused = snapshot.paused;

        let classification = classify_delay(
            snapshot.current_time,
            live_edge,
            self.behind_threshold_secs,
        );
        if classification.status != self.status {
            debug!(from = ?self.status, to = ?classification.status, "live status changed");
        }
        self.status = classification.status;

        let to_edge = live_edge - snapshot.current_time;
        let time_to_live_edge = if to_edge.is_finite() {
            to_edge.max(0.0)
        } else {
            0.0
        };

        let live_button = if !snapshot.paused && to_edge.is_finite() && to_edge < self.onair_window_secs
        {
            LiveButton::Onair
        } else {
            LiveButton::Off
        };

        Frame {
            bar_fraction: percent_for_time(snapshot.current_time, &snapshot.window),
            live_button,
            delay_label: classification.label,
            delay_state: self.indicator(),
            time_to_live_edge,
            window_duration: snapshot.window.total_duration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_engine() -> TimelineEngine {
        let mut engine = TimelineEngine::new(20.0, 30.0);
        engine.mark_ready();
        engine
    }

    fn snapshot(current_time: f64, paused: bool) -> Snapshot {
        Snapshot {
            window: SeekableWindow::single(0.0, 1800.0),
            current_time,
            paused,
        }
    }

    #[test]
    fn starts_idle_and_yields_idle_frames() {
        let mut engine = TimelineEngine::new(20.0, 30.0);
        assert_eq!(engine.phase(), LifecyclePhase::Idle);

        let frame = engine.update(&snapshot(1795.0, false));
        assert_eq!(frame.bar_fraction, 0.0);
        assert_eq!(frame.live_button, LiveButton::Off);
        assert_eq!(frame.delay_state, IndicatorState::Inactive);
    }

    #[test]
    fn mark_ready_transitions_phase() {
        let mut engine = TimelineEngine::new(20.0, 30.0);
        engine.mark_ready();
        assert_eq!(engine.phase(), LifecyclePhase::Ready);
    }

    #[test]
    fn live_position_yields_active_frame() {
        let mut engine = ready_engine();
        let frame = engine.update(&snapshot(1795.0, false));

        assert_eq!(engine.status(), LiveStatus::Live);
        assert_eq!(frame.delay_state, IndicatorState::Active);
        assert_eq!(frame.live_button, LiveButton::Onair);
        assert_eq!(frame.delay_label, "");
        assert!((frame.time_to_live_edge - 5.0).abs() < 1e-9);
    }

    #[test]
    fn behind_position_yields_label_and_inactive_indicator() {
        let mut engine = ready_engine();
        let frame = engine.update(&snapshot(1675.0, false));

        assert_eq!(engine.status(), LiveStatus::Behind);
        assert_eq!(frame.delay_state, IndicatorState::Inactive);
        assert_eq!(frame.delay_label, "-2:05");
        assert_eq!(frame.live_button, LiveButton::Off);
    }

    #[test]
    fn live_and_behind_reclassify_across_updates() {
        let mut engine = ready_engine();

        engine.update(&snapshot(1675.0, false));
        assert_eq!(engine.status(), LiveStatus::Behind);

        engine.update(&snapshot(1795.0, false));
        assert_eq!(engine.status(), LiveStatus::Live);
    }

    #[test]
    fn pause_overlay_forces_inactive_indicator() {
        let mut engine = ready_engine();
        engine.update(&snapshot(1795.0, false));
        assert_eq!(engine.indicator(), IndicatorState::Active);

        engine.set_paused(true);
        assert_eq!(engine.indicator(), IndicatorState::Inactive);

        // Next unpaused update reclassifies
        let frame = engine.update(&snapshot(1795.0, false));
        assert_eq!(frame.delay_state, IndicatorState::Active);
    }

    #[test]
    fn paused_snapshot_keeps_indicator_inactive() {
        let mut engine = ready_engine();
        let frame = engine.update(&snapshot(1795.0, true));

        assert_eq!(frame.delay_state, IndicatorState::Inactive);
        assert_eq!(frame.live_button, LiveButton::Off);
        // Classification itself is unaffected by the overlay
        assert_eq!(engine.status(), LiveStatus::Live);
    }

    #[test]
    fn onair_boundary_is_strict() {
        let mut engine = ready_engine();

        // Exactly at the window edge: not on-air
        let frame = engine.update(&snapshot(1770.0, false));
        assert_eq!(frame.live_button, LiveButton::Off);

        let frame = engine.update(&snapshot(1770.5, false));
        assert_eq!(frame.live_button, LiveButton::Onair);
    }

    #[test]
    fn empty_window_yields_idle_frame_and_keeps_status() {
        let mut engine = ready_engine();
        engine.update(&snapshot(1675.0, false));
        assert_eq!(engine.status(), LiveStatus::Behind);

        let frame = engine.update(&Snapshot {
            window: SeekableWindow::empty(),
            current_time: 1675.0,
            paused: false,
        });
        assert_eq!(frame, Frame::idle());
        assert_eq!(engine.status(), LiveStatus::Behind);
    }

    #[test]
    fn identical_snapshots_yield_identical_frames() {
        let mut engine = ready_engine();
        let a = engine.update(&snapshot(1675.0, false));
        let b = engine.update(&snapshot(1675.0, false));
        assert_eq!(a, b);
    }

    #[test]
    fn bar_fraction_tracks_position() {
        let mut engine = ready_engine();
        let frame = engine.update(&snapshot(900.0, false));
        assert_eq!(frame.bar_fraction, 0.5);
        assert_eq!(frame.window_duration, 1800.0);
    }
}

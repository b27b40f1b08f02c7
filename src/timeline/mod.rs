//! DVR timeline model
//!
//! The pure computation behind a live-with-rewind seek bar, independent
//! of any rendering surface:
//!
//! - `range`: seekable-window tracking (what span of the stream can be
//!   seeked into right now)
//! - `position`: mapping between playback time and bar coordinates
//! - `delay`: delay formatting and live/behind classification
//! - `engine`: the lifecycle state machine turning playback snapshots
//!   into renderable frames
//!
//! Everything here is synchronous and fail-soft: invalid numeric input
//! collapses to zero, an empty seekable window is a normal transient
//! state, and no operation errors.

pub mod delay;
pub mod engine;
pub mod position;
pub mod range;

pub use delay::{
    classify_delay, format_duration, DelayClassification, LiveStatus,
    DEFAULT_BEHIND_THRESHOLD_SECS,
};
pub use engine::{
    Frame, IndicatorState, LiveButton, Snapshot, TimelineEngine, DEFAULT_ONAIR_WINDOW_SECS,
};
pub use position::{go_live_target, percent_for_time, time_for_pointer, LIVE_EDGE_GUARD_SECS};
pub use range::{SeekableWindow, TimeRange};

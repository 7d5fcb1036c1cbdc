//! Time-range control module
//!
//! Owns the `[start, end]` chart window and the flag marking it relative
//! ("last N milliseconds up to now") versus absolute (pinned by the user).
//! Leaf-most concern of the control bar: the ticker and the notifier both
//! build on it, it depends on neither.

pub mod window;

pub use window::{TimeRange, TimeWindow, unix_time_ms};

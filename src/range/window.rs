//! Time window representation and relative/absolute range control

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn unix_time_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}

/// A chart time window in epoch milliseconds
///
/// Collaborators are trusted to supply `start <= end`; the window itself does
/// not validate. A malformed window only ever surfaces as a zero duration (see
/// [`TimeWindow::duration_ms`]). Serialized as a `[start, end]` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct TimeWindow {
    /// Window start, epoch milliseconds
    pub start: i64,
    /// Window end, epoch milliseconds
    pub end: i64,
}

impl TimeWindow {
    /// Create a window from start/end instants
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// The window covering the last `duration_ms` milliseconds up to `now_ms`
    pub fn last(duration_ms: i64, now_ms: i64) -> Self {
        Self {
            start: now_ms - duration_ms,
            end: now_ms,
        }
    }

    /// Window length in milliseconds, floored at 0
    ///
    /// A stale or malformed window can yield a negative span; it is coerced to
    /// 0 rather than rejected so a later reload collapses the window onto
    /// "now" instead of erroring.
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).max(0)
    }
}

impl From<(i64, i64)> for TimeWindow {
    fn from((start, end): (i64, i64)) -> Self {
        Self { start, end }
    }
}

impl From<TimeWindow> for (i64, i64) {
    fn from(window: TimeWindow) -> Self {
        (window.start, window.end)
    }
}

/// Time-range controller: the window plus its relativity flag
///
/// The two change together on user edits (the range picker reports both), but
/// only the window moves on a reload. The window is replaced wholesale on
/// every change, never adjusted in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    window: TimeWindow,
    relative: bool,
}

impl TimeRange {
    /// Create a relative range covering the last `initial_window_ms` up to `now_ms`
    pub fn new(initial_window_ms: i64, now_ms: i64) -> Self {
        Self {
            window: TimeWindow::last(initial_window_ms, now_ms),
            relative: true,
        }
    }

    /// The current window
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Whether the window tracks "now" at a fixed duration
    pub fn is_relative(&self) -> bool {
        self.relative
    }

    /// Pin the range to a fixed window
    pub fn set_absolute(&mut self, window: TimeWindow) {
        debug!(start = window.start, end = window.end, "range pinned");
        self.window = window;
        self.relative = false;
    }

    /// Replace the window and mark it relative
    ///
    /// Used on an explicit relative preset choice and by the auto-reload tick.
    pub fn set_relative(&mut self, window: TimeWindow) {
        debug!(start = window.start, end = window.end, "range set relative");
        self.window = window;
        self.relative = true;
    }

    /// Recompute the window against `now_ms`
    ///
    /// Relative: keep the duration, anchor the end to `now_ms`. Absolute:
    /// re-assert the unchanged window — the refresh button must always be a
    /// notifiable action, so the caller treats the result as a fresh window
    /// either way.
    pub fn reload(&mut self, now_ms: i64) {
        if self.relative {
            let duration = self.window.duration_ms();
            self.window = TimeWindow::last(duration, now_ms);
        } else {
            self.window = TimeWindow::new(self.window.start, self.window.end);
        }
    }
}

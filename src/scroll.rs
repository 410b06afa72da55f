//! Scroll event debouncing for wheel columns.
//!
//! Trackpads and precision mice emit bursts of scroll events. The
//! accumulator folds a burst aimed at one column into a single step delta,
//! and starts over whenever the target column changes.

use std::time::{Duration, Instant};

/// Folds scroll deltas per column over a short time window.
#[derive(Debug, Clone)]
pub struct ScrollAccumulator {
    /// Column the pending delta belongs to
    column: Option<usize>,
    /// Accumulated delta since last emission
    pending: i32,
    last_event: Option<Instant>,
    window: Duration,
    /// Minimum delta before emitting
    threshold: i32,
}

impl Default for ScrollAccumulator {
    fn default() -> Self {
        Self::new(Duration::from_millis(50), 1)
    }
}

impl ScrollAccumulator {
    /// Create an accumulator with the given debounce window and threshold.
    pub fn new(window: Duration, threshold: i32) -> Self {
        Self {
            column: None,
            pending: 0,
            last_event: None,
            window,
            threshold: threshold.max(1),
        }
    }

    /// Add `delta` for `column` at the current time.
    pub fn accumulate(&mut self, column: usize, delta: i32) -> Option<i32> {
        self.accumulate_at(column, delta, Instant::now())
    }

    /// Add `delta` for `column` at `now`. Returns the step to apply, if any.
    pub fn accumulate_at(&mut self, column: usize, delta: i32, now: Instant) -> Option<i32> {
        let fresh = match (self.column, self.last_event) {
            (Some(c), Some(last)) if c == column => now.duration_since(last) > self.window,
            _ => true,
        };

        if fresh {
            self.pending = delta;
        } else {
            self.pending += delta;
        }
        self.column = Some(column);
        self.last_event = Some(now);

        if self.pending.abs() >= self.threshold {
            Some(std::mem::take(&mut self.pending))
        } else {
            None
        }
    }

    /// Drop any pending delta.
    pub fn reset(&mut self) {
        self.column = None;
        self.pending = 0;
        self.last_event = None;
    }
}

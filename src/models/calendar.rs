//! Minute-of-day intervals.
//!
//! Exam coordinates and supervision clock strings both convert into
//! [`MinuteWindow`] at the boundary, so every overlap test in the engine
//! runs on one representation.
//!
//! # Time Model
//! Minutes are counted from midnight of the exam day. Windows are
//! half-open `[start, end)`; touching windows do not overlap.

use serde::{Deserialize, Serialize};

/// A time interval `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MinuteWindow {
    /// Interval start (minutes, inclusive).
    pub start: i32,
    /// Interval end (minutes, exclusive).
    pub end: i32,
}

impl MinuteWindow {
    /// Creates a new window.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Creates a window from a start and a length.
    pub fn starting_at(start: i32, duration: i32) -> Self {
        Self::new(start, start + duration)
    }

    /// Length of this window (minutes).
    #[inline]
    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// Whether a minute falls within this window.
    #[inline]
    pub fn contains(&self, minute: i32) -> bool {
        minute >= self.start && minute < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Grows the window by `minutes` on both sides.
    pub fn padded(&self, minutes: i32) -> Self {
        Self::new(self.start - minutes, self.end + minutes)
    }
}

//! Index windows over a time series.
//!
//! A [`Window`] is a half-open range `[start, end)` of positions into a
//! series, and a [`Split`] pairs a training window with the test window
//! that immediately follows it. Windows carry indices only; the values
//! they select are resolved against a
//! [`TimeSeries`](crate::core::TimeSeries) when needed.

/// Half-open index range `[start, end)` into a time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First index covered by the window (inclusive).
    pub start: usize,
    /// One past the last index covered by the window (exclusive).
    pub end: usize,
}

impl Window {
    /// Creates a window over `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of indices covered by the window.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the window covers no indices.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns true if `index` falls inside the window.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// One train/test pair produced by the rolling-origin splitter.
///
/// The training window always starts at index 0 and the test window
/// begins exactly where training ends, so every observation between the
/// series start and `test.end` is used exactly once per split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// Observations available to the forecaster.
    pub train: Window,
    /// Observations held out for scoring.
    pub test: Window,
}

impl Split {
    /// Creates a split from a training window and its test window.
    pub fn new(train: Window, test: Window) -> Self {
        Self { train, test }
    }

    /// Returns true if the test window starts exactly where training ends.
    pub fn is_contiguous(&self) -> bool {
        self.train.end == self.test.start
    }
}

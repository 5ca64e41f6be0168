//! TimeSeries data structure for representing temporal data.

use crate::core::window::Window;
use crate::error::{BacktestError, Result};
use chrono::{DateTime, Duration, Utc};

/// A univariate time series with timestamps and values.
///
/// Observations are ordered oldest first and timestamps are strictly
/// increasing, so index arithmetic on [`Window`]s maps directly onto
/// chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Creates a time series from timestamps and values.
    ///
    /// Returns an error if the two vectors differ in length or the
    /// timestamps are not strictly increasing.
    pub fn new(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        // Validate timestamps are strictly increasing
        for i in 1..timestamps.len() {
            if timestamps[i] <= timestamps[i - 1] {
                return Err(BacktestError::TimestampError(
                    "timestamps must be strictly increasing".to_string(),
                ));
            }
        }

        if values.len() != timestamps.len() {
            return Err(BacktestError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }

        Ok(Self { timestamps, values })
    }

    /// Creates a time series from values alone, synthesizing hourly
    /// timestamps starting at the Unix epoch.
    ///
    /// Convenient when only the ordering of observations matters, which
    /// is all the backtest driver relies on.
    pub fn from_values(values: Vec<f64>) -> Self {
        let start = DateTime::<Utc>::UNIX_EPOCH;
        let timestamps = (0..values.len())
            .map(|i| start + Duration::hours(i as i64))
            .collect();
        Self { timestamps, values }
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Get the timestamps.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Get the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the values covered by a window.
    ///
    /// Returns an error if the window is inverted or reaches past the
    /// end of the series.
    pub fn window_values(&self, window: Window) -> Result<&[f64]> {
        self.values
            .get(window.start..window.end)
            .ok_or(BacktestError::IndexOutOfBounds {
                index: window.start.max(window.end),
                size: self.len(),
            })
    }
}

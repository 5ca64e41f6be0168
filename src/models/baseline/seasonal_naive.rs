//! Seasonal Naive forecasting model.
//!
//! Forecasts by repeating the last observed cycle of values. The cycle
//! length equals the forecast horizon, so predicting the next `h` periods
//! replays the most recent `h` observations in order.

use crate::error::{BacktestError, Result};
use crate::models::Forecaster;

/// Seasonal Naive forecaster.
///
/// Each prediction is the observation one cycle earlier, where one cycle
/// is exactly the requested horizon. The training window must contain at
/// least one full cycle.
///
/// # Example
/// ```
/// use tscv::models::baseline::SeasonalNaive;
/// use tscv::models::Forecaster;
///
/// let model = SeasonalNaive::new();
/// let forecast = model.forecast(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
/// assert_eq!(forecast, vec![4.0, 5.0, 6.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalNaive;

impl SeasonalNaive {
    /// Create a new SeasonalNaive forecaster.
    pub fn new() -> Self {
        Self
    }
}

impl Forecaster for SeasonalNaive {
    fn forecast(&self, train: &[f64], horizon: usize) -> Result<Vec<f64>> {
        if train.len() < horizon {
            return Err(BacktestError::InsufficientHistory {
                needed: horizon,
                got: train.len(),
            });
        }

        Ok(train[train.len() - horizon..].to_vec())
    }

    fn name(&self) -> &str {
        "SeasonalNaive"
    }
}

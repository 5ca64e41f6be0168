//! Naive forecasting model.
//!
//! The naive method simply forecasts the last observed value for all future periods.

use crate::error::{BacktestError, Result};
use crate::models::Forecaster;

/// Naive forecaster that repeats the last value.
///
/// # Example
/// ```
/// use tscv::models::baseline::Naive;
/// use tscv::models::Forecaster;
///
/// let model = Naive::new();
/// let forecast = model.forecast(&[1.0, 2.0, 3.0], 2).unwrap();
/// assert_eq!(forecast, vec![3.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl Naive {
    /// Create a new Naive forecaster.
    pub fn new() -> Self {
        Self
    }
}

impl Forecaster for Naive {
    fn forecast(&self, train: &[f64], horizon: usize) -> Result<Vec<f64>> {
        let last = *train.last().ok_or(BacktestError::EmptyWindow)?;
        Ok(vec![last; horizon])
    }

    fn name(&self) -> &str {
        "Naive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_repeats_last_value() {
        let model = Naive::new();
        let forecast = model.forecast(&[3.0, 1.0, 4.0, 1.0, 5.0], 2).unwrap();
        assert_eq!(forecast, vec![5.0, 5.0]);
    }

    #[test]
    fn naive_ignores_everything_but_the_tail() {
        let model = Naive::new();
        let a = model.forecast(&[100.0, -7.0, 2.0], 3).unwrap();
        let b = model.forecast(&[2.0], 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn naive_handles_empty_window() {
        let model = Naive::new();
        let result = model.forecast(&[], 2);
        assert!(matches!(result, Err(BacktestError::EmptyWindow)));
    }

    #[test]
    fn naive_zero_horizon_returns_empty() {
        let model = Naive::new();
        let forecast = model.forecast(&[1.0, 2.0, 3.0], 0).unwrap();
        assert!(forecast.is_empty());
    }

    #[test]
    fn naive_name_is_correct() {
        assert_eq!(Naive::new().name(), "Naive");
    }
}

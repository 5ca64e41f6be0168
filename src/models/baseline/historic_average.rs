//! Historic average forecasting model.
//!
//! Forecasts the mean of all training observations for every future period.

use crate::error::{BacktestError, Result};
use crate::models::Forecaster;

/// HistoricAverage forecaster.
///
/// Predicts every future value as the mean of the full training window.
///
/// # Example
/// ```
/// use tscv::models::baseline::HistoricAverage;
/// use tscv::models::Forecaster;
///
/// let model = HistoricAverage::new();
/// let forecast = model.forecast(&[2.0, 4.0, 6.0], 2).unwrap();
/// // All predictions are 4.0 (mean of the training values)
/// assert_eq!(forecast, vec![4.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoricAverage;

impl HistoricAverage {
    /// Create a new HistoricAverage forecaster.
    pub fn new() -> Self {
        Self
    }
}

impl Forecaster for HistoricAverage {
    fn forecast(&self, train: &[f64], horizon: usize) -> Result<Vec<f64>> {
        if train.is_empty() {
            return Err(BacktestError::EmptyWindow);
        }

        let mean = train.iter().sum::<f64>() / train.len() as f64;
        Ok(vec![mean; horizon])
    }

    fn name(&self) -> &str {
        "HistoricAverage"
    }
}

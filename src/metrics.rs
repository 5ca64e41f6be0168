//! Forecast accuracy metrics.

use crate::error::{BacktestError, Result};

/// Calculate the root mean squared error between predictions and actuals.
///
/// Both slices must be non-empty and of equal length. Non-finite inputs
/// are not filtered; a NaN anywhere in either slice yields a NaN score.
///
/// # Arguments
/// * `predicted` - Forecast values
/// * `actual` - Observed values
pub fn rmse(predicted: &[f64], actual: &[f64]) -> Result<f64> {
    if predicted.len() != actual.len() || predicted.is_empty() {
        return Err(BacktestError::LengthMismatch {
            predicted: predicted.len(),
            actual: actual.len(),
        });
    }

    let n = actual.len() as f64;

    let mse: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / n;

    Ok(mse.sqrt())
}

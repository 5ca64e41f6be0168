//! Backtest driver that scores forecasters over rolling splits.

use crate::backtest::splits::make_splits;
use crate::core::{TimeSeries, Window};
use crate::error::{BacktestError, Result};
use crate::metrics::rmse;
use crate::models::Forecaster;

/// Results from a rolling-origin backtest.
#[derive(Debug, Clone)]
pub struct BacktestReport {
    /// RMSE per split, most recent split first.
    pub per_split_errors: Vec<f64>,
    /// Unweighted mean of the per-split errors.
    pub mean_error: f64,
}

impl BacktestReport {
    /// Number of splits that were evaluated.
    pub fn n_splits(&self) -> usize {
        self.per_split_errors.len()
    }
}

/// Run a rolling-origin backtest of one forecaster over a series.
///
/// The series is cut into rolling splits via
/// [`make_splits`](crate::backtest::make_splits); for each split the
/// forecaster sees only the training window and is scored with RMSE
/// against the held-out test block. Errors are reported per split, most
/// recent first, together with their unweighted mean.
///
/// # Arguments
/// * `series` - The series to backtest on
/// * `horizon` - Forecast horizon, also the test block length
/// * `forecaster` - The model under evaluation
///
/// # Example
/// ```
/// use tscv::backtest::evaluate;
/// use tscv::core::TimeSeries;
/// use tscv::models::baseline::Naive;
///
/// let series = TimeSeries::from_values((0..12).map(|i| i as f64).collect());
/// let report = evaluate(&series, 3, &Naive::new()).unwrap();
///
/// assert_eq!(report.n_splits(), 3);
/// assert!(report.mean_error > 0.0);
/// ```
pub fn evaluate<F>(series: &TimeSeries, horizon: usize, forecaster: &F) -> Result<BacktestReport>
where
    F: Forecaster + ?Sized,
{
    let splits = make_splits(series.len(), horizon)?;
    if splits.is_empty() {
        return Err(BacktestError::InsufficientData {
            series_len: series.len(),
            horizon,
        });
    }

    let mut per_split_errors = Vec::with_capacity(splits.len());
    for split in &splits {
        let train = series.window_values(split.train)?;
        let actual = series.window_values(split.test)?;
        let predicted = forecaster.forecast(train, horizon)?;
        per_split_errors.push(rmse(&predicted, actual)?);
    }

    let mean_error = per_split_errors.iter().sum::<f64>() / per_split_errors.len() as f64;

    Ok(BacktestReport {
        per_split_errors,
        mean_error,
    })
}

/// Score one forecaster on a single holdout at the end of the series.
///
/// The last `test_length` observations form the test block and everything
/// before them is training data. Equivalent to the most recent rolling
/// split, but usable on series too short for
/// [`evaluate`]: any `0 < test_length < series.len()` is accepted.
///
/// # Arguments
/// * `series` - The series to score on
/// * `test_length` - Number of trailing observations held out
/// * `forecaster` - The model under evaluation
pub fn holdout_evaluate<F>(series: &TimeSeries, test_length: usize, forecaster: &F) -> Result<f64>
where
    F: Forecaster + ?Sized,
{
    let n = series.len();
    if test_length == 0 || test_length >= n {
        return Err(BacktestError::InvalidHorizon {
            horizon: test_length,
            series_len: n,
        });
    }

    let boundary = n - test_length;
    let train = series.window_values(Window::new(0, boundary))?;
    let actual = series.window_values(Window::new(boundary, n))?;
    let predicted = forecaster.forecast(train, test_length)?;
    rmse(&predicted, actual)
}

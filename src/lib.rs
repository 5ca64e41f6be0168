//! # tscv
//!
//! Rolling-origin cross-validation for time series forecasts.
//!
//! Provides a rolling-origin splitter, baseline forecasters (historic
//! average, naive, seasonal naive), RMSE scoring, and a backtest driver
//! that reports per-split and mean error for any [`models::Forecaster`].
//!
//! # Example
//! ```
//! use tscv::prelude::*;
//!
//! let series = TimeSeries::from_values((0..20).map(|i| (i % 5) as f64).collect());
//! let report = evaluate(&series, 5, &SeasonalNaive::new()).unwrap();
//! assert_eq!(report.n_splits(), 3);
//! ```

pub mod backtest;
pub mod core;
pub mod error;
pub mod metrics;
pub mod models;

pub use error::{BacktestError, Result};

pub mod prelude {
    pub use crate::backtest::{evaluate, holdout_evaluate, make_splits, BacktestReport};
    pub use crate::core::{Split, TimeSeries, Window};
    pub use crate::error::{BacktestError, Result};
    pub use crate::metrics::rmse;
    pub use crate::models::baseline::{HistoricAverage, Naive, SeasonalNaive};
    pub use crate::models::{BoxedForecaster, Forecaster};
}

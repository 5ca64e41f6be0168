//! Rolling-origin backtesting.
//!
//! Splits a series into train/test windows anchored at the series end,
//! scores a forecaster on each split, and aggregates the per-split RMSE.

mod evaluate;
mod splits;

pub use evaluate::{evaluate, holdout_evaluate, BacktestReport};
pub use splits::make_splits;

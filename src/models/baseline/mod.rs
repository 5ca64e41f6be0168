//! Baseline forecasting models.
//!
//! Simple methods that serve as benchmarks for more complex models.

mod historic_average;
mod naive;
mod seasonal_naive;

pub use historic_average::HistoricAverage;
pub use naive::Naive;
pub use seasonal_naive::SeasonalNaive;

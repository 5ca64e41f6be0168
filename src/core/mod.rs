//! Core data structures for time series backtesting.

mod time_series;
mod window;

pub use time_series::TimeSeries;
pub use window::{Split, Window};

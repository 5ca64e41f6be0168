//! Error types for the tscv library.

use thiserror::Error;

/// Result type alias for backtest operations.
pub type Result<T> = std::result::Result<T, BacktestError>;

/// Errors that can occur while splitting, forecasting, or scoring.
///
/// All errors are local and recoverable: the caller decides whether to
/// retry with different parameters. Either a full result is returned or
/// one of these is raised; nothing is aggregated partially.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BacktestError {
    /// Predicted and actual sequences differ in length (or are empty).
    #[error("length mismatch: predicted has {predicted} values, actual has {actual}")]
    LengthMismatch { predicted: usize, actual: usize },

    /// Horizon is zero or not smaller than the series length.
    #[error("invalid horizon {horizon} for series of length {series_len}")]
    InvalidHorizon { horizon: usize, series_len: usize },

    /// The average or naive forecaster was given an empty training window.
    #[error("empty training window")]
    EmptyWindow,

    /// Training window is too short to contain one full seasonal cycle.
    #[error("insufficient history: need at least {needed}, got {got}")]
    InsufficientHistory { needed: usize, got: usize },

    /// No rolling split can be formed from the series at this horizon.
    #[error("insufficient data: no splits for series of length {series_len} at horizon {horizon}")]
    InsufficientData { series_len: usize, horizon: usize },

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Index out of bounds.
    #[error("index out of bounds: {index} (size: {size})")]
    IndexOutOfBounds { index: usize, size: usize },
}

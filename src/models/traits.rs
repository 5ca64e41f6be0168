//! Forecaster trait defining the common interface for all models.

use crate::error::Result;

/// Common interface for all forecasting models.
///
/// Forecasters are stateless: each call receives the training values it
/// may look at and produces exactly `horizon` predictions. The backtest
/// driver relies on this purity to reuse one instance across splits.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Generate `horizon` predictions from the training values.
    ///
    /// Implementations must not inspect anything beyond `train`; the
    /// caller guarantees the slice ends immediately before the period
    /// being predicted.
    fn forecast(&self, train: &[f64], horizon: usize) -> Result<Vec<f64>>;

    /// Get the model name.
    fn name(&self) -> &str;
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use tscv::models::{BoxedForecaster, Forecaster};
/// use tscv::models::baseline::Naive;
///
/// let model: BoxedForecaster = Box::new(Naive::new());
/// assert_eq!(model.name(), "Naive");
/// ```
pub type BoxedForecaster = Box<dyn Forecaster>;

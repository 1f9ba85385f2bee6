//! Forecaster trait defining the common interface for all models.

use crate::core::{CancelToken, Series};
use crate::error::{ForecastError, Result};

/// Common lifecycle contract for all forecasting models.
///
/// Hyperparameters (including the train/test split range) have
/// variant-specific shapes and are supplied at construction; `fit`, `predict`
/// and `summary` are uniform across variants. `fit` must complete
/// successfully before `predict` is meaningful — calling `predict` on an
/// unfit model returns [`ForecastError::FitRequired`], and `summary` on an
/// unfit model panics (caller misuse, never a silent zero-valued result).
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Split the series per the configured train range and train the model,
    /// scoring the fit over the held-out test window.
    fn fit(&mut self, series: &Series, cancel: &CancelToken) -> Result<()>;

    /// Generate predictions for the specified horizon.
    ///
    /// Operates on a copy of the fitted state: repeated calls with the same
    /// horizon return identical sequences.
    fn predict(&self, horizon: usize, cancel: &CancelToken) -> Result<Series>;

    /// Print a human-readable summary of the fitted state and its accuracy.
    ///
    /// # Panics
    /// Panics if the model has not been fitted.
    fn summary(&self);

    /// Tune hyperparameters automatically.
    ///
    /// Not supported by any current model; the default body reports that.
    fn optimize(&mut self) -> Result<()> {
        Err(ForecastError::Unsupported(
            "parameter optimization is not implemented".to_string(),
        ))
    }

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool;
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use smoothcast::models::{BoxedForecaster, Forecaster};
/// use smoothcast::models::exponential::SimpleExponentialSmoothing;
///
/// let model: BoxedForecaster = Box::new(SimpleExponentialSmoothing::new(0.3));
/// assert_eq!(model.name(), "SimpleExponentialSmoothing");
/// assert!(!model.is_fitted());
/// ```
pub type BoxedForecaster = Box<dyn Forecaster>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RangeSpec;
    use crate::models::exponential::{
        HoltWinters, HoltWintersParams, SimpleExponentialSmoothing,
    };

    fn seasonal_series(n: usize, period: usize) -> Series {
        let values: Vec<f64> = (0..n)
            .map(|i| 10.0 + 0.2 * i as f64 + if i % period < period / 2 { 3.0 } else { -3.0 })
            .collect();
        Series::new("seasonal", values)
    }

    #[test]
    fn boxed_forecaster_reports_name_and_fit_state() {
        let model: BoxedForecaster = Box::new(SimpleExponentialSmoothing::new(0.3));
        assert_eq!(model.name(), "SimpleExponentialSmoothing");
        assert!(!model.is_fitted());
    }

    #[test]
    fn boxed_forecaster_fit_predict() {
        let cancel = CancelToken::new();
        let series = Series::new("data", (1..=20).map(f64::from).collect());

        let mut model: BoxedForecaster = Box::new(SimpleExponentialSmoothing::with_train_range(
            0.3,
            RangeSpec::to(14),
        ));

        model.fit(&series, &cancel).unwrap();
        assert!(model.is_fitted());

        let forecast = model.predict(5, &cancel).unwrap();
        assert_eq!(forecast.len(), 5);
    }

    #[test]
    fn models_are_uniform_behind_the_trait() {
        let cancel = CancelToken::new();
        let series = seasonal_series(24, 4);

        let mut models: Vec<BoxedForecaster> = vec![
            Box::new(SimpleExponentialSmoothing::with_train_range(
                0.5,
                RangeSpec::to(19),
            )),
            Box::new(HoltWinters::new(HoltWintersParams {
                alpha: 0.5,
                beta: 0.1,
                gamma: 0.3,
                period: 4,
                train_range: Some(RangeSpec::to(19)),
                ..Default::default()
            })),
        ];

        for model in &mut models {
            model.fit(&series, &cancel).unwrap();
            let forecast = model.predict(4, &cancel).unwrap();
            assert_eq!(forecast.len(), 4);
            assert_eq!(forecast.name(), "Prediction");
        }
    }

    #[test]
    fn optimize_is_unsupported_for_both_models() {
        let mut ses: BoxedForecaster = Box::new(SimpleExponentialSmoothing::new(0.3));
        let mut hw: BoxedForecaster = Box::new(HoltWinters::new(HoltWintersParams::default()));

        assert!(matches!(
            ses.optimize(),
            Err(ForecastError::Unsupported(_))
        ));
        assert!(matches!(hw.optimize(), Err(ForecastError::Unsupported(_))));
    }

    #[test]
    fn predict_before_fit_fails_fast() {
        let cancel = CancelToken::new();
        let model: BoxedForecaster = Box::new(SimpleExponentialSmoothing::new(0.3));
        assert_eq!(
            model.predict(5, &cancel).unwrap_err(),
            ForecastError::FitRequired
        );
    }
}

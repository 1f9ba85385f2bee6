//! Simple Exponential Smoothing (SES) forecasting model.
//!
//! SES is suitable for forecasting data with no clear trend or seasonality.

use crate::core::{CancelToken, RangeSpec, Series};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::metrics::{
    mean_absolute_error, mean_absolute_percentage_error, root_mean_squared_error,
    sum_of_squared_errors, ErrorOptions,
};

/// State produced by a successful fit.
#[derive(Debug, Clone)]
struct FittedState {
    initial_level: f64,
    origin_value: f64,
    smoothing_level: f64,
    mae: f64,
    sse: f64,
    rmse: f64,
    mape: f64,
    test_data: Series,
    fcast_data: Series,
}

/// Simple Exponential Smoothing forecaster.
///
/// The recursion is `level_t = α · y_t + (1-α) · level_{t-1}` over the
/// training window; the observation at the window's end is retained as the
/// *origin value*, and predictions bootstrap forward from the trained level
/// with `level := α · origin + (1-α) · level` without incorporating new data.
///
/// Fitting splits the series at the configured train range: rows inside the
/// range train the level, everything strictly after it is held out as test
/// data (at least 2 points) and scored with MAE, SSE, RMSE and MAPE.
///
/// # Example
/// ```
/// use smoothcast::core::{CancelToken, RangeSpec, Series};
/// use smoothcast::models::exponential::SimpleExponentialSmoothing;
/// use smoothcast::models::Forecaster;
///
/// let series = Series::new("demand", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
/// let cancel = CancelToken::new();
///
/// let mut model = SimpleExponentialSmoothing::with_train_range(0.1, RangeSpec::to(5));
/// model.fit(&series, &cancel).unwrap();
///
/// let forecast = model.predict(3, &cancel).unwrap();
/// assert_eq!(forecast.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    /// Smoothing parameter, must lie in `[0, 1]`.
    alpha: f64,
    /// Train/test split; rows after the range's end are held out.
    train_range: RangeSpec,
    /// Present once `fit` has succeeded.
    state: Option<FittedState>,
}

impl SimpleExponentialSmoothing {
    /// Create an SES model training over the whole series except a held-out
    /// tail selected by a later explicit range.
    ///
    /// With the default (full) range there are no rows after the window end,
    /// so fitting will fail for lack of test data; use
    /// [`with_train_range`](Self::with_train_range) to reserve a test window.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            train_range: RangeSpec::full(),
            state: None,
        }
    }

    /// Create an SES model with an explicit training range.
    pub fn with_train_range(alpha: f64, train_range: RangeSpec) -> Self {
        Self {
            alpha,
            train_range,
            state: None,
        }
    }

    /// The smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Level the recursion was seeded with (first training observation).
    pub fn initial_level(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.initial_level)
    }

    /// Observation at the training window's end, used to bootstrap predictions.
    pub fn origin_value(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.origin_value)
    }

    /// The trained smoothing level.
    pub fn smoothing_level(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.smoothing_level)
    }

    /// Mean absolute error over the held-out test window.
    pub fn mae(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.mae)
    }

    /// Sum of squared errors over the held-out test window.
    pub fn sse(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.sse)
    }

    /// Root mean squared error over the held-out test window.
    pub fn rmse(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.rmse)
    }

    /// Mean absolute percentage error over the held-out test window.
    pub fn mape(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.mape)
    }

    /// The held-out test series.
    pub fn test_data(&self) -> Option<&Series> {
        self.state.as_ref().map(|s| &s.test_data)
    }

    /// The in-sample forecast over the test window.
    pub fn forecast_data(&self) -> Option<&Series> {
        self.state.as_ref().map(|s| &s.fcast_data)
    }
}

impl Forecaster for SimpleExponentialSmoothing {
    fn fit(&mut self, series: &Series, cancel: &CancelToken) -> Result<()> {
        let values = series.values();

        let (start, end) = self.train_range.resolve(values.len())?;
        if end - start < 1 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: end - start + 1,
            });
        }

        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ForecastError::InvalidParameter(
                "alpha must be between [0,1]".to_string(),
            ));
        }
        let alpha = self.alpha;

        let test_data = &values[end + 1..];
        if test_data.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: test_data.len(),
            });
        }
        let test_series = Series::new("Test Data", test_data.to_vec());

        // Train the smoothing level. The first window value seeds the level;
        // the last is kept aside as the bootstrap origin, unsmoothed.
        let mut level = 0.0;
        let mut initial_level = 0.0;
        let mut origin = 0.0;
        for i in start..=end {
            cancel.checkpoint()?;

            let y = values[i];
            if i == start {
                level = y;
                initial_level = y;
            } else if i == end {
                origin = y;
            } else {
                level = alpha * y + (1.0 - alpha) * level;
            }
        }
        let smoothing_level = level;

        // In-sample bootstrap forecast over the held-out window: the origin
        // is held fixed and only the recursion advances.
        let mut fcast = Vec::with_capacity(test_data.len());
        let mut s = smoothing_level;
        for _ in 0..test_data.len() {
            cancel.checkpoint()?;

            s = alpha * origin + (1.0 - alpha) * s;
            fcast.push(s);
        }
        let fcast_series = Series::new("Forecast Data", fcast);

        let opts = ErrorOptions::default();
        let (mae, _) = mean_absolute_error(&test_series, &fcast_series, &opts, None)?;
        let (sse, _) = sum_of_squared_errors(&test_series, &fcast_series, &opts, None)?;
        let (rmse, _) = root_mean_squared_error(&test_series, &fcast_series, &opts, None)?;
        let (mape, _) = mean_absolute_percentage_error(&test_series, &fcast_series, &opts, None)?;

        self.state = Some(FittedState {
            initial_level,
            origin_value: origin,
            smoothing_level,
            mae,
            sse,
            rmse,
            mape,
            test_data: test_series,
            fcast_data: fcast_series,
        });

        Ok(())
    }

    fn predict(&self, horizon: usize, cancel: &CancelToken) -> Result<Series> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "horizon must be greater than 0".to_string(),
            ));
        }

        let state = self.state.as_ref().ok_or(ForecastError::FitRequired)?;

        let alpha = self.alpha;
        let origin = state.origin_value;
        // Local copy: predict never mutates the fitted level.
        let mut level = state.smoothing_level;

        let mut forecast = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            cancel.checkpoint()?;

            level = alpha * origin + (1.0 - alpha) * level;
            forecast.push(level);
        }

        Ok(Series::new("Prediction", forecast))
    }

    fn summary(&self) {
        let state = match &self.state {
            Some(state) => state,
            None => panic!("model must be fitted before summary"),
        };

        println!("SimpleExponentialSmoothing");
        println!("  Alpha            {}", self.alpha);
        println!("  Initial Level    {}", state.initial_level);
        println!("  Smoothing Level  {}", state.smoothing_level);
        println!("  MAE   {}", state.mae);
        println!("  SSE   {}", state.sse);
        println!("  RMSE  {}", state.rmse);
        println!("  MAPE  {}", state.mape);
        println!("{}", state.test_data);
        println!("{}", state.fcast_data);
    }

    fn name(&self) -> &str {
        "SimpleExponentialSmoothing"
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(n: usize) -> Series {
        Series::new("ramp", (1..=n).map(|i| i as f64).collect())
    }

    #[test]
    fn ses_known_calculation() {
        // Series [1..9], alpha 0.1, train window 0..=5.
        // Seed level = 1, interior updates over y[1..=4]:
        //   1.1, 1.29, 1.561, 1.9049
        // Origin = y[5] = 6 (not smoothed in).
        let cancel = CancelToken::new();
        let series = ramp(9);

        let mut model = SimpleExponentialSmoothing::with_train_range(0.1, RangeSpec::to(5));
        model.fit(&series, &cancel).unwrap();

        assert_relative_eq!(model.initial_level().unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(model.origin_value().unwrap(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(model.smoothing_level().unwrap(), 1.9049, epsilon = 1e-12);

        // Held-out window is y[6..=8].
        assert_eq!(model.test_data().unwrap().values(), &[7.0, 8.0, 9.0]);
    }

    #[test]
    fn ses_predict_converges_toward_origin() {
        let cancel = CancelToken::new();
        let series = ramp(9);

        let mut model = SimpleExponentialSmoothing::with_train_range(0.1, RangeSpec::to(5));
        model.fit(&series, &cancel).unwrap();

        let forecast = model.predict(3, &cancel).unwrap();
        let preds = forecast.values();

        // s := 0.1 * 6 + 0.9 * s starting from 1.9049.
        assert_relative_eq!(preds[0], 2.31441, epsilon = 1e-10);
        assert_relative_eq!(preds[1], 2.682969, epsilon = 1e-10);
        assert_relative_eq!(preds[2], 3.0146721, epsilon = 1e-10);

        // Monotonically converging toward the origin value 6.
        assert!(preds[0] < preds[1] && preds[1] < preds[2]);
        assert!(preds[2] < 6.0);
    }

    #[test]
    fn ses_in_sample_forecast_matches_predict() {
        // The test-window forecast is the same bootstrap recursion predict runs.
        let cancel = CancelToken::new();
        let series = ramp(9);

        let mut model = SimpleExponentialSmoothing::with_train_range(0.1, RangeSpec::to(5));
        model.fit(&series, &cancel).unwrap();

        let predicted = model.predict(3, &cancel).unwrap();
        assert_eq!(model.forecast_data().unwrap().values(), predicted.values());
    }

    #[test]
    fn ses_predict_is_idempotent() {
        let cancel = CancelToken::new();
        let series = ramp(12);

        let mut model = SimpleExponentialSmoothing::with_train_range(0.4, RangeSpec::to(8));
        model.fit(&series, &cancel).unwrap();

        let first = model.predict(5, &cancel).unwrap();
        let shorter = model.predict(2, &cancel).unwrap();
        let second = model.predict(5, &cancel).unwrap();

        assert_eq!(first.values(), second.values());
        assert_eq!(&first.values()[..2], shorter.values());
    }

    #[test]
    fn ses_stores_all_four_metrics() {
        let cancel = CancelToken::new();
        let series = ramp(9);

        let mut model = SimpleExponentialSmoothing::with_train_range(0.1, RangeSpec::to(5));
        model.fit(&series, &cancel).unwrap();

        let sse = model.sse().unwrap();
        let rmse = model.rmse().unwrap();
        assert!(model.mae().unwrap() > 0.0);
        assert!(model.mape().unwrap() > 0.0);
        assert_relative_eq!(rmse, (sse / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn ses_alpha_out_of_bounds_is_invalid_parameter() {
        let cancel = CancelToken::new();
        let series = ramp(9);

        for alpha in [-0.1, 1.1] {
            let mut model = SimpleExponentialSmoothing::with_train_range(alpha, RangeSpec::to(5));
            assert!(matches!(
                model.fit(&series, &cancel),
                Err(ForecastError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn ses_window_of_one_point_is_insufficient() {
        let cancel = CancelToken::new();
        let series = ramp(9);

        let mut model = SimpleExponentialSmoothing::with_train_range(0.5, RangeSpec::to(0));
        assert_eq!(
            model.fit(&series, &cancel).unwrap_err(),
            ForecastError::InsufficientData { needed: 2, got: 1 }
        );
    }

    #[test]
    fn ses_requires_two_test_points() {
        let cancel = CancelToken::new();
        let series = ramp(9);

        // Window end leaves a single held-out row.
        let mut model = SimpleExponentialSmoothing::with_train_range(0.5, RangeSpec::to(7));
        assert_eq!(
            model.fit(&series, &cancel).unwrap_err(),
            ForecastError::InsufficientData { needed: 2, got: 1 }
        );
    }

    #[test]
    fn ses_bad_range_is_invalid_range() {
        let cancel = CancelToken::new();
        let series = ramp(9);

        let mut model =
            SimpleExponentialSmoothing::with_train_range(0.5, RangeSpec::between(5, 2));
        assert!(matches!(
            model.fit(&series, &cancel),
            Err(ForecastError::InvalidRange(_))
        ));
    }

    #[test]
    fn ses_empty_series_is_invalid_range() {
        let cancel = CancelToken::new();
        let series = Series::empty("empty");

        let mut model = SimpleExponentialSmoothing::new(0.5);
        assert!(matches!(
            model.fit(&series, &cancel),
            Err(ForecastError::InvalidRange(_))
        ));
    }

    #[test]
    fn ses_predict_rejects_zero_horizon() {
        let cancel = CancelToken::new();
        let series = ramp(9);

        let mut model = SimpleExponentialSmoothing::with_train_range(0.1, RangeSpec::to(5));
        model.fit(&series, &cancel).unwrap();

        assert!(matches!(
            model.predict(0, &cancel),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn ses_requires_fit_before_predict() {
        let cancel = CancelToken::new();
        let model = SimpleExponentialSmoothing::new(0.3);
        assert_eq!(
            model.predict(5, &cancel).unwrap_err(),
            ForecastError::FitRequired
        );
    }

    #[test]
    #[should_panic(expected = "model must be fitted before summary")]
    fn ses_summary_before_fit_panics() {
        SimpleExponentialSmoothing::new(0.3).summary();
    }

    #[test]
    fn ses_fit_aborts_on_cancellation() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let series = ramp(9);

        let mut model = SimpleExponentialSmoothing::with_train_range(0.1, RangeSpec::to(5));
        assert_eq!(
            model.fit(&series, &cancel).unwrap_err(),
            ForecastError::Cancelled
        );
        assert!(!model.is_fitted());
    }

    #[test]
    fn ses_predict_aborts_on_cancellation() {
        let cancel = CancelToken::new();
        let series = ramp(9);

        let mut model = SimpleExponentialSmoothing::with_train_range(0.1, RangeSpec::to(5));
        model.fit(&series, &cancel).unwrap();

        let cancelled = CancelToken::new();
        cancelled.cancel();
        assert_eq!(
            model.predict(100, &cancelled).unwrap_err(),
            ForecastError::Cancelled
        );
    }

    #[test]
    fn ses_level_stays_within_training_hull() {
        let cancel = CancelToken::new();
        let values = vec![3.0, 7.0, 2.0, 9.0, 5.0, 4.0, 6.0, 8.0, 1.0, 5.5];
        let series = Series::new("hull", values.clone());

        for alpha in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let mut model =
                SimpleExponentialSmoothing::with_train_range(alpha, RangeSpec::to(6));
            model.fit(&series, &cancel).unwrap();

            let level = model.smoothing_level().unwrap();
            let train = &values[..=6];
            let min = train.iter().copied().fold(f64::INFINITY, f64::min);
            let max = train.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(level >= min && level <= max, "level {level} outside hull");
        }
    }

    #[test]
    fn ses_negative_range_selects_tail_window() {
        let cancel = CancelToken::new();
        let series = ramp(10);

        // Train on rows 2..=7 via a negative end offset.
        let mut model =
            SimpleExponentialSmoothing::with_train_range(0.2, RangeSpec::between(2, -3));
        model.fit(&series, &cancel).unwrap();

        assert_relative_eq!(model.initial_level().unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(model.origin_value().unwrap(), 8.0, epsilon = 1e-12);
        assert_eq!(model.test_data().unwrap().values(), &[9.0, 10.0]);
    }
}

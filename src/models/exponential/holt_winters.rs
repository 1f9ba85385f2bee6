//! Holt-Winters forecasting model.
//!
//! Also known as triple exponential smoothing, this model decomposes the
//! series into level, trend and a per-phase seasonal component of a fixed
//! period, each with its own smoothing parameter.

use crate::core::{CancelToken, RangeSpec, Series};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::metrics::{measure, ErrorMeasurement, ErrorOptions, MetricKind};
use crate::utils::stats::{describe, SummaryStats};

/// Form of the seasonal update.
///
/// Only the additive form is implemented; multiplicative (ratio-based)
/// updates are an explicit extension point and selecting them makes `fit`
/// return [`ForecastError::Unsupported`]. The two forms are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonalMode {
    /// Additive seasonality: `y_t = l_t + b_t + s_t + e_t`
    #[default]
    Additive,
    /// Multiplicative seasonality: `y_t = (l_t + b_t) * s_t + e_t` (unimplemented)
    Multiplicative,
}

/// Which stored series `describe` reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    /// The training sub-series.
    Train,
    /// The held-out test sub-series.
    Test,
    /// The full input series.
    Full,
}

/// Fit parameters for [`HoltWinters`].
#[derive(Debug, Clone, Copy)]
pub struct HoltWintersParams {
    /// Level smoothing parameter, in `[0, 1]`.
    pub alpha: f64,
    /// Trend smoothing parameter, in `[0, 1]`.
    pub beta: f64,
    /// Seasonal smoothing parameter, in `[0, 1]`.
    pub gamma: f64,
    /// Seasonal period (number of phases), must be positive.
    pub period: usize,
    /// Train/test split; `None` trains on the whole series (leaving no test
    /// window, which fails — reserve a held-out tail of at least 3 rows).
    pub train_range: Option<RangeSpec>,
    /// Which single metric scores the fit.
    pub metric: MetricKind,
    /// Seasonal update form.
    pub seasonal: SeasonalMode,
}

impl Default for HoltWintersParams {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            beta: 0.1,
            gamma: 0.1,
            period: 12,
            train_range: None,
            metric: MetricKind::RMSE,
            seasonal: SeasonalMode::Additive,
        }
    }
}

/// State produced by a successful fit.
#[derive(Debug, Clone)]
struct FittedState {
    initial_smooth: f64,
    initial_trend: f64,
    initial_seasonal_comps: Vec<f64>,
    smoothing_level: f64,
    trend_level: f64,
    seasonal_comps: Vec<f64>,
    error_m: ErrorMeasurement,
    data: Series,
    train_data: Series,
    test_data: Series,
    fcast_data: Series,
}

/// Double-averaged slope estimate over the first two seasons.
///
/// Averages `(y[p+i] - y[i]) / p` across the phases of the first period,
/// then divides by the period once more. Pure; callers guarantee
/// `y.len() >= 2 * period`.
fn initial_trend(y: &[f64], period: usize) -> f64 {
    let p = period as f64;
    let sum: f64 = (0..period).map(|i| (y[period + i] - y[i]) / p).sum();
    sum / p
}

/// Per-phase additive seasonal offsets.
///
/// Computes the mean of each full season, then averages each phase's
/// deviation from its season mean across all full seasons. The resulting
/// vector has length `period` and sums to approximately zero.
fn initial_seasonal_components(y: &[f64], period: usize) -> Vec<f64> {
    let n_seasons = y.len() / period;

    let season_averages: Vec<f64> = (0..n_seasons)
        .map(|s| y[s * period..(s + 1) * period].iter().sum::<f64>() / period as f64)
        .collect();

    (0..period)
        .map(|i| {
            (0..n_seasons)
                .map(|s| y[s * period + i] - season_averages[s])
                .sum::<f64>()
                / n_seasons as f64
        })
        .collect()
}

/// Holt-Winters forecaster (additive seasonality).
///
/// The update equations over the training window (index `i`, period `p`):
/// - Level: `l_i = α(y_i - s_{i mod p}) + (1-α)(l_{i-1} + b_{i-1})`
/// - Trend: `b_i = β(l_i - l_{i-1}) + (1-β)b_{i-1}`
/// - Seasonal: `s_{i mod p} = γ(y_i - l_{i-1} - b_{i-1}) + (1-γ)s_{i mod p}`
/// - Forecast: `ŷ_{+m} = l + m·b + s_{(m-1) mod p}`
///
/// The forecast's seasonal index is taken from the step count rather than
/// the absolute time position: phases line up only when the held-out window
/// starts exactly on a period boundary relative to training start. This is an
/// intentional approximation, kept stable so scores stay comparable.
///
/// # Example
/// ```
/// use smoothcast::core::{CancelToken, RangeSpec, Series};
/// use smoothcast::models::exponential::{HoltWinters, HoltWintersParams};
/// use smoothcast::models::Forecaster;
///
/// let values: Vec<f64> = (0..24)
///     .map(|i| 10.0 + 0.5 * i as f64 + if i % 4 < 2 { 2.0 } else { -2.0 })
///     .collect();
/// let series = Series::new("sales", values);
/// let cancel = CancelToken::new();
///
/// let mut model = HoltWinters::new(HoltWintersParams {
///     alpha: 0.4,
///     beta: 0.2,
///     gamma: 0.3,
///     period: 4,
///     train_range: Some(RangeSpec::to(19)),
///     ..Default::default()
/// });
/// model.fit(&series, &cancel).unwrap();
///
/// let forecast = model.predict(8, &cancel).unwrap();
/// assert_eq!(forecast.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct HoltWinters {
    params: HoltWintersParams,
    state: Option<FittedState>,
}

impl HoltWinters {
    /// Create a Holt-Winters model with the given fit parameters.
    pub fn new(params: HoltWintersParams) -> Self {
        Self {
            params,
            state: None,
        }
    }

    /// The fit parameters.
    pub fn params(&self) -> &HoltWintersParams {
        &self.params
    }

    /// Level smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.params.alpha
    }

    /// Trend smoothing parameter.
    pub fn beta(&self) -> f64 {
        self.params.beta
    }

    /// Seasonal smoothing parameter.
    pub fn gamma(&self) -> f64 {
        self.params.gamma
    }

    /// Seasonal period.
    pub fn period(&self) -> usize {
        self.params.period
    }

    /// Level the recursion was seeded with (first training observation).
    pub fn initial_smooth(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.initial_smooth)
    }

    /// Trend estimate the recursion was seeded with.
    pub fn initial_trend_level(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.initial_trend)
    }

    /// Seasonal offsets the recursion was seeded with.
    pub fn initial_seasonal_components(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.initial_seasonal_comps.as_slice())
    }

    /// The trained level.
    pub fn smoothing_level(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.smoothing_level)
    }

    /// The trained trend.
    pub fn trend_level(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.trend_level)
    }

    /// The trained seasonal offsets, one per phase.
    pub fn seasonal_components(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.seasonal_comps.as_slice())
    }

    /// The single accuracy score selected at fit time.
    pub fn error_measurement(&self) -> Option<ErrorMeasurement> {
        self.state.as_ref().map(|s| s.error_m)
    }

    /// The training sub-series.
    pub fn train_data(&self) -> Option<&Series> {
        self.state.as_ref().map(|s| &s.train_data)
    }

    /// The held-out test sub-series.
    pub fn test_data(&self) -> Option<&Series> {
        self.state.as_ref().map(|s| &s.test_data)
    }

    /// The in-sample forecast over the test window.
    pub fn forecast_data(&self) -> Option<&Series> {
        self.state.as_ref().map(|s| &s.fcast_data)
    }

    /// Print descriptive statistics of one of the stored series.
    ///
    /// # Panics
    /// Panics if the model has not been fitted.
    pub fn describe(&self, kind: DataKind) -> SummaryStats {
        let state = match &self.state {
            Some(state) => state,
            None => panic!("model must be fitted before describe"),
        };

        let series = match kind {
            DataKind::Train => &state.train_data,
            DataKind::Test => &state.test_data,
            DataKind::Full => &state.data,
        };

        let stats = describe(series);
        println!("{}", series.name());
        println!("{stats}");
        stats
    }

    fn validate_params(&self) -> Result<()> {
        let p = &self.params;

        if !(0.0..=1.0).contains(&p.alpha) {
            return Err(ForecastError::InvalidParameter(
                "alpha must be between [0,1]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&p.beta) {
            return Err(ForecastError::InvalidParameter(
                "beta must be between [0,1]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&p.gamma) {
            return Err(ForecastError::InvalidParameter(
                "gamma must be between [0,1]".to_string(),
            ));
        }
        if p.period == 0 {
            return Err(ForecastError::InvalidParameter(
                "period must be greater than 0".to_string(),
            ));
        }
        if p.seasonal == SeasonalMode::Multiplicative {
            return Err(ForecastError::Unsupported(
                "multiplicative seasonality is not implemented".to_string(),
            ));
        }

        Ok(())
    }
}

impl Forecaster for HoltWinters {
    fn fit(&mut self, series: &Series, cancel: &CancelToken) -> Result<()> {
        let values = series.values();
        let range = self.params.train_range.unwrap_or_default();

        let (start, end) = range.resolve(values.len())?;
        if end - start < 1 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: end - start + 1,
            });
        }

        self.validate_params()?;
        let HoltWintersParams {
            alpha,
            beta,
            gamma,
            period,
            metric,
            ..
        } = self.params;

        let train = &values[start..=end];
        let test = &values[end + 1..];
        if test.len() < 3 {
            return Err(ForecastError::InsufficientData {
                needed: 3,
                got: test.len(),
            });
        }

        // The initializer needs one full period beyond the first.
        if train.len() < 2 * period {
            return Err(ForecastError::InsufficientData {
                needed: 2 * period,
                got: train.len(),
            });
        }

        let train_series = Series::new("Train Data", train.to_vec());
        let test_series = Series::new("Test Data", test.to_vec());

        let initial_trend_level = initial_trend(train, period);
        let mut seasonals = initial_seasonal_components(train, period);
        let initial_seasonal_comps = seasonals.clone();

        let mut level = 0.0;
        let mut trend = initial_trend_level;
        let mut initial_smooth = 0.0;

        for (i, &y) in train.iter().enumerate() {
            cancel.checkpoint()?;

            if i == 0 {
                level = y;
                initial_smooth = y;
                continue;
            }

            let prev_level = level;
            level = alpha * (y - seasonals[i % period]) + (1.0 - alpha) * (level + trend);
            let prev_trend = trend;
            trend = beta * (level - prev_level) + (1.0 - beta) * trend;
            seasonals[i % period] =
                gamma * (y - prev_level - prev_trend) + (1.0 - gamma) * seasonals[i % period];
        }

        // In-sample test forecast. The seasonal phase follows the step count,
        // not absolute time (documented approximation).
        let mut fcast = Vec::with_capacity(test.len());
        for m in 1..=test.len() {
            cancel.checkpoint()?;

            fcast.push(level + m as f64 * trend + seasonals[(m - 1) % period]);
        }
        let fcast_series = Series::new("Forecast Data", fcast);

        let error_m = measure(
            metric,
            &test_series,
            &fcast_series,
            &ErrorOptions::default(),
            None,
        )?;

        self.state = Some(FittedState {
            initial_smooth,
            initial_trend: initial_trend_level,
            initial_seasonal_comps,
            smoothing_level: level,
            trend_level: trend,
            seasonal_comps: seasonals,
            error_m,
            data: series.clone(),
            train_data: train_series,
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

        let level = state.smoothing_level;
        let trend = state.trend_level;
        let seasonals = &state.seasonal_comps;
        let period = self.params.period;

        let mut forecast = Vec::with_capacity(horizon);
        for m in 1..=horizon {
            cancel.checkpoint()?;

            forecast.push(level + m as f64 * trend + seasonals[(m - 1) % period]);
        }

        Ok(Series::new("Prediction", forecast))
    }

    fn summary(&self) {
        let state = match &self.state {
            Some(state) => state,
            None => panic!("model must be fitted before summary"),
        };

        println!("HoltWinters(additive)");
        println!("  Alpha   {}", self.params.alpha);
        println!("  Beta    {}", self.params.beta);
        println!("  Gamma   {}", self.params.gamma);
        println!("  Period  {}", self.params.period);
        println!("  Initial Smoothing Level  {}", state.initial_smooth);
        println!("  Initial Trend Level      {}", state.initial_trend);
        println!("  Smoothing Level          {}", state.smoothing_level);
        println!("  Trend Level              {}", state.trend_level);
        println!(
            "  Initial Seasonal Components  {:?}",
            state.initial_seasonal_comps
        );
        println!("  Seasonal Components          {:?}", state.seasonal_comps);
        println!("  {}", state.error_m);
        println!("{}", state.test_data);
        println!("{}", state.fcast_data);
    }

    fn name(&self) -> &str {
        "HoltWinters"
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }
}

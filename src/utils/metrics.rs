//! Accuracy metrics for forecast evaluation.
//!
//! All four metrics share a template: align `actual[i]` with `forecast[j]`
//! position-by-position over a resolved range, filter or reject invalid
//! values according to [`ErrorOptions`], then reduce. Each returns the metric
//! value together with the number of points actually used.

use crate::core::{RangeSpec, Series};
use crate::error::{ForecastError, Result};

/// Options modifying the behavior of the metric functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorOptions {
    /// Skip NaN/Inf values (and, for MAPE, zero actuals).
    ///
    /// When `false` (default), encountering such a point aborts with
    /// [`ForecastError::Indeterminate`] instead of silently producing NaN.
    pub skip_invalids: bool,
}

/// Which accuracy metric to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricKind {
    /// Mean absolute error.
    MAE,
    /// Sum of squared errors.
    SSE,
    /// Root mean squared error.
    #[default]
    RMSE,
    /// Mean absolute percentage error.
    MAPE,
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MetricKind::MAE => "MAE",
            MetricKind::SSE => "SSE",
            MetricKind::RMSE => "RMSE",
            MetricKind::MAPE => "MAPE",
        };
        f.write_str(name)
    }
}

/// A single computed accuracy value tagged with the metric that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorMeasurement {
    kind: MetricKind,
    value: f64,
}

impl ErrorMeasurement {
    /// Create a tagged measurement.
    pub fn new(kind: MetricKind, value: f64) -> Self {
        Self { kind, value }
    }

    /// The metric kind.
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// The computed value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl std::fmt::Display for ErrorMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.value)
    }
}

fn is_invalid(val: f64) -> bool {
    val.is_nan() || val.is_infinite()
}

/// Shared alignment/filter/reduce template behind the four metrics.
///
/// The range selects rows of `actual`; `forecast` is always consumed from
/// index 0. When no range is given, the last `forecast.len()` rows of
/// `actual` are used. Returns the reduced sum and the count of points used;
/// zero usable points is an indeterminate result.
fn fold_errors<F>(
    actual: &Series,
    forecast: &Series,
    opts: &ErrorOptions,
    range: Option<RangeSpec>,
    zero_actual_invalid: bool,
    term: F,
) -> Result<(f64, usize)>
where
    F: Fn(f64, f64) -> f64,
{
    let n_pred = forecast.len();
    let range = range.unwrap_or_else(|| RangeSpec::from(-(n_pred as isize)));

    let n_test = range.nrows(actual.len())?;
    if n_test != n_pred {
        return Err(ForecastError::LengthMismatch {
            expected: n_test,
            got: n_pred,
        });
    }

    let (start, end) = range.resolve(actual.len())?;

    let mut sum = 0.0;
    let mut n = 0usize;

    for (i, j) in (start..=end).zip(0..n_pred) {
        let a = actual.values()[i];
        let p = forecast.values()[j];

        if is_invalid(a) || is_invalid(p) || (zero_actual_invalid && a == 0.0) {
            if opts.skip_invalids {
                continue;
            }
            return Err(ForecastError::Indeterminate);
        }

        sum += term(a, p);
        n += 1;
    }

    if n == 0 {
        return Err(ForecastError::Indeterminate);
    }

    Ok((sum, n))
}

/// Mean absolute error between aligned actual and forecast values.
///
/// See: <https://otexts.com/fpp2/accuracy.html>
///
/// # Example
/// ```
/// use smoothcast::core::Series;
/// use smoothcast::utils::metrics::{mean_absolute_error, ErrorOptions};
///
/// let actual = Series::new("actual", vec![1.0, 2.0, 3.0]);
/// let forecast = Series::new("forecast", vec![1.5, 2.5, 3.5]);
///
/// let (mae, n) = mean_absolute_error(&actual, &forecast, &ErrorOptions::default(), None).unwrap();
/// assert_eq!(mae, 0.5);
/// assert_eq!(n, 3);
/// ```
pub fn mean_absolute_error(
    actual: &Series,
    forecast: &Series,
    opts: &ErrorOptions,
    range: Option<RangeSpec>,
) -> Result<(f64, usize)> {
    let (sum, n) = fold_errors(actual, forecast, opts, range, false, |a, p| (a - p).abs())?;
    Ok((sum / n as f64, n))
}

/// Sum of squared errors between aligned actual and forecast values.
pub fn sum_of_squared_errors(
    actual: &Series,
    forecast: &Series,
    opts: &ErrorOptions,
    range: Option<RangeSpec>,
) -> Result<(f64, usize)> {
    fold_errors(actual, forecast, opts, range, false, |a, p| {
        let e = a - p;
        e * e
    })
}

/// Root mean squared error: `sqrt(SSE / n)`.
///
/// See: <https://otexts.com/fpp2/accuracy.html>
pub fn root_mean_squared_error(
    actual: &Series,
    forecast: &Series,
    opts: &ErrorOptions,
    range: Option<RangeSpec>,
) -> Result<(f64, usize)> {
    let (sse, n) = sum_of_squared_errors(actual, forecast, opts, range)?;
    Ok(((sse / n as f64).sqrt(), n))
}

/// Mean absolute percentage error: `100 · mean(|e / actual|)`.
///
/// An actual value of exactly zero is treated as invalid: skipped under
/// `skip_invalids`, otherwise the computation aborts with
/// [`ForecastError::Indeterminate`].
pub fn mean_absolute_percentage_error(
    actual: &Series,
    forecast: &Series,
    opts: &ErrorOptions,
    range: Option<RangeSpec>,
) -> Result<(f64, usize)> {
    let (sum, n) = fold_errors(actual, forecast, opts, range, true, |a, p| {
        ((a - p) / a).abs()
    })?;
    Ok((100.0 * (sum / n as f64), n))
}

/// Compute one metric selected by kind, as a tagged measurement.
pub fn measure(
    kind: MetricKind,
    actual: &Series,
    forecast: &Series,
    opts: &ErrorOptions,
    range: Option<RangeSpec>,
) -> Result<ErrorMeasurement> {
    let (value, _) = match kind {
        MetricKind::MAE => mean_absolute_error(actual, forecast, opts, range)?,
        MetricKind::SSE => sum_of_squared_errors(actual, forecast, opts, range)?,
        MetricKind::RMSE => root_mean_squared_error(actual, forecast, opts, range)?,
        MetricKind::MAPE => mean_absolute_percentage_error(actual, forecast, opts, range)?,
    };
    Ok(ErrorMeasurement::new(kind, value))
}

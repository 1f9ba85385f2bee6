//! Statistical utility functions.

use crate::core::Series;

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the variance of a slice (sample variance with n-1 denominator).
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / (values.len() - 1) as f64
}

/// Calculate the standard deviation of a slice.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Linear-interpolated quantile of a slice, `q` in `[0, 1]`.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

/// Calculate the median of a slice.
pub fn median(values: &[f64]) -> f64 {
    quantile(values, 0.5)
}

/// Descriptive statistics over one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Compute descriptive statistics for a series.
///
/// # Example
/// ```
/// use smoothcast::core::Series;
/// use smoothcast::utils::stats::describe;
///
/// let s = Series::new("x", vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// let stats = describe(&s);
/// assert_eq!(stats.count, 5);
/// assert_eq!(stats.median, 3.0);
/// ```
pub fn describe(series: &Series) -> SummaryStats {
    let values = series.values();
    SummaryStats {
        count: values.len(),
        mean: mean(values),
        std_dev: std_dev(values),
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        q1: quantile(values, 0.25),
        median: median(values),
        q3: quantile(values, 0.75),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

impl std::fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "count  {}", self.count)?;
        writeln!(f, "mean   {}", self.mean)?;
        writeln!(f, "std    {}", self.std_dev)?;
        writeln!(f, "min    {}", self.min)?;
        writeln!(f, "25%    {}", self.q1)?;
        writeln!(f, "50%    {}", self.median)?;
        writeln!(f, "75%    {}", self.q3)?;
        writeln!(f, "max    {}", self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0]), 10.0, epsilon = 1e-10);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn variance_calculates_correctly() {
        // Sample variance of [1, 2, 3, 4, 5] = 2.5
        assert_relative_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.5, epsilon = 1e-10);
        assert!(variance(&[1.0]).is_nan());
        assert!(variance(&[]).is_nan());
    }

    #[test]
    fn std_dev_calculates_correctly() {
        assert_relative_eq!(
            std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            2.5_f64.sqrt(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn median_calculates_correctly() {
        // Odd number of elements
        assert_relative_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        // Even number of elements
        assert_relative_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5, epsilon = 1e-10);
        // Unsorted input
        assert_relative_eq!(median(&[5.0, 1.0, 3.0, 2.0, 4.0]), 3.0, epsilon = 1e-10);
        assert!(median(&[]).is_nan());
    }

    #[test]
    fn quantile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(quantile(&values, 0.0), 1.0, epsilon = 1e-10);
        assert_relative_eq!(quantile(&values, 1.0), 4.0, epsilon = 1e-10);
        assert_relative_eq!(quantile(&values, 0.25), 1.75, epsilon = 1e-10);
    }

    #[test]
    fn describe_known_series() {
        let s = Series::new("x", vec![5.0, 1.0, 3.0, 2.0, 4.0]);
        let stats = describe(&s);

        assert_eq!(stats.count, 5);
        assert_relative_eq!(stats.mean, 3.0, epsilon = 1e-10);
        assert_relative_eq!(stats.min, 1.0, epsilon = 1e-10);
        assert_relative_eq!(stats.median, 3.0, epsilon = 1e-10);
        assert_relative_eq!(stats.max, 5.0, epsilon = 1e-10);
        assert_relative_eq!(stats.std_dev, 2.5_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn describe_renders_all_rows() {
        let s = Series::new("x", vec![1.0, 2.0]);
        let rendered = describe(&s).to_string();
        for label in ["count", "mean", "std", "min", "25%", "50%", "75%", "max"] {
            assert!(rendered.contains(label), "missing {label}");
        }
    }
}

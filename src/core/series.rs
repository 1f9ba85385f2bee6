//! Named, ordered sequence of float observations.

use crate::error::{ForecastError, Result};

/// A named, ordered sequence of `f64` observations.
///
/// Values are 0-indexed and insertion order is time order. This is the only
/// data container the forecasting engines depend on: they borrow read access
/// to a caller-owned series and construct new owned series for derived data
/// (test windows, forecasts).
///
/// Shared/exclusive access follows Rust borrow semantics: a metric or fit
/// computation holds a `&Series` for its whole duration, so no writer can
/// mutate the data underneath it.
///
/// # Example
/// ```
/// use smoothcast::core::Series;
///
/// let mut s = Series::new("price", vec![1.5, 2.5]);
/// s.push(3.5);
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.get(2), Some(3.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    name: String,
    values: Vec<f64>,
}

impl Series {
    /// Create a series from a name and a list of values.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Create an empty series with the given name.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Get the series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the series.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read access to the underlying values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Indexed read; `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Indexed write.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ForecastError::InvalidRange(format!(
                "index {} out of bounds for series of length {}",
                index,
                self.values.len()
            ))),
        }
    }

    /// Append an observation.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Iterate over the observations.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} (n={})", self.name, self.values.len())?;
        for (i, v) in self.values.iter().enumerate() {
            writeln!(f, "  [{i}] {v}")?;
        }
        Ok(())
    }
}

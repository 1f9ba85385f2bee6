//! Sparse start/end range specifications and their resolution.

use crate::error::{ForecastError, Result};

/// A sparse, possibly open-ended row range over a series.
///
/// A missing `start` defaults to `0`; a missing `end` defaults to the last
/// valid index. Negative offsets are counted from the end of the series, so
/// `RangeSpec::from(-3)` over a length-10 series resolves to rows `7..=9`.
///
/// Resolved bounds are inclusive on both sides.
///
/// # Example
/// ```
/// use smoothcast::core::RangeSpec;
///
/// assert_eq!(RangeSpec::full().resolve(10).unwrap(), (0, 9));
/// assert_eq!(RangeSpec::from(-3).resolve(10).unwrap(), (7, 9));
/// assert_eq!(RangeSpec::between(2, 5).nrows(10).unwrap(), 4);
/// assert!(RangeSpec::between(5, 2).resolve(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSpec {
    /// First row, optionally negative (from the end). Absent means `0`.
    pub start: Option<isize>,
    /// Last row (inclusive), optionally negative. Absent means `len - 1`.
    pub end: Option<isize>,
}

impl RangeSpec {
    /// The whole series.
    pub fn full() -> Self {
        Self::default()
    }

    /// From `start` (inclusive) to the end of the series.
    pub fn from(start: isize) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// From the beginning of the series to `end` (inclusive).
    pub fn to(end: isize) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Explicit inclusive bounds.
    pub fn between(start: isize, end: isize) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Resolve against a series of `len` rows into concrete inclusive bounds.
    ///
    /// Fails with [`ForecastError::InvalidRange`] when the series is empty or
    /// the normalized bounds are inconsistent or out of `[0, len)`.
    pub fn resolve(&self, len: usize) -> Result<(usize, usize)> {
        if len == 0 {
            return Err(ForecastError::InvalidRange(
                "series contains no rows".to_string(),
            ));
        }

        let n = len as isize;

        let mut start = self.start.unwrap_or(0);
        if start < 0 {
            start += n;
        }

        let mut end = self.end.unwrap_or(n - 1);
        if end < 0 {
            end += n;
        }

        if start < 0 || end < 0 {
            return Err(ForecastError::InvalidRange(format!(
                "negative offset out of bounds for length {len}"
            )));
        }
        if start > end {
            return Err(ForecastError::InvalidRange(format!(
                "start {start} exceeds end {end}"
            )));
        }
        if end >= n {
            return Err(ForecastError::InvalidRange(format!(
                "end {end} out of bounds for length {len}"
            )));
        }

        Ok((start as usize, end as usize))
    }

    /// Number of rows the range spans when resolved against `len`.
    pub fn nrows(&self, len: usize) -> Result<usize> {
        let (start, end) = self.resolve(len)?;
        Ok(end - start + 1)
    }
}

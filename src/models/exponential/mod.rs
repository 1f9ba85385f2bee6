//! Exponential smoothing models.
//!
//! This module provides the exponential smoothing forecasting methods:
//! - Simple Exponential Smoothing (SES)
//! - Holt-Winters triple exponential smoothing (level, trend, seasonality)

mod holt_winters;
mod ses;

pub use holt_winters::{DataKind, HoltWinters, HoltWintersParams, SeasonalMode};
pub use ses::SimpleExponentialSmoothing;

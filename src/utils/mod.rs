//! Utility functions for forecasting models.

pub mod metrics;
pub mod stats;

pub use metrics::{
    mean_absolute_error, mean_absolute_percentage_error, measure, root_mean_squared_error,
    sum_of_squared_errors, ErrorMeasurement, ErrorOptions, MetricKind,
};
pub use stats::{describe, SummaryStats};

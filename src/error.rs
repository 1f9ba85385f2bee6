//! Error types for the smoothcast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during forecasting operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Range specification could not be resolved against the series.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Hyperparameter or argument outside its valid domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Actual and forecast sequences disagree in length.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// A metric could not be computed (invalid inputs, or no valid points left).
    #[error("indeterminate result")]
    Indeterminate,

    /// Cooperative cancellation was requested mid-computation.
    #[error("operation cancelled")]
    Cancelled,

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Operation declared by the contract but not implemented.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

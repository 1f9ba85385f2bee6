//! # smoothcast
//!
//! Exponential-smoothing forecasting for univariate, regularly-spaced time
//! series. Provides Simple Exponential Smoothing (SES) and Holt-Winters
//! triple exponential smoothing behind a common [`models::Forecaster`]
//! contract, together with train/test range splitting, accuracy metrics
//! (MAE, SSE, RMSE, MAPE), and cooperative cancellation.
//!
//! ```
//! use smoothcast::core::{CancelToken, RangeSpec, Series};
//! use smoothcast::models::exponential::SimpleExponentialSmoothing;
//! use smoothcast::models::Forecaster;
//!
//! let series = Series::new("price", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
//! let cancel = CancelToken::new();
//!
//! let mut model = SimpleExponentialSmoothing::with_train_range(0.1, RangeSpec::to(5));
//! model.fit(&series, &cancel).unwrap();
//!
//! let forecast = model.predict(3, &cancel).unwrap();
//! assert_eq!(forecast.len(), 3);
//! ```

#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{CancelToken, RangeSpec, Series};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::exponential::{
        HoltWinters, HoltWintersParams, SeasonalMode, SimpleExponentialSmoothing,
    };
    pub use crate::models::Forecaster;
    pub use crate::utils::metrics::{ErrorMeasurement, ErrorOptions, MetricKind};
}

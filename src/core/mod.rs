//! Core data structures for time series forecasting.

mod cancel;
mod range;
mod series;

pub use cancel::CancelToken;
pub use range::RangeSpec;
pub use series::Series;

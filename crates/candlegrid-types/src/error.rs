//! Error types for candlegrid.

use thiserror::Error;

use crate::IntervalError;

/// Result type alias for candlegrid operations.
pub type Result<T> = std::result::Result<T, CandlegridError>;

/// Errors that can occur while configuring aggregation.
///
/// The aggregation algorithms themselves are total functions; only
/// configuration and state seeding can fail.
#[derive(Error, Debug)]
pub enum CandlegridError {
    /// Invalid aggregation interval.
    #[error(transparent)]
    Interval(#[from] IntervalError),

    /// A cursor was seeded with a price that cannot anchor synthetic candles.
    #[error("invalid seed price {0}: must be finite and positive")]
    InvalidSeedPrice(f64),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

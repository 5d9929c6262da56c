//! Trade tick representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single trade event.
///
/// Ticks are immutable inputs to aggregation; the aggregation core only
/// reads them. Callers are expected to deliver ticks in non-decreasing
/// timestamp order within a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Event time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Traded price.
    pub price: f64,
    /// Traded quantity. The sign convention is left to the producer; the
    /// aggregation core sums quantities as given.
    pub qty: f64,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(timestamp: i64, price: f64, qty: f64) -> Self {
        Self {
            timestamp,
            price,
            qty,
        }
    }

    /// Returns the event time as a UTC datetime.
    ///
    /// Returns `None` if the timestamp is outside chrono's representable
    /// range.
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

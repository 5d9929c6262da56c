//! OHLCV candle data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV summary of one fixed-width time bucket.
///
/// Candles are stamped with the *close* boundary of the bucket they
/// summarize: a candle covering `[t, t + interval)` carries
/// `close_time == t + interval`. Once created a candle is never mutated;
/// aggregation appends candles to an ordered, gapless sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Close boundary of the bucket in milliseconds since the Unix epoch.
    pub close_time: i64,
    /// Opening price (first tick in the bucket).
    pub open: f64,
    /// Highest price during the bucket.
    pub high: f64,
    /// Lowest price during the bucket.
    pub low: f64,
    /// Closing price (last tick in the bucket).
    pub close: f64,
    /// Sum of traded quantities in the bucket; `0.0` for synthetic candles.
    pub volume: f64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(
        close_time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            close_time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Creates a flat candle at `price` with zero volume.
    ///
    /// Used for buckets that elapsed without trades; all four price fields
    /// equal the last known close.
    #[must_use]
    pub const fn synthetic(close_time: i64, price: f64) -> Self {
        Self {
            close_time,
            open: price,
            high: price,
            low: price,
            close: price,
            volume: 0.0,
        }
    }

    /// Returns true for gap-filled candles (no trades in the bucket).
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.volume == 0.0
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) candle.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) candle.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Returns the close boundary as a UTC datetime.
    ///
    /// Returns `None` if the timestamp is outside chrono's representable
    /// range.
    #[must_use]
    pub fn close_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.close_time)
    }
}

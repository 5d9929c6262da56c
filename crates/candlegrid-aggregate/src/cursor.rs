//! Per-symbol aggregation state.

use candlegrid_types::{Candle, CandlegridError, Result, Tick};
use serde::{Deserialize, Serialize};

/// Close-price fallback for buckets that elapse without trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PriorClose {
    /// Seed price supplied at construction; no candle has closed yet.
    Seed(f64),
    /// The most recently closed candle.
    Candle(Candle),
}

impl PriorClose {
    /// Returns the price a synthetic candle would be anchored at.
    #[must_use]
    pub const fn price(&self) -> f64 {
        match self {
            Self::Seed(price) => *price,
            Self::Candle(candle) => candle.close,
        }
    }
}

/// Aggregation state for one symbol, carried between segmentation calls.
///
/// A cursor holds the three values that give aggregation its continuity:
/// the open boundary of the bucket currently accumulating, the ticks
/// buffered for that bucket, and the close-price fallback for gap filling.
/// The segmenter borrows the cursor exclusively, so calls for one symbol
/// are serialized by ownership; cursors for different symbols are fully
/// independent and may be driven in parallel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleCursor {
    /// Open boundary of the bucket currently accumulating, in epoch ms.
    pub(crate) open_time: i64,
    /// Ticks of the not-yet-closed bucket, in arrival order.
    pub(crate) pending: Vec<Tick>,
    /// Fallback close for gap filling.
    pub(crate) prior_close: PriorClose,
}

impl CandleCursor {
    /// Creates a cursor for a symbol with no candle history.
    ///
    /// `open_time` is the open boundary of the first bucket to build and
    /// `seed_price` anchors synthetic candles until the first real candle
    /// closes.
    ///
    /// # Errors
    ///
    /// Returns [`CandlegridError::InvalidSeedPrice`] if `seed_price` is not
    /// finite and positive.
    pub fn new(open_time: i64, seed_price: f64) -> Result<Self> {
        if !seed_price.is_finite() || seed_price <= 0.0 {
            return Err(CandlegridError::InvalidSeedPrice(seed_price));
        }
        Ok(Self {
            open_time,
            pending: Vec::new(),
            prior_close: PriorClose::Seed(seed_price),
        })
    }

    /// Restores a cursor from previously persisted state.
    #[must_use]
    pub const fn resume(open_time: i64, pending: Vec<Tick>, last_candle: Candle) -> Self {
        Self {
            open_time,
            pending,
            prior_close: PriorClose::Candle(last_candle),
        }
    }

    /// Returns the open boundary of the bucket currently accumulating,
    /// in epoch milliseconds.
    #[must_use]
    pub const fn open_time(&self) -> i64 {
        self.open_time
    }

    /// Returns the ticks waiting for their bucket to close, in arrival
    /// order.
    #[must_use]
    pub fn pending(&self) -> &[Tick] {
        &self.pending
    }

    /// Returns the close price the next synthetic candle would use.
    #[must_use]
    pub const fn last_close(&self) -> f64 {
        self.prior_close.price()
    }

    /// Returns the most recently closed candle, if any has closed yet.
    #[must_use]
    pub const fn last_candle(&self) -> Option<Candle> {
        match &self.prior_close {
            PriorClose::Seed(_) => None,
            PriorClose::Candle(candle) => Some(*candle),
        }
    }
}

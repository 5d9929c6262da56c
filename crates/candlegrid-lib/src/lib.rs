//! Gapless tick-to-candle aggregation library.
//!
//! This is a facade crate that re-exports functionality from the candlegrid
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use candlegrid_lib::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let segmenter = TickSegmenter::new(Interval::from_secs(60.0)?);
//!     let mut cursor = CandleCursor::new(0, 99.0)?;
//!
//!     let batch = vec![Tick::new(90_000, 100.0, 1.0), Tick::new(95_000, 102.0, 2.0)];
//!     let candles = segmenter.segment(&mut cursor, &batch, 180_000);
//!
//!     // The empty first bucket was gap-filled at the seed price.
//!     assert_eq!(candles.len(), 1);
//!     assert!(candles[0].is_synthetic());
//!     assert_eq!(candles[0].close_time, 60_000);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candlegrid/candlegrid/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use candlegrid_types::*;

// Re-export aggregation
pub use candlegrid_aggregate::{CandleCursor, PriorClose, TickSegmenter, build_candle};

// Re-export account arithmetic
pub use candlegrid_account::{
    Contract, Position, apply_fill, available_margin, ceil_to_step, floor_to_step, long_pnl,
    position_cost, round_to_step, short_pnl,
};

/// Prelude module for convenient imports.
///
/// ```
/// use candlegrid_lib::prelude::*;
/// ```
pub mod prelude {
    pub use candlegrid_types::{Candle, CandlegridError, Interval, IntervalError, Result, Tick};

    pub use candlegrid_aggregate::{CandleCursor, PriorClose, TickSegmenter, build_candle};

    pub use candlegrid_account::{
        Contract, Position, apply_fill, available_margin, ceil_to_step, floor_to_step, long_pnl,
        position_cost, round_to_step, short_pnl,
    };
}

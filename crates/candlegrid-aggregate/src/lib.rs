//! Gapless tick-to-candle aggregation for candlegrid.
//!
//! This crate turns ordered batches of trade ticks into a gapless,
//! fixed-interval OHLCV candle sequence:
//!
//! - [`build_candle`] - Builds one bucket's candle, real or synthetic
//! - [`TickSegmenter`] - Partitions tick batches across bucket boundaries
//! - [`CandleCursor`] - Per-symbol state threaded between calls
//!
//! The segmenter closes one candle per elapsed bucket, synthesizing flat
//! zero-volume candles for buckets that saw no trades, so consumers always
//! receive a regularly-spaced series.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candlegrid/candlegrid/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod builder;
mod cursor;
mod segmenter;

pub use builder::build_candle;
pub use cursor::{CandleCursor, PriorClose};
pub use segmenter::TickSegmenter;

//! Core types for candlegrid tick-to-candle aggregation.
//!
//! This crate provides the fundamental data structures used throughout
//! candlegrid:
//!
//! - [`Tick`] - A single trade event with timestamp, price, and quantity
//! - [`Candle`] - An OHLCV summary of one fixed-width time bucket
//! - [`Interval`] - The configured bucket width
//!
//! All timestamps are integer milliseconds since the Unix epoch; bucket
//! boundary arithmetic never leaves that representation.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candlegrid/candlegrid/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod error;
mod interval;
mod tick;

pub use candle::Candle;
pub use error::{CandlegridError, Result};
pub use interval::{Interval, IntervalError};
pub use tick::Tick;

//! Stateless account arithmetic for candlegrid.
//!
//! This crate provides the pure formulas that surround candle aggregation:
//!
//! - [`floor_to_step`], [`ceil_to_step`], [`round_to_step`] - Step rounding
//! - [`Contract`], [`position_cost`], [`long_pnl`], [`short_pnl`],
//!   [`apply_fill`] - Contract cost, PnL, and fill arithmetic
//! - [`Position`], [`available_margin`] - Margin availability
//!
//! Every function is a total, stateless computation over scalars.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candlegrid/candlegrid/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod margin;
mod position;
mod rounding;

pub use margin::{Position, available_margin};
pub use position::{Contract, apply_fill, long_pnl, position_cost, short_pnl};
pub use rounding::{ceil_to_step, floor_to_step, round_to_step};

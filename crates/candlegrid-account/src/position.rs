//! Contract cost, PnL, and fill arithmetic.

use serde::{Deserialize, Serialize};

use crate::rounding::round_to_step;

/// Margining convention of a traded contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// True for inverse (coin-margined) contracts.
    pub inverse: bool,
    /// Contract multiplier.
    pub multiplier: f64,
}

impl Contract {
    /// Linear (quote-margined) contract with multiplier 1.
    #[must_use]
    pub const fn linear() -> Self {
        Self {
            inverse: false,
            multiplier: 1.0,
        }
    }

    /// Inverse (coin-margined) contract with the given multiplier.
    #[must_use]
    pub const fn inverse(multiplier: f64) -> Self {
        Self {
            inverse: true,
            multiplier,
        }
    }
}

impl Default for Contract {
    fn default() -> Self {
        Self::linear()
    }
}

/// Returns the cost of holding `qty` contracts at `price`.
///
/// For inverse contracts a zero price costs nothing rather than dividing
/// by zero.
#[must_use]
pub fn position_cost(qty: f64, price: f64, contract: Contract) -> f64 {
    if contract.inverse {
        let base = if price > 0.0 { (qty / price).abs() } else { 0.0 };
        base * contract.multiplier
    } else {
        (qty * price).abs()
    }
}

/// Returns the profit or loss of a long position moved from `entry_price`
/// to `close_price`.
#[must_use]
pub fn long_pnl(entry_price: f64, close_price: f64, qty: f64, contract: Contract) -> f64 {
    if contract.inverse {
        if entry_price == 0.0 || close_price == 0.0 {
            return 0.0;
        }
        qty.abs() * contract.multiplier * (1.0 / entry_price - 1.0 / close_price)
    } else {
        qty.abs() * (close_price - entry_price)
    }
}

/// Returns the profit or loss of a short position moved from `entry_price`
/// to `close_price`.
#[must_use]
pub fn short_pnl(entry_price: f64, close_price: f64, qty: f64, contract: Contract) -> f64 {
    if contract.inverse {
        if entry_price == 0.0 || close_price == 0.0 {
            return 0.0;
        }
        qty.abs() * contract.multiplier * (1.0 / close_price - 1.0 / entry_price)
    } else {
        qty.abs() * (entry_price - close_price)
    }
}

/// Merges a fill into a position, returning the new size and entry price.
///
/// The new size is snapped to `qty_step`; a fill that flattens the position
/// returns `(0.0, 0.0)`. Otherwise the new entry price is the size-weighted
/// average of the old entry price and the fill price, with an unset (NaN)
/// entry price treated as zero.
#[must_use]
pub fn apply_fill(
    size: f64,
    entry_price: f64,
    fill_qty: f64,
    fill_price: f64,
    qty_step: f64,
) -> (f64, f64) {
    if fill_qty == 0.0 {
        return (size, entry_price);
    }
    let new_size = round_to_step(size + fill_qty, qty_step);
    if new_size == 0.0 {
        return (0.0, 0.0);
    }
    let new_price =
        nan_to_zero(entry_price) * (size / new_size) + fill_price * (fill_qty / new_size);
    (new_size, new_price)
}

/// Maps NaN to zero, leaving every other value untouched.
const fn nan_to_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

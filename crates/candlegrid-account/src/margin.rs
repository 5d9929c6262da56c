//! Margin availability.

use serde::{Deserialize, Serialize};

use crate::position::{Contract, long_pnl, position_cost, short_pnl};

/// One side of an account's exposure.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Position size; zero means flat.
    pub size: f64,
    /// Average entry price; zero means unset.
    pub price: f64,
}

impl Position {
    /// Creates a position with the given size and entry price.
    #[must_use]
    pub const fn new(size: f64, price: f64) -> Self {
        Self { size, price }
    }

    /// A flat position.
    #[must_use]
    pub const fn flat() -> Self {
        Self {
            size: 0.0,
            price: 0.0,
        }
    }

    /// Returns true when the position has both a size and an entry price.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.size != 0.0 && self.price != 0.0
    }
}

/// Returns the margin still available for new orders.
///
/// Equity is `balance` plus the unrealized PnL of both sides marked at
/// `last_price`; used margin is the summed cost of the open positions.
/// The result is `equity * leverage - used_margin`, floored at zero.
#[must_use]
pub fn available_margin(
    balance: f64,
    long: Position,
    short: Position,
    last_price: f64,
    contract: Contract,
    leverage: u32,
) -> f64 {
    let mut equity = balance;
    let mut used_margin = 0.0;

    if long.is_open() {
        equity += long_pnl(long.price, last_price, long.size, contract);
        used_margin += position_cost(long.size, long.price, contract);
    }
    if short.is_open() {
        equity += short_pnl(short.price, last_price, short.size, contract);
        used_margin += position_cost(short.size, short.price, contract);
    }

    (equity * f64::from(leverage) - used_margin).max(0.0)
}

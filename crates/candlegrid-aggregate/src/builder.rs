//! Single-bucket candle construction.

use candlegrid_types::{Candle, Interval, Tick};

/// Builds the candle for one bucket and appends it to `candles`.
///
/// `ticks` must all belong to the bucket opening at `bucket_open` and be in
/// arrival order: open and close come from the first and last tick as
/// delivered, not from any sort. An empty `ticks` produces a flat synthetic
/// candle anchored at the last close in `candles`, or at `fallback_close`
/// when `candles` is empty.
///
/// The candle is stamped with the bucket's close boundary,
/// `bucket_open + interval.millis()`, appended to `candles`, and returned.
pub fn build_candle(
    ticks: &[Tick],
    candles: &mut Vec<Candle>,
    bucket_open: i64,
    fallback_close: f64,
    interval: Interval,
) -> Candle {
    let close_time = bucket_open + interval.millis();

    debug_assert!(
        ticks.windows(2).all(|w| w[0].timestamp <= w[1].timestamp),
        "ticks must be in non-decreasing timestamp order"
    );
    debug_assert!(
        ticks.iter().all(|t| t.timestamp < close_time),
        "every tick must fall before the bucket close boundary"
    );

    let candle = if let Some((first, rest)) = ticks.split_first() {
        let mut high = first.price;
        let mut low = first.price;
        let mut close = first.price;
        let mut volume = first.qty;
        for tick in rest {
            high = high.max(tick.price);
            low = low.min(tick.price);
            close = tick.price;
            volume += tick.qty;
        }
        Candle::new(close_time, first.price, high, low, close, volume)
    } else {
        let anchor = candles.last().map_or(fallback_close, |c| c.close);
        Candle::synthetic(close_time, anchor)
    };

    candles.push(candle);
    candle
}

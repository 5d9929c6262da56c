//! Batch segmentation across bucket boundaries.

use candlegrid_types::{Candle, Interval, Tick};
use tracing::{debug, trace};

use crate::builder::build_candle;
use crate::cursor::{CandleCursor, PriorClose};

/// Splits ordered tick batches into per-bucket candles.
///
/// The segmenter itself holds only the configured interval; all continuity
/// lives in the [`CandleCursor`] the caller threads through successive
/// calls. Two invocations from identical cursor state and inputs produce
/// identical outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSegmenter {
    interval: Interval,
}

impl TickSegmenter {
    /// Creates a segmenter for the given bucket width.
    #[must_use]
    pub const fn new(interval: Interval) -> Self {
        Self { interval }
    }

    /// Returns the bucket width being aggregated to.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// Consumes one batch of ticks, closing every bucket the batch steps
    /// over and returning the closed candles in time order.
    ///
    /// Bucket closing is driven by the ticks themselves: when a tick lands
    /// beyond the bucket the cursor is accumulating, every bucket up to the
    /// tick's own is closed in sequence, with empty buckets becoming flat
    /// synthetic candles at the last known close. The returned sequence is
    /// therefore gapless from the cursor position through the last closed
    /// bucket, however far the batch jumps ahead.
    ///
    /// `open_boundary` is the open time of the bucket still accumulating in
    /// real time (epoch ms, on the interval grid). No bucket whose close
    /// boundary reaches it is ever closed, so a candle is only emitted once
    /// its bucket can no longer receive ticks. Ticks for buckets held back
    /// by `open_boundary` stay in the cursor's pending buffer.
    ///
    /// Ticks must arrive in non-decreasing timestamp order, both within the
    /// batch and across calls (asserted in debug builds). Out-of-order
    /// delivery misassigns ticks to buckets; it is not detected or repaired
    /// in release builds.
    pub fn segment(
        &self,
        cursor: &mut CandleCursor,
        batch: &[Tick],
        open_boundary: i64,
    ) -> Vec<Candle> {
        debug_assert!(
            batch.windows(2).all(|w| w[0].timestamp <= w[1].timestamp),
            "tick batch must be in non-decreasing timestamp order"
        );

        let interval_ms = self.interval.millis();
        let fallback_close = cursor.last_close();
        let mut open_time = cursor.open_time;
        let mut pending = std::mem::take(&mut cursor.pending);
        let mut candles = Vec::new();

        for tick in batch {
            if tick.timestamp >= open_time + interval_ms {
                // Close every bucket between the cursor and the bucket this
                // tick belongs to, but never the bucket still accumulating
                // in real time.
                let tick_bucket_open = tick.timestamp - tick.timestamp % interval_ms;
                while open_time + interval_ms <= tick_bucket_open
                    && open_time + interval_ms < open_boundary
                {
                    let candle =
                        build_candle(&pending, &mut candles, open_time, fallback_close, self.interval);
                    if candle.is_synthetic() {
                        debug!(close_time = candle.close_time, close = candle.close, "gap bucket filled");
                    } else {
                        trace!(close_time = candle.close_time, ticks = pending.len(), "bucket closed");
                    }
                    pending.clear();
                    open_time += interval_ms;
                }
            }
            pending.push(*tick);
        }

        cursor.open_time = open_time;
        cursor.pending = pending;
        if let Some(last) = candles.last() {
            cursor.prior_close = PriorClose::Candle(*last);
        }
        candles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn minute_segmenter() -> TickSegmenter {
        TickSegmenter::new(Interval::from_secs(60.0).unwrap())
    }

    #[test]
    fn test_gap_then_buffer() {
        // Bucket [0, 60000) saw no ticks; both ticks land in [60000, 120000),
        // which cannot close until a later tick steps past it.
        let segmenter = minute_segmenter();
        let mut cursor = CandleCursor::new(0, 99.0).unwrap();
        let batch = vec![Tick::new(90_000, 100.0, 1.0), Tick::new(95_000, 102.0, 2.0)];

        let candles = segmenter.segment(&mut cursor, &batch, 180_000);

        assert_eq!(candles.len(), 1);
        assert!(candles[0].is_synthetic());
        assert_eq!(candles[0].close_time, 60_000);
        assert_eq!(candles[0].close, 99.0);
        assert_eq!(cursor.open_time(), 60_000);
        assert_eq!(cursor.pending(), batch.as_slice());
    }

    #[test]
    fn test_buffered_bucket_closes_on_next_batch() {
        let segmenter = minute_segmenter();
        let mut cursor = CandleCursor::new(0, 99.0).unwrap();
        segmenter.segment(
            &mut cursor,
            &[Tick::new(90_000, 100.0, 1.0), Tick::new(95_000, 102.0, 2.0)],
            180_000,
        );

        let candles = segmenter.segment(&mut cursor, &[Tick::new(121_000, 101.0, 1.0)], 180_000);

        assert_eq!(candles.len(), 1);
        let candle = candles[0];
        assert_eq!(candle.close_time, 120_000);
        assert_eq!(candle.open, 100.0);
        assert_eq!(candle.high, 102.0);
        assert_eq!(candle.low, 100.0);
        assert_eq!(candle.close, 102.0);
        assert_relative_eq!(candle.volume, 3.0);
        assert_eq!(cursor.open_time(), 120_000);
        assert_eq!(cursor.pending(), &[Tick::new(121_000, 101.0, 1.0)]);
        assert_eq!(cursor.last_candle(), Some(candle));
    }

    #[test]
    fn test_multi_bucket_gap_is_filled_in_order() {
        // One tick six buckets ahead closes the tick-bearing bucket and
        // synthesizes the four empty ones after it.
        let segmenter = minute_segmenter();
        let mut cursor = CandleCursor::new(0, 50.0).unwrap();
        segmenter.segment(&mut cursor, &[Tick::new(10_000, 51.0, 1.0)], 600_000);

        let candles = segmenter.segment(&mut cursor, &[Tick::new(310_000, 55.0, 2.0)], 600_000);

        assert_eq!(candles.len(), 5);
        assert_eq!(candles[0].close_time, 60_000);
        assert_eq!(candles[0].close, 51.0);
        assert!(!candles[0].is_synthetic());
        for (i, candle) in candles.iter().enumerate().skip(1) {
            assert!(candle.is_synthetic());
            assert_eq!(candle.close_time, 60_000 + 60_000 * i as i64);
            assert_eq!(candle.close, 51.0);
        }
        assert_eq!(cursor.open_time(), 300_000);
        assert_eq!(cursor.pending(), &[Tick::new(310_000, 55.0, 2.0)]);
    }

    #[test]
    fn test_open_boundary_holds_back_elapsed_buckets() {
        // The batch runs far ahead of the wall clock: only buckets closing
        // strictly before the open boundary are emitted.
        let segmenter = minute_segmenter();
        let mut cursor = CandleCursor::new(0, 99.0).unwrap();
        let batch = vec![Tick::new(10_000, 100.0, 1.0), Tick::new(250_000, 105.0, 1.0)];

        let candles = segmenter.segment(&mut cursor, &batch, 120_000);

        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].close_time, 60_000);
        assert_eq!(candles[0].close, 100.0);
        assert_eq!(cursor.open_time(), 60_000);
        // The far-future tick is buffered, not dropped.
        assert_eq!(cursor.pending(), &[Tick::new(250_000, 105.0, 1.0)]);
    }

    #[test]
    fn test_empty_batch_is_a_no_op() {
        let segmenter = minute_segmenter();
        let mut cursor = CandleCursor::new(0, 99.0).unwrap();
        let before = cursor.clone();

        let candles = segmenter.segment(&mut cursor, &[], 600_000);

        assert!(candles.is_empty());
        assert_eq!(cursor, before);
    }

    #[test]
    fn test_tick_on_exact_boundary_opens_next_bucket() {
        let segmenter = minute_segmenter();
        let mut cursor = CandleCursor::new(0, 99.0).unwrap();
        let batch = vec![Tick::new(59_999, 100.0, 1.0), Tick::new(60_000, 101.0, 1.0)];

        let candles = segmenter.segment(&mut cursor, &batch, 180_000);

        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].close_time, 60_000);
        assert_eq!(candles[0].open, 100.0);
        assert_eq!(candles[0].close, 100.0);
        assert_eq!(cursor.pending(), &[Tick::new(60_000, 101.0, 1.0)]);
    }

    #[test]
    fn test_replay_from_identical_state_is_identical() {
        let segmenter = minute_segmenter();
        let cursor = CandleCursor::new(0, 99.0).unwrap();
        let batch = vec![
            Tick::new(10_000, 100.0, 1.0),
            Tick::new(70_000, 101.0, 1.0),
            Tick::new(200_000, 103.0, 2.0),
        ];

        let mut first = cursor.clone();
        let mut second = cursor.clone();
        let candles_first = segmenter.segment(&mut first, &batch, 600_000);
        let candles_second = segmenter.segment(&mut second, &batch, 600_000);

        assert_eq!(candles_first, candles_second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cursor_never_reaches_open_boundary() {
        let segmenter = minute_segmenter();
        let mut cursor = CandleCursor::new(0, 99.0).unwrap();
        let batch: Vec<Tick> = (0..20)
            .map(|i| Tick::new(i * 30_000, 100.0 + i as f64, 1.0))
            .collect();

        segmenter.segment(&mut cursor, &batch, 300_000);

        assert!(cursor.open_time() < 300_000);
        assert_eq!(cursor.open_time(), 240_000);
    }

    #[test]
    fn test_candles_are_contiguous_across_calls() {
        let segmenter = minute_segmenter();
        let mut cursor = CandleCursor::new(0, 99.0).unwrap();
        let mut all = Vec::new();

        all.extend(segmenter.segment(
            &mut cursor,
            &[Tick::new(5_000, 100.0, 1.0), Tick::new(65_000, 101.0, 1.0)],
            600_000,
        ));
        all.extend(segmenter.segment(&mut cursor, &[Tick::new(305_000, 102.0, 1.0)], 600_000));
        all.extend(segmenter.segment(&mut cursor, &[Tick::new(425_000, 103.0, 1.0)], 600_000));

        assert!(!all.is_empty());
        for (i, candle) in all.iter().enumerate() {
            assert_eq!(candle.close_time, 60_000 * (i as i64 + 1));
        }
    }

    #[test]
    fn test_late_ticks_fold_into_next_closed_bucket() {
        // A tick older than the cursor still lands in the pending buffer and
        // is folded into the next bucket that closes, matching the
        // order-preserving contract.
        let segmenter = minute_segmenter();
        let candle = Candle::new(120_000, 100.0, 103.0, 99.5, 102.0, 7.0);
        let mut cursor = CandleCursor::resume(120_000, Vec::new(), candle);
        let batch = vec![Tick::new(119_000, 101.5, 1.0), Tick::new(185_000, 104.0, 1.0)];

        let candles = segmenter.segment(&mut cursor, &batch, 300_000);

        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].close_time, 180_000);
        assert_eq!(candles[0].open, 101.5);
        assert_eq!(cursor.pending(), &[Tick::new(185_000, 104.0, 1.0)]);
    }
}

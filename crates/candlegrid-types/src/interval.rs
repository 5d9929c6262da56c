//! Aggregation interval configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Width of one aggregation bucket, in seconds.
///
/// Construction validates that the width is finite and positive. All bucket
/// boundary arithmetic runs in integer milliseconds via [`Interval::millis`];
/// the stored width stays in seconds to match how it is configured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Interval(f64);

impl Interval {
    /// Creates an interval from a width in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonPositive`] if `secs` is not a finite
    /// positive number.
    pub fn from_secs(secs: f64) -> Result<Self, IntervalError> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(IntervalError::NonPositive(secs));
        }
        Ok(Self(secs))
    }

    /// Returns the bucket width in seconds.
    #[must_use]
    pub const fn as_secs(&self) -> f64 {
        self.0
    }

    /// Returns the bucket width in milliseconds.
    ///
    /// Computed as `(seconds * 1000) as i64`; every stored candle boundary
    /// is a multiple of this value offset from the session anchor.
    #[must_use]
    pub const fn millis(&self) -> i64 {
        (self.0 * 1000.0) as i64
    }
}

impl From<Interval> for f64 {
    fn from(interval: Interval) -> Self {
        interval.0
    }
}

impl TryFrom<f64> for Interval {
    type Error = IntervalError;

    fn try_from(secs: f64) -> Result<Self, Self::Error> {
        Self::from_secs(secs)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (number, scale) = match s.strip_suffix(['s', 'S']) {
            Some(rest) => (rest, 1.0),
            None => match s.strip_suffix(['m', 'M']) {
                Some(rest) => (rest, 60.0),
                None => match s.strip_suffix(['h', 'H']) {
                    Some(rest) => (rest, 3600.0),
                    None => (s, 1.0),
                },
            },
        };
        let secs: f64 = number
            .trim()
            .parse()
            .map_err(|_| IntervalError::Parse(s.to_string()))?;
        Self::from_secs(secs * scale).map_err(|_| IntervalError::Parse(s.to_string()))
    }
}

/// Errors from interval construction and parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntervalError {
    /// Width is not a finite positive number of seconds.
    #[error("interval must be a positive number of seconds, got {0}")]
    NonPositive(f64),

    /// Unparseable interval string.
    #[error("invalid interval '{0}', expected seconds or a number with s/m/h suffix")]
    Parse(String),
}

//! Step rounding primitives.

/// Decimal places used to absorb binary floating-point noise before and
/// after snapping to a step.
const SAFETY_DECIMALS: i32 = 10;

/// Rounds to a fixed number of decimal places.
fn round_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Rounds `value` down to the closest multiple of `step`.
#[must_use]
pub fn floor_to_step(value: f64, step: f64) -> f64 {
    round_decimals(
        round_decimals(value / step, SAFETY_DECIMALS).floor() * step,
        SAFETY_DECIMALS,
    )
}

/// Rounds `value` up to the closest multiple of `step`.
#[must_use]
pub fn ceil_to_step(value: f64, step: f64) -> f64 {
    round_decimals(
        round_decimals(value / step, SAFETY_DECIMALS).ceil() * step,
        SAFETY_DECIMALS,
    )
}

/// Rounds `value` to the nearest multiple of `step`.
#[must_use]
pub fn round_to_step(value: f64, step: f64) -> f64 {
    round_decimals((value / step).round() * step, SAFETY_DECIMALS)
}

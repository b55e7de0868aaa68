//! Shared numeric helpers. Every ratio is guarded so a zero denominator gives
//! 0, never NaN or infinity.

/// `numerator / denominator`, or 0 when the denominator is 0.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Percentage with one decimal place.
pub fn percentage(numerator: f64, denominator: f64) -> f64 {
    round1(ratio(numerator, denominator) * 100.0)
}

/// A `[0, 1]` ratio as a percentage with one decimal place.
pub fn ratio_to_percentage(ratio: f64) -> f64 {
    round1(ratio * 100.0)
}

/// Mean of a sum over `count` items, or 0 for no items.
pub fn mean(sum: f64, count: usize) -> f64 {
    ratio(sum, count as f64)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Dollar amounts keep micro-dollar precision.
pub fn round_cost(value: f64) -> f64 {
    round_to(value, 6)
}

/// Nearest whole number.
pub fn round_int(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

/// Rounds to 2 decimal places, half away from zero. The epsilon nudge keeps
/// values sitting just under a half-cent boundary (ex. 1.005 stored as
/// 1.00499…) from landing on the low side.
pub(crate) fn round_to_two(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}

/// Derived tax amount for a rate over a base.
pub(crate) fn derived_amount(base: f64, percent: f64) -> f64 {
    base * percent / 100.0
}

/// Back-computed rate for a frozen amount over a base. A zero base implies a
/// zero rate, never NaN or infinity.
pub(crate) fn implied_percent(amount: f64, base: f64) -> f64 {
    if base > 0.0 {
        amount / base * 100.0
    } else {
        0.0
    }
}

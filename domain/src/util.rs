//! Shared numeric helpers.

/// Clamp a value into the signed unit interval `[-1, 1]`.
///
/// Every derived ideology, lean and issue position passes through this,
/// regardless of what upstream validation already did. `NaN` maps to `0.0`.
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(-1.0, 1.0)
}

/// Sign of `x` as `-1`, `0` or `1`, treating `0.0` and `-0.0` as zero.
pub fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Chebyshev distance, `max(|dx|, |dy|)`.
pub fn chebyshev(dx: i32, dy: i32) -> i32 {
    dx.abs().max(dy.abs())
}

/// `-1`, `0` or `1` depending on the sign of `v`.
pub fn sign(v: i32) -> i32 {
    v.signum()
}

/// Point `step` of `steps` along `start..start + delta`, rounded towards negative infinity.
///
/// `steps` must be positive.
pub fn interpolate_floor(start: i32, delta: i32, step: i32, steps: i32) -> i32 {
    start + (step * delta).div_euclid(steps)
}

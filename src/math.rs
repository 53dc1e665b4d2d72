//! Angle and cross-fade arithmetic shared by the mode algorithms.
//!
//! Everything here is a pure function over `f32`. Angles are in degrees;
//! cross-fade fractions are in `[0, 1]`.

/// Reduce an angle to `[0, 360)`.
#[inline]
pub fn wrap360(x: f32) -> f32 {
    (x % 360.0 + 360.0) % 360.0
}

/// Reduce an angle to `[-180, 180)`.
#[inline]
pub fn wrap180(x: f32) -> f32 {
    let w = wrap360(x);
    if w < 180.0 { w } else { w - 360.0 }
}

/// Linear cross-fade between `a` and `b`.
///
/// `fraction` 0 gives `a`, 1 gives `b`.
#[inline]
pub fn balance(fraction: f32, a: f32, b: f32) -> f32 {
    a * (1.0 - fraction) + b * fraction
}

/// Cross-fade weight for a band of `width` degrees with ramped edges.
///
/// `distance` is the absolute angular distance from the band center.
/// Returns 1 well inside the band, 0 well outside, and a linear slope
/// across the ramp zone. The ramp is clamped so it never exceeds the band
/// itself or its complement.
pub fn band_weight(distance: f32, width: f32, ramp: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    let ramp = if width < 180.0 {
        ramp.min(width)
    } else {
        ramp.min(360.0 - width)
    };
    let half_width = width / 2.0;
    let half_ramp = ramp / 2.0;
    if distance <= half_width - half_ramp / 2.0 {
        1.0
    } else if distance >= half_width + half_ramp / 2.0 {
        0.0
    } else {
        ((half_width + half_ramp / 2.0) - distance) / half_ramp
    }
}

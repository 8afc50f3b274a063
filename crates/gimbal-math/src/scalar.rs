// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers and the tolerance constants shared by the kernel.
//!
//! Every threshold the kernel uses to detect degenerate input lives here so
//! that callers can reason about fallbacks without reading each type.

use core::f32::consts::TAU;

/// Degeneracy and equality threshold for [`crate::Vec3`].
///
/// Two vectors compare equal when their distance is below this value, and a
/// vector whose length is at or below it normalizes to zero.
pub const EPSILON: f32 = 1e-5;

/// Length at or below which a quaternion is treated as degenerate and
/// normalizes to identity.
pub const QUAT_EPSILON: f32 = 1e-6;

/// Dot product above which two quaternions are considered the same rotation.
pub const QUAT_DOT_EQUALITY: f32 = 0.999999;

/// Fraction of the squared quaternion norm past which Euler extraction takes
/// a gimbal-lock branch (pitch within roughly 1.15° of ±90°).
pub const GIMBAL_LOCK_THRESHOLD: f32 = 0.4999;

/// `sin(theta)` below which slerp degrades to a normalized linear blend.
pub const SLERP_LINEAR_THRESHOLD: f32 = 1e-3;

/// Multiply degrees by this to get radians.
pub const DEG2RAD: f32 = TAU / 360.0;

/// Multiply radians by this to get degrees.
pub const RAD2DEG: f32 = 360.0 / TAU;

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
///
/// The range is expected to be ordered; a reversed range is reported in
/// debug builds and otherwise resolves to `min`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Clamps `value` to `[0, 1]`.
pub fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * DEG2RAD
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * RAD2DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp01_bounds_both_ends() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(7.0), 1.0);
    }

    #[test]
    fn conversion_constants_are_reciprocal() {
        assert!((DEG2RAD * RAD2DEG - 1.0).abs() < 1e-6);
        assert!((deg_to_rad(180.0) - core::f32::consts::PI).abs() < 1e-6);
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f32::consts::FRAC_PI_2;
use core::fmt;
use core::ops::Mul;

use tracing::trace;

use crate::scalar::{
    clamp, clamp01, rad_to_deg, DEG2RAD, GIMBAL_LOCK_THRESHOLD, QUAT_DOT_EQUALITY, QUAT_EPSILON,
    RAD2DEG, SLERP_LINEAR_THRESHOLD,
};
use crate::{Mat4, Vec3};

/// Rotation quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * Unit length is intended but not enforced. Raw construction and
///   [`Quat::multiply`] chains can drift; call [`Quat::normalize`] to restore
///   it. Interpolation helpers normalize their output.
/// * Equality is the near-parallel test `dot(a, b) > 0.999999`, not
///   component equality.
/// * Radian-based APIs are the primitives; [`Quat::euler`] and
///   [`Quat::euler_angles`] are the degree-based conveniences.
///
/// # Euler convention
/// An Euler vector `(x, y, z)` holds roll about X, pitch about Y and yaw about
/// Z. The rotation is `Rz(yaw) · Ry(pitch) · Rx(roll)`: roll is applied
/// first, yaw last. [`Quat::from_euler`] and [`Quat::to_euler`] both use this
/// order, so no component reordering happens during extraction.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    ///
    /// Components are taken verbatim; use [`Quat::from_axis_angle`] or
    /// [`Quat::from_euler`] to build a rotation.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// X (first imaginary) component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y (second imaginary) component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z (third imaginary) component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// W (scalar) component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// `other`, negated when it lies in the hemisphere opposite `self`.
    fn hemisphere_aligned(&self, other: &Self) -> Self {
        if self.dot(other) < 0.0 {
            Self::new(
                -other.component(0),
                -other.component(1),
                -other.component(2),
                -other.component(3),
            )
        } else {
            *other
        }
    }

    /// Weighted component sum `wa * self + wb * other` (not normalized).
    fn blend(&self, wa: f32, other: &Self, wb: f32) -> Self {
        Self::new(
            wa * self.component(0) + wb * other.component(0),
            wa * self.component(1) + wb * other.component(1),
            wa * self.component(2) + wb * other.component(2),
            wa * self.component(3) + wb * other.component(3),
        )
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `QUAT_EPSILON`.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= QUAT_EPSILON * QUAT_EPSILON {
            return Self::IDENTITY;
        }
        let norm_axis = axis.scale(1.0 / len_sq.sqrt());
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let scaled = norm_axis.scale(sin_half);
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Builds a rotation from Euler angles in radians (see the type-level
    /// convention).
    ///
    /// The half-angle sines and cosines are combined directly into the four
    /// components instead of multiplying three axis quaternions, which keeps
    /// rounding error to a single pass.
    pub fn from_euler(euler: Vec3) -> Self {
        let (sx, cx) = (euler.x() * 0.5).sin_cos();
        let (sy, cy) = (euler.y() * 0.5).sin_cos();
        let (sz, cz) = (euler.z() * 0.5).sin_cos();

        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Builds a rotation from Euler angles in degrees.
    ///
    /// # Examples
    /// ```
    /// use gimbal_math::{Quat, Vec3};
    /// // 90° of yaw turns +X into +Y.
    /// let q = Quat::euler(0.0, 0.0, 90.0);
    /// assert_eq!(q * Vec3::RIGHT, Vec3::UP);
    /// ```
    pub fn euler(x: f32, y: f32, z: f32) -> Self {
        Self::from_euler(Vec3::new(x, y, z) * DEG2RAD)
    }

    /// Extracts Euler angles in radians (see the type-level convention).
    ///
    /// Near pitch ±90° the roll and yaw axes coincide and only their
    /// combination is recoverable. When `w·y − x·z` exceeds
    /// `GIMBAL_LOCK_THRESHOLD` of the squared norm (in either sign) pitch is
    /// pinned to ±π/2, roll is forced to zero and the combined angle is
    /// reported as yaw. The three branches are mutually exclusive.
    pub fn to_euler(&self) -> Vec3 {
        let [x, y, z, w] = self.data;
        let sqx = x * x;
        let sqy = y * y;
        let sqz = z * z;
        let sqw = w * w;
        let unit = sqx + sqy + sqz + sqw;
        if unit <= QUAT_EPSILON * QUAT_EPSILON {
            return Vec3::ZERO;
        }
        let test = w * y - x * z;

        if test > GIMBAL_LOCK_THRESHOLD * unit {
            trace!(test, unit, "euler extraction at north pole gimbal lock");
            Vec3::new(0.0, FRAC_PI_2, -2.0 * x.atan2(w))
        } else if test < -GIMBAL_LOCK_THRESHOLD * unit {
            trace!(test, unit, "euler extraction at south pole gimbal lock");
            Vec3::new(0.0, -FRAC_PI_2, 2.0 * x.atan2(w))
        } else {
            let roll = (2.0 * (w * x + y * z)).atan2(sqw - sqx - sqy + sqz);
            let pitch = clamp(2.0 * test / unit, -1.0, 1.0).asin();
            let yaw = (2.0 * (w * z + x * y)).atan2(sqw + sqx - sqy - sqz);
            Vec3::new(roll, pitch, yaw)
        }
    }

    /// Extracts Euler angles in degrees.
    pub fn euler_angles(&self) -> Vec3 {
        self.to_euler() * RAD2DEG
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: applied to a vector, the result rotates by
    /// `other` first and then by `self`. Quaternion multiplication is
    /// non‑commutative.
    ///
    /// Inputs need not be normalized; when both operands are unit
    /// quaternions the product stays unit length up to floating‑point error
    /// (consider re‑normalizing over long chains).
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use gimbal_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UP, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::RIGHT, FRAC_PI_2);
    /// let composed = yaw.multiply(&pitch);
    /// let other = pitch.multiply(&yaw);
    /// assert_ne!(composed.to_array(), other.to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let aw = self.component(3);

        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        let bw = other.component(3);

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotates `point` by this quaternion.
    ///
    /// Uses the expanded rotation-matrix form rather than the literal
    /// `q · p · q⁻¹` sandwich; the result is only a pure rotation when the
    /// quaternion is unit length.
    pub fn rotate_vec3(&self, point: &Vec3) -> Vec3 {
        let [x, y, z, w] = self.data;
        let x2 = x * 2.0;
        let y2 = y * 2.0;
        let z2 = z * 2.0;
        let xx = x * x2;
        let yy = y * y2;
        let zz = z * z2;
        let xy = x * y2;
        let xz = x * z2;
        let yz = y * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        let px = point.x();
        let py = point.y();
        let pz = point.z();

        Vec3::new(
            (1.0 - (yy + zz)) * px + (xy - wz) * py + (xz + wy) * pz,
            (xy + wz) * px + (1.0 - (xx + zz)) * py + (yz - wx) * pz,
            (xz - wy) * px + (yz + wx) * py + (1.0 - (xx + yy)) * pz,
        )
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
            + self.component(3) * other.component(3)
    }

    /// Quaternion norm.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalises the quaternion; returns identity when the norm is
    /// ≤ `QUAT_EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= QUAT_EPSILON {
            trace!(len, "quat normalize of degenerate quaternion; returning identity");
            return Self::IDENTITY;
        }
        let inv = 1.0 / len;
        Self::new(
            self.component(0) * inv,
            self.component(1) * inv,
            self.component(2) * inv,
            self.component(3) * inv,
        )
    }

    /// Conjugate `(-x, -y, -z, w)`.
    ///
    /// Equals the true inverse only for unit quaternions.
    pub fn inverse(&self) -> Self {
        Self::new(
            -self.component(0),
            -self.component(1),
            -self.component(2),
            self.component(3),
        )
    }

    /// Linear blend with `t` clamped to `[0, 1]`, renormalized.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.lerp_unclamped(other, clamp01(t))
    }

    /// Linear blend without clamping `t`, renormalized.
    ///
    /// Cheaper than [`Quat::slerp`] and close to it for small angular deltas;
    /// the angular speed is not constant across `t`. `other` is negated first
    /// when it lies in the opposite hemisphere, so the blend follows the
    /// shorter arc.
    pub fn lerp_unclamped(&self, other: &Self, t: f32) -> Self {
        let other = self.hemisphere_aligned(other);
        self.blend(1.0 - t, &other, t).normalize()
    }

    /// Spherical interpolation with `t` clamped to `[0, 1]`.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        self.slerp_unclamped(other, clamp01(t))
    }

    /// Spherical interpolation without clamping `t`.
    ///
    /// The endpoints are blended with `sin((1 − t)θ) / sin θ` and
    /// `sin(tθ) / sin θ`. When `sin θ` falls below `SLERP_LINEAR_THRESHOLD`
    /// those weights are numerically unstable and the blend degrades to
    /// [`Quat::lerp_unclamped`].
    ///
    /// `q` and `-q` are the same rotation. When `dot(self, other) < 0` the
    /// target is negated before θ is measured, so `t` walks the shortest arc
    /// and `t = 1` may return `-other`.
    pub fn slerp_unclamped(&self, other: &Self, t: f32) -> Self {
        let other = self.hemisphere_aligned(other);
        let theta = clamp(self.dot(&other), -1.0, 1.0).acos().abs();
        let sin_theta = theta.sin();
        if sin_theta < SLERP_LINEAR_THRESHOLD {
            trace!(theta, "slerp endpoints nearly parallel; using normalized lerp");
            return self.lerp_unclamped(&other, t);
        }
        let wa = ((1.0 - t) * theta).sin() / sin_theta;
        let wb = (t * theta).sin() / sin_theta;
        self.blend(wa, &other, wb).normalize()
    }

    /// Angle between two rotations in degrees.
    ///
    /// Returns `0` when the rotations compare equal, otherwise
    /// `2 · acos(min(|dot|, 1))`.
    pub fn angle(&self, other: &Self) -> f32 {
        let dot = self.dot(other);
        if dot > QUAT_DOT_EQUALITY {
            return 0.0;
        }
        rad_to_deg(dot.abs().min(1.0).acos() * 2.0)
    }

    /// Rotation that turns [`Vec3::FORWARD`] towards `upwards − forward`.
    ///
    /// This is the shortest-arc construction between the fixed forward axis
    /// and the normalized difference vector. It does not build an
    /// orthonormal look-at basis and does not constrain roll.
    pub fn look_rotation(forward: Vec3, upwards: Vec3) -> Self {
        let dir = (upwards - forward).normalize();
        let axis = Vec3::FORWARD.cross(&dir);
        let dot = Vec3::FORWARD.dot(&dir);
        Self::new(axis.x(), axis.y(), axis.z(), dot + 1.0).normalize()
    }

    /// [`Quat::look_rotation`] with `upwards` fixed to [`Vec3::UP`].
    pub fn look_rotation_forward(forward: Vec3) -> Self {
        Self::look_rotation(forward, Vec3::UP)
    }

    /// Steps from `self` towards `target` by at most `max_degrees_delta`.
    ///
    /// Returns `target` unchanged when the two already compare equal.
    pub fn rotate_towards(&self, target: &Self, max_degrees_delta: f32) -> Self {
        let angle = self.angle(target);
        if angle == 0.0 {
            return *target;
        }
        self.slerp_unclamped(target, (max_degrees_delta / angle).min(1.0))
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    ///
    /// The quaternion is normalized first so drifted inputs still yield an
    /// orthonormal basis.
    pub fn to_mat4(&self) -> Mat4 {
        let q = self.normalize();
        let x = q.component(0);
        let y = q.component(1);
        let z = q.component(2);
        let w = q.component(3);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

impl PartialEq for Quat {
    fn eq(&self, other: &Self) -> bool {
        self.dot(other) > QUAT_DOT_EQUALITY
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.1},{:.1},{:.1},{:.1})",
            self.x(),
            self.y(),
            self.z(),
            self.w()
        )
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.rotate_vec3(&rhs)
    }
}

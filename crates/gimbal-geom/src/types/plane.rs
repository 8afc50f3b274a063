// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use gimbal_math::Vec3;

/// Infinite plane `n · p + d = 0` with a unit normal `n`.
///
/// Invariants:
/// - `normal` is unit length, or zero when constructed from a degenerate
///   normal or collinear points.
/// - The signed distance of a point is `normal · point + distance`; it is
///   positive on the side the normal points toward.
///
/// `area` records how the plane was built: [`Plane::from_points`] stores the
/// triangle area, every other constructor stores `distance`. Treat it as
/// meaningful only for planes built from three points.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    normal: Vec3,
    distance: f32,
    area: f32,
}

impl Plane {
    /// Plane through `point` facing `normal` (normalized internally).
    #[must_use]
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize();
        let distance = -normal.dot(&point);
        Self {
            normal,
            distance,
            area: distance,
        }
    }

    /// Plane facing `normal` (normalized internally) at signed `distance`.
    #[must_use]
    pub fn from_normal_and_distance(normal: Vec3, distance: f32) -> Self {
        Self {
            normal: normal.normalize(),
            distance,
            area: distance,
        }
    }

    /// Plane through three points.
    ///
    /// The normal is `(b − a) × (c − a)`, so swapping the winding flips it.
    /// Collinear points yield a zero normal.
    #[must_use]
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let edge_cross = (b - a).cross(&(c - a));
        let normal = edge_cross.normalize();
        Self {
            normal,
            distance: -normal.dot(&a),
            area: edge_cross.length() * 0.5,
        }
    }

    /// Unit normal.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed offset along the normal (`d` in `n · p + d = 0`).
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Triangle area for three-point planes, otherwise equal to `distance`.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.area
    }

    /// Signed distance from the plane to `point`.
    #[must_use]
    pub fn distance_to_point(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// `true` when `point` is strictly on the positive side.
    #[must_use]
    pub fn side(&self, point: &Vec3) -> bool {
        self.distance_to_point(point) > 0.0
    }

    /// `true` when both points are strictly positive, or both are on or
    /// behind the plane.
    #[must_use]
    pub fn same_side(&self, a: &Vec3, b: &Vec3) -> bool {
        self.side(a) == self.side(b)
    }

    /// Projects `point` onto the plane along the normal.
    #[must_use]
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        *point - self.normal * self.distance_to_point(point)
    }

    /// The same plane facing the opposite way.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::from_normal_and_distance(-self.normal, -self.distance)
    }

    /// Adds `normal · translation` to the plane's distance.
    ///
    /// Geometrically this moves the plane by `-translation`: a point that
    /// was on the plane now has signed distance `normal · translation`.
    #[must_use]
    pub fn translated(&self, translation: &Vec3) -> Self {
        Self::from_normal_and_distance(self.normal, self.distance + self.normal.dot(translation))
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "normal:{}, distance:{}", self.normal, self.distance)
    }
}

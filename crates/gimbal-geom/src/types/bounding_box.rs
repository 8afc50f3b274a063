// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use gimbal_math::Vec3;

/// Axis-aligned bounding box stored as a center and half-size ("extents").
///
/// `size()` and `extents()` are two views of the same state: size is twice
/// the extents. Extents are not validated; a negative component produces an
/// empty box that contains nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    center: Vec3,
    extents: Vec3,
}

impl BoundingBox {
    /// Builds a box centered at `center` with full edge lengths `size`.
    #[must_use]
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            extents: size * 0.5,
        }
    }

    /// Builds the box spanning the `min` and `max` corners.
    #[must_use]
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            extents: (max - min) * 0.5,
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Full edge lengths (`2 * extents`).
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.extents * 2.0
    }

    /// Half edge lengths.
    #[must_use]
    pub fn extents(&self) -> Vec3 {
        self.extents
    }

    /// Minimum corner (`center - extents`).
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    /// Maximum corner (`center + extents`).
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }

    /// Same box moved to `center`.
    #[must_use]
    pub fn with_center(&self, center: Vec3) -> Self {
        Self { center, ..*self }
    }

    /// Same center with full edge lengths `size`.
    #[must_use]
    pub fn with_size(&self, size: Vec3) -> Self {
        Self::new(self.center, size)
    }

    /// Same center with half edge lengths `extents`.
    #[must_use]
    pub fn with_extents(&self, extents: Vec3) -> Self {
        Self { extents, ..*self }
    }

    /// Returns `true` if `point` lies strictly inside the box.
    ///
    /// Points on any face are outside.
    #[must_use]
    pub fn contains(&self, point: &Vec3) -> bool {
        let lo = self.min().to_array();
        let hi = self.max().to_array();
        let p = point.to_array();
        (0..3).all(|i| lo[i] < p[i] && p[i] < hi[i])
    }
}

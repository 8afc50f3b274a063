// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![forbid(unsafe_code)]
#![doc = r"Geometry primitives for Gimbal.

This crate provides:
- Infinite planes with signed-distance queries (`Plane`).
- Center/extents axis-aligned boxes with point containment (`BoundingBox`).

Design notes:
- Built purely on `gimbal_math::Vec3`; no matrices or quaternions involved.
- Float32 throughout; every method returns a new value.
- Rustdoc is treated as part of the contract; public items are documented.
"]

/// Foundational geometric types.
pub mod types;

pub use types::bounding_box::BoundingBox;
pub use types::plane::Plane;

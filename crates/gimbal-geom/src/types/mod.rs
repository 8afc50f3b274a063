// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core geometry types (plane, bounding box).
//!
//! Boundary notes:
//! - Plane side tests are strict: a point exactly on the plane is not on the
//!   positive side.
//! - Bounding box containment is strict on all six faces, so boundary points
//!   are outside.

#[doc = "Axis-aligned bounding boxes stored as center and half-size."]
pub mod bounding_box;
#[doc = "Infinite planes in normal/distance form."]
pub mod plane;

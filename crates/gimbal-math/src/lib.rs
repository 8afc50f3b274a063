// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! gimbal-math: the numeric kernel for real-time 3D transforms.
//!
//! Provides `Vec3`, `Vec4`, `Quat` and a column-major `Mat4`, plus the scalar
//! tolerances that govern their degenerate-input fallbacks.
//!
//! Design notes:
//! - Every type is a `Copy` value; every operation is pure and returns a new
//!   value, so all of it is safe to call from any thread.
//! - Degenerate geometry (zero-length normals, parallel slerp endpoints,
//!   gimbal lock) resolves to a documented fallback instead of an error and
//!   emits a `tracing` event at `TRACE` level. The only error surfaced to
//!   callers is [`MathError`] for out-of-range indexed access.
//! - Axes are right-handed: `+X` right, `+Y` up, `+Z` forward.
#![forbid(unsafe_code)]

mod error;
mod mat4;
mod quat;
pub mod scalar;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::{clamp, clamp01, deg_to_rad, rad_to_deg, EPSILON};
pub use vec3::Vec3;
pub use vec4::Vec4;

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, MulAssign};

use crate::scalar::EPSILON;
use crate::{MathError, Quat, Vec3, Vec4};

/// Column‑major 4×4 matrix.
///
/// - Cell `(row, column)` lives at linear index `row + column * 4`, so
///   consecutive indices walk down a column.
/// - Represents affine transforms; perspective terms are preserved but helper
///   methods treat them homogeneously (`w = 1` for points).
/// - Equality compares the four columns exactly; there is no epsilon at the
///   matrix level.
///
/// # Examples
/// ```
/// use gimbal_math::{Mat4, Quat, Vec3, Vec4};
/// let m = Mat4::trs(Vec3::new(5.0, -3.0, 2.0), Quat::IDENTITY, Vec3::ONE);
/// assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(5.0, -3.0, 2.0, 1.0));
/// ```
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Ones on the diagonal.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, 0.0, // col 0
        0.0, 1.0, 0.0, 0.0, // col 1
        0.0, 0.0, 1.0, 0.0, // col 2
        0.0, 0.0, 0.0, 1.0, // col 3
    ]);

    /// All cells zero.
    pub const ZERO: Self = Self::new([0.0; 16]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the zero matrix.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from its four columns.
    pub fn from_columns(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        let mut data = [0.0; 16];
        for (col, v) in [c0, c1, c2, c3].iter().enumerate() {
            data[col * 4..col * 4 + 4].copy_from_slice(&v.to_array());
        }
        Self::new(data)
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    fn col(&self, col: usize) -> Vec4 {
        Vec4::new(
            self.at(0, col),
            self.at(1, col),
            self.at(2, col),
            self.at(3, col),
        )
    }

    fn cell_index(row: usize, column: usize) -> Result<usize, MathError> {
        if row < 4 && column < 4 {
            Ok(row + column * 4)
        } else {
            Err(MathError::CellOutOfRange { row, column })
        }
    }

    /// Reads the cell at column-major linear `index` (`0..16`).
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange { index, len: 16 })
    }

    /// Writes the cell at column-major linear `index` (`0..16`).
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        let cell = self
            .data
            .get_mut(index)
            .ok_or(MathError::IndexOutOfRange { index, len: 16 })?;
        *cell = value;
        Ok(())
    }

    /// Reads the cell at `(row, column)`.
    pub fn get_cell(&self, row: usize, column: usize) -> Result<f32, MathError> {
        Self::cell_index(row, column).map(|idx| self.data[idx])
    }

    /// Writes the cell at `(row, column)`.
    pub fn set_cell(&mut self, row: usize, column: usize, value: f32) -> Result<(), MathError> {
        let idx = Self::cell_index(row, column)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Returns column `index` (`0..4`).
    pub fn column(&self, index: usize) -> Result<Vec4, MathError> {
        if index < 4 {
            Ok(self.col(index))
        } else {
            Err(MathError::IndexOutOfRange { index, len: 4 })
        }
    }

    /// Returns row `index` (`0..4`).
    pub fn row(&self, index: usize) -> Result<Vec4, MathError> {
        if index < 4 {
            Ok(Vec4::new(
                self.at(index, 0),
                self.at(index, 1),
                self.at(index, 2),
                self.at(index, 3),
            ))
        } else {
            Err(MathError::IndexOutOfRange { index, len: 4 })
        }
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    #[rustfmt::skip]
    pub fn translate(translation: Vec3) -> Self {
        let [tx, ty, tz] = translation.to_array();
        Self::new([
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            tx,  ty,  tz,  1.0, // col 3 (translation)
        ])
    }

    /// Builds a rotation matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn rotate(rotation: &Quat) -> Self {
        rotation.to_mat4()
    }

    /// Builds a non-uniform scale matrix.
    #[rustfmt::skip]
    pub fn scale(scale: Vec3) -> Self {
        let [sx, sy, sz] = scale.to_array();
        Self::new([
            sx,  0.0, 0.0, 0.0, // col 0
            0.0, sy,  0.0, 0.0, // col 1
            0.0, 0.0, sz,  0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Composes `M = T * R * S`.
    ///
    /// Applied to a point the scale acts first, then the rotation, then the
    /// translation.
    pub fn trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self::translate(translation)
            .multiply(&Self::rotate(&rotation))
            .multiply(&Self::scale(scale))
    }

    /// Builds a rotation matrix from an axis and angle in radians.
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity rotation.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self::rotate(&Quat::from_axis_angle(axis, angle))
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use gimbal_math::{Mat4, Vec3};
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Multiplies a homogeneous vector (`self * v`).
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        let [x, y, z, w] = v.to_array();
        let row = |r: usize| {
            self.at(r, 0) * x + self.at(r, 1) * y + self.at(r, 2) * z + self.at(r, 3) * w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform_vec4(&Vec4::from_point(*point)).xyz()
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.transform_vec4(&Vec4::from_direction(*direction)).xyz()
    }

    /// Returns the transpose, swapping the six off-diagonal pairs.
    pub fn transpose(&self) -> Self {
        let mut out = self.data;
        for row in 0..4 {
            for col in (row + 1)..4 {
                out.swap(col * 4 + row, row * 4 + col);
            }
        }
        Self::new(out)
    }

    /// Diagonal `(m00, m11, m22)`.
    ///
    /// Only meaningful for matrices without rotation or skew; a rotated
    /// basis reports the cosine-weighted diagonal, not the scale.
    pub fn lossy_scale(&self) -> Vec3 {
        Vec3::new(self.at(0, 0), self.at(1, 1), self.at(2, 2))
    }

    /// Extracts the rotation of the upper 3×3 block.
    ///
    /// Each basis column is normalized before a trace-based decomposition,
    /// so positive non-uniform scale is tolerated. Skewed or mirrored
    /// matrices have no exact rotation and yield a best-effort result. A
    /// collapsed column yields identity. The result has `w ≥ 0`.
    pub fn rotation(&self) -> Quat {
        let basis = [0, 1, 2].map(|c| self.col(c).xyz());
        if basis.iter().any(|v| v.length() <= EPSILON) {
            return Quat::IDENTITY;
        }
        let [c0, c1, c2] = basis.map(|v| v.normalize());
        let (m00, m10, m20) = (c0.x(), c0.y(), c0.z());
        let (m01, m11, m21) = (c1.x(), c1.y(), c1.z());
        let (m02, m12, m22) = (c2.x(), c2.y(), c2.z());

        let trace = m00 + m11 + m22;
        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Quat::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Quat::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Quat::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Quat::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        };

        let q = q.normalize();
        if q.w() < 0.0 {
            Quat::new(-q.x(), -q.y(), -q.z(), -q.w())
        } else {
            q
        }
    }
}

impl PartialEq for Mat4 {
    fn eq(&self, other: &Self) -> bool {
        (0..4).all(|c| self.col(c) == other.col(c))
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:05.2}\t{:05.2}\t{:05.2}\t{:05.2}",
                self.at(row, 0),
                self.at(row, 1),
                self.at(row, 2),
                self.at(row, 3)
            )?;
        }
        Ok(())
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(value: Mat4) -> Self {
        value.data
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.transform_vec4(&rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

//! 3x3 matrix type for rotations, scales and 2D homogeneous transforms.
//!
//! # Convention
//!
//! Elements are stored flat in **column-major** order, index `3*col + row`,
//! and vectors multiply as rows on the left (`v * m`):
//!
//! ```text
//! x' = x*m[0] + y*m[1] + z*m[2]
//! y' = x*m[3] + y*m[4] + z*m[5]
//! z' = x*m[6] + y*m[7] + z*m[8]
//! ```
//!
//! Products compose right-to-left: in `a * b` the transform `b` acts on the
//! vector first.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Matrix3, RotationOrder, Vector3};
//!
//! let m = Matrix3::from_euler(90.0, 0.0, 0.0, RotationOrder::default());
//! let v = Vector3::new(0.0, 1.0, 0.0) * m;
//! assert!(v.y.abs() < 1e-6);
//! ```

use crate::{Error, Matrix4, Result, RotationOrder, Vector2, Vector3, radians};
use std::ops::{Index, Mul, MulAssign};

/// A 3x3 matrix of `f32`, flattened column-major.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix3 {
    /// Matrix elements, index `3*col + row`.
    pub m: [f32; 9],
}

impl Matrix3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 9] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);

    /// Creates a matrix from its nine flattened elements.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m0: f32, m1: f32, m2: f32,
        m3: f32, m4: f32, m5: f32,
        m6: f32, m7: f32, m8: f32,
    ) -> Self {
        Self {
            m: [m0, m1, m2, m3, m4, m5, m6, m7, m8],
        }
    }

    /// Creates from a flat array.
    #[inline]
    pub const fn from_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    /// Converts to a flat array.
    #[inline]
    pub const fn to_array(&self) -> [f32; 9] {
        self.m
    }

    /// Overwrites all nine elements.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn set(
        &mut self,
        m0: f32, m1: f32, m2: f32,
        m3: f32, m4: f32, m5: f32,
        m6: f32, m7: f32, m8: f32,
    ) {
        self.m = [m0, m1, m2, m3, m4, m5, m6, m7, m8];
    }

    /// Resets to the identity matrix.
    #[inline]
    pub fn load_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Returns element `[col][row]`, i.e. `m[3*col + row]`.
    #[inline]
    pub fn at(&self, col: usize, row: usize) -> f32 {
        self.m[3 * col + row]
    }

    /// Multiplies in place: `self = self * other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::{Matrix3, Vector3};
    ///
    /// let mut m = Matrix3::scale(Vector3::splat(2.0));
    /// m.multiply(&Matrix3::scale(Vector3::splat(3.0)));
    /// assert_eq!(m, Matrix3::scale(Vector3::splat(6.0)));
    /// ```
    pub fn multiply(&mut self, other: &Self) {
        let mut r = Self::ZERO;
        for k in 0..3 {
            for j in 0..3 {
                for i in 0..3 {
                    r.m[3 * j + k] += self.m[3 * j + i] * other.m[3 * i + k];
                }
            }
        }
        *self = r;
    }

    /// 2D translation in homogeneous form.
    #[inline]
    pub fn translation(x: f32, y: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, 1.0)
    }

    /// 2D translation from a [`Vector2`].
    #[inline]
    pub fn translation_vec(v: Vector2) -> Self {
        Self::translation(v.x, v.y)
    }

    /// Per-axis scale.
    #[inline]
    pub fn scale(v: Vector3) -> Self {
        Self::new(v.x, 0.0, 0.0, 0.0, v.y, 0.0, 0.0, 0.0, v.z)
    }

    /// Rotation about the X axis, angle in radians.
    #[inline]
    pub fn rotation_x(a: f32) -> Self {
        let (s, c) = a.sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
    }

    /// Rotation about the Y axis, angle in radians.
    #[inline]
    pub fn rotation_y(a: f32) -> Self {
        let (s, c) = a.sin_cos();
        Self::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
    }

    /// Rotation about the Z axis, angle in radians.
    #[inline]
    pub fn rotation_z(a: f32) -> Self {
        let (s, c) = a.sin_cos();
        Self::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation from Euler angles in **degrees**, composed in `order`.
    ///
    /// Each order is the closed form of a product of the axis rotations; for
    /// [`RotationOrder::Zyx`] it equals
    /// `rotation_x(x) * rotation_y(y) * rotation_z(z)` (Z acts first).
    pub fn from_euler(x: f32, y: f32, z: f32, order: RotationOrder) -> Self {
        let (s_x, c_x) = radians(x).sin_cos();
        let (s_y, c_y) = radians(y).sin_cos();
        let (s_z, c_z) = radians(z).sin_cos();

        match order {
            RotationOrder::Xzy => Self::new(
                c_y * c_z, s_x * s_y + c_x * c_y * s_z, -c_x * s_y + c_y * s_x * s_z,
                -s_z, c_x * c_z, c_z * s_x,
                c_z * s_y, -c_y * s_x + c_x * s_y * s_z, c_x * c_y + s_x * s_y * s_z,
            ),
            RotationOrder::Zyx => Self::new(
                c_y * c_z, c_y * s_z, -s_y,
                c_z * s_x * s_y - c_x * s_z, c_x * c_z + s_x * s_y * s_z, c_y * s_x,
                c_x * c_z * s_y + s_x * s_z, -c_z * s_x + c_x * s_y * s_z, c_x * c_y,
            ),
            RotationOrder::Xyz => Self::new(
                c_y * c_z, c_z * s_x * s_y + c_x * s_z, -c_x * c_z * s_y + s_x * s_z,
                -c_y * s_z, c_x * c_z - s_x * s_y * s_z, c_z * s_x + c_x * s_y * s_z,
                s_y, -c_y * s_x, c_x * c_y,
            ),
            RotationOrder::Zxy => Self::new(
                c_y * c_z - s_x * s_y * s_z, c_z * s_x * s_y + c_y * s_z, -c_x * s_y,
                -c_x * s_z, c_x * c_z, s_x,
                c_z * s_y + c_y * s_x * s_z, -c_y * c_z * s_x + s_y * s_z, c_x * c_y,
            ),
            RotationOrder::Yzx => Self::new(
                c_y * c_z, s_z, -c_z * s_y,
                s_x * s_y - c_x * c_y * s_z, c_x * c_z, c_y * s_x + c_x * s_y * s_z,
                c_x * s_y + c_y * s_x * s_z, -c_z * s_x, c_x * c_y - s_x * s_y * s_z,
            ),
            RotationOrder::Yxz => Self::new(
                c_y * c_z + s_x * s_y * s_z, c_x * s_z, -c_z * s_y + c_y * s_x * s_z,
                c_z * s_x * s_y - c_y * s_z, c_x * c_z, c_y * c_z * s_x + s_y * s_z,
                c_x * s_y, -s_x, c_x * c_y,
            ),
        }
    }

    /// [`from_euler`](Self::from_euler) taking the angles from a [`Vector3`].
    #[inline]
    pub fn from_euler_vec(euler: Vector3, order: RotationOrder) -> Self {
        Self::from_euler(euler.x, euler.y, euler.z, order)
    }

    /// Extracts the upper-left 3x3 block of a [`Matrix4`].
    #[inline]
    pub fn from_matrix4(mat: &Matrix4) -> Self {
        let m = &mat.m;
        Self::new(m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10])
    }

    /// Embeds into a [`Matrix4`] with zero translation and `[3][3] = 1`.
    #[inline]
    pub fn to_matrix4(&self) -> Matrix4 {
        let m = &self.m;
        Matrix4::new(
            m[0], m[1], m[2], 0.0,
            m[3], m[4], m[5], 0.0,
            m[6], m[7], m[8], 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new(m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|x| x.is_finite())
    }

    /// Converts to glam Mat3.
    ///
    /// glam multiplies column vectors, which is the transpose of this layout.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols_array(&self.transpose().m)
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_array(m.to_cols_array()).transpose()
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Matrix3 * Matrix3
impl Mul for Matrix3 {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: Self) -> Self {
        self.multiply(&rhs);
        self
    }
}

impl MulAssign for Matrix3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}

impl Index<usize> for Matrix3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}

impl TryFrom<&[f32]> for Matrix3 {
    type Error = Error;

    fn try_from(s: &[f32]) -> Result<Self> {
        let m: [f32; 9] = s
            .try_into()
            .map_err(|_| Error::length_mismatch(9, s.len()))?;
        Ok(Self { m })
    }
}

impl From<glam::Mat3> for Matrix3 {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_glam(m)
    }
}

impl From<Matrix3> for glam::Mat3 {
    #[inline]
    fn from(m: Matrix3) -> glam::Mat3 {
        m.to_glam()
    }
}

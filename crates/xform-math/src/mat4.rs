//! 4x4 matrix type for 3D affine and projective transforms.
//!
//! [`Matrix4`] uses the same layout as [`Matrix3`]: flat, **column-major**,
//! index `4*col + row`, with points multiplied as homogeneous row vectors
//! (`v * m`). Translation lives in `m[3]`, `m[7]`, `m[11]`.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Matrix4, Vector3};
//!
//! let m = Matrix4::translation(1.0, 2.0, 3.0) * Matrix4::scale_uniform(2.0);
//! let p = Vector3::ONE * m;
//! assert_eq!(p, Vector3::new(3.0, 4.0, 5.0));
//!
//! let back = p * m.inverse();
//! assert!((back - Vector3::ONE).len() < 1e-5);
//! ```

use crate::{Error, Matrix3, Quaternion, Result, RotationOrder, Vector3, radians};
use std::fmt;
use std::ops::{Index, Mul, MulAssign};
use tracing::{debug, trace};

/// A 4x4 matrix of `f32`, flattened column-major.
///
/// # Example
///
/// ```rust
/// use xform_math::Matrix4;
///
/// let m = Matrix4::rotation_y(30.0);
/// assert_eq!(m * Matrix4::IDENTITY, m);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix4 {
    /// Matrix elements, index `4*col + row`.
    pub m: [f32; 16],
}

impl Matrix4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    /// Creates a matrix from its sixteen flattened elements.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m0: f32, m1: f32, m2: f32, m3: f32,
        m4: f32, m5: f32, m6: f32, m7: f32,
        m8: f32, m9: f32, m10: f32, m11: f32,
        m12: f32, m13: f32, m14: f32, m15: f32,
    ) -> Self {
        Self {
            m: [
                m0, m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11, m12, m13, m14, m15,
            ],
        }
    }

    /// Creates from a flat array.
    #[inline]
    pub const fn from_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Converts to a flat array.
    #[inline]
    pub const fn to_array(&self) -> [f32; 16] {
        self.m
    }

    /// Overwrites all sixteen elements.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn set(
        &mut self,
        m0: f32, m1: f32, m2: f32, m3: f32,
        m4: f32, m5: f32, m6: f32, m7: f32,
        m8: f32, m9: f32, m10: f32, m11: f32,
        m12: f32, m13: f32, m14: f32, m15: f32,
    ) {
        *self = Self::new(
            m0, m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11, m12, m13, m14, m15,
        );
    }

    /// Resets to the identity matrix.
    #[inline]
    pub fn load_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Returns element `[col][row]`, i.e. `m[4*col + row]`.
    #[inline]
    pub fn at(&self, col: usize, row: usize) -> f32 {
        self.m[4 * col + row]
    }

    /// Multiplies in place: `self = self * other`.
    pub fn multiply(&mut self, other: &Self) {
        let mut r = Self::ZERO;
        for k in 0..4 {
            for j in 0..4 {
                for i in 0..4 {
                    r.m[4 * j + k] += self.m[4 * j + i] * other.m[4 * i + k];
                }
            }
        }
        *self = r;
    }

    /// Computes the determinant.
    ///
    /// Closed-form expansion over the 2x2 minors of the first two and last
    /// two groups of four elements.
    pub fn determinant(&self) -> f32 {
        let m = &self.m;

        let s0 = m[0] * m[5] - m[4] * m[1];
        let s1 = m[0] * m[6] - m[4] * m[2];
        let s2 = m[0] * m[7] - m[4] * m[3];
        let s3 = m[1] * m[6] - m[5] * m[2];
        let s4 = m[1] * m[7] - m[5] * m[3];
        let s5 = m[2] * m[7] - m[6] * m[3];

        let c5 = m[10] * m[15] - m[14] * m[11];
        let c4 = m[9] * m[15] - m[13] * m[11];
        let c3 = m[9] * m[14] - m[13] * m[10];
        let c2 = m[8] * m[15] - m[12] * m[11];
        let c1 = m[8] * m[14] - m[12] * m[10];
        let c0 = m[8] * m[13] - m[12] * m[9];

        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Computes the inverse via cofactors and the adjugate.
    ///
    /// A singular matrix divides by a zero determinant, producing `Inf`/`NaN`
    /// elements. Use [`try_inverse`](Self::try_inverse) to get an error instead.
    pub fn inverse(&self) -> Self {
        let mut src = [0.0f32; 16];
        for i in 0..4 {
            src[i] = self.m[i * 4];
            src[i + 4] = self.m[i * 4 + 1];
            src[i + 8] = self.m[i * 4 + 2];
            src[i + 12] = self.m[i * 4 + 3];
        }

        let mut dst = [0.0f32; 16];

        // pairs for the first 8 cofactors
        let mut tmp = [
            src[10] * src[15],
            src[11] * src[14],
            src[9] * src[15],
            src[11] * src[13],
            src[9] * src[14],
            src[10] * src[13],
            src[8] * src[15],
            src[11] * src[12],
            src[8] * src[14],
            src[10] * src[12],
            src[8] * src[13],
            src[9] * src[12],
        ];

        dst[0] = (tmp[0] * src[5] + tmp[3] * src[6] + tmp[4] * src[7])
            - (tmp[1] * src[5] + tmp[2] * src[6] + tmp[5] * src[7]);
        dst[1] = (tmp[1] * src[4] + tmp[6] * src[6] + tmp[9] * src[7])
            - (tmp[0] * src[4] + tmp[7] * src[6] + tmp[8] * src[7]);
        dst[2] = (tmp[2] * src[4] + tmp[7] * src[5] + tmp[10] * src[7])
            - (tmp[3] * src[4] + tmp[6] * src[5] + tmp[11] * src[7]);
        dst[3] = (tmp[5] * src[4] + tmp[8] * src[5] + tmp[11] * src[6])
            - (tmp[4] * src[4] + tmp[9] * src[5] + tmp[10] * src[6]);
        dst[4] = (tmp[1] * src[1] + tmp[2] * src[2] + tmp[5] * src[3])
            - (tmp[0] * src[1] + tmp[3] * src[2] + tmp[4] * src[3]);
        dst[5] = (tmp[0] * src[0] + tmp[7] * src[2] + tmp[8] * src[3])
            - (tmp[1] * src[0] + tmp[6] * src[2] + tmp[9] * src[3]);
        dst[6] = (tmp[3] * src[0] + tmp[6] * src[1] + tmp[11] * src[3])
            - (tmp[2] * src[0] + tmp[7] * src[1] + tmp[10] * src[3]);
        dst[7] = (tmp[4] * src[0] + tmp[9] * src[1] + tmp[10] * src[2])
            - (tmp[5] * src[0] + tmp[8] * src[1] + tmp[11] * src[2]);

        // pairs for the second 8 cofactors
        tmp = [
            src[2] * src[7],
            src[3] * src[6],
            src[1] * src[7],
            src[3] * src[5],
            src[1] * src[6],
            src[2] * src[5],
            src[0] * src[7],
            src[3] * src[4],
            src[0] * src[6],
            src[2] * src[4],
            src[0] * src[5],
            src[1] * src[4],
        ];

        dst[8] = (tmp[0] * src[13] + tmp[3] * src[14] + tmp[4] * src[15])
            - (tmp[1] * src[13] + tmp[2] * src[14] + tmp[5] * src[15]);
        dst[9] = (tmp[1] * src[12] + tmp[6] * src[14] + tmp[9] * src[15])
            - (tmp[0] * src[12] + tmp[7] * src[14] + tmp[8] * src[15]);
        dst[10] = (tmp[2] * src[12] + tmp[7] * src[13] + tmp[10] * src[15])
            - (tmp[3] * src[12] + tmp[6] * src[13] + tmp[11] * src[15]);
        dst[11] = (tmp[5] * src[12] + tmp[8] * src[13] + tmp[11] * src[14])
            - (tmp[4] * src[12] + tmp[9] * src[13] + tmp[10] * src[14]);
        dst[12] = (tmp[2] * src[10] + tmp[5] * src[11] + tmp[1] * src[9])
            - (tmp[4] * src[11] + tmp[0] * src[9] + tmp[3] * src[10]);
        dst[13] = (tmp[8] * src[11] + tmp[0] * src[8] + tmp[7] * src[10])
            - (tmp[6] * src[10] + tmp[9] * src[11] + tmp[1] * src[8]);
        dst[14] = (tmp[6] * src[9] + tmp[11] * src[11] + tmp[3] * src[8])
            - (tmp[10] * src[11] + tmp[2] * src[8] + tmp[7] * src[9]);
        dst[15] = (tmp[10] * src[10] + tmp[4] * src[8] + tmp[9] * src[9])
            - (tmp[8] * src[9] + tmp[11] * src[10] + tmp[5] * src[8]);

        let det = src[0] * dst[0] + src[1] * dst[1] + src[2] * dst[2] + src[3] * dst[3];
        let inv_det = 1.0 / det;
        for v in dst.iter_mut() {
            *v *= inv_det;
        }
        Self { m: dst }
    }

    /// Checked inverse.
    ///
    /// Returns [`Error::Singular`] when the determinant is zero or not
    /// finite; otherwise the same result as [`inverse`](Self::inverse).
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::Matrix4;
    ///
    /// assert!(Matrix4::scale(1.0, 0.0, 1.0).try_inverse().is_err());
    /// assert!(Matrix4::scale(1.0, 2.0, 1.0).try_inverse().is_ok());
    /// ```
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            trace!(det, "rejecting singular matrix");
            return Err(Error::singular(det));
        }
        Ok(self.inverse())
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new(
            m[0], m[4], m[8], m[12],
            m[1], m[5], m[9], m[13],
            m[2], m[6], m[10], m[14],
            m[3], m[7], m[11], m[15],
        )
    }

    /// Translation by `(x, y, z)`.
    #[inline]
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::new(
            1.0, 0.0, 0.0, x,
            0.0, 1.0, 0.0, y,
            0.0, 0.0, 1.0, z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Translation by a [`Vector3`].
    #[inline]
    pub fn translation_vec(v: Vector3) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Per-axis scale.
    #[inline]
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self::new(
            x, 0.0, 0.0, 0.0,
            0.0, y, 0.0, 0.0,
            0.0, 0.0, z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Per-axis scale from a [`Vector3`].
    #[inline]
    pub fn scale_vec(v: Vector3) -> Self {
        Self::scale(v.x, v.y, v.z)
    }

    /// Uniform scale.
    #[inline]
    pub fn scale_uniform(s: f32) -> Self {
        Self::scale(s, s, s)
    }

    /// Rotation about the X axis, angle in **degrees**.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = radians(angle).sin_cos();
        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c, s, 0.0,
            0.0, -s, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about the Y axis, angle in **degrees**.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = radians(angle).sin_cos();
        Self::new(
            c, 0.0, -s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            s, 0.0, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about the Z axis, angle in **degrees**.
    ///
    /// With this layout `Vector3::X * Matrix4::rotation_z(90.0)` lands on `-Y`.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = radians(angle).sin_cos();
        Self::new(
            c, s, 0.0, 0.0,
            -s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Model transform from a quaternion, a translation and a uniform scale.
    ///
    /// Composes `rotation * translation * scale`: the point is scaled, then
    /// translated, then the rotation is applied last (it also rotates the
    /// translation). Differs from [`transform_euler`](Self::transform_euler).
    pub fn transform(rotation: Quaternion, translation: Vector3, scale: f32) -> Self {
        let s = Self::scale_uniform(scale);
        let q = rotation.to_matrix4();
        let t = Self::translation_vec(translation);
        q * t * s
    }

    /// Model transform from a translation, Euler angles in degrees
    /// ([`RotationOrder::default`]) and a per-axis scale.
    ///
    /// Composes `translation * rotation * scale`.
    pub fn transform_euler(translation: Vector3, rotation: Vector3, scale: Vector3) -> Self {
        let t = Self::translation_vec(translation);
        let r = Matrix3::from_euler_vec(rotation, RotationOrder::default()).to_matrix4();
        let s = Self::scale_vec(scale);
        t * r * s
    }

    /// Logs the matrix at `debug` level, four elements per line.
    pub fn log(&self) {
        for (i, chunk) in self.m.chunks_exact(4).enumerate() {
            debug!(
                row = i,
                "[{:>10.4} {:>10.4} {:>10.4} {:>10.4}]",
                chunk[0], chunk[1], chunk[2], chunk[3]
            );
        }
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|x| x.is_finite())
    }

    /// Converts to glam Mat4.
    ///
    /// glam multiplies column vectors, which is the transpose of this layout.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.transpose().m)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_array(m.to_cols_array()).transpose()
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.m.chunks_exact(4) {
            writeln!(f, "[{} {} {} {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

// Matrix4 * Matrix4
impl Mul for Matrix4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        let mut r = [0.0f32; 16];
        for (i, row) in r.chunks_exact_mut(4).enumerate() {
            for (j, out) in row.iter_mut().enumerate() {
                *out = a[4 * i] * b[j]
                    + a[4 * i + 1] * b[4 + j]
                    + a[4 * i + 2] * b[8 + j]
                    + a[4 * i + 3] * b[12 + j];
            }
        }
        Self { m: r }
    }
}

impl MulAssign for Matrix4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Index<usize> for Matrix4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}

impl TryFrom<&[f32]> for Matrix4 {
    type Error = Error;

    fn try_from(s: &[f32]) -> Result<Self> {
        let m: [f32; 16] = s
            .try_into()
            .map_err(|_| Error::length_mismatch(16, s.len()))?;
        Ok(Self { m })
    }
}

impl From<glam::Mat4> for Matrix4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Matrix4> for glam::Mat4 {
    #[inline]
    fn from(m: Matrix4) -> glam::Mat4 {
        m.to_glam()
    }
}

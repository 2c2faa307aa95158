//! 3D vector type.
//!
//! [`Vector3`] is the point/direction type consumed by the matrix builders,
//! the quaternion axis-angle conversions and the camera helpers.
//!
//! # Transforming points
//!
//! Multiplying a vector by a [`Matrix4`] treats it as a homogeneous row
//! vector with `w = 1`, so the translation stored in `m[3]`, `m[7]`, `m[11]`
//! is applied:
//!
//! ```rust
//! use xform_math::{Matrix4, Vector3};
//!
//! let p = Vector3::new(1.0, 2.0, 3.0) * Matrix4::translation(10.0, 0.0, 0.0);
//! assert_eq!(p, Vector3::new(11.0, 2.0, 3.0));
//! ```

use crate::{Matrix3, Matrix4};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 3D vector of `f32`.
///
/// Equality is exact per component; use the `approx` feature for tolerant
/// comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vector3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vector3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Alias of [`Vector3::ZERO`].
    pub const ORIGIN: Self = Self::ZERO;

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Alias of [`Vector3::ONE`], the neutral per-axis scale.
    pub const IDENTITY: Self = Self::ONE;

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::Vector3;
    ///
    /// assert_eq!(Vector3::splat(2.0), Vector3::new(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Overwrites all three components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Dot product.
    ///
    /// Callable as `a.dot(b)` or `Vector3::dot(a, b)`.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other` (right-hand rule).
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::Vector3;
    ///
    /// assert_eq!(Vector3::cross(Vector3::X, Vector3::Y), Vector3::Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn len(self) -> f32 {
        self.len2().sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn len2(self) -> f32 {
        self.dot(self)
    }

    /// Normalizes in place and returns `self` for chaining.
    ///
    /// A zero-length vector is left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::Vector3;
    ///
    /// let mut v = Vector3::ZERO;
    /// v.normalize();
    /// assert_eq!(v, Vector3::ZERO);
    /// ```
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.len();
        if len != 0.0 {
            *self /= len;
        }
        self
    }

    /// Returns a normalized copy.
    ///
    /// Unlike [`normalize`](Self::normalize) there is no zero check: a zero
    /// vector produces `NaN` components.
    #[inline]
    pub fn normalized(self) -> Self {
        let inv = 1.0 / self.len();
        self * inv
    }

    /// Returns the negated vector.
    #[inline]
    pub fn reverse(self) -> Self {
        -self
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Sets all components to zero.
    #[inline]
    pub fn zeroify(&mut self) {
        *self = Self::ZERO;
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn dist(a: Self, b: Self) -> f32 {
        (b - a).len()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// Indexing
impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

macro_rules! impl_vector3_op {
    ($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident, $sym:tt) => {
        // Vector3 op Vector3 (component-wise)
        impl $op for Vector3 {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: Self) -> Self {
                Self::new(self.x $sym rhs.x, self.y $sym rhs.y, self.z $sym rhs.z)
            }
        }

        // Vector3 op f32
        impl $op<f32> for Vector3 {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: f32) -> Self {
                Self::new(self.x $sym rhs, self.y $sym rhs, self.z $sym rhs)
            }
        }

        impl $op_assign for Vector3 {
            #[inline]
            fn $fn_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl $op_assign<f32> for Vector3 {
            #[inline]
            fn $fn_assign(&mut self, rhs: f32) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_vector3_op!(Add, add, AddAssign, add_assign, +);
impl_vector3_op!(Sub, sub, SubAssign, sub_assign, -);
impl_vector3_op!(Mul, mul, MulAssign, mul_assign, *);
impl_vector3_op!(Div, div, DivAssign, div_assign, /);

// f32 * Vector3
impl Mul<Vector3> for f32 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

// Vector3 * Matrix4 (homogeneous row vector, w = 1)
impl Mul<Matrix4> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Matrix4) -> Self {
        let m = &rhs.m;
        Self::new(
            self.x * m[0] + self.y * m[1] + self.z * m[2] + m[3],
            self.x * m[4] + self.y * m[5] + self.z * m[6] + m[7],
            self.x * m[8] + self.y * m[9] + self.z * m[10] + m[11],
        )
    }
}

impl MulAssign<Matrix4> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix4) {
        *self = *self * rhs;
    }
}

// Vector3 * Matrix3 (same layout, no translation term)
impl Mul<Matrix3> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Matrix3) -> Self {
        let m = &rhs.m;
        Self::new(
            self.x * m[0] + self.y * m[1] + self.z * m[2],
            self.x * m[3] + self.y * m[4] + self.z * m[5],
            self.x * m[6] + self.y * m[7] + self.z * m[8],
        )
    }
}

impl MulAssign<Matrix3> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix3) {
        *self = *self * rhs;
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(v: Vector3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vector3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vector3> for glam::Vec3 {
    #[inline]
    fn from(v: Vector3) -> glam::Vec3 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vector3_ops() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(b / Vector3::new(4.0, 5.0, 2.0), Vector3::new(1.0, 1.0, 3.0));
        assert_eq!(a + 1.0, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, a.reverse());
    }

    #[test]
    fn test_vector3_assign_ops() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::ONE;
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
        v -= 2.0;
        assert_eq!(v, Vector3::new(0.0, 1.0, 2.0));
        v *= Vector3::new(5.0, 5.0, 5.0);
        assert_eq!(v, Vector3::new(0.0, 5.0, 10.0));
        v /= 5.0;
        assert_eq!(v, Vector3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_vector3_dot_cross() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(Vector3::dot(a, b), 32.0);
        assert_eq!(Vector3::cross(Vector3::Y, Vector3::Z), Vector3::X);
        assert_eq!(Vector3::cross(Vector3::Y, Vector3::X), -Vector3::Z);

        let c = a.cross(b);
        assert_eq!(c.dot(a), 0.0);
        assert_eq!(c.dot(b), 0.0);
    }

    #[test]
    fn test_vector3_length() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(v.len2(), 49.0);
        assert_eq!(v.len(), 7.0);
        assert_eq!(Vector3::dist(Vector3::ZERO, v), 7.0);
    }

    #[test]
    fn test_vector3_normalize() {
        let mut v = Vector3::new(0.0, 3.0, 4.0);
        v.normalize();
        assert_abs_diff_eq!(v.len(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.y, 0.6, epsilon = 1e-6);

        let mut zero = Vector3::ZERO;
        zero.normalize();
        assert_eq!(zero, Vector3::ZERO);
    }

    #[test]
    fn test_vector3_normalized_has_no_zero_guard() {
        let v = Vector3::new(-5.0, 0.5, 12.0).normalized();
        assert_abs_diff_eq!(v.len(), 1.0, epsilon = 0.01);

        let nan = Vector3::ZERO.normalized();
        assert!(nan.x.is_nan() && nan.y.is_nan() && nan.z.is_nan());
    }

    #[test]
    fn test_vector3_abs_zeroify() {
        let mut v = Vector3::new(-1.0, 2.0, -3.0);
        assert_eq!(v.abs(), Vector3::new(1.0, 2.0, 3.0));
        v.zeroify();
        assert_eq!(v, Vector3::ORIGIN);
    }

    #[test]
    fn test_vector3_mul_matrix4_translates() {
        let m = Matrix4::translation(1.0, -2.0, 3.0);
        let mut v = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v * m, Vector3::new(2.0, -1.0, 4.0));
        v *= m;
        assert_eq!(v, Vector3::new(2.0, -1.0, 4.0));
    }

    #[test]
    fn test_vector3_mul_matrix3() {
        let m = Matrix3::scale(Vector3::new(2.0, 3.0, 4.0));
        let mut v = Vector3::ONE;
        v *= m;
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_vector3_index() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[2], 3.0);
        v[0] = 7.0;
        assert_eq!(v.x, 7.0);
    }
}

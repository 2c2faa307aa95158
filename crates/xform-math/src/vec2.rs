//! 2D vector type.
//!
//! [`Vector2`] is mostly used as input to [`Matrix3::translation_vec`](crate::Matrix3::translation_vec).

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 2D vector of `f32`.
///
/// Equality is exact per component.
///
/// # Example
///
/// ```rust
/// use xform_math::Vector2;
///
/// let mut v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// v.normalize();
/// assert!((v.length() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vector2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vector2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Alias of [`Vector2::ZERO`].
    pub const ORIGIN: Self = Self::ZERO;

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Alias of [`Vector2::ONE`].
    pub const IDENTITY: Self = Self::ONE;

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Overwrites both components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the negated vector.
    #[inline]
    pub fn reverse(self) -> Self {
        -self
    }

    /// Normalizes in place.
    ///
    /// A zero-length vector is left unchanged.
    #[inline]
    pub fn normalize(&mut self) {
        let len = self.length();
        if len != 0.0 {
            self.x /= len;
            self.y /= len;
        }
    }

    /// Clamps each component to `[lo, hi]` in place.
    #[inline]
    pub fn clamp(&mut self, lo: f32, hi: f32) {
        self.x = crate::clamp(self.x, lo, hi);
        self.y = crate::clamp(self.y, lo, hi);
    }

    /// Sets both components to zero.
    #[inline]
    pub fn zeroify(&mut self) {
        *self = Self::ZERO;
    }

    /// Dot product.
    #[inline]
    pub fn dot(a: Self, b: Self) -> f32 {
        a.x * b.x + a.y * b.y
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn dist(a: Self, b: Self) -> f32 {
        (b - a).length()
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts to glam Vec2.
    #[inline]
    pub fn to_glam(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }

    /// Creates from glam Vec2.
    #[inline]
    pub fn from_glam(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2 index out of bounds: {}", i),
        }
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Component-wise and scalar binary operators, plus their compound forms.
macro_rules! impl_vector2_op {
    ($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident, $sym:tt) => {
        impl $op for Vector2 {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: Self) -> Self {
                Self::new(self.x $sym rhs.x, self.y $sym rhs.y)
            }
        }

        impl $op<f32> for Vector2 {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: f32) -> Self {
                Self::new(self.x $sym rhs, self.y $sym rhs)
            }
        }

        impl $op_assign for Vector2 {
            #[inline]
            fn $fn_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl $op_assign<f32> for Vector2 {
            #[inline]
            fn $fn_assign(&mut self, rhs: f32) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_vector2_op!(Add, add, AddAssign, add_assign, +);
impl_vector2_op!(Sub, sub, SubAssign, sub_assign, -);
impl_vector2_op!(Mul, mul, MulAssign, mul_assign, *);
impl_vector2_op!(Div, div, DivAssign, div_assign, /);

// f32 * Vector2
impl Mul<Vector2> for f32 {
    type Output = Vector2;

    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(v: Vector2) -> [f32; 2] {
        v.to_array()
    }
}

impl From<glam::Vec2> for Vector2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vector2> for glam::Vec2 {
    #[inline]
    fn from(v: Vector2) -> glam::Vec2 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2_ops() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(4.0, 6.0);

        assert_eq!(a + b, Vector2::new(5.0, 8.0));
        assert_eq!(b - a, Vector2::new(3.0, 4.0));
        assert_eq!(a * b, Vector2::new(4.0, 12.0));
        assert_eq!(b / a, Vector2::new(4.0, 3.0));
        assert_eq!(a + 1.0, Vector2::new(2.0, 3.0));
        assert_eq!(a - 1.0, Vector2::new(0.0, 1.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vector2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vector2::new(2.0, 3.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn test_vector2_assign_ops() {
        let mut v = Vector2::new(1.0, 2.0);
        v += Vector2::ONE;
        assert_eq!(v, Vector2::new(2.0, 3.0));
        v *= 2.0;
        assert_eq!(v, Vector2::new(4.0, 6.0));
        v -= 1.0;
        assert_eq!(v, Vector2::new(3.0, 5.0));
        v /= Vector2::new(3.0, 5.0);
        assert_eq!(v, Vector2::ONE);
    }

    #[test]
    fn test_vector2_equality_is_exact() {
        assert_ne!(Vector2::new(1.0, 1.0), Vector2::new(1.0, 1.0 + 1e-6));
    }

    #[test]
    fn test_vector2_normalize() {
        let mut v = Vector2::new(3.0, 4.0);
        v.normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);

        let mut zero = Vector2::ZERO;
        zero.normalize();
        assert_eq!(zero, Vector2::ZERO);
    }

    #[test]
    fn test_vector2_dot_dist() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 1.0);
        assert_eq!(Vector2::dot(a, b), 0.0);
        assert!((Vector2::dist(a, b) - 2.0f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_vector2_clamp_zeroify() {
        let mut v = Vector2::new(-2.0, 5.0);
        v.clamp(-1.0, 1.0);
        assert_eq!(v, Vector2::new(-1.0, 1.0));
        v.zeroify();
        assert_eq!(v, Vector2::ORIGIN);
    }
}

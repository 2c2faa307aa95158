//! Quaternion rotations.
//!
//! [`Quaternion`] stores `(x, y, z, w)` with `w` the scalar part. Rotation
//! semantics assume unit length, but nothing enforces it: call
//! [`Quaternion::normalize`] after accumulating products.
//!
//! # Conventions
//!
//! - Products follow the Hamilton convention; in `a * b`, `b` acts first.
//! - [`to_matrix3`](Quaternion::to_matrix3)/[`to_matrix4`](Quaternion::to_matrix4)
//!   rotate points counter-clockwise about the axis, so
//!   `Vector3::X * from_axis_angle(PI_2, Vector3::Z).to_matrix4()` is `+Y`.
//!   The axis builders on [`Matrix3`]/[`Matrix4`] turn the other way; feeding
//!   one of those to [`from_matrix3`](Quaternion::from_matrix3) yields the
//!   conjugate rotation.
//! - Axis-angle and slerp work in radians, [`from_euler_zyx`](Quaternion::from_euler_zyx)
//!   in degrees.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Quaternion, Vector3, PI_2};
//!
//! let a = Quaternion::IDENTITY;
//! let b = Quaternion::from_axis_angle(PI_2, Vector3::Y);
//! let half = a.slerp_to(b, 0.5);
//! let (_, angle) = half.to_axis_angle();
//! assert!((angle - PI_2 / 2.0).abs() < 1e-4);
//! ```

use crate::{Matrix3, Matrix4, Vector3, radians};
use std::ops::{Mul, MulAssign, Sub};

/// Dot product above which [`Quaternion::slerp`] falls back to a lerp.
pub const SLERP_LERP_THRESHOLD: f32 = 0.9999;

/// A quaternion `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Quaternion {
    /// X component of the vector part
    pub x: f32,
    /// Y component of the vector part
    pub y: f32,
    /// Z component of the vector part
    pub z: f32,
    /// Scalar part
    pub w: f32,
}

impl Quaternion {
    /// Identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new quaternion.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Overwrites all four components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        *self = Self::new(x, y, z, w);
    }

    /// Converts to an `[x, y, z, w]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared norm.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Returns a unit-length copy.
    ///
    /// No zero check: the zero quaternion yields `NaN` components.
    #[inline]
    pub fn normalize(self) -> Self {
        let k = 1.0 / self.length_squared().sqrt();
        Self::new(self.x * k, self.y * k, self.z * k, self.w * k)
    }

    /// Negates the vector part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse: the conjugate divided by the squared norm.
    ///
    /// The zero quaternion is returned unchanged.
    pub fn inverse(self) -> Self {
        let norm_sqr = self.length_squared();
        if norm_sqr > 0.0 {
            let inv = 1.0 / norm_sqr;
            return Self::new(self.x * -inv, self.y * -inv, self.z * -inv, self.w * inv);
        }
        self
    }

    /// Rotation matrix, assuming unit length.
    pub fn to_matrix3(self) -> Matrix3 {
        let (x_x, x_y, x_z, x_w) = (self.x * self.x, self.x * self.y, self.x * self.z, self.x * self.w);
        let (y_y, y_z, y_w) = (self.y * self.y, self.y * self.z, self.y * self.w);
        let (z_z, z_w) = (self.z * self.z, self.z * self.w);

        Matrix3::new(
            1.0 - 2.0 * (y_y + z_z), 2.0 * (x_y - z_w), 2.0 * (x_z + y_w),
            2.0 * (x_y + z_w), 1.0 - 2.0 * (x_x + z_z), 2.0 * (y_z - x_w),
            2.0 * (x_z - y_w), 2.0 * (y_z + x_w), 1.0 - 2.0 * (x_x + y_y),
        )
    }

    /// Rotation matrix embedded in a [`Matrix4`], assuming unit length.
    #[inline]
    pub fn to_matrix4(self) -> Matrix4 {
        self.to_matrix3().to_matrix4()
    }

    /// Returns `(axis, angle_radians)`.
    ///
    /// The axis is `(x, y, z)` divided by its length, so the identity
    /// rotation (zero vector part) yields a `NaN` axis.
    pub fn to_axis_angle(self) -> (Vector3, f32) {
        let scale = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        let axis = Vector3::new(self.x / scale, self.y / scale, self.z / scale);
        (axis, self.w.acos() * 2.0)
    }

    /// Rotation of `angle` radians about `axis`, normalized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::{Quaternion, Vector3, PI};
    ///
    /// let q = Quaternion::from_axis_angle(PI, Vector3::X);
    /// assert!((q.x - 1.0).abs() < 1e-6);
    /// assert!(q.w.abs() < 1e-6);
    /// ```
    #[inline]
    pub fn from_axis_angle(angle: f32, axis: Vector3) -> Self {
        Self::from_axis_angle_xyz(angle, axis.x, axis.y, axis.z)
    }

    /// [`from_axis_angle`](Self::from_axis_angle) with the axis given as components.
    pub fn from_axis_angle_xyz(angle: f32, x: f32, y: f32, z: f32) -> Self {
        let (s, c) = (angle / 2.0).sin_cos();
        Self::new(x * s, y * s, z * s, c).normalize()
    }

    /// Extracts the rotation from a 3x3 rotation matrix.
    ///
    /// Inverse of [`to_matrix3`](Self::to_matrix3) up to sign. Picks the
    /// trace branch when the trace is positive, otherwise the branch of the
    /// largest diagonal element.
    pub fn from_matrix3(mat: &Matrix3) -> Self {
        let m = &mat.m;
        let trace = m[0] + m[4] + m[8];

        let q = if trace > 0.0 {
            let scale = (1.0 + trace).sqrt() * 2.0;
            Self::new(
                (m[7] - m[5]) / scale,
                (m[2] - m[6]) / scale,
                (m[3] - m[1]) / scale,
                0.25 * scale,
            )
        } else if m[0] > m[4] && m[0] > m[8] {
            let scale = (1.0 + m[0] - m[4] - m[8]).sqrt() * 2.0;
            Self::new(
                0.25 * scale,
                (m[1] + m[3]) / scale,
                (m[2] + m[6]) / scale,
                (m[7] - m[5]) / scale,
            )
        } else if m[4] > m[8] {
            let scale = (1.0 + m[4] - m[0] - m[8]).sqrt() * 2.0;
            Self::new(
                (m[1] + m[3]) / scale,
                0.25 * scale,
                (m[5] + m[7]) / scale,
                (m[2] - m[6]) / scale,
            )
        } else {
            let scale = (1.0 + m[8] - m[0] - m[4]).sqrt() * 2.0;
            Self::new(
                (m[2] + m[6]) / scale,
                (m[5] + m[7]) / scale,
                0.25 * scale,
                (m[3] - m[1]) / scale,
            )
        };
        q.normalize()
    }

    /// Rotation from Euler angles in **degrees**, composed `qz * qy * qx`
    /// (pitch about X acts first, roll about Z last).
    pub fn from_euler_zyx(pitch: f32, yaw: f32, roll: f32) -> Self {
        let qx = Self::from_axis_angle_xyz(radians(pitch), 1.0, 0.0, 0.0);
        let qy = Self::from_axis_angle_xyz(radians(yaw), 0.0, 1.0, 0.0);
        let qz = Self::from_axis_angle_xyz(radians(roll), 0.0, 0.0, 1.0);
        (qz * qy * qx).normalize()
    }

    /// [`from_euler_zyx`](Self::from_euler_zyx) with `(pitch, yaw, roll)` from a [`Vector3`].
    #[inline]
    pub fn from_euler_zyx_vec(euler: Vector3) -> Self {
        Self::from_euler_zyx(euler.x, euler.y, euler.z)
    }

    /// Spherical linear interpolation from `a` to `b`.
    ///
    /// **Mutates `b`:** when `dot(a, b) < 0`, all four components of `b` are
    /// negated in place so the shorter arc is taken. Use
    /// [`slerp_to`](Self::slerp_to) to leave the endpoint alone.
    ///
    /// When the endpoints are nearly parallel (`cos > 0.9999`) the components
    /// are lerped without renormalizing.
    pub fn slerp(a: Self, b: &mut Self, t: f32) -> Self {
        let mut cos_q = a.dot(*b);

        if cos_q < 0.0 {
            *b = Self::new(-b.x, -b.y, -b.z, -b.w);
            cos_q = -cos_q;
        }

        let (k0, k1) = if cos_q > SLERP_LERP_THRESHOLD {
            (1.0 - t, t)
        } else {
            let sin_q = (1.0 - cos_q * cos_q).sqrt();
            let q = sin_q.atan2(cos_q);
            let inv_sin_q = 1.0 / sin_q;
            (((1.0 - t) * q).sin() * inv_sin_q, (t * q).sin() * inv_sin_q)
        };

        Self::new(
            a.x * k0 + b.x * k1,
            a.y * k0 + b.y * k1,
            a.z * k0 + b.z * k1,
            a.w * k0 + b.w * k1,
        )
    }

    /// Non-mutating [`slerp`](Self::slerp) from `self` to `other`.
    #[inline]
    pub fn slerp_to(self, other: Self, t: f32) -> Self {
        let mut end = other;
        Self::slerp(self, &mut end, t)
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to glam Quat.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Quat.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Quaternion * Quaternion (Hamilton product)
impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, b: Self) -> Self {
        Self::new(
            self.w * b.x + self.x * b.w + self.y * b.z - self.z * b.y,
            self.w * b.y - self.x * b.z + self.y * b.w + self.z * b.x,
            self.w * b.z + self.x * b.y - self.y * b.x + self.z * b.w,
            self.w * b.w - self.x * b.x - self.y * b.y - self.z * b.z,
        )
    }
}

impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, b: Self) {
        *self = *self * b;
    }
}

// Quaternion - Quaternion (component-wise)
impl Sub for Quaternion {
    type Output = Self;

    #[inline]
    fn sub(self, b: Self) -> Self {
        Self::new(self.x - b.x, self.y - b.y, self.z - b.z, self.w - b.w)
    }
}

impl From<glam::Quat> for Quaternion {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quaternion> for glam::Quat {
    #[inline]
    fn from(q: Quaternion) -> glam::Quat {
        q.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PI, PI_2};
    use approx::assert_abs_diff_eq;

    fn assert_quat_near(a: Quaternion, b: Quaternion, eps: f32) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
        assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
        assert_abs_diff_eq!(a.z, b.z, epsilon = eps);
        assert_abs_diff_eq!(a.w, b.w, epsilon = eps);
    }

    fn assert_same_rotation(a: Quaternion, b: Quaternion, eps: f32) {
        // q and -q are the same rotation
        let b = if a.dot(b) < 0.0 { Quaternion::new(-b.x, -b.y, -b.z, -b.w) } else { b };
        assert_quat_near(a, b, eps);
    }

    #[test]
    fn test_quat_default_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::new(0.0, 0.0, 0.0, 1.0));
        let q = Quaternion::from_axis_angle(0.7, Vector3::Y);
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY * q, q);
    }

    #[test]
    fn test_quat_mul_assign_matches_mul() {
        let a = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        let b = Quaternion::new(-0.4, 0.5, 0.1, 0.7);
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn test_quat_mul_matches_glam() {
        let a = Quaternion::from_axis_angle(0.4, Vector3::new(1.0, 2.0, 3.0).normalized());
        let b = Quaternion::from_axis_angle(-1.3, Vector3::new(-2.0, 0.5, 1.0).normalized());
        let ours = a * b;
        let theirs = a.to_glam() * b.to_glam();
        assert_quat_near(ours, Quaternion::from_glam(theirs), 1e-6);
    }

    #[test]
    fn test_quat_normalize() {
        let q = Quaternion::new(1.0, 2.0, 2.0, 4.0).normalize();
        assert_abs_diff_eq!(q.length_squared(), 1.0, epsilon = 1e-6);
        assert!(!Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize().is_finite());
    }

    #[test]
    fn test_quat_conjugate_twice() {
        let q = Quaternion::new(0.3, -0.2, 0.5, 0.8);
        assert_eq!(q.conjugate().conjugate(), q);
        assert_eq!(q.conjugate(), Quaternion::new(-0.3, 0.2, -0.5, 0.8));
    }

    #[test]
    fn test_quat_inverse() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_quat_near(q * q.inverse(), Quaternion::IDENTITY, 1e-6);

        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.inverse(), zero);
    }

    #[test]
    fn test_quat_sub() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a - a, Quaternion::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_quat_to_matrix_rotates_counter_clockwise() {
        let q = Quaternion::from_axis_angle(PI_2, Vector3::Z);
        let v = Vector3::X * q.to_matrix4();
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-6);

        let w = Vector3::X * q.to_matrix3();
        assert_abs_diff_eq!(w.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quat_to_matrix_matches_glam() {
        let q = Quaternion::from_axis_angle(1.1, Vector3::new(0.3, -0.4, 0.8).normalized());
        let ours = q.to_matrix4().to_glam();
        let theirs = glam::Mat4::from_quat(q.to_glam());
        assert!(ours.abs_diff_eq(theirs, 1e-6));
    }

    #[test]
    fn test_quat_matrix_roundtrip_all_branches() {
        let cases = [
            (0.5, Vector3::new(0.0, 0.0, 1.0)),
            (PI - 0.01, Vector3::X),
            (PI - 0.01, Vector3::Y),
            (PI - 0.01, Vector3::Z),
            (2.5, Vector3::new(1.0, 1.0, 0.0).normalized()),
            (-1.7, Vector3::new(-0.2, 0.9, 0.4).normalized()),
        ];
        for (angle, axis) in cases {
            let q = Quaternion::from_axis_angle(angle, axis);
            let back = Quaternion::from_matrix3(&q.to_matrix3());
            assert_same_rotation(q, back, 1e-4);
        }
    }

    #[test]
    fn test_quat_from_axis_builder_is_conjugate() {
        let m = Matrix3::rotation_z(0.6);
        let q = Quaternion::from_matrix3(&m);
        assert_same_rotation(q, Quaternion::from_axis_angle(-0.6, Vector3::Z), 1e-5);
    }

    #[test]
    fn test_quat_axis_angle_roundtrip() {
        let axis = Vector3::new(1.0, -2.0, 0.5).normalized();
        let q = Quaternion::from_axis_angle(1.2, axis);
        let (a, angle) = q.to_axis_angle();
        assert_abs_diff_eq!(angle, 1.2, epsilon = 1e-4);
        assert_abs_diff_eq!(a.x, axis.x, epsilon = 1e-4);
        assert_abs_diff_eq!(a.y, axis.y, epsilon = 1e-4);
        assert_abs_diff_eq!(a.z, axis.z, epsilon = 1e-4);
    }

    #[test]
    fn test_quat_axis_angle_of_identity_is_nan() {
        let (axis, angle) = Quaternion::IDENTITY.to_axis_angle();
        assert!(axis.x.is_nan() && axis.y.is_nan() && axis.z.is_nan());
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_quat_from_axis_angle_normalizes() {
        let q = Quaternion::from_axis_angle(0.8, Vector3::new(0.0, 3.0, 0.0));
        assert_abs_diff_eq!(q.length_squared(), 1.0, epsilon = 1e-6);

        // (axis * sin, cos) is scaled as a whole, so a long axis shifts weight off w
        let (s, c) = (0.4f32).sin_cos();
        let norm = (9.0 * s * s + c * c).sqrt();
        assert_eq!(q.x, 0.0);
        assert_eq!(q.z, 0.0);
        assert_abs_diff_eq!(q.y, 3.0 * s / norm, epsilon = 1e-6);
        assert_abs_diff_eq!(q.w, c / norm, epsilon = 1e-6);
    }

    #[test]
    fn test_quat_from_euler_zyx_matches_glam() {
        let q = Quaternion::from_euler_zyx(20.0, -35.0, 50.0);
        let theirs = glam::Quat::from_euler(
            glam::EulerRot::ZYX,
            radians(50.0),
            radians(-35.0),
            radians(20.0),
        );
        assert_same_rotation(q, Quaternion::from_glam(theirs), 1e-5);
        assert_eq!(Quaternion::from_euler_zyx_vec(Vector3::new(20.0, -35.0, 50.0)), q);
    }

    #[test]
    fn test_quat_from_euler_zyx_single_axis() {
        let q = Quaternion::from_euler_zyx(0.0, 90.0, 0.0);
        assert_quat_near(q, Quaternion::from_axis_angle(PI_2, Vector3::Y), 1e-6);
    }

    #[test]
    fn test_slerp_same_endpoint() {
        let a = Quaternion::from_axis_angle(0.9, Vector3::new(0.0, 0.6, 0.8));
        for t in [0.0, 0.25, 0.5, 1.0] {
            let mut b = a;
            assert_quat_near(Quaternion::slerp(a, &mut b, t), a, 1e-5);
        }
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quaternion::from_axis_angle(0.3, Vector3::X);
        let mut b = Quaternion::from_axis_angle(2.0, Vector3::Y);
        assert_quat_near(Quaternion::slerp(a, &mut b, 0.0), a, 1e-5);
        assert_quat_near(Quaternion::slerp(a, &mut b, 1.0), b, 1e-5);
    }

    #[test]
    fn test_slerp_midpoint_angle() {
        let a = Quaternion::IDENTITY;
        let mut b = Quaternion::from_axis_angle(PI_2, Vector3::Z);
        let mid = Quaternion::slerp(a, &mut b, 0.5);
        assert_quat_near(mid, Quaternion::from_axis_angle(PI_2 / 2.0, Vector3::Z), 1e-5);
    }

    #[test]
    fn test_slerp_flips_second_argument() {
        let a = Quaternion::IDENTITY;
        let original = Quaternion::new(0.0, 0.0, 0.6, -0.8);
        let mut b = original;
        let r = Quaternion::slerp(a, &mut b, 1.0);
        assert_eq!(b, Quaternion::new(-0.0, -0.0, -0.6, 0.8));
        assert_quat_near(r, b, 1e-5);
    }

    #[test]
    fn test_slerp_to_leaves_argument() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::new(0.0, 0.0, 0.6, -0.8);
        let copy = b;
        let r = a.slerp_to(b, 0.5);
        assert_eq!(b, copy);
        let mut flipped = b;
        assert_eq!(r, Quaternion::slerp(a, &mut flipped, 0.5));
    }

    #[test]
    fn test_slerp_near_parallel_lerps_without_renormalizing() {
        let a = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        let b = Quaternion::new(0.01, 0.0, 0.0, 0.99995).normalize();
        assert!(a.dot(b) > SLERP_LERP_THRESHOLD);
        let r = a.slerp_to(b, 0.5);
        let expected = Quaternion::new(
            a.x * 0.5 + b.x * 0.5,
            a.y * 0.5 + b.y * 0.5,
            a.z * 0.5 + b.z * 0.5,
            a.w * 0.5 + b.w * 0.5,
        );
        assert_eq!(r, expected);
    }
}

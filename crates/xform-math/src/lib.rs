//! # xform-math
//!
//! Small 3D math primitives for transforms, rotations and camera matrices.
//!
//! This crate provides:
//!
//! - [`Vector2`], [`Vector3`] - float tuples with arithmetic, length, dot/cross
//! - [`Matrix3`] - 3x3 rotation/scale matrices and Euler composition
//! - [`Matrix4`] - 4x4 affine/projective transforms, determinant and inverse
//! - [`Quaternion`] - rotations, axis-angle/Euler/matrix conversion, slerp
//! - Camera helpers ([`persp`], [`ortho`], [`look_at`])
//! - Angle conversion and generic scalar helpers ([`radians`], [`clamp`], ...)
//!
//! # Layout
//!
//! Matrices are flat `f32` arrays in **column-major** order (`4*col + row`
//! for [`Matrix4`], `3*col + row` for [`Matrix3`]). Points are **row vectors**
//! multiplied on the left, homogeneous with an implicit `w = 1`:
//!
//! ```text
//! x' = x*m[0] + y*m[1] + z*m[2]  + m[3]
//! y' = x*m[4] + y*m[5] + z*m[6]  + m[7]
//! z' = x*m[8] + y*m[9] + z*m[10] + m[11]
//! ```
//!
//! # Angle units
//!
//! Euler builders, `Matrix4::rotation_*` and the perspective field of view take
//! **degrees**. `Matrix3::rotation_*`, axis-angle conversions and slerp work in
//! **radians**.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Matrix4, Quaternion, Vector3};
//!
//! let q = Quaternion::from_euler_zyx(0.0, 90.0, 0.0);
//! let m = Matrix4::transform(q, Vector3::new(1.0, 2.0, 3.0), 2.0);
//! let p = Vector3::ZERO * m;
//! assert!(p.is_finite());
//! ```
//!
//! # Error handling
//!
//! Numeric operations never validate their inputs: a zero determinant or a
//! zero-length axis silently yields `Inf`/`NaN`. The few checked entry points
//! ([`Matrix4::try_inverse`], slice conversions, [`RotationOrder`] parsing)
//! return [`Result`].
//!
//! # Feature Flags
//!
//! - `approx` - implements [`approx`](https://docs.rs/approx) comparison traits
//!   for every type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
mod scalar;
mod vec2;
mod vec3;
mod mat3;
mod mat4;
mod quat;
mod projection;

#[cfg(any(test, feature = "approx"))]
mod approx_impls;

pub use error::{Error, Result};
pub use scalar::*;
pub use vec2::*;
pub use vec3::*;
pub use mat3::*;
pub use mat4::*;
pub use quat::*;
pub use projection::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat3 as GlamMat3, Mat4 as GlamMat4, Quat as GlamQuat, Vec2 as GlamVec2, Vec3 as GlamVec3};
}

//! Camera helpers: perspective and orthographic projections, view matrix.
//!
//! Each function composes onto a caller-owned [`Matrix4`] instead of
//! returning a fresh matrix, so starting from [`Matrix4::IDENTITY`] yields
//! the plain projection and starting from anything else appends to it.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Matrix4, Vector3, look_at, persp};
//!
//! let mut view = Matrix4::IDENTITY;
//! look_at(&mut view, Vector3::new(0.0, 0.0, 5.0), -Vector3::Z, Vector3::Y);
//!
//! let mut proj = Matrix4::IDENTITY;
//! persp(&mut proj, 60.0, 16.0 / 9.0, 0.1, 100.0);
//!
//! let eye_space = Vector3::ZERO * view;
//! assert!((eye_space.z + 5.0).abs() < 1e-5);
//! ```

use crate::{Matrix4, Vector3, radians};
use tracing::trace;

/// Appends a perspective projection: `m *= P`.
///
/// `fov` is the vertical field of view in degrees, `ratio` is width over
/// height. Depth maps to `(n + f) / (n - f)` and `2fn / (n - f)`, with `-1`
/// in the `w` row. A zero `ratio` or `near == far` divides by zero.
pub fn persp(m: &mut Matrix4, fov: f32, ratio: f32, near: f32, far: f32) {
    trace!(fov, ratio, near, far, "perspective");
    let f = 1.0 / (radians(fov) / 2.0).tan();
    let depth = near - far;

    *m *= Matrix4::new(
        f / ratio, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (near + far) / depth, 2.0 * far * near / depth,
        0.0, 0.0, -1.0, 0.0,
    );
}

/// Appends an orthographic projection: `m *= O`.
pub fn ortho(m: &mut Matrix4, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
    trace!(left, right, bottom, top, near, far, "orthographic");
    let q = 1.0 / (far - near);

    *m *= Matrix4::new(
        2.0 / (right - left), 0.0, 0.0, 0.0,
        0.0, 2.0 / (top - bottom), 0.0, 0.0,
        0.0, 0.0, -2.0 * q, -q * near,
        0.0, 0.0, 0.0, 1.0,
    );
}

/// Appends a right-handed view transform for a camera at `pos` looking
/// along `dir`: `m = m * rotation * translation(-pos)`.
///
/// The rotation rows are the camera's right, up and backward axes, so points
/// in front of the camera end up at negative Z. The right axis is
/// `dir x -up` and the up axis is recomputed as `right x dir`; each is
/// normalized, leaving degenerate (zero) axes as zero.
pub fn look_at(m: &mut Matrix4, pos: Vector3, dir: Vector3, up: Vector3) {
    let mut regard = (pos + dir) - pos;
    let mut normal = regard.cross(-up);
    let mut new_up = normal.cross(regard);

    regard.normalize();
    normal.normalize();
    new_up.normalize();

    let rotation = Matrix4::new(
        normal.x, normal.y, normal.z, 0.0,
        new_up.x, new_up.y, new_up.z, 0.0,
        -regard.x, -regard.y, -regard.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    *m = *m * rotation * Matrix4::translation_vec(pos.reverse());
}

//! [`approx`] comparison traits for every math type.
//!
//! Comparisons are component-wise over `f32` and pass only if every
//! component passes.

use crate::{Matrix3, Matrix4, Quaternion, Vector2, Vector3};
use approx::{AbsDiffEq, RelativeEq};

macro_rules! impl_approx {
    ($ty:ty, |$v:ident| $components:expr) => {
        impl AbsDiffEq for $ty {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                let lhs = {
                    let $v = self;
                    $components
                };
                let rhs = {
                    let $v = other;
                    $components
                };
                lhs.iter()
                    .zip(rhs.iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                let lhs = {
                    let $v = self;
                    $components
                };
                let rhs = {
                    let $v = other;
                    $components
                };
                lhs.iter()
                    .zip(rhs.iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

impl_approx!(Vector2, |v| v.to_array());
impl_approx!(Vector3, |v| v.to_array());
impl_approx!(Quaternion, |v| v.to_array());
impl_approx!(Matrix3, |v| v.m);
impl_approx!(Matrix4, |v| v.m);

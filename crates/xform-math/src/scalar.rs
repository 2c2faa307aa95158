//! Angle conversion, scalar helpers and rotation orders.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{clamp, degrees, radians, PI};
//!
//! assert_eq!(radians(180.0), PI);
//! assert_eq!(degrees(PI), 180.0);
//! assert_eq!(clamp(5, 0, 3), 3);
//! ```

use crate::{Error, Result};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// Pi, written out so every conversion uses the same literal.
#[allow(clippy::excessive_precision, clippy::approx_constant)]
pub const PI: f32 = 3.14159265358979323;

/// Half of [`PI`].
pub const PI_2: f32 = PI / 2.0;

/// Tolerance used by [`is_equal`].
pub const EQUAL_EPSILON: f32 = 0.01;

/// Converts degrees to radians.
///
/// # Example
///
/// ```rust
/// use xform_math::{radians, PI_2};
///
/// assert_eq!(radians(90.0), PI_2);
/// ```
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees / 180.0 * PI
}

/// Converts radians to degrees.
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians / PI * 180.0
}

/// Returns the smaller of two values (`b` when they compare equal).
#[inline]
pub fn min<T: PartialOrd + Copy>(a: T, b: T) -> T {
    if a > b { b } else { a }
}

/// Returns the larger of two values (`b` when they compare equal).
#[inline]
pub fn max<T: PartialOrd + Copy>(a: T, b: T) -> T {
    if a < b { b } else { a }
}

/// Clamps `v` to `[lo, hi]`.
///
/// # Example
///
/// ```rust
/// use xform_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp<T: PartialOrd + Copy>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Loose float comparison: `|a - b| < 0.01`.
///
/// Works for `f32` and `f64`.
#[inline]
pub fn is_equal<T>(a: T, b: T) -> bool
where
    T: PartialOrd + Copy + Sub<Output = T> + From<f32>,
{
    let diff = if a > b { a - b } else { b - a };
    diff < T::from(EQUAL_EPSILON)
}

/// Order in which Euler angles are composed by [`Matrix3::from_euler`](crate::Matrix3::from_euler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationOrder {
    /// Z, then Y, then X.
    Zyx,
    /// Y, then Z, then X.
    Yzx,
    /// Z, then X, then Y.
    Zxy,
    /// X, then Z, then Y.
    Xzy,
    /// Y, then X, then Z.
    #[default]
    Yxz,
    /// X, then Y, then Z.
    Xyz,
}

impl RotationOrder {
    /// All orders, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Zyx,
        Self::Yzx,
        Self::Zxy,
        Self::Xzy,
        Self::Yxz,
        Self::Xyz,
    ];

    /// Lowercase name, e.g. `"yxz"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Zyx => "zyx",
            Self::Yzx => "yzx",
            Self::Zxy => "zxy",
            Self::Xzy => "xzy",
            Self::Yxz => "yxz",
            Self::Xyz => "xyz",
        }
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotationOrder {
    type Err = Error;

    /// Parses a case-insensitive order name. `"default"` maps to [`RotationOrder::Yxz`].
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "default" {
            return Ok(Self::default());
        }
        Self::ALL
            .into_iter()
            .find(|order| order.name() == lower)
            .ok_or_else(|| Error::unknown_rotation_order(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radians_degrees() {
        assert_eq!(radians(180.0), PI);
        assert_eq!(radians(0.0), 0.0);
        assert!((degrees(radians(37.5)) - 37.5).abs() < 1e-5);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(1, 2), 1);
        assert_eq!(max(1, 2), 2);
        assert_eq!(min(2.5, -1.0), -1.0);
        assert_eq!(max(2.5, -1.0), 2.5);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(10, 0, 5), 5);
        assert_eq!(clamp(-3, 0, 5), 0);
        assert_eq!(clamp(3, 0, 5), 3);
    }

    #[test]
    fn test_is_equal() {
        assert!(is_equal(1.0f32, 1.005));
        assert!(!is_equal(1.0f32, 1.02));
        assert!(is_equal(2.0f64, 1.995));
    }

    #[test]
    fn test_rotation_order_default() {
        assert_eq!(RotationOrder::default(), RotationOrder::Yxz);
    }

    #[test]
    fn test_rotation_order_parse() {
        assert_eq!("XYZ".parse::<RotationOrder>().unwrap(), RotationOrder::Xyz);
        assert_eq!(" zxy ".parse::<RotationOrder>().unwrap(), RotationOrder::Zxy);
        assert_eq!("default".parse::<RotationOrder>().unwrap(), RotationOrder::Yxz);
        for order in RotationOrder::ALL {
            assert_eq!(order.to_string().parse::<RotationOrder>().unwrap(), order);
        }
        assert!("xy".parse::<RotationOrder>().is_err());
    }
}

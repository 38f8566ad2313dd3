pub mod angle;
pub mod precision;

use std::fmt;
use std::str::FromStr;

use nalgebra::RealField;

pub use angle::{angle_abs, angle_diff, to_angle, to_degree, to_radian};
pub use precision::{compare, is_negligible, is_zero};

/// 3D vector storage type.
pub type Vector3<T> = nalgebra::Vector3<T>;

/// 3D point type, accepted at the conversion boundary.
pub type Point3<T> = nalgebra::Point3<T>;

/// Floating-point width the kernel can be instantiated with.
///
/// The precision table lives here, keyed by width, so `f32` and `f64`
/// share every algorithm.
pub trait Real: RealField + nalgebra::Scalar + Copy + fmt::Display + FromStr {
    /// Default relative precision used by comparisons.
    const PRECISION: Self;

    /// Factor applied to the precision when testing for exact zero.
    const ZERO_PRECISION_FACTOR: Self;

    /// Returns `true` if the value is NaN.
    fn is_nan(self) -> bool;
}

impl Real for f32 {
    const PRECISION: Self = 1e-5;
    const ZERO_PRECISION_FACTOR: Self = 0.01;

    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl Real for f64 {
    const PRECISION: Self = 1e-8;
    const ZERO_PRECISION_FACTOR: Self = 0.01;

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

/// Converts an `f64` literal into the working width.
#[inline]
pub(crate) fn lit<T: Real>(value: f64) -> T {
    nalgebra::convert(value)
}

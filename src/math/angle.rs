//! Angle helpers. All angles outside this module are in degrees.

use super::{lit, Real};

/// Converts degrees to radians.
#[must_use]
pub fn to_radian<T: Real>(deg: T) -> T {
    deg * (T::pi() / lit::<T>(180.0))
}

/// Converts radians to degrees.
#[must_use]
pub fn to_degree<T: Real>(rad: T) -> T {
    rad * (lit::<T>(180.0) / T::pi())
}

/// Returns the heading of `(x, y)` in `[0, 360)` degrees.
///
/// The heading is measured from the `y` axis towards the `x` axis, i.e.
/// `atan2(x, y)`.
#[must_use]
pub fn to_angle<T: Real>(x: T, y: T) -> T {
    let deg = to_degree(x.atan2(y));
    if deg < nalgebra::zero::<T>() {
        deg + lit::<T>(360.0)
    } else {
        deg
    }
}

/// Returns the signed rotation to add to `base` to reach `test`, in `(-180, 180]`.
#[must_use]
pub fn angle_diff<T: Real>(base: T, test: T) -> T {
    let diff = test - base;
    if diff <= lit::<T>(-180.0) {
        diff + lit::<T>(360.0)
    } else if diff > lit::<T>(180.0) {
        diff - lit::<T>(360.0)
    } else {
        diff
    }
}

/// Returns the unsigned shortest rotation between `base` and `test`, in `[0, 180]`.
#[must_use]
pub fn angle_abs<T: Real>(base: T, test: T) -> T {
    let diff = (test - base).abs();
    if diff > lit::<T>(180.0) {
        lit::<T>(360.0) - diff
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn degree_radian_round_trip() {
        assert_relative_eq!(to_radian(180.0_f64), std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(to_degree(std::f64::consts::FRAC_PI_2), 90.0, epsilon = 1e-9);
        assert_relative_eq!(to_degree(to_radian(37.5_f32)), 37.5, epsilon = 1e-4);
    }

    #[test]
    fn heading_is_wrapped_into_full_turn() {
        assert_relative_eq!(to_angle(0.0_f64, 1.0), 0.0);
        assert_relative_eq!(to_angle(1.0_f64, 0.0), 90.0, epsilon = 1e-9);
        assert_relative_eq!(to_angle(0.0_f64, -1.0), 180.0, epsilon = 1e-9);
        assert_relative_eq!(to_angle(-1.0_f64, 0.0), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn diff_takes_shortest_signed_rotation() {
        assert_relative_eq!(angle_diff(10.0_f64, 30.0), 20.0);
        assert_relative_eq!(angle_diff(30.0_f64, 10.0), -20.0);
        assert_relative_eq!(angle_diff(350.0_f64, 10.0), 20.0);
        assert_relative_eq!(angle_diff(10.0_f64, 350.0), -20.0);
        assert_relative_eq!(angle_diff(0.0_f64, 180.0), 180.0);
        assert_relative_eq!(angle_diff(180.0_f64, 0.0), 180.0);
    }

    #[test]
    fn abs_diff_is_unsigned() {
        assert_relative_eq!(angle_abs(350.0_f64, 10.0), 20.0);
        assert_relative_eq!(angle_abs(10.0_f64, 350.0), 20.0);
        assert_relative_eq!(angle_abs(90.0_f64, 270.0), 180.0);
    }
}

//! Tolerance primitives every geometric predicate is built on.

use super::Real;

/// Returns `true` if `a` can be considered zero.
///
/// The threshold is `ZERO_PRECISION_FACTOR * precision`, which is stricter than
/// the relative test done by [`compare`]. NaN never passes.
#[must_use]
pub fn is_zero<T: Real>(a: T, precision: T) -> bool {
    a.abs() <= T::ZERO_PRECISION_FACTOR * precision
}

/// Compares two values for equality relative to the smaller magnitude.
///
/// - NaN on either side is never equal, not even to itself.
/// - An exact zero on one side falls back to [`is_zero`] on the other.
/// - Otherwise `|a - b| <= precision * min(|a|, |b|)`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn compare<T: Real>(a: T, b: T, precision: T) -> bool {
    if Real::is_nan(a) || Real::is_nan(b) {
        return false;
    }
    let zero = nalgebra::zero::<T>();
    if a == zero {
        return is_zero(b, precision);
    }
    if b == zero {
        return is_zero(a, precision);
    }
    (a - b).abs() <= a.abs().min(b.abs()) * precision
}

/// Returns `true` if `residual` is rounding noise next to `scale`.
///
/// Use this instead of [`compare`] when both sides of an equation were
/// computed and their true difference is zero: the values themselves may be
/// noise around zero, so only the magnitude of the inputs they were derived
/// from (`scale`) gives a meaningful tolerance. NaN never passes.
#[must_use]
pub fn is_negligible<T: Real>(residual: T, scale: T, precision: T) -> bool {
    residual.abs() <= scale.abs() * precision
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── is_zero ──

    #[test]
    fn zero_threshold_is_scaled() {
        assert!(is_zero(0.0_f64, 1e-5));
        assert!(is_zero(1e-7_f64, 1e-5));
        assert!(is_zero(-1e-7_f64, 1e-5));
        assert!(!is_zero(1e-6_f64, 1e-5));
    }

    #[test]
    fn nan_is_not_zero() {
        assert!(!is_zero(f64::NAN, 1.0));
        assert!(!is_zero(f32::NAN, 1.0));
    }

    // ── compare ──

    #[test]
    fn relative_tolerance_uses_smaller_magnitude() {
        assert!(compare(1000.0_f64, 1000.0 + 1e-6, 1e-8));
        assert!(!compare(1000.0_f64, 1000.1, 1e-8));
        assert!(compare(1.0_f32, 1.000_001, f32::PRECISION));
        assert!(!compare(1.0_f32, 1.001, f32::PRECISION));
    }

    #[test]
    fn exact_zero_delegates_to_is_zero() {
        assert!(compare(0.0_f64, 1e-11, 1e-8));
        assert!(compare(1e-11_f64, 0.0, 1e-8));
        assert!(!compare(0.0_f64, 1e-9, 1e-8));
    }

    #[test]
    fn opposite_signs_are_not_equal() {
        assert!(!compare(1.0_f64, -1.0, 1e-8));
    }

    #[test]
    fn nan_never_compares_equal() {
        for x in [0.0_f64, 1.0, -3.5, f64::INFINITY, f64::NAN] {
            assert!(!compare(f64::NAN, x, f64::PRECISION), "NaN == {x}");
            assert!(!compare(x, f64::NAN, f64::PRECISION), "{x} == NaN");
        }
    }

    // ── is_negligible ──

    #[test]
    fn noise_around_zero_is_negligible() {
        // both sides noise: compare rejects, the scaled residual accepts
        let (a, b) = (1e-15_f64, -2e-15_f64);
        assert!(!compare(a, b, f64::PRECISION));
        assert!(is_negligible(a - b, 20.0, f64::PRECISION));
    }

    #[test]
    fn residual_is_measured_against_scale() {
        assert!(is_negligible(1e-7_f64, 100.0, 1e-8));
        assert!(!is_negligible(1e-5_f64, 100.0, 1e-8));
        assert!(is_negligible(0.0_f64, 0.0, 1e-8));
        assert!(!is_negligible(1e-30_f64, 0.0, 1e-8));
        assert!(!is_negligible(f64::NAN, 1.0, 1e-8));
    }
}

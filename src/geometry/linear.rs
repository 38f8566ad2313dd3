use crate::math::Real;

/// Coefficients `(s, t)` of a linear combination of two reference vectors.
///
/// For a plane this is the point `o + s * a + t * b`; for a pair of lines it
/// is the parameter along each line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear<T> {
    /// Coefficient of the first reference vector.
    pub s: T,
    /// Coefficient of the second reference vector.
    pub t: T,
}

impl<T: Real> Linear<T> {
    /// Creates a new pair of coefficients.
    #[must_use]
    pub fn new(s: T, t: T) -> Self {
        Self { s, t }
    }

    /// Returns `(0, 0)`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(nalgebra::zero(), nalgebra::zero())
    }
}

impl<T: Real> Default for Linear<T> {
    fn default() -> Self {
        Self::zero()
    }
}

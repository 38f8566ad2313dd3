use std::fmt;

use crate::error::GeometryError;

/// Why a solver could not produce a unique answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    /// The inputs are parallel (or a direction is zero), so there is no single
    /// crossing.
    Parallel,
    /// The inputs are not parallel but do not meet, e.g. skew lines.
    Disjoint,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::Parallel => f.write_str("inputs are parallel"),
            Degeneracy::Disjoint => f.write_str("inputs do not meet"),
        }
    }
}

/// Outcome of a solver that may hit a degenerate configuration.
///
/// A degenerate outcome still carries a well-defined sentinel so callers that
/// only want a value can use [`Solution::value`] without branching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution<T> {
    /// The unique answer.
    Valid(T),
    /// No unique answer exists.
    Invalid {
        /// Documented fallback value of the solver.
        sentinel: T,
        /// Why the solver failed.
        reason: Degeneracy,
    },
}

impl<T> Solution<T> {
    /// Creates a degenerate outcome.
    #[must_use]
    pub fn invalid(sentinel: T, reason: Degeneracy) -> Self {
        Solution::Invalid { sentinel, reason }
    }

    /// Returns `true` for [`Solution::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Solution::Valid(_))
    }

    /// Returns `true` for [`Solution::Invalid`].
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the degeneracy reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<Degeneracy> {
        match self {
            Solution::Valid(_) => None,
            Solution::Invalid { reason, .. } => Some(*reason),
        }
    }

    /// Returns the answer, or the sentinel if the configuration was degenerate.
    #[must_use]
    pub fn value(self) -> T {
        match self {
            Solution::Valid(value) | Solution::Invalid { sentinel: value, .. } => value,
        }
    }

    /// Returns the answer only if it is valid.
    #[must_use]
    pub fn valid(self) -> Option<T> {
        match self {
            Solution::Valid(value) => Some(value),
            Solution::Invalid { .. } => None,
        }
    }

    /// Converts into a `Result`, dropping the sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the configuration was degenerate.
    pub fn into_result(self) -> Result<T, GeometryError> {
        match self {
            Solution::Valid(value) => Ok(value),
            Solution::Invalid { reason, .. } => Err(GeometryError::Degenerate(reason)),
        }
    }

    /// Maps the answer and the sentinel alike.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Solution<U> {
        match self {
            Solution::Valid(value) => Solution::Valid(f(value)),
            Solution::Invalid { sentinel, reason } => Solution::Invalid {
                sentinel: f(sentinel),
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_keeps_sentinel() {
        let solution = Solution::invalid(7, Degeneracy::Parallel);
        assert!(solution.is_invalid());
        assert_eq!(solution.reason(), Some(Degeneracy::Parallel));
        assert_eq!(solution.value(), 7);
        assert_eq!(solution.valid(), None);
    }

    #[test]
    fn map_applies_to_sentinel() {
        let solution = Solution::invalid(2, Degeneracy::Disjoint).map(|v| v * 10);
        assert_eq!(solution.value(), 20);
        assert_eq!(solution.reason(), Some(Degeneracy::Disjoint));

        let solution = Solution::Valid(3).map(|v| v + 1);
        assert_eq!(solution.valid(), Some(4));
    }

    #[test]
    fn into_result_reports_reason() {
        assert_eq!(Solution::Valid(1).into_result(), Ok(1));
        assert_eq!(
            Solution::invalid(0, Degeneracy::Parallel).into_result(),
            Err(GeometryError::Degenerate(Degeneracy::Parallel))
        );
    }
}

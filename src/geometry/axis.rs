use std::fmt;

/// A coordinate axis of the right-handed global frame.
///
/// Operations that act "per axis" take an `Axis` instead of being spelled out
/// three times. For projections the axis names the coordinate that is dropped,
/// so `Axis::Z` views the geometry in the X-Y plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the component index of the axis.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns the axis for a component index, wrapping modulo 3.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 3]
    }

    /// Returns the two remaining axes in cyclic order.
    ///
    /// `X -> (Y, Z)`, `Y -> (Z, X)`, `Z -> (X, Y)`. Solving a 2x2 system in
    /// this order keeps the sign convention of the cross product.
    #[must_use]
    pub fn others(self) -> (usize, usize) {
        let i = self.index();
        ((i + 1) % 3, (i + 2) % 3)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn others_follow_cyclic_order() {
        assert_eq!(Axis::X.others(), (1, 2));
        assert_eq!(Axis::Y.others(), (2, 0));
        assert_eq!(Axis::Z.others(), (0, 1));
    }

    #[test]
    fn index_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_index(axis.index()), axis);
        }
        assert_eq!(Axis::from_index(4), Axis::Y);
    }
}

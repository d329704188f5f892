use strum::VariantArray;

use crate::location::{Dimension, Location};

/// The eight king-move directions between cells of a word grid.
///
/// The declaration order is the enumeration order used everywhere neighbors are listed, which makes traversal and
/// therefore result order reproducible.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum KingStep {
    /// `(-1, -1)`
    UpLeft,
    /// `(-1, 0)`
    Up,
    /// `(-1, 1)`
    UpRight,
    /// `(0, -1)`
    Left,
    /// `(0, 1)`
    Right,
    /// `(1, -1)`
    DownLeft,
    /// `(1, 0)`
    Down,
    /// `(1, 1)`
    DownRight,
}

impl KingStep {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result is not bounds checked.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::UpLeft => location.offset_by((-1, -1)),
            Self::Up => location.offset_by((-1, 0)),
            Self::UpRight => location.offset_by((-1, 1)),
            Self::Left => location.offset_by((0, -1)),
            Self::Right => location.offset_by((0, 1)),
            Self::DownLeft => location.offset_by((1, -1)),
            Self::Down => location.offset_by((1, 0)),
            Self::DownRight => location.offset_by((1, 1)),
        }
    }

    /// Determine the direction from `a` to `b` by calling [`attempt_from`](Self::attempt_from) until one works.
    ///
    /// Returns [`None`] unless the two locations are one king move apart.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    /// Every location one step from `location` that also lies on a grid of side `dim`, in declaration order.
    pub fn neighbors_of(location: Location, dim: Dimension) -> impl Iterator<Item = Location> {
        Self::VARIANTS.iter()
            .map(move |dir| dir.attempt_from(location))
            .filter(move |neighbor| neighbor.within(dim))
    }
}

use std::fmt::{Display, Formatter};
use std::ops::Index;

use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;

use crate::cell::Label;
use crate::location::{Dimension, Location};
use crate::step::KingStep;

/// Reasons a [`Grid`] query may fail.
///
/// These only arise from a caller passing coordinates that were never on the grid; a [`Solver`](crate::Solver)
/// never produces them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum GridError {
    /// The location lies outside `[0, dim)` on at least one axis.
    #[error("location {location} is outside a {dim}x{dim} grid")]
    OutOfBounds {
        /// The offending location.
        location: Location,
        /// Side length of the grid that was queried.
        dim: Dimension,
    },
}

/// A square grid of [`Label`]s, fully populated and immutable.
///
/// [`Grid`]s should be built using a [`GridBuilder`](crate::builder::GridBuilder), which guarantees every cell holds a
/// non-empty label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    pub(crate) cells: Array2<Label>,
    pub(crate) dim: Dimension,
}

impl Grid {
    /// Side length of this grid.
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// The label at `location`.
    pub fn label(&self, location: Location) -> Result<&str, GridError> {
        self.check(location)?;
        Ok(&self[location])
    }

    /// All in-bounds king-move neighbors of `location`, in [`KingStep`] declaration order:
    /// up-left, up, up-right, left, right, down-left, down, down-right.
    pub fn neighbors(&self, location: Location) -> Result<Vec<Location>, GridError> {
        self.check(location)?;
        Ok(self.adjacent(location).collect_vec())
    }

    /// Every location on the grid in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.cells.indexed_iter().map(|(index, _)| Location::from(index))
    }

    /// Whether the locations in `path` are pairwise distinct, each on the grid, and each adjacent to the one before.
    pub fn is_simple_path(&self, path: &[Location]) -> bool {
        path.iter().all(|location| location.within(self.dim))
            && path.iter().all_unique()
            && path.iter().tuple_windows::<(_, _)>().all(|(a, b)| KingStep::direction_to(*a, *b).is_some())
    }

    /// Concatenate the labels along `path`.
    pub fn spell(&self, path: &[Location]) -> Result<String, GridError> {
        path.iter().map(|location| self.label(*location)).collect()
    }

    // callers must pass an in-bounds location
    pub(crate) fn adjacent(&self, location: Location) -> impl Iterator<Item = Location> {
        KingStep::neighbors_of(location, self.dim)
    }

    fn check(&self, location: Location) -> Result<(), GridError> {
        match location.within(self.dim) {
            true => Ok(()),
            false => Err(GridError::OutOfBounds { location, dim: self.dim }),
        }
    }
}

impl Index<Location> for Grid {
    type Output = str;

    fn index(&self, location: Location) -> &Self::Output {
        self.cells[location.as_index()].as_str()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // multi-character tiles would be ambiguous if run together
        let separator = if self.cells.iter().any(Label::is_multi_char) { " " } else { "" };

        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().join(separator))?;
        }

        Ok(())
    }
}

use ndarray::Array2;

use crate::location::{Dimension, Location};

/// The cells used by one branch of the search, from its starting cell to its current cell.
///
/// A [`PathState`] is never mutated once built. Extending it yields an independent copy, so sibling branches
/// explored from the same cell never observe each other's cells; only ancestors on the same path are visited.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathState {
    visited: Array2<bool>,
    trail: Vec<Location>,
}

impl PathState {
    /// A path consisting only of `start` on a grid of side `dim`.
    pub fn starting_at(dim: Dimension, start: Location) -> Self {
        let mut visited = Array2::from_elem((dim.get(), dim.get()), false);
        visited[start.as_index()] = true;

        Self {
            visited,
            trail: vec![start],
        }
    }

    /// A copy of this path with `next` appended and marked visited.
    pub fn extended(&self, next: Location) -> Self {
        let mut visited = self.visited.clone();
        visited[next.as_index()] = true;

        let mut trail = Vec::with_capacity(self.trail.len() + 1);
        trail.extend_from_slice(&self.trail);
        trail.push(next);

        Self { visited, trail }
    }

    /// Whether `location` is already on this path.
    pub fn contains(&self, location: Location) -> bool {
        self.visited.get(location.as_index()).copied().unwrap_or(false)
    }

    /// The cell the path currently ends on.
    pub fn head(&self) -> Location {
        self.trail[self.trail.len() - 1]
    }

    /// The cells of this path in the order they were visited.
    pub fn trail(&self) -> &[Location] {
        &self.trail
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    /// Always `false`; a path holds at least its starting cell.
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }
}

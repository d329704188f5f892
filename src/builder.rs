use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;
use tracing::debug;

use crate::cell::Label;
use crate::grid::Grid;
use crate::location::{Dimension, Location, STANDARD_DIM};

/// Reasons a builder may become invalid while building.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BuilderInvalidReason {
    /// A label was placed outside the bounds specified by `dim` on a builder.
    #[error("label placed at {0}, outside the grid")]
    FeatureOutOfBounds(Location),
    /// An empty string was given as a label.
    #[error("label at {0} is empty")]
    EmptyLabel(Location),
    /// [`build`](GridBuilder::build) was called while this location had no label.
    #[error("no label at {0}")]
    MissingLabel(Location),
    /// A bulk fill supplied the wrong number of labels.
    #[error("expected {expected} labels, got {got}")]
    WrongCellCount {
        /// `dim * dim`
        expected: usize,
        /// Labels actually supplied.
        got: usize,
    },
    /// [`from_rows`](GridBuilder::from_rows) was given the wrong number of rows.
    #[error("expected {expected} rows, got {got}")]
    WrongRowCount {
        /// Side length of the grid.
        expected: usize,
        /// Rows actually supplied.
        got: usize,
    },
    /// A row given to [`from_rows`](GridBuilder::from_rows) has the wrong number of characters.
    #[error("row {row} has {got} labels, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Side length of the grid.
        expected: usize,
        /// Characters in the row.
        got: usize,
    },
}

/// Every reason a [`GridBuilder`] refused to build.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid grid: {}", .reasons.iter().join("; "))]
pub struct InvalidGrid {
    /// Reasons in the order they were encountered.
    pub reasons: Vec<BuilderInvalidReason>,
}

/// A builder for square [`Grid`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder is invalid, further mutation does nothing; [`build`](Self::build) reports why.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    dim: Dimension,
    cells: Array2<Option<Label>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::with_dim(STANDARD_DIM)
    }
}

impl GridBuilder {
    /// Construct a new, empty [`Self`] for a `dim` by `dim` grid.
    pub fn with_dim(dim: Dimension) -> Self {
        Self {
            dim,
            cells: Array2::from_elem((dim.get(), dim.get()), None),
            invalid_reasons: Default::default(),
        }
    }

    /// Parse the comma separated, row-major encoding `"a,b,c,..."` used by form submissions.
    ///
    /// Surrounding whitespace on each entry is ignored. Exactly `dim * dim` entries are required, each non-empty.
    pub fn parse_cells(dim: Dimension, cells: &str) -> Self {
        let mut builder = Self::with_dim(dim);
        builder.fill_row_major(cells.split(',').map(str::trim));
        builder
    }

    /// Build from `dim` strings of `dim` characters each, every character becoming one label.
    pub fn from_rows<S: AsRef<str>>(dim: Dimension, rows: &[S]) -> Self {
        let mut builder = Self::with_dim(dim);

        if rows.len() != dim.get() {
            builder.invalid_reasons.push(BuilderInvalidReason::WrongRowCount { expected: dim.get(), got: rows.len() });
            return builder;
        }

        for (row_index, row) in rows.iter().enumerate() {
            let got = row.as_ref().chars().count();
            if got != dim.get() {
                builder.invalid_reasons.push(BuilderInvalidReason::RaggedRow { row: row_index, expected: dim.get(), got });
                return builder;
            }

            for (col_index, c) in row.as_ref().chars().enumerate() {
                builder.set_label(Location(row_index, col_index), c.to_string());
            }
        }

        builder
    }

    /// Place `text` at `location`, replacing any earlier label there.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) or
    /// [`EmptyLabel`](BuilderInvalidReason::EmptyLabel) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn set_label(&mut self, location: Location, text: impl Into<String>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.within(self.dim) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds(location));
            return self;
        }

        match Label::new(text) {
            None => self.invalid_reasons.push(BuilderInvalidReason::EmptyLabel(location)),
            Some(label) => self.cells[location.as_index()] = Some(label),
        }

        self
    }

    /// Place `labels` in row-major order, starting at the top left corner.
    ///
    /// May cause the builder to enter a [`WrongCellCount`](BuilderInvalidReason::WrongCellCount) invalid state if
    /// `labels` does not hold exactly `dim * dim` items, and otherwise behaves as repeated [`Self::set_label`].
    pub fn fill_row_major<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let labels = labels.into_iter().map(Into::into).collect_vec();
        let expected = self.cells.len();
        if labels.len() != expected {
            self.invalid_reasons.push(BuilderInvalidReason::WrongCellCount { expected, got: labels.len() });
            return self;
        }

        let locations = self.cells.indexed_iter().map(|(index, _)| Location::from(index)).collect_vec();
        for (location, text) in locations.into_iter().zip(labels) {
            self.set_label(location, text);
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// Missing labels are only detected by [`Self::build`].
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, or any location was never labelled, [`InvalidGrid`] says why.
    pub fn build(&self) -> Result<Grid, InvalidGrid> {
        if !self.invalid_reasons.is_empty() {
            return Err(InvalidGrid { reasons: self.invalid_reasons.clone() });
        }

        let missing = self.cells.indexed_iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| BuilderInvalidReason::MissingLabel(Location::from(index)))
            .collect_vec();
        if !missing.is_empty() {
            return Err(InvalidGrid { reasons: missing });
        }

        let cells = self.cells.map(|cell| match cell {
            Some(label) => label.clone(),
            None => unreachable!(),
        });
        debug!(dim = self.dim.get(), "built grid");

        Ok(Grid { cells, dim: self.dim })
    }
}

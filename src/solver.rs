use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::dictionary::WordIndex;
use crate::grid::Grid;
use crate::location::Location;
use crate::path::PathState;

/// A word found on the grid, with the cells that spell it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Discovery {
    /// The concatenated labels along `path`; always a word of the dictionary searched.
    pub word: String,
    /// The cells spelling `word`, from first label to last. No cell appears twice.
    pub path: Vec<Location>,
}

/// Enumerates every simple path of adjacent cells on a [`Grid`] whose labels spell a word of `D`.
///
/// The search is a depth first traversal from every cell in row-major order.
/// A branch is abandoned as soon as its string cannot begin any word, and a string is recorded each time it is reached
/// as a whole word, whether or not the branch keeps extending past it.
///
/// Results are in discovery order: by starting cell, then by [`KingStep`](crate::step::KingStep) order at each cell,
/// with a longer word reached through a string recorded before that string itself.
/// The same word reached along different paths appears once per path.
pub struct Solver<'a, D>
where
    D: WordIndex,
{
    grid: &'a Grid,
    dictionary: &'a D,
}

impl<'a, D> Solver<'a, D>
where
    D: WordIndex,
{
    /// Prepare to search `grid` for words of `dictionary`. Neither is modified.
    pub fn new(grid: &'a Grid, dictionary: &'a D) -> Self {
        Self { grid, dictionary }
    }

    /// Every word found, in discovery order, duplicates included.
    pub fn solve(&self) -> Vec<String> {
        self.discoveries().into_iter().map(|discovery| discovery.word).collect()
    }

    /// As [`Self::solve`], keeping the path behind each word.
    #[instrument(skip_all, fields(dim = self.grid.dim().get()))]
    pub fn discoveries(&self) -> Vec<Discovery> {
        let mut found = Vec::new();
        for start in self.grid.locations() {
            self.explore_from(start, &mut found);
        }

        debug!(found = found.len(), "search complete");
        found
    }

    fn explore_from(&self, start: Location, found: &mut Vec<Discovery>) {
        let before = found.len();
        self.explore(self.grid[start].to_owned(), PathState::starting_at(self.grid.dim(), start), found);
        trace!(%start, found = found.len() - before, "explored starting cell");
    }

    fn explore(&self, built: String, path: PathState, found: &mut Vec<Discovery>) {
        if self.dictionary.may_be_prefix(&built) {
            for next in self.grid.adjacent(path.head()) {
                if path.contains(next) {
                    continue;
                }

                let label = &self.grid[next];
                let mut next_built = String::with_capacity(built.len() + label.len());
                next_built.push_str(&built);
                next_built.push_str(label);

                self.explore(next_built, path.extended(next), found);
            }
        }

        // not exclusive with the branch above: "cat" is recorded on the way to "catalog"
        if self.dictionary.is_word(&built) {
            found.push(Discovery { word: built, path: path.trail().to_vec() });
        }
    }
}

impl<D> Solver<'_, D>
where
    D: WordIndex + Sync,
{
    /// As [`Self::discoveries`], exploring starting cells on the rayon thread pool.
    ///
    /// Each starting cell collects into its own vector and the vectors are concatenated in row-major order, so the
    /// output is identical to the sequential search.
    #[instrument(skip_all, fields(dim = self.grid.dim().get()))]
    pub fn par_discoveries(&self) -> Vec<Discovery> {
        let found = self.grid.locations()
            .collect_vec()
            .into_par_iter()
            .map(|start| {
                let mut found = Vec::new();
                self.explore_from(start, &mut found);
                found
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect_vec();

        debug!(found = found.len(), "parallel search complete");
        found
    }

    /// As [`Self::solve`], exploring starting cells on the rayon thread pool.
    pub fn par_solve(&self) -> Vec<String> {
        self.par_discoveries().into_iter().map(|discovery| discovery.word).collect()
    }
}

/// Find every word of `dictionary` spelled by a simple path on `grid`, in discovery order, duplicates included.
///
/// Shorthand for [`Solver::new`] followed by [`Solver::solve`].
pub fn solve<D: WordIndex>(grid: &Grid, dictionary: &D) -> Vec<String> {
    Solver::new(grid, dictionary).solve()
}

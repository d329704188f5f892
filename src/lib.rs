#![warn(missing_docs)]

//! # `lexigrid`
//!
//! A word finder for Boggle and Ruzzle style letter grids: given a square grid of labels and a sorted word list, find
//! every word spelled by a path of adjacent cells that uses no cell twice.
//! Begin by building a grid with a [`GridBuilder`](builder::GridBuilder) and a [`Dictionary`] from a word list, then
//! call [`solve()`] or construct a [`Solver`] for finer control.
//!
//! # Internals
//! Cells are adjacent if they are one king move apart. Neighbors are always listed in the fixed order of
//! [`KingStep`](step::KingStep), which makes the output order reproducible.
//!
//! The search is a depth first traversal from every cell in row-major order. Each branch carries the string spelled so
//! far and its own copy of the visited cells ([`PathState`]), so backtracking needs no undo step and starting cells can
//! be explored independently, in parallel if desired.
//!
//! Two binary searches over the sorted word list drive the traversal:
//! 1. A prefix search, which truncates each probed word to the length of the candidate before comparing.
//! If no word begins with the string built so far, the branch is abandoned.
//! 2. An exact search. A string which is a word is recorded, whether or not its branch continues; "cat" and "catalog"
//! can both be found along one path.
//!
//! Labels may be longer than one character and are concatenated whole. No case folding is done anywhere, so grid and
//! dictionary must already agree on case.

pub use cell::Label;
pub use dictionary::{Dictionary, DictionaryError, WordIndex};
pub use grid::{Grid, GridError};
pub use location::{Dimension, Location, STANDARD_DIM};
pub use path::PathState;
pub use solver::{solve, Discovery, Solver};

pub(crate) mod cell;
pub(crate) mod dictionary;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod path;
pub(crate) mod solver;
pub mod builder;
pub mod step;
#[cfg(feature = "wasm")]
pub mod wasm;

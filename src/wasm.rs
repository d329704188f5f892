use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::builder::GridBuilder;
use crate::dictionary::Dictionary;
use crate::location::Dimension;
use crate::solver::Solver;

/// Solve a `size` by `size` grid given as comma separated, row-major `cells` against the newline separated `words`.
///
/// `words` need not be sorted. Returns the found words in discovery order, or throws a message describing the
/// rejected input.
#[wasm_bindgen(js_name = solveCells)]
pub fn solve_cells(size: usize, cells: &str, words: &str) -> Result<Array, JsValue> {
    let dim = Dimension::new(size).ok_or_else(|| JsValue::from_str("grid size must be positive"))?;
    let grid = GridBuilder::parse_cells(dim, cells)
        .build()
        .map_err(|invalid| JsValue::from_str(&invalid.to_string()))?;
    let dictionary = Dictionary::from_reader_unsorted(words.as_bytes())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    Ok(Solver::new(&grid, &dictionary).solve().into_iter().map(JsValue::from).collect())
}

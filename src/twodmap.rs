// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// Anything that can be read as a width-by-height table of cells.
/// The seam search is written against this, so the same code can walk
/// a table directly or through a [`Flipper`](crate::flipper::Flipper).
pub trait GridView {
    type Cell: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get(&self, x: usize, y: usize) -> Self::Cell;
}

/// Defines the basic two-dimensional map: an addressable field of
/// cells, used both for the per-pixel energy and for the cumulative
/// cost table the seam search builds on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: usize,
    pub height: usize,
    cells: Vec<P>,
}

/// Energy of every pixel of a grid, addressed as `(column, row)`.
pub type EnergyTable = TwoDimensionalMap<f64>;

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map filled with the cell type's default.
    pub fn new(width: usize, height: usize) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width * height],
        }
    }

    /// Wrap an existing row-major vector.  Returns `None` if the
    /// vector is the wrong size for the dimensions.
    pub fn from_vec(width: usize, height: usize, cells: Vec<P>) -> Option<Self> {
        if cells.len() != width * height {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    /// The cells in row-major order.
    pub fn cells(&self) -> &[P] {
        &self.cells
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (usize, usize)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

impl<P: Default + Copy> GridView for TwoDimensionalMap<P> {
    type Cell = P;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, x: usize, y: usize) -> P {
        self[(x, y)]
    }
}

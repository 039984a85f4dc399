// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid
//!
//! A rectangular table of RGB pixels, stored column by column, so that
//! `columns[x][y]` is the pixel at column `x`, row `y`.  Removing a
//! vertical seam drops the last column; removing a horizontal seam
//! shortens every column by one.  Either way the grid stays
//! rectangular.

use crate::errors::SeamError;
use std::ops::Index;

/// Three independent color channels.  Nothing clamps them to
/// `0..=255`; the energy math doesn't care, and clamping is the
/// encoder's business.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Pixel {
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Pixel { red, green, blue }
    }
}

impl From<[i32; 3]> for Pixel {
    fn from([red, green, blue]: [i32; 3]) -> Self {
        Pixel { red, green, blue }
    }
}

/// An owned, rectangular, column-major table of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    columns: Vec<Vec<Pixel>>,
}

impl PixelGrid {
    /// Take ownership of a table of columns.  Every column must have
    /// the same length as the first.
    pub fn new(columns: Vec<Vec<Pixel>>) -> Result<Self, SeamError> {
        let height = columns.first().map_or(0, Vec::len);
        if let Some((column, found)) = columns
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != height)
        {
            return Err(SeamError::RaggedGrid {
                column,
                expected: height,
                found,
            });
        }
        Ok(PixelGrid {
            width: columns.len(),
            height,
            columns,
        })
    }

    /// Build a grid by asking `f` for the pixel at every `(x, y)`.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let columns = (0..width)
            .map(|x| (0..height).map(|y| f(x, y)).collect())
            .collect();
        PixelGrid {
            width,
            height,
            columns,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when either dimension has been carved away to nothing.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The pixel at column `x`, row `y`, if there is one.
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.columns.get(x).and_then(|column| column.get(y)).copied()
    }

    /// Read-only access to the whole table, column by column.
    pub fn columns(&self) -> &[Vec<Pixel>] {
        &self.columns
    }

    // The carver shrinks the grid in place; nothing else gets to.
    pub(crate) fn columns_mut(&mut self) -> &mut Vec<Vec<Pixel>> {
        &mut self.columns
    }

    pub(crate) fn set_dimensions(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }
}

impl Index<(usize, usize)> for PixelGrid {
    type Output = Pixel;

    /// Panics if `(x, y)` is outside the grid.
    fn index(&self, (x, y): (usize, usize)) -> &Pixel {
        &self.columns[x][y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_follow_the_columns() {
        let grid = PixelGrid::from_fn(4, 3, |x, y| Pixel::new(x as i32, y as i32, 0));
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.get(3, 2), Some(Pixel::new(3, 2, 0)));
        assert_eq!(grid[(1, 2)], Pixel::new(1, 2, 0));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let columns = vec![vec![Pixel::default(); 3], vec![Pixel::default(); 2]];
        assert_eq!(
            PixelGrid::new(columns),
            Err(SeamError::RaggedGrid {
                column: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn empty_table_is_degenerate() {
        let grid = PixelGrid::new(Vec::new()).unwrap();
        assert_eq!((grid.width(), grid.height()), (0, 0));
        assert!(grid.is_degenerate());
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy table
//!
//! The search is written once, for a top-to-bottom seam: one x
//! coordinate per row.  A left-to-right seam is the same search run
//! over a [`Flipper`] of the energy table.
//!
//! Tie-breaking, which has to be exact for the output to be
//! reproducible:
//!
//! * the seam ends at the *first* column with the lowest cumulative
//!   cost in the last row;
//! * walking back up, a pixel on the left or right edge only moves
//!   inward if the inward parent is strictly cheaper;
//! * an interior pixel takes its left parent if that parent is a
//!   minimum, else its right parent if that is, else stays put.

use crate::cq;
use crate::errors::SeamError;
use crate::flipper::Flipper;
use crate::twodmap::{EnergyTable, GridView, TwoDimensionalMap};
use std::ops::Deref;

/// Which way a seam runs.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    /// Top to bottom: one column index per row.  Removing one narrows
    /// the image.
    Vertical,
    /// Left to right: one row index per column.  Removing one shortens
    /// the image.
    Horizontal,
}

impl Orientation {
    pub fn turn(self) -> Self {
        cq!(
            self == Orientation::Vertical,
            Orientation::Horizontal,
            Orientation::Vertical
        )
    }
}

/// A connected path of pixel indices, one per row (vertical) or one
/// per column (horizontal).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Seam(Vec<usize>);

impl Seam {
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Index of the first entry that is more than one step away from
    /// its successor, if any.
    pub fn first_gap(&self) -> Option<usize> {
        self.0
            .windows(2)
            .position(|pair| cq!(pair[0] > pair[1], pair[0] - pair[1], pair[1] - pair[0]) > 1)
    }

    /// True if consecutive entries never differ by more than one.
    pub fn is_connected(&self) -> bool {
        self.first_gap().is_none()
    }

    /// Check that this seam can be cut out of a table whose traversal
    /// axis is `length` long and whose transverse axis is `limit` wide.
    pub fn validate(&self, length: usize, limit: usize) -> Result<(), SeamError> {
        if self.0.len() != length {
            return Err(SeamError::DimensionMismatch {
                expected: length,
                found: self.0.len(),
            });
        }
        if let Some((index, &value)) = self.0.iter().enumerate().find(|(_, v)| **v >= limit) {
            return Err(SeamError::SeamOutOfRange {
                index,
                value,
                limit,
            });
        }
        match self.first_gap() {
            Some(index) => Err(SeamError::DisconnectedSeam { index }),
            None => Ok(()),
        }
    }
}

impl From<Vec<usize>> for Seam {
    fn from(v: Vec<usize>) -> Self {
        Seam(v)
    }
}

impl Deref for Seam {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

// For every row after the first, populate each cell with its own
// energy plus the *lowest adjacent upper cost*.  The first row is
// seeded with the raw energies.
fn cumulative_cost<V: GridView<Cell = f64>>(energy: &V) -> TwoDimensionalMap<f64> {
    let (width, height) = (energy.width(), energy.height());
    let mut cost = TwoDimensionalMap::new(width, height);

    for x in 0..width {
        cost[(x, 0)] = energy.get(x, 0);
    }

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            let range = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
            let parent = range
                .map(|px| cost[(px, y - 1)])
                .fold(f64::INFINITY, f64::min);
            cost[(x, y)] = energy.get(x, y) + parent;
        }
    }
    cost
}

// The first x with the lowest cost in the bottom row.  A strict `<`
// keeps the earliest of several equal minima.
fn cheapest_terminal(cost: &TwoDimensionalMap<f64>) -> usize {
    let y = cost.height - 1;
    (0..cost.width)
        .fold((0, f64::INFINITY), |(best, lowest), x| {
            let c = cost[(x, y)];
            cq!(c < lowest, (x, c), (best, lowest))
        })
        .0
}

// Given a seam pixel at column `x`, which column in row `y_above` did
// it come from?
#[allow(clippy::float_cmp)]
fn parent_of(cost: &TwoDimensionalMap<f64>, x: usize, y_above: usize) -> usize {
    let maxwidth = cost.width - 1;
    let at = |px: usize| cost[(px, y_above)];

    if maxwidth == 0 {
        0
    } else if x == 0 {
        cq!(at(0) > at(1), 1, 0)
    } else if x == maxwidth {
        cq!(at(x) > at(x - 1), x - 1, x)
    } else {
        let (left, up, right) = (at(x - 1), at(x), at(x + 1));
        let lowest = left.min(up).min(right);
        if left == lowest {
            x - 1
        } else if right == lowest {
            x + 1
        } else {
            x
        }
    }
}

// Given an energy view of at least one cell, return the list of
// x-coordinates that, when mapped with the range (0..height), give
// the XY coordinates for each pixel in the cheapest seam.
fn energy_to_seam<V: GridView<Cell = f64>>(energy: &V) -> Seam {
    let cost = cumulative_cost(energy);
    let height = cost.height;
    let mut seam_col = cheapest_terminal(&cost);

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    let mut path: Vec<usize> = (1..height)
        .rev()
        .fold(Vec::with_capacity(height), |mut acc, y| {
            acc.push(seam_col);
            seam_col = parent_of(&cost, seam_col, y - 1);
            acc
        });
    path.push(seam_col);
    path.reverse();
    Seam(path)
}

/// The top-to-bottom seam of an energy table: one column per row.
pub fn energy_to_vertical_seam(energy: &EnergyTable) -> Result<Seam, SeamError> {
    check_not_degenerate(energy)?;
    Ok(energy_to_seam(energy))
}

/// The left-to-right seam of an energy table: one row per column.
pub fn energy_to_horizontal_seam(energy: &EnergyTable) -> Result<Seam, SeamError> {
    check_not_degenerate(energy)?;
    Ok(energy_to_seam(&Flipper::new(energy)))
}

fn check_not_degenerate(energy: &EnergyTable) -> Result<(), SeamError> {
    if energy.width == 0 || energy.height == 0 {
        return Err(SeamError::DegenerateGrid {
            width: energy.width,
            height: energy.height,
        });
    }
    Ok(())
}

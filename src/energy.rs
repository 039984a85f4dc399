// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the magnitude of the color gradient across
//! it: the squared RGB distance between its left and right neighbors,
//! plus the same between its upper and lower neighbors, square-rooted.
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! The edges wrap: the left neighbor of column zero is the last
//! column, and the upper neighbor of row zero is the last row.

use crate::pixelgrid::{Pixel, PixelGrid};
use crate::twodmap::EnergyTable;
use itertools::iproduct;

/// (Pixel, Pixel) -> squared RGB distance
#[inline]
pub fn squared_delta(p: &Pixel, q: &Pixel) -> i64 {
    [
        (p.red, q.red),
        (p.green, q.green),
        (p.blue, q.blue),
    ]
    .iter()
    .map(|&(a, b)| {
        let d = i64::from(a) - i64::from(b);
        d * d
    })
    .sum()
}

// Subtract-then-wrap, so `0 - 1` lands on `len - 1` instead of
// underflowing.
#[inline]
fn before(i: usize, len: usize) -> usize {
    (i + len - 1) % len
}

#[inline]
fn after(i: usize, len: usize) -> usize {
    (i + 1) % len
}

/// The energy of the pixel at `(x, y)`.  The caller guarantees that the
/// grid is not degenerate and that the coordinates are in range.
pub fn pixel_energy(grid: &PixelGrid, x: usize, y: usize) -> f64 {
    let (width, height) = (grid.width(), grid.height());
    let dx = squared_delta(&grid[(after(x, width), y)], &grid[(before(x, width), y)]);
    let dy = squared_delta(&grid[(x, after(y, height))], &grid[(x, before(y, height))]);
    ((dx + dy) as f64).sqrt()
}

/// Compute the energy of every pixel in the grid, from scratch.  The
/// caller guarantees that the grid is not degenerate.
pub fn calculate_energy(grid: &PixelGrid) -> EnergyTable {
    let (width, height) = (grid.width(), grid.height());
    let mut emap = EnergyTable::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = pixel_energy(grid, x, y);
    }
    emap
}

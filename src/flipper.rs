// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Table dimensional flipper
//!
//! A proxy for any [`GridView`] that maps the width to the original
//! height, and vice versa, as well as every x to y and vice versa.
//!
//! A horizontal seam is just a vertical seam of the transposed table.
//! By virtually "flipping" the energy table 90° the seam search only
//! has to be written once, top to bottom, and both orientations are
//! guaranteed to break ties the same way.

use crate::twodmap::GridView;

pub struct Flipper<'a, V: GridView> {
    pub view: &'a V,
}

impl<'a, V: GridView> Flipper<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Flipper { view }
    }
}

impl<'a, V: GridView> GridView for Flipper<'a, V> {
    type Cell = V::Cell;

    fn width(&self) -> usize {
        self.view.height()
    }

    fn height(&self) -> usize {
        self.view.width()
    }

    fn get(&self, x: usize, y: usize) -> V::Cell {
        self.view.get(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    #[test]
    fn flipping_swaps_axes() {
        let map = TwoDimensionalMap::from_vec(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        let flipped = Flipper::new(&map);
        assert_eq!((flipped.width(), flipped.height()), (2, 3));
        assert_eq!(flipped.get(1, 0), 3);
        assert_eq!(flipped.get(0, 2), 2);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main structure
//!
//! A `SeamCarver` owns a pixel grid and shrinks it one seam at a time.
//! Every search recomputes the whole energy table from the current
//! grid; nothing is cached between calls.

use crate::energy::{calculate_energy, pixel_energy};
use crate::errors::SeamError;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::SeamFinder;
use crate::seams::{energy_to_horizontal_seam, energy_to_vertical_seam, Orientation, Seam};
use crate::twodmap::EnergyTable;
use log::{debug, trace};

/// A struct for holding the image to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Creates a new SeamCarver, taking ownership of the grid.
    pub fn new(grid: PixelGrid) -> Self {
        SeamCarver { grid }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The grid as it stands after any removals so far.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    fn check_not_degenerate(&self) -> Result<(), SeamError> {
        if self.grid.is_degenerate() {
            return Err(SeamError::DegenerateGrid {
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    /// The energy of a single pixel of the current grid.
    pub fn energy(&self, x: usize, y: usize) -> Result<f64, SeamError> {
        self.check_not_degenerate()?;
        if x >= self.width() || y >= self.height() {
            return Err(SeamError::OutOfBounds {
                col: x,
                row: y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(pixel_energy(&self.grid, x, y))
    }

    /// The energy of every pixel of the current grid.
    pub fn energy_table(&self) -> Result<EnergyTable, SeamError> {
        self.check_not_degenerate()?;
        Ok(calculate_energy(&self.grid))
    }

    /// Cut a top-to-bottom seam out of the grid, narrowing it by one
    /// column.  Every pixel right of the seam slides one step left.
    pub fn remove_vertical_seam(&mut self, seam: &Seam) -> Result<(), SeamError> {
        self.check_not_degenerate()?;
        let (width, height) = (self.width(), self.height());
        seam.validate(height, width)?;

        let columns = self.grid.columns_mut();
        for (y, &start) in seam.iter().enumerate() {
            for x in start..width - 1 {
                columns[x][y] = columns[x + 1][y];
            }
        }
        columns.truncate(width - 1);
        self.grid.set_dimensions(width - 1, height);
        debug!("removed vertical seam, now {}x{}", width - 1, height);
        Ok(())
    }

    /// Cut a left-to-right seam out of the grid, shortening it by one
    /// row.  Every pixel below the seam slides one step up.
    pub fn remove_horizontal_seam(&mut self, seam: &Seam) -> Result<(), SeamError> {
        self.check_not_degenerate()?;
        let (width, height) = (self.width(), self.height());
        seam.validate(width, height)?;

        let columns = self.grid.columns_mut();
        for (column, &y) in columns.iter_mut().zip(seam.iter()) {
            column.remove(y);
        }
        self.grid.set_dimensions(width, height - 1);
        debug!("removed horizontal seam, now {}x{}", width, height - 1);
        Ok(())
    }

    /// Find and remove one seam of the given orientation.
    pub fn carve_once(&mut self, orientation: Orientation) -> Result<(), SeamError> {
        match orientation {
            Orientation::Vertical => {
                let seam = self.find_vertical_seam()?;
                self.remove_vertical_seam(&seam)
            }
            Orientation::Horizontal => {
                let seam = self.find_horizontal_seam()?;
                self.remove_horizontal_seam(&seam)
            }
        }
    }

    // This is absurdly inefficient, as the entire energy map and
    // cost table are recalculated for every seam.  Only the pixels
    // along the removed seam actually changed.

    /// Repeatedly carve seams out of the grid until it is
    /// `target_width` by `target_height`, alternating directions while
    /// both need shrinking.
    pub fn carve(&mut self, target_width: usize, target_height: usize) -> Result<(), SeamError> {
        let (width, height) = (self.width(), self.height());
        if width < target_width || height < target_height {
            return Err(SeamError::Upscale {
                width,
                height,
                target_width,
                target_height,
            });
        }
        // Once either axis is gone there's nothing left to find seams
        // in, so carving one axis to zero only works if the other is
        // already where it needs to be.
        if (target_width == 0 && target_height < height)
            || (target_height == 0 && target_width < width)
        {
            return Err(SeamError::DegenerateGrid {
                width: target_width,
                height: target_height,
            });
        }

        let mut direction = Orientation::Vertical;
        while self.width() > target_width && self.height() > target_height {
            self.carve_once(direction)?;
            direction = direction.turn();
            trace!("B: {}, {}", self.width(), self.height());
        }
        while self.width() > target_width {
            self.carve_once(Orientation::Vertical)?;
            trace!("W: {}, {}", self.width(), self.height());
        }
        while self.height() > target_height {
            self.carve_once(Orientation::Horizontal)?;
            trace!("H: {}, {}", self.width(), self.height());
        }
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Result<Seam, SeamError> {
        let seam = energy_to_horizontal_seam(&self.energy_table()?)?;
        debug!("horizontal seam: {:?}", seam);
        Ok(seam)
    }

    fn find_vertical_seam(&self) -> Result<Seam, SeamError> {
        let seam = energy_to_vertical_seam(&self.energy_table()?)?;
        debug!("vertical seam: {:?}", seam);
        Ok(seam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cq;
    use crate::pixelgrid::Pixel;

    // Every pixel remembers where it started.
    fn labelled(width: usize, height: usize) -> PixelGrid {
        PixelGrid::from_fn(width, height, |x, y| Pixel::new(x as i32, y as i32, 0))
    }

    fn corner_carver() -> SeamCarver {
        SeamCarver::new(PixelGrid::from_fn(3, 3, |x, y| {
            cq!(x == 0 && y == 0, Pixel::new(10, 20, 30), Pixel::default())
        }))
    }

    #[test]
    fn uniform_grid_has_zero_energy_and_leftmost_seam() {
        let carver = SeamCarver::new(PixelGrid::from_fn(3, 3, |_, _| Pixel::new(7, 7, 7)));
        let table = carver.energy_table().unwrap();
        assert!(table.cells().iter().all(|e| *e == 0.0));
        assert_eq!(&*carver.find_vertical_seam().unwrap(), &[0, 0, 0]);
        assert_eq!(&*carver.find_horizontal_seam().unwrap(), &[0, 0, 0]);
    }

    #[test]
    fn bright_corner_seams() {
        let carver = corner_carver();
        let s = 1400f64.sqrt();
        assert_eq!(carver.energy(0, 0).unwrap(), 0.0);
        assert_eq!(carver.energy(1, 0).unwrap(), s);
        assert_eq!(carver.energy(0, 2).unwrap(), s);
        assert_eq!(carver.energy(2, 2).unwrap(), 0.0);
        assert_eq!(&*carver.find_vertical_seam().unwrap(), &[0, 1, 1]);
        assert_eq!(&*carver.find_horizontal_seam().unwrap(), &[0, 1, 1]);
    }

    #[test]
    fn two_by_two_bright_corner() {
        let carver = SeamCarver::new(PixelGrid::from_fn(2, 2, |x, y| {
            cq!(x == 0 && y == 0, Pixel::new(255, 255, 255), Pixel::default())
        }));
        for (x, y) in &[(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(carver.energy(*x, *y).unwrap(), 0.0);
        }
        assert_eq!(&*carver.find_vertical_seam().unwrap(), &[0, 0]);
    }

    #[test]
    fn energy_out_of_bounds() {
        let carver = corner_carver();
        assert_eq!(
            carver.energy(3, 0),
            Err(SeamError::OutOfBounds {
                col: 3,
                row: 0,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn removing_a_vertical_seam() {
        let mut carver = SeamCarver::new(labelled(3, 3));
        carver.remove_vertical_seam(&Seam::from(vec![0, 1, 1])).unwrap();
        assert_eq!((carver.width(), carver.height()), (2, 3));
        let grid = carver.grid();
        assert_eq!(grid[(0, 0)], Pixel::new(1, 0, 0));
        assert_eq!(grid[(1, 0)], Pixel::new(2, 0, 0));
        assert_eq!(grid[(0, 1)], Pixel::new(0, 1, 0));
        assert_eq!(grid[(1, 1)], Pixel::new(2, 1, 0));
        assert_eq!(grid[(0, 2)], Pixel::new(0, 2, 0));
        assert_eq!(grid[(1, 2)], Pixel::new(2, 2, 0));
    }

    #[test]
    fn removing_a_horizontal_seam() {
        let mut carver = SeamCarver::new(labelled(3, 3));
        carver.remove_horizontal_seam(&Seam::from(vec![0, 1, 1])).unwrap();
        assert_eq!((carver.width(), carver.height()), (3, 2));
        let grid = carver.grid();
        assert_eq!(grid[(0, 0)], Pixel::new(0, 1, 0));
        assert_eq!(grid[(0, 1)], Pixel::new(0, 2, 0));
        assert_eq!(grid[(1, 0)], Pixel::new(1, 0, 0));
        assert_eq!(grid[(1, 1)], Pixel::new(1, 2, 0));
        assert_eq!(grid[(2, 0)], Pixel::new(2, 0, 0));
        assert_eq!(grid[(2, 1)], Pixel::new(2, 2, 0));
    }

    #[test]
    fn mismatched_seam_leaves_the_grid_alone() {
        let mut carver = SeamCarver::new(labelled(3, 3));
        assert_eq!(
            carver.remove_vertical_seam(&Seam::from(vec![0, 0])),
            Err(SeamError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            carver.remove_horizontal_seam(&Seam::from(vec![0, 2, 0])),
            Err(SeamError::DisconnectedSeam { index: 0 })
        );
        assert_eq!(carver.grid(), &labelled(3, 3));
    }

    #[test]
    fn degenerate_grid_is_refused() {
        let carver = SeamCarver::new(PixelGrid::new(Vec::new()).unwrap());
        let refused = SeamError::DegenerateGrid {
            width: 0,
            height: 0,
        };
        assert_eq!(carver.find_vertical_seam(), Err(refused.clone()));
        assert_eq!(carver.find_horizontal_seam(), Err(refused.clone()));
        assert_eq!(carver.energy(0, 0), Err(refused));
    }

    #[test]
    fn carve_to_size() {
        let mut carver = SeamCarver::new(labelled(6, 5));
        carver.carve(4, 2).unwrap();
        assert_eq!((carver.width(), carver.height()), (4, 2));
    }

    #[test]
    fn carve_to_nothing_is_refused_up_front() {
        let mut carver = SeamCarver::new(labelled(3, 3));
        assert_eq!(
            carver.carve(0, 0),
            Err(SeamError::DegenerateGrid {
                width: 0,
                height: 0
            })
        );
        assert_eq!(
            carver.carve(0, 2),
            Err(SeamError::DegenerateGrid {
                width: 0,
                height: 2
            })
        );
        assert_eq!(carver.grid(), &labelled(3, 3));
    }

    #[test]
    fn carve_one_axis_to_zero() {
        let mut carver = SeamCarver::new(labelled(3, 4));
        carver.carve(0, 4).unwrap();
        assert_eq!((carver.width(), carver.height()), (0, 4));

        let mut carver = SeamCarver::new(labelled(3, 4));
        carver.carve(3, 0).unwrap();
        assert_eq!((carver.width(), carver.height()), (3, 0));
    }

    #[test]
    fn carve_refuses_to_upscale() {
        let mut carver = SeamCarver::new(labelled(3, 3));
        assert_eq!(
            carver.carve(4, 2),
            Err(SeamError::Upscale {
                width: 3,
                height: 3,
                target_width: 4,
                target_height: 2
            })
        );
    }
}

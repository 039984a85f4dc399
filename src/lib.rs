// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! Wrap a [`PixelGrid`] in a [`SeamCarver`], then find and remove
//! seams until the image is the size you want:
//!
//! ```
//! use seamcarver::{Pixel, PixelGrid, SeamCarver, SeamFinder};
//!
//! let grid = PixelGrid::from_fn(4, 3, |x, y| Pixel::new(x as i32 * 40, y as i32 * 40, 0));
//! let mut carver = SeamCarver::new(grid);
//! let seam = carver.find_vertical_seam().unwrap();
//! carver.remove_vertical_seam(&seam).unwrap();
//! assert_eq!((carver.width(), carver.height()), (3, 3));
//! ```

pub mod ternary;

pub mod errors;
pub use errors::SeamError;

pub mod pixelgrid;
pub use pixelgrid::{Pixel, PixelGrid};

pub mod twodmap;
pub use twodmap::{EnergyTable, GridView, TwoDimensionalMap};

pub mod flipper;

pub mod energy;
pub use energy::{calculate_energy, pixel_energy, squared_delta};

pub mod seams;
pub use seams::{energy_to_horizontal_seam, energy_to_vertical_seam, Orientation, Seam};

pub mod seamfinder;
pub use seamfinder::SeamFinder;

pub mod seamcarver;
pub use seamcarver::SeamCarver;

pub mod imageio;
pub use imageio::{energy_to_image, grid_from_image, grid_to_image};

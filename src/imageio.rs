// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Moving between ImageRS buffers and pixel grids
//!
//! Decoding and encoding belong to the `image` crate; this module only
//! copies samples in and out of a [`PixelGrid`], and renders an energy
//! table as a grayscale picture for inspection.

use crate::errors::SeamError;
use crate::pixelgrid::{Pixel, PixelGrid};
use crate::twodmap::EnergyTable;
use image::{
    GenericImageView, GrayImage, ImageBuffer, Luma, Pixel as ImagePixel, Primitive, Rgb, RgbImage,
};
use num_traits::{clamp, NumCast};

fn channel<S: Primitive>(sample: S) -> Result<i32, SeamError> {
    <i32 as NumCast>::from(sample).ok_or(SeamError::ChannelRange)
}

fn to_grid_pixel<P, S>(p: &P) -> Result<Pixel, SeamError>
where
    P: ImagePixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    // Gray and gray-alpha fill all three channels; anything wider is
    // read as RGB with any trailing alpha ignored.
    match p.channels() {
        [l] | [l, _] => {
            let l = channel(*l)?;
            Ok(Pixel::new(l, l, l))
        }
        [r, g, b, ..] => Ok(Pixel::new(channel(*r)?, channel(*g)?, channel(*b)?)),
        [] => Err(SeamError::ChannelRange),
    }
}

/// Copy any image into a pixel grid, converting it to RGB on the way.
pub fn grid_from_image<I, P, S>(image: &I) -> Result<PixelGrid, SeamError>
where
    I: GenericImageView<Pixel = P>,
    P: ImagePixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let columns = (0..width)
        .map(|x| {
            (0..height)
                .map(|y| to_grid_pixel(&image.get_pixel(x, y)))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    PixelGrid::new(columns)
}

/// Copy a pixel grid back out to an 8-bit RGB buffer.  Channels
/// outside `0..=255` are clamped.
pub fn grid_to_image(grid: &PixelGrid) -> RgbImage {
    let c = |v: i32| clamp(v, 0, 255) as u8;
    ImageBuffer::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        let p = grid[(x as usize, y as usize)];
        Rgb([c(p.red), c(p.green), c(p.blue)])
    })
}

/// Render an energy table as a grayscale image, scaled so that the
/// most energetic pixel is white.
pub fn energy_to_image(energy: &EnergyTable) -> GrayImage {
    let factor = energy.cells().iter().cloned().fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width as u32, energy.height as u32, |x, y| {
        let e = energy[(x as usize, y as usize)];
        let level = if factor > 0.0 { e / factor * 255.0 } else { 0.0 };
        Luma([clamp(level.round(), 0.0, 255.0) as u8])
    })
}

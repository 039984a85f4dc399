// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.
//!
//! None of these are transient, and none are fatal: the grid is never
//! touched until the request has been validated, so a caller that gets
//! an error back still holds a perfectly good image.

use failure::Fail;

/// The crate's error type.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum SeamError {
    /// Energy, search, and removal are meaningless on an empty grid, and
    /// carving can't reach a size that would leave one axis empty while
    /// the other still needs seams taken out.
    #[fail(display = "cannot operate on a degenerate {}x{} grid", width, height)]
    DegenerateGrid { width: usize, height: usize },

    /// The seam was computed against some other grid.
    #[fail(display = "seam has {} entries but the grid needs {}", found, expected)]
    DimensionMismatch { expected: usize, found: usize },

    /// A seam entry points past the edge of the grid.
    #[fail(
        display = "seam entry {} is {}, outside of the range 0..{}",
        index, value, limit
    )]
    SeamOutOfRange {
        index: usize,
        value: usize,
        limit: usize,
    },

    /// Two consecutive seam entries differ by more than one.
    #[fail(display = "seam jumps by more than one pixel after entry {}", index)]
    DisconnectedSeam { index: usize },

    /// The columns handed to `PixelGrid::new` differ in length.
    #[fail(
        display = "column {} has {} pixels where {} were expected",
        column, found, expected
    )]
    RaggedGrid {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// A pixel address outside the current grid.
    #[fail(
        display = "pixel ({}, {}) is outside of the {}x{} grid",
        col, row, width, height
    )]
    OutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    /// Carving only removes pixels; the target was larger than the image.
    #[fail(
        display = "seamcarve cannot upscale a {}x{} image to {}x{}",
        width, height, target_width, target_height
    )]
    Upscale {
        width: usize,
        height: usize,
        target_width: usize,
        target_height: usize,
    },

    /// An image sample could not be represented as a color channel.
    #[fail(display = "image sample does not fit in a color channel")]
    ChannelRange,
}

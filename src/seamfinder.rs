// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::errors::SeamError;
use crate::seams::Seam;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// finders as well as caching.
pub trait SeamFinder {
    /// Request a left-to-right seam, one row index per column.
    fn find_horizontal_seam(&self) -> Result<Seam, SeamError>;

    /// Request a top-to-bottom seam, one column index per row.
    fn find_vertical_seam(&self) -> Result<Seam, SeamError>;
}

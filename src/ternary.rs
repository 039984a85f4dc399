// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A ternary expression.  Rust's `if` is already an expression, but
/// `cargo fmt` spreads it across five lines, and the tables of edge
/// cases in the seam search (left edge, right edge, interior) read
/// far better when each case fits on one line.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

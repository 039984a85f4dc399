// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use log::info;
use seamcarver::{energy_to_image, grid_from_image, grid_to_image, SeamCarver};
use std::process;

fn dimension(matches: &ArgMatches, name: &str, default: usize) -> Result<usize, Error> {
    match matches.value_of(name) {
        None => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|_| format_err!("--{} must be a non-negative integer, got '{}'", name, v)),
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    // Both are required, so clap has already checked they're present.
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input)?;
    let grid = grid_from_image(&image)?;
    info!("loaded {} ({}x{})", input, grid.width(), grid.height());

    let mut carver = SeamCarver::new(grid);

    if matches.is_present("energy") {
        energy_to_image(&carver.energy_table()?).save(output)?;
        info!("wrote energy map to {}", output);
        return Ok(());
    }

    let target_width = dimension(matches, "width", carver.width())?;
    let target_height = dimension(matches, "height", carver.height())?;
    carver.carve(target_width, target_height)?;
    info!("carved to {}x{}", carver.width(), carver.height());

    grid_to_image(carver.grid()).save(output)?;
    info!("wrote {}", output);
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the extension picks the format")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .value_name("PIXELS")
                .help("Target width (default: unchanged)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .value_name("PIXELS")
                .help("Target height (default: unchanged)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .conflicts_with_all(&["width", "height"])
                .help("Write the energy map instead of carving"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("seamcarve: {}", e);
        process::exit(1);
    }
}

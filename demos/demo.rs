//! Coordinate Encoding Example
//!
//! Encodes a coordinate at full depth, prints its textual cell form and
//! decodes it back.

use geosot::{GeoSotCell, code2dec, dec2code, decode_by_geomgrid, get_code};
use geosot::config::cell_size_degrees;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== GeoSOT - Coordinate Encoding ===\n");

    let (lng, lat) = (76.233, 27.688);
    let level = 32;

    let code = get_code(lng, lat, level)?;
    let cell = GeoSotCell::from_coords(lng, lat, level)?;

    println!("Coordinate:   ({}, {})", lng, lat);
    println!("Code:         {}", code);
    println!("Cell:         {}", cell);
    if let Some(size) = cell_size_degrees(level) {
        println!("Cell size:    {:e}°", size);
    }

    let (x, y) = decode_by_geomgrid(code);
    println!("Decoded:      ({}, {})\n", x, y);

    let scalar = dec2code(lng, level)?;
    println!("Longitude scalar code: {}", scalar);
    println!("Longitude decoded:     {}\n", code2dec(scalar)?);

    println!("Ancestors:");
    for depth in [9, 15, 21, 26] {
        let ancestor = cell.ancestor_at(depth)?;
        let extent = ancestor.extent();
        println!(
            "  level {:>2}: {:<40} [{:.6}, {:.6}] x [{:.6}, {:.6}]",
            depth,
            ancestor.to_string(),
            extent.min().x,
            extent.max().x,
            extent.min().y,
            extent.max().y
        );
    }

    Ok(())
}

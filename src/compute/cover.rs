//! Rasterizing rectangles and polygons into same-level cell codes.
//!
//! Rectangles are enumerated through axis indices rather than by stepping in
//! degrees, so cells shortened by the 60-minute/60-second boundaries are never
//! skipped.

use crate::cell::GeoSotCell;
use crate::codec::{interleave, scalar_from_axis_index};
use crate::compute::validation::{validate_coordinate, validate_precision};
use crate::error::{GeoSotError, Result};
use geo::{BoundingRect, Intersects, Polygon};
use std::collections::BTreeSet;

/// Codes of every cell at `level` touching the closed rectangle.
///
/// # Errors
///
/// `InvalidRectangle` when a minimum exceeds its maximum, `TooManyCells` when
/// the cover would hold more than `max_cells` codes, plus the coordinate and
/// precision errors of [`crate::get_code`].
pub fn rectangle_codes(
    min_lng: f64,
    min_lat: f64,
    max_lng: f64,
    max_lat: f64,
    level: u8,
    max_cells: usize,
) -> Result<BTreeSet<u64>> {
    validate_precision(level)?;
    validate_coordinate(min_lng, min_lat)?;
    validate_coordinate(max_lng, max_lat)?;

    if min_lng > max_lng || min_lat > max_lat {
        return Err(GeoSotError::InvalidRectangle(format!(
            "min ({}, {}) exceeds max ({}, {})",
            min_lng, min_lat, max_lng, max_lat
        )));
    }

    let (west, south) = GeoSotCell::from_coords(min_lng, min_lat, level)?.axis_indices();
    let (east, north) = GeoSotCell::from_coords(max_lng, max_lat, level)?.axis_indices();

    let columns = (east - west + 1) as u64;
    let rows = (north - south + 1) as u64;
    let cells = columns.saturating_mul(rows);
    if cells > max_cells as u64 {
        return Err(GeoSotError::TooManyCells {
            cells,
            limit: max_cells,
        });
    }

    let latitudes = (south..=north)
        .map(|index| scalar_from_axis_index(index, level))
        .collect::<Result<Vec<_>>>()?;

    let mut codes = BTreeSet::new();
    for index in west..=east {
        let lng = scalar_from_axis_index(index, level)?;
        codes.extend(latitudes.iter().map(|&lat| interleave(lng, lat)));
    }

    log::debug!(
        "Rasterized rectangle ({}, {})-({}, {}) into {} cells at level {}",
        min_lng,
        min_lat,
        max_lng,
        max_lat,
        codes.len(),
        level
    );
    Ok(codes)
}

/// Codes of every cell at `level` whose extent intersects the polygon.
///
/// Candidates come from the polygon's bounding rectangle, so `max_cells`
/// bounds that rectangle's cover.
pub fn polygon_codes(polygon: &Polygon, level: u8, max_cells: usize) -> Result<BTreeSet<u64>> {
    let Some(bounds) = polygon.bounding_rect() else {
        validate_precision(level)?;
        return Ok(BTreeSet::new());
    };

    let candidates = rectangle_codes(
        bounds.min().x,
        bounds.min().y,
        bounds.max().x,
        bounds.max().y,
        level,
        max_cells,
    )?;
    let total = candidates.len();

    let mut codes = BTreeSet::new();
    for code in candidates {
        let cell = GeoSotCell::new(code, level)?;
        if polygon.intersects(&cell.extent()) {
            codes.insert(code);
        }
    }

    log::debug!(
        "Polygon kept {} of {} bounding cells at level {}",
        codes.len(),
        total,
        level
    );
    Ok(codes)
}

//! Validation for coordinates, precisions and codes.

use crate::error::{GeoSotError, Result};
use geo::Point;
use geosot_types::{MAX_LEVEL, MIN_SCALAR_PRECISION};

pub const MAX_LONGITUDE: f64 = 180.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Validates a longitude: finite and within [-180.0, 180.0].
pub fn validate_longitude(lng: f64) -> Result<()> {
    if !lng.is_finite() {
        return Err(GeoSotError::InvalidCoordinate(format!(
            "Longitude must be finite, got: {}",
            lng
        )));
    }

    if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&lng) {
        return Err(GeoSotError::InvalidCoordinate(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lng
        )));
    }

    Ok(())
}

/// Validates a latitude: finite and within [-90.0, 90.0].
pub fn validate_latitude(lat: f64) -> Result<()> {
    if !lat.is_finite() {
        return Err(GeoSotError::InvalidCoordinate(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(GeoSotError::InvalidCoordinate(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    Ok(())
}

/// Validates a longitude/latitude pair.
///
/// # Examples
///
/// ```
/// use geosot::compute::validation::validate_coordinate;
///
/// assert!(validate_coordinate(116.397, 39.916).is_ok());
/// assert!(validate_coordinate(200.0, 39.916).is_err());
/// assert!(validate_coordinate(116.397, -95.0).is_err());
/// assert!(validate_coordinate(f64::NAN, 0.0).is_err());
/// ```
pub fn validate_coordinate(lng: f64, lat: f64) -> Result<()> {
    validate_longitude(lng)?;
    validate_latitude(lat)
}

/// Validates a `geo::Point` whose x is longitude and y is latitude.
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    validate_coordinate(point.x(), point.y())
}

/// Validates multiple points, reporting the index of the first bad one.
pub fn validate_points(points: &[Point]) -> Result<()> {
    for (idx, point) in points.iter().enumerate() {
        validate_geographic_point(point).map_err(|e| {
            GeoSotError::InvalidCoordinate(format!("Point at index {}: {}", idx, e))
        })?;
    }
    Ok(())
}

/// Precision accepted by the coordinate codec: [1, 32].
pub fn validate_precision(precision: u8) -> Result<()> {
    check_range(precision, 1, MAX_LEVEL)
}

/// Precision accepted by the public scalar codec: [21, 32].
pub fn validate_scalar_precision(precision: u8) -> Result<()> {
    check_range(precision, MIN_SCALAR_PRECISION, MAX_LEVEL)
}

/// Cell level: [0, 32].
pub fn validate_level(level: u8) -> Result<()> {
    check_range(level, 0, MAX_LEVEL)
}

/// A code is valid at `level` when it fits in `2 * level` bits.
pub fn validate_code(code: u64, level: u8) -> Result<()> {
    validate_level(level)?;
    let bits = 2 * u32::from(level);
    if bits < u64::BITS && code >> bits != 0 {
        return Err(GeoSotError::InvalidCode { code, level });
    }
    Ok(())
}

fn check_range(precision: u8, min: u8, max: u8) -> Result<()> {
    if (min..=max).contains(&precision) {
        Ok(())
    } else {
        Err(GeoSotError::InvalidPrecision {
            precision,
            min,
            max,
        })
    }
}

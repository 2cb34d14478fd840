//! Two-dimensional codec between coordinates and combined GeoSOT codes.
//!
//! A combined code at precision `p` interleaves two `p`-bit scalar codes into
//! exactly `2p` bits, right-aligned. This is the code a
//! [`crate::cell::GeoSotCell`] of level `p` stores, so it can be handed to
//! regions directly.

use super::fields::SCALAR_BITS;
use super::interleave::{deinterleave, interleave};
use super::scalar::{decode_scalar, encode_scalar};
use crate::compute::validation::{validate_code, validate_coordinate, validate_precision};
use crate::error::Result;

/// Encode a longitude/latitude pair at `precision` in `[1, 32]` into a
/// `2 * precision`-bit code.
///
/// Negative values carry their sign in the top bit of each scalar code, so
/// the combined integer never needs an offset.
///
/// # Errors
///
/// `InvalidCoordinate` when `|lng| > 180` or `|lat| > 90`,
/// `InvalidPrecision` outside `[1, 32]`.
///
/// # Examples
///
/// ```
/// use geosot::{decode_by_geomgrid, get_code};
///
/// let code = get_code(116.397428, 39.90923, 32)?;
/// assert_eq!(code, 526548384406042203);
///
/// let (lng, lat) = decode_by_geomgrid(code);
/// assert!((lng - 116.397428).abs() < 1e-6);
/// assert!((lat - 39.90923).abs() < 1e-6);
///
/// let coarse = get_code(116.397428, 39.90923, 20)?;
/// assert_eq!(coarse, code >> 24);
/// # Ok::<(), geosot::GeoSotError>(())
/// ```
pub fn get_code(lng: f64, lat: f64, precision: u8) -> Result<u64> {
    validate_precision(precision)?;
    validate_coordinate(lng, lat)?;
    let lng = encode_scalar(lng, precision)?;
    let lat = encode_scalar(lat, precision)?;
    Ok(interleave(lng, lat))
}

/// Decode a full-precision (level 32) combined code to the `(lng, lat)`
/// corner of its cell.
///
/// The corner is the one nearest the origin on each axis, i.e. the smallest
/// magnitude covered by the cell. Use [`decode_at`] for shallower codes.
pub fn decode_by_geomgrid(code: u64) -> (f64, f64) {
    let (lng, lat) = deinterleave(code);
    (decode_scalar(lng), decode_scalar(lat))
}

/// Decode a `2 * level`-bit code produced by [`get_code`] at `level`.
pub fn decode_at(code: u64, level: u8) -> Result<(f64, f64)> {
    validate_precision(level)?;
    validate_code(code, level)?;
    Ok(decode_by_geomgrid(align_high(code, level)))
}

/// Move a cell-aligned code to the top of the 64-bit layout.
pub(crate) fn align_high(code: u64, level: u8) -> u64 {
    let drop = 2 * (SCALAR_BITS - u32::from(level));
    if drop >= u64::BITS { 0 } else { code << drop }
}

//! Contiguous per-axis cell indices.
//!
//! A scalar code at a given level names one cell along its axis, but the code
//! values themselves are not contiguous: minutes and seconds stop at 59 and
//! the sign sits in the top bit. The axis index numbers the cells in
//! coordinate order so that neighbouring cells differ by exactly one:
//!
//! ```text
//!   ... -3  -2  -1 | 0   1   2 ...
//!  magnitude: 2  1  0 | 0   1   2
//! ```
//!
//! Within the minute and second bands the last cell of a degree (or minute)
//! may be shorter than the nominal size; it still gets one index.

use super::fields::{FRACTION_BITS, ScalarFields, from_prefix, to_prefix};
use crate::compute::validation::validate_precision;
use crate::error::{GeoSotError, Result};
use geosot_types::LevelBand;

/// Cells per unit when `2^shift` sub-units are grouped out of 60.
#[inline]
fn cells_per_sixty(shift: u32) -> u64 {
    (60 + (1u64 << shift) - 1) >> shift
}

/// Magnitude index and sign of a level-aligned scalar prefix.
fn magnitude_index(prefix: u32, level: u8) -> (u64, bool) {
    let fields = ScalarFields::unpack(from_prefix(prefix, level));
    let degree = u64::from(fields.degree);
    let minute = u64::from(fields.minute);
    let second = u64::from(fields.second);
    let level32 = u32::from(level);

    let magnitude = match LevelBand::of(level) {
        Some(LevelBand::Root) | None => 0,
        Some(LevelBand::Degree) => degree >> (9 - level32),
        Some(LevelBand::Minute) => {
            let shift = 15 - level32;
            degree * cells_per_sixty(shift) + (minute >> shift)
        }
        Some(LevelBand::Second) => {
            let shift = 21 - level32;
            (degree * 60 + minute) * cells_per_sixty(shift) + (second >> shift)
        }
        Some(LevelBand::SubSecond) => {
            let bits = level32 - 21;
            let whole = (degree * 60 + minute) * 60 + second;
            (whole << bits) | (u64::from(fields.fraction) >> (FRACTION_BITS - bits))
        }
    };
    (magnitude, fields.negative)
}

/// Signed axis index of a scalar prefix holding `level` significant bits.
///
/// # Examples
///
/// ```
/// use geosot::codec::axis_index;
///
/// // Level 9 splits whole degrees.
/// assert_eq!(axis_index(116, 9), 116);
/// // The sign bit maps magnitude 0 to index -1.
/// assert_eq!(axis_index(1 << 8, 9), -1);
/// ```
pub fn axis_index(prefix: u32, level: u8) -> i64 {
    let (magnitude, negative) = magnitude_index(prefix, level);
    let magnitude = magnitude as i64;
    if negative { -magnitude - 1 } else { magnitude }
}

/// Inverse of [`axis_index`].
///
/// # Errors
///
/// `AxisIndexOutOfRange` when the index needs more than 8 degree bits or more
/// bits than the level provides.
pub fn scalar_from_axis_index(index: i64, level: u8) -> Result<u32> {
    validate_precision(level)?;
    let out_of_range = || GeoSotError::AxisIndexOutOfRange { index, level };

    let negative = index < 0;
    let magnitude: i64 = if negative {
        index.checked_neg().ok_or_else(out_of_range)? - 1
    } else {
        index
    };
    let magnitude = magnitude as u64;

    let level32 = u32::from(level);
    let (degree, minute, second, fraction) = match LevelBand::of(level) {
        Some(LevelBand::Degree) => {
            let shift = 9 - level32;
            (magnitude << shift, 0, 0, 0)
        }
        Some(LevelBand::Minute) => {
            let shift = 15 - level32;
            let per_degree = cells_per_sixty(shift);
            (magnitude / per_degree, (magnitude % per_degree) << shift, 0, 0)
        }
        Some(LevelBand::Second) => {
            let shift = 21 - level32;
            let per_minute = cells_per_sixty(shift);
            let minutes = magnitude / per_minute;
            (
                minutes / 60,
                minutes % 60,
                (magnitude % per_minute) << shift,
                0,
            )
        }
        Some(LevelBand::SubSecond) => {
            let bits = level32 - 21;
            let seconds = magnitude >> bits;
            let fraction = (magnitude & ((1 << bits) - 1)) << (FRACTION_BITS - bits);
            (seconds / 3600, (seconds / 60) % 60, seconds % 60, fraction)
        }
        Some(LevelBand::Root) | None => return Err(out_of_range()),
    };

    if degree > u64::from(u8::MAX) {
        return Err(out_of_range());
    }

    let fields = ScalarFields {
        negative,
        degree: degree as u8,
        minute: minute as u8,
        second: second as u8,
        fraction: fraction as u16,
    };
    Ok(to_prefix(fields.pack(), level))
}

/// Magnitude in degrees of the lower edge of the cell with magnitude index
/// `magnitude` at `level`. The upper edge is the lower edge of `magnitude + 1`.
pub fn axis_lower_edge(magnitude: u64, level: u8) -> f64 {
    let level32 = u32::from(level);
    match LevelBand::of(level) {
        Some(LevelBand::Root) | None => 0.0,
        Some(LevelBand::Degree) => (magnitude << (9 - level32)) as f64,
        Some(LevelBand::Minute) => {
            let shift = 15 - level32;
            let per_degree = cells_per_sixty(shift);
            let minutes = (magnitude % per_degree) << shift;
            (magnitude / per_degree) as f64 + minutes as f64 / 60.0
        }
        Some(LevelBand::Second) => {
            let shift = 21 - level32;
            let per_minute = cells_per_sixty(shift);
            let seconds = (magnitude % per_minute) << shift;
            (magnitude / per_minute) as f64 / 60.0 + seconds as f64 / 3600.0
        }
        Some(LevelBand::SubSecond) => {
            let bits = level32 - 21;
            let seconds = (magnitude >> bits) as f64;
            let fraction = (magnitude & ((1 << bits) - 1)) as f64 / (1u64 << bits) as f64;
            (seconds + fraction) / 3600.0
        }
    }
}

/// Signed `(lower, upper)` bounds in degrees of the cell at `index`.
pub fn axis_bounds(index: i64, level: u8) -> (f64, f64) {
    if index < 0 {
        let magnitude = (-(index + 1)) as u64;
        (
            -axis_lower_edge(magnitude + 1, level),
            -axis_lower_edge(magnitude, level),
        )
    } else {
        let magnitude = index as u64;
        (
            axis_lower_edge(magnitude, level),
            axis_lower_edge(magnitude + 1, level),
        )
    }
}

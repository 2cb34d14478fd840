//! One-dimensional codec between decimal degrees and scalar codes.
//!
//! A scalar code at precision `p` is the top `p` bits of the
//! [`ScalarFields`] layout, right-aligned: exactly `p` bits long.

use super::fields::{ScalarFields, from_prefix, to_prefix};
use crate::compute::validation::{
    MAX_LONGITUDE, validate_precision, validate_scalar_precision,
};
use crate::error::{GeoSotError, Result};

/// Encode a decimal degree value at `precision` in `[21, 32]`.
///
/// The result holds exactly `precision` bits.
///
/// # Errors
///
/// `InvalidPrecision` outside `[21, 32]`, `InvalidCoordinate` for
/// non-finite values or magnitudes above 180.
///
/// # Examples
///
/// ```
/// use geosot::{code2dec, code2dec_at, dec2code};
///
/// let code = dec2code(76.233, 32)?;
/// assert_eq!(code, 639358566);
/// assert!((code2dec(code)? - 76.23299994574653).abs() < 1e-9);
///
/// let coarse = dec2code(76.233, 21)?;
/// assert_eq!(coarse, 639358566 >> 11);
/// assert!((code2dec_at(coarse, 21)? - 76.233).abs() < 1.0 / 3600.0);
/// # Ok::<(), geosot::GeoSotError>(())
/// ```
pub fn dec2code(value: f64, precision: u8) -> Result<u64> {
    validate_scalar_precision(precision)?;
    encode_scalar(value, precision).map(u64::from)
}

/// Decode a full-precision (32-bit) scalar code.
///
/// # Errors
///
/// `InvalidCode` when `code` does not fit in 32 bits.
pub fn code2dec(code: u64) -> Result<f64> {
    code2dec_at(code, 32)
}

/// Decode a `precision`-bit scalar code produced by [`dec2code`].
///
/// # Errors
///
/// `InvalidPrecision` outside `[1, 32]`, `InvalidCode` when `code` has more
/// than `precision` bits.
pub fn code2dec_at(code: u64, precision: u8) -> Result<f64> {
    validate_precision(precision)?;
    if code >> precision != 0 {
        return Err(GeoSotError::InvalidCode {
            code,
            level: precision,
        });
    }
    Ok(decode_scalar(from_prefix(code as u32, precision)))
}

/// Encode at any precision in `[1, 32]`, right-aligned.
///
/// Below precision 21 the degree/minute/second triple is cut short; this is
/// what the coordinate codec uses for coarse levels.
pub fn encode_scalar(value: f64, precision: u8) -> Result<u32> {
    validate_precision(precision)?;
    validate_scalar_value(value)?;
    Ok(to_prefix(ScalarFields::from_degrees(value).pack(), precision))
}

/// Decode a full 32-bit scalar layout to signed decimal degrees.
pub fn decode_scalar(code: u32) -> f64 {
    ScalarFields::unpack(code).to_degrees()
}

fn validate_scalar_value(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GeoSotError::InvalidCoordinate(format!(
            "Degree value must be finite, got: {}",
            value
        )));
    }
    if value.abs() > MAX_LONGITUDE {
        return Err(GeoSotError::InvalidCoordinate(format!(
            "Degree value out of range [-180.0, 180.0]: {}",
            value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_dec2code_known_value() {
        assert_eq!(dec2code(76.233, 32).unwrap(), 639358566);
    }

    #[test]
    fn test_code2dec_known_value() {
        assert_abs_diff_eq!(
            code2dec(639358566).unwrap(),
            76.23299994574653,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_precision_keeps_exactly_that_many_bits() {
        let full = dec2code(76.233, 32).unwrap();
        for precision in 21..32u8 {
            let coarse = dec2code(76.233, precision).unwrap();
            assert!(coarse >> precision == 0, "precision {}", precision);
            assert_eq!(coarse, full >> (32 - precision));
        }
        let coarse = dec2code(76.233, 21).unwrap();
        assert!(coarse < 1 << 21);
        // 76 deg 13 min 58 s
        assert_abs_diff_eq!(
            code2dec_at(coarse, 21).unwrap(),
            76.0 + 13.0 / 60.0 + 58.0 / 3600.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_code2dec_at_rejects_wide_codes() {
        assert!(matches!(
            code2dec_at(1 << 21, 21),
            Err(GeoSotError::InvalidCode { level: 21, .. })
        ));
        assert!(code2dec_at(0, 0).is_err());
    }

    #[test]
    fn test_scalar_precision_bounds() {
        assert!(matches!(
            dec2code(76.233, 20),
            Err(GeoSotError::InvalidPrecision { precision: 20, .. })
        ));
        assert!(dec2code(76.233, 33).is_err());
        // The general encoder accepts coarse precisions.
        assert_eq!(encode_scalar(76.233, 9).unwrap(), 76);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            dec2code(180.5, 32),
            Err(GeoSotError::InvalidCoordinate(_))
        ));
        assert!(dec2code(f64::NAN, 32).is_err());
        assert!(matches!(
            code2dec(1 << 32),
            Err(GeoSotError::InvalidCode { .. })
        ));
    }

    #[test]
    fn test_negative_round_trip() {
        let code = dec2code(-116.397428, 32).unwrap();
        assert_eq!(code >> 31, 1);
        let back = code2dec(code).unwrap();
        assert!((back + 116.397428).abs() <= 1.0 / (3600.0 * 2048.0));
    }

    #[test]
    fn test_round_trip_within_resolution() {
        for precision in 21..=32u8 {
            let resolution = 1.0 / (3600.0 * 2f64.powi(i32::from(precision) - 21));
            for value in [0.0, 0.5, 39.90923, 76.233, 116.397428, 179.9999, -45.123456] {
                let back = code2dec_at(dec2code(value, precision).unwrap(), precision).unwrap();
                assert!(
                    (back - value).abs() <= resolution,
                    "precision {} value {} decoded {}",
                    precision,
                    value,
                    back
                );
            }
        }
    }
}

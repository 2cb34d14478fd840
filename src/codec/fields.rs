//! Bit-field layout of a 32-bit scalar code.
//!
//! ```text
//!  31   30..23   22..17   16..11   10..0
//! sign  degree   minute   second   fraction (1/2048 s)
//! ```
//!
//! A code at precision `p` is the top `p` bits of this layout moved down to
//! bit 0, so it is exactly `p` bits long.

/// Width of a full-precision scalar code.
pub const SCALAR_BITS: u32 = 32;

const SIGN_SHIFT: u32 = 31;
const DEGREE_SHIFT: u32 = 23;
const MINUTE_SHIFT: u32 = 17;
const SECOND_SHIFT: u32 = 11;

const DEGREE_MASK: u32 = 0xFF;
const MINUTE_MASK: u32 = 0x3F;
const SECOND_MASK: u32 = 0x3F;
const FRACTION_MASK: u32 = 0x7FF;

/// Number of binary-fraction-of-second bits.
pub const FRACTION_BITS: u32 = 11;
const FRACTION_SCALE: f64 = (1u32 << FRACTION_BITS) as f64;

/// The named fields of one scalar code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScalarFields {
    pub negative: bool,
    pub degree: u8,
    pub minute: u8,
    pub second: u8,
    pub fraction: u16,
}

impl ScalarFields {
    /// Decompose a decimal degree value.
    ///
    /// Minutes are rounded to 6 decimals and seconds to 4 before truncation so
    /// that values such as `39.9` land on 54 minutes rather than 53.99999.
    /// The fraction is rounded to the nearest 1/2048 second; any carry moves
    /// up through seconds, minutes and degrees.
    ///
    /// The caller guarantees `value` is finite with magnitude at most 180.
    pub fn from_degrees(value: f64) -> Self {
        let negative = value < 0.0;
        let magnitude = value.abs();

        let mut degree = magnitude.trunc() as u32;
        let minutes = round_to((magnitude - f64::from(degree)) * 60.0, 6);
        let mut minute = minutes.trunc() as u32;
        let seconds = round_to((minutes - f64::from(minute)) * 60.0, 4);
        let mut second = seconds.trunc() as u32;
        let mut fraction = ((seconds - f64::from(second)) * FRACTION_SCALE).round() as u32;

        if fraction > FRACTION_MASK {
            fraction -= FRACTION_MASK + 1;
            second += 1;
        }
        if second >= 60 {
            second -= 60;
            minute += 1;
        }
        if minute >= 60 {
            minute -= 60;
            degree += 1;
        }

        Self {
            negative,
            degree: degree as u8,
            minute: minute as u8,
            second: second as u8,
            fraction: fraction as u16,
        }
    }

    /// Signed decimal degrees at the lower corner of the encoded range.
    pub fn to_degrees(&self) -> f64 {
        let seconds = f64::from(self.second) + f64::from(self.fraction) / FRACTION_SCALE;
        let magnitude = f64::from(self.degree) + f64::from(self.minute) / 60.0 + seconds / 3600.0;
        if self.negative { -magnitude } else { magnitude }
    }

    pub fn pack(&self) -> u32 {
        (u32::from(self.negative) << SIGN_SHIFT)
            | (u32::from(self.degree) << DEGREE_SHIFT)
            | ((u32::from(self.minute) & MINUTE_MASK) << MINUTE_SHIFT)
            | ((u32::from(self.second) & SECOND_MASK) << SECOND_SHIFT)
            | (u32::from(self.fraction) & FRACTION_MASK)
    }

    pub fn unpack(raw: u32) -> Self {
        Self {
            negative: raw >> SIGN_SHIFT == 1,
            degree: ((raw >> DEGREE_SHIFT) & DEGREE_MASK) as u8,
            minute: ((raw >> MINUTE_SHIFT) & MINUTE_MASK) as u8,
            second: ((raw >> SECOND_SHIFT) & SECOND_MASK) as u8,
            fraction: (raw & FRACTION_MASK) as u16,
        }
    }
}

/// Shift the top `precision` bits of a full code down to bit 0.
pub fn to_prefix(raw: u32, precision: u8) -> u32 {
    let drop = SCALAR_BITS - u32::from(precision);
    if drop >= SCALAR_BITS { 0 } else { raw >> drop }
}

/// Inverse of [`to_prefix`].
pub fn from_prefix(prefix: u32, precision: u8) -> u32 {
    let drop = SCALAR_BITS - u32::from(precision);
    if drop >= SCALAR_BITS { 0 } else { prefix << drop }
}

/// Half-up rounding to `digits` decimals, symmetric around zero.
fn round_to(x: f64, digits: i32) -> f64 {
    let mul = 10f64.powi(digits);
    if x >= 0.0 {
        (x * mul + 0.5).trunc() / mul
    } else {
        (x * mul - 0.5).trunc() / mul
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_known_value() {
        let fields = ScalarFields::from_degrees(76.233);
        assert_eq!(
            fields,
            ScalarFields {
                negative: false,
                degree: 76,
                minute: 13,
                second: 58,
                fraction: 1638,
            }
        );
        assert_eq!(fields.pack(), 639358566);
    }

    #[test]
    fn test_minute_noise_is_rounded_away() {
        let fields = ScalarFields::from_degrees(39.9);
        assert_eq!(fields.degree, 39);
        assert_eq!(fields.minute, 54);
        assert_eq!(fields.second, 0);
        assert_eq!(fields.fraction, 0);
    }

    #[test]
    fn test_carry_into_degree() {
        let fields = ScalarFields::from_degrees(179.999_999_999);
        assert_eq!(fields.degree, 180);
        assert_eq!(fields.minute, 0);
        assert_eq!(fields.second, 0);
        assert_eq!(fields.fraction, 0);
    }

    #[test]
    fn test_sign_bit() {
        let fields = ScalarFields::from_degrees(-76.233);
        assert!(fields.negative);
        assert_eq!(fields.pack(), 639358566 | (1 << 31));
        assert_eq!(ScalarFields::unpack(fields.pack()), fields);
        assert!(fields.to_degrees() < 0.0);
    }

    #[test]
    fn test_prefix_helpers() {
        let raw = 639358566u32;
        assert_eq!(to_prefix(raw, 32), raw);
        assert_eq!(to_prefix(raw, 9), 76);
        assert_eq!(from_prefix(76, 9), 76 << 23);
        assert_eq!(from_prefix(to_prefix(raw, 21), 21), raw & !0x7FF);
    }
}

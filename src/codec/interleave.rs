//! Morton-style bit interleaving of two 32-bit scalar codes.
//!
//! Longitude bits occupy the even positions and latitude bits the odd ones,
//! so every 2-bit quadrant digit reads `(lat_bit << 1) | lng_bit`.

/// Spread the bits of `value` so bit `i` moves to bit `2i`.
#[inline]
pub fn spread(value: u32) -> u64 {
    let mut x = u64::from(value);
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

/// Gather the even bits of `value` back into a 32-bit integer.
#[inline]
pub fn squash(value: u64) -> u32 {
    let mut x = value & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x as u32
}

/// Interleave a longitude code and a latitude code.
///
/// # Examples
///
/// ```
/// use geosot::codec::{deinterleave, interleave};
///
/// let code = interleave(0b11, 0b01);
/// assert_eq!(code, 0b0111);
/// assert_eq!(deinterleave(code), (0b11, 0b01));
/// ```
#[inline]
pub fn interleave(lng: u32, lat: u32) -> u64 {
    spread(lng) | (spread(lat) << 1)
}

/// Split an interleaved code into `(lng, lat)`.
#[inline]
pub fn deinterleave(code: u64) -> (u32, u32) {
    (squash(code), squash(code >> 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_and_squash() {
        assert_eq!(spread(0), 0);
        assert_eq!(spread(1), 1);
        assert_eq!(spread(0b11), 0b101);
        assert_eq!(spread(u32::MAX), 0x5555_5555_5555_5555);
        assert_eq!(squash(0x5555_5555_5555_5555), u32::MAX);
        assert_eq!(squash(0xAAAA_AAAA_AAAA_AAAA), 0);
    }

    #[test]
    fn test_quadrant_digit_order() {
        // Top digit pairs the sign bits: latitude high, longitude low.
        let code = interleave(1 << 31, 0);
        assert_eq!(code >> 62, 0b01);
        let code = interleave(0, 1 << 31);
        assert_eq!(code >> 62, 0b10);
    }

    #[test]
    fn test_deinterleave_known_code() {
        assert_eq!(deinterleave(339638376531246140), (639358566, 231900774));
    }
}

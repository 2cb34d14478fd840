//! Scalar and coordinate codecs.
//!
//! - [`scalar`]: decimal degrees <-> 32-bit degree/minute/second codes
//! - [`coord`]: longitude/latitude <-> interleaved 64-bit codes
//! - [`axis`]: contiguous per-axis cell numbering
//!
//! The codecs are pure functions and never log.

pub mod axis;
pub mod coord;
pub mod fields;
pub mod interleave;
pub mod scalar;

pub use axis::{axis_bounds, axis_index, axis_lower_edge, scalar_from_axis_index};
pub use coord::{decode_at, decode_by_geomgrid, get_code};
pub use fields::ScalarFields;
pub use interleave::{deinterleave, interleave};
pub use scalar::{code2dec, code2dec_at, dec2code, decode_scalar, encode_scalar};

//! GeoSOT hierarchical grid: coordinate codes, cell navigation and region algebra.
//!
//! ```rust
//! use geosot::{GeoSotCell, GeoSotRegion, decode_by_geomgrid, get_code};
//!
//! let code = get_code(116.397428, 39.90923, 32)?;
//! let (lng, lat) = decode_by_geomgrid(code);
//! assert!((lng - 116.397428).abs() < 1e-6 && (lat - 39.90923).abs() < 1e-6);
//!
//! let cell = GeoSotCell::from_coords(116.397, 39.916, 20)?;
//! assert!(cell.parent()?.is_ancestor_of(&cell));
//!
//! let mut region = GeoSotRegion::new(20)?;
//! region.add_cell(cell)?;
//! assert!(region.contains_point(116.397, 39.916)?);
//! # Ok::<(), geosot::GeoSotError>(())
//! ```

pub mod cell;
pub mod codec;
pub mod compute;
pub mod config;
pub mod error;
pub mod grid;
pub mod region;

pub use cell::{CELL_PREFIX, GeoSotCell};
pub use codec::{
    ScalarFields, code2dec, code2dec_at, dec2code, decode_at, decode_by_geomgrid, decode_scalar,
    encode_scalar, get_code,
};
pub use config::{Config, DEFAULT_MAX_REGION_CELLS, Level, LevelBand};
pub use error::{GeoSotError, Result};
pub use grid::Grid;
pub use region::GeoSotRegion;

pub use compute::analysis as spatial_analysis;
pub use compute::analysis::{compactness, jaccard_similarity, overlap_ratio};

pub use geo::{Point, Polygon, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeoSotCell, GeoSotError, GeoSotRegion, Grid, Result};

    pub use crate::{Config, Level};

    pub use crate::{decode_by_geomgrid, get_code};

    pub use crate::spatial_analysis::{compactness, jaccard_similarity, overlap_ratio};

    pub use geo::{Point, Polygon, Rect};
}

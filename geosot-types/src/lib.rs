//! # geosot-types
//!
//! Core level types for the GeoSOT hierarchical grid.
//!
//! - **Levels**: [`level::Level`], a validated subdivision depth in `0..=32`
//! - **Bands**: [`level::LevelBand`], which degree/minute/second field a level splits
//! - **Cell sizes**: [`level::cell_size_degrees`], nominal edge length per level
//!
//! ## Examples
//!
//! ```rust
//! use geosot_types::level::{Level, LevelBand};
//!
//! let level = Level::new(18).unwrap();
//! assert_eq!(level.band(), LevelBand::Second);
//! assert_eq!(level.cell_size_degrees(), 8.0 / 3600.0);
//! ```

pub mod level;

pub use level::{Level, LevelBand, LevelOutOfRange, MAX_LEVEL, MIN_SCALAR_PRECISION};

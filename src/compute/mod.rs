//! Compute layer for region building and analysis.
//!
//! - Input validation shared by every entry point
//! - Rasterizing rectangles and polygons into cell codes
//! - Similarity and shape metrics over regions

pub mod analysis;
pub mod cover;
pub mod validation;

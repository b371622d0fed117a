//! Spatial data structures and mask generation
//!
//! This module contains spatial-related functionality including:
//! - Canvas dimensions and geometric primitives
//! - Binary occupancy masks
//! - The shape catalog that produces masks

/// Validated canvas dimensions
pub mod canvas;
/// Points and filled regions
pub mod geometry;
/// Binary occupancy masks
pub mod mask;
/// Shape catalog and mask construction
pub mod shapes;

pub use canvas::Canvas;
pub use mask::{Mask, Occupancy};
pub use shapes::{Shape, build_mask};

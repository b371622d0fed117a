//! Mathematical utilities

/// Cubic spline interpolation for smooth colour ramps
pub mod interpolation;

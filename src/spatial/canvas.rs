//! Pixel coordinate space shared by masks and rendered images

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, configuration_error};
use crate::spatial::geometry::Point;

/// Width × height in pixels, both positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either dimension is zero or exceeds
    /// `MAX_CANVAS_DIMENSION`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        Ok(Self { width, height })
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Geometric centre `(width / 2, height / 2)`
    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Length of the shorter side
    pub fn min_side(&self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    /// Canvas scaled by an integer factor
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the scaled canvas is out of range.
    pub fn scaled(&self, factor: u32) -> Result<Self> {
        Self::new(
            self.width.saturating_mul(factor),
            self.height.saturating_mul(factor),
        )
    }
}

fn check_dimension(parameter: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(configuration_error(parameter, &value, &"must be positive"));
    }
    if value > MAX_CANVAS_DIMENSION {
        return Err(configuration_error(
            parameter,
            &value,
            &format!("must not exceed {MAX_CANVAS_DIMENSION}"),
        ));
    }
    Ok(())
}

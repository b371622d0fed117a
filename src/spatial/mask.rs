//! Binary occupancy bitmap constraining where words may be placed
//!
//! Stored as one bit per pixel in row-major order. A mask is assembled once
//! by the shape generator or the silhouette loader and is read-only after.

use crate::spatial::canvas::Canvas;
use crate::spatial::geometry::{Point, Region};
use bitvec::bitvec;
use bitvec::vec::BitVec;
use image::{GrayImage, Luma};
use ndarray::Array2;

/// Occupancy class of a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupancy {
    /// Content may be drawn here
    Paintable,
    /// Content must not be drawn here
    Excluded,
}

impl Occupancy {
    /// Grayscale value in the word-cloud convention (paintable dark, excluded white)
    pub const fn luma(self) -> u8 {
        match self {
            Self::Paintable => 0,
            Self::Excluded => 255,
        }
    }
}

/// Canvas-shaped grid of occupancy values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    canvas: Canvas,
    paintable: BitVec,
}

impl Mask {
    /// Create a mask with every pixel excluded
    pub(crate) fn excluded(canvas: Canvas) -> Self {
        Self {
            canvas,
            paintable: bitvec![0; canvas.area()],
        }
    }

    /// Mark every pixel whose centre lies inside `region` as paintable
    ///
    /// Only the part of the region inside the canvas is visited, so regions
    /// extending past the edges are clipped.
    pub(crate) fn paint(&mut self, region: &Region) {
        let bounds = region.bounds();
        let (x_start, x_end) = clamp_span(bounds.min.x, bounds.max.x, self.canvas.width());
        let (y_start, y_end) = clamp_span(bounds.min.y, bounds.max.y, self.canvas.height());

        for y in y_start..y_end {
            for x in x_start..x_end {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if region.contains(center) {
                    self.set(x, y, Occupancy::Paintable);
                }
            }
        }
    }

    pub(crate) fn set(&mut self, x: u32, y: u32, value: Occupancy) {
        if let Some(index) = self.index(x, y) {
            self.paintable.set(index, value == Occupancy::Paintable);
        }
    }

    const fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.canvas.width() && y < self.canvas.height() {
            Some(y as usize * self.canvas.width() as usize + x as usize)
        } else {
            None
        }
    }

    /// Canvas the mask covers
    pub const fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Number of entries, always `width × height`
    pub fn len(&self) -> usize {
        self.paintable.len()
    }

    /// Test whether the mask has no entries
    pub fn is_empty(&self) -> bool {
        self.paintable.is_empty()
    }

    /// Occupancy at `(x, y)`, or `None` outside the canvas
    pub fn get(&self, x: u32, y: u32) -> Option<Occupancy> {
        let index = self.index(x, y)?;
        self.paintable.get(index).map(|bit| {
            if *bit {
                Occupancy::Paintable
            } else {
                Occupancy::Excluded
            }
        })
    }

    /// Test whether `(x, y)` is paintable
    pub fn is_paintable(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == Some(Occupancy::Paintable)
    }

    /// Number of paintable pixels
    pub fn paintable_count(&self) -> usize {
        self.paintable.count_ones()
    }

    /// Grid view indexed `[row, col]` using the grayscale convention
    pub fn to_array(&self) -> Array2<u8> {
        let (rows, cols) = (self.height() as usize, self.width() as usize);
        Array2::from_shape_fn((rows, cols), |(row, col)| {
            let index = row * cols + col;
            if self.paintable.get(index).as_deref() == Some(&true) {
                Occupancy::Paintable.luma()
            } else {
                Occupancy::Excluded.luma()
            }
        })
    }

    /// Single-channel image using the grayscale convention
    pub fn to_luma_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width(), self.height(), |x, y| {
            let value = self.get(x, y).unwrap_or(Occupancy::Excluded);
            Luma([value.luma()])
        })
    }
}

// Pixel index range whose centres may fall within [min, max]
fn clamp_span(min: f64, max: f64, limit: u32) -> (u32, u32) {
    let limit_f = f64::from(limit);
    let start = (min - 0.5).floor().clamp(0.0, limit_f) as u32;
    let end = ((max - 0.5).floor() + 1.0).clamp(0.0, limit_f) as u32;
    (start, end.max(start))
}

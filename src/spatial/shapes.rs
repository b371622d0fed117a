//! Shape catalog and mask generation
//!
//! Each shape is a pure function from a canvas to a set of filled regions.
//! All geometry is derived from canvas proportions around the centre
//! `(width / 2, height / 2)`, so shapes scale with the requested size.

use crate::io::configuration::{
    HEART_MARGIN, HEART_STEP_DEGREES, SHAPE_MARGIN, STAR_INNER_RATIO, STAR_POINTS,
};
use crate::io::error::{CloudError, Result, configuration_error};
use crate::spatial::canvas::Canvas;
use crate::spatial::geometry::{Point, Region};
use crate::spatial::mask::Mask;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

// Cloud lobes use fixed pixel extents
const CLOUD_BODY_HALF_EXTENTS: (f64, f64) = (300.0, 150.0);
const CLOUD_LOBE_RADIUS: f64 = 150.0;
const CLOUD_LOBE_OFFSET: f64 = 250.0;

// Bulb proportions relative to the canvas and the body
const BULB_BOTTOM_COMPRESSION: f64 = 0.7;
const BULB_BASE_OVERLAP: f64 = 0.06;
const BULB_BASE_STEP: f64 = 0.04;
const BULB_BASE_WIDTHS: [f64; 4] = [0.6, 0.55, 0.5, 0.4];

/// Silhouette the cloud is constrained to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Full canvas, no mask
    Rectangle,
    /// Centred disk
    Circle,
    /// Wide ellipse
    HorizontalOval,
    /// Centred axis-aligned square
    Square,
    /// Five-pointed star pointing up
    Star,
    /// Parametric heart
    Heart,
    /// Three overlapping ellipses
    Cloud,
    /// Light bulb: elliptical body over a tapering base
    Bulb,
}

impl Shape {
    /// Every supported shape
    pub const ALL: [Self; 8] = [
        Self::Rectangle,
        Self::Circle,
        Self::HorizontalOval,
        Self::Square,
        Self::Star,
        Self::Heart,
        Self::Cloud,
        Self::Bulb,
    ];

    /// Canonical identifier
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::HorizontalOval => "oval",
            Self::Square => "square",
            Self::Star => "star",
            Self::Heart => "heart",
            Self::Cloud => "cloud",
            Self::Bulb => "bulb",
        }
    }

    /// Filled regions making up the shape on `canvas`
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the canvas is too small for the
    /// shape's margins and a radius would not be positive.
    pub fn regions(self, canvas: Canvas) -> Result<Vec<Region>> {
        let center = canvas.center();
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());

        match self {
            Self::Rectangle => Ok(vec![Region::Rectangle {
                min: Point::new(0.0, 0.0),
                max: Point::new(width, height),
            }]),
            Self::Circle => {
                let radius = positive(self, "radius", canvas.min_side() / 2.0 - SHAPE_MARGIN)?;
                Ok(vec![Region::circle(center, radius)])
            }
            Self::HorizontalOval => {
                let rx = positive(self, "horizontal radius", width / 3.0 - SHAPE_MARGIN)?;
                let ry = positive(self, "vertical radius", height / 2.0 - SHAPE_MARGIN)?;
                Ok(vec![Region::Ellipse { center, rx, ry }])
            }
            Self::Square => {
                let side = positive(self, "side", 2.0f64.mul_add(-SHAPE_MARGIN, canvas.min_side()))?;
                Ok(vec![Region::centered_rect(center, side / 2.0, side / 2.0)])
            }
            Self::Star => {
                let outer = positive(self, "radius", canvas.min_side() / 2.0 - SHAPE_MARGIN)?;
                Ok(vec![star(center, outer)])
            }
            Self::Heart => {
                let scale = positive(self, "scale", canvas.min_side() / 2.0 - HEART_MARGIN)?;
                Ok(vec![heart(center, scale)])
            }
            Self::Cloud => Ok(cloud(center)),
            Self::Bulb => Ok(bulb(center, width, height)),
        }
    }

    /// Build the mask for this shape
    ///
    /// Returns `None` for [`Shape::Rectangle`], meaning the whole canvas is
    /// usable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the shape does not fit the canvas.
    pub fn mask(self, canvas: Canvas) -> Result<Option<Mask>> {
        if self == Self::Rectangle {
            return Ok(None);
        }

        let mut mask = Mask::excluded(canvas);
        for region in self.regions(canvas)? {
            mask.paint(&region);
        }

        log::debug!(
            "Built {self} mask {}x{} with {} paintable pixels",
            canvas.width(),
            canvas.height(),
            mask.paintable_count()
        );

        Ok(Some(mask))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = CloudError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "rectangle" | "rect" | "default" => Ok(Self::Rectangle),
            "circle" => Ok(Self::Circle),
            "oval" | "horizontal_oval" | "ellipse" => Ok(Self::HorizontalOval),
            "square" => Ok(Self::Square),
            "star" => Ok(Self::Star),
            "heart" => Ok(Self::Heart),
            "cloud" => Ok(Self::Cloud),
            "bulb" | "lightbulb" | "light_bulb" => Ok(Self::Bulb),
            _ => Err(configuration_error(
                "shape",
                &s,
                &format!(
                    "unknown shape, expected one of: {}",
                    Self::ALL.map(Self::as_str).join(", ")
                ),
            )),
        }
    }
}

/// Build a mask from a shape identifier and canvas dimensions
///
/// Returns `None` for the rectangle, whatever the dimensions.
///
/// # Errors
///
/// Returns a configuration error for an unknown identifier, an invalid
/// canvas, or a canvas too small for the shape.
pub fn build_mask(shape_id: &str, width: u32, height: u32) -> Result<Option<Mask>> {
    let shape: Shape = shape_id.parse()?;
    if shape == Shape::Rectangle {
        return Ok(None);
    }
    shape.mask(Canvas::new(width, height)?)
}

fn positive(shape: Shape, parameter: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(configuration_error(
            parameter,
            &format!("{value:.1}"),
            &format!("canvas too small for the {shape} shape"),
        ))
    }
}

fn star(center: Point, outer: f64) -> Region {
    let inner = outer / STAR_INNER_RATIO;
    let step = PI / STAR_POINTS as f64;
    let vertices = (0..STAR_POINTS * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            center.polar(radius, (i as f64).mul_add(step, -PI / 2.0))
        })
        .collect();
    Region::Polygon { vertices }
}

/// Heart curve `x = 16 sin³ t`, `y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t`
///
/// `scale` is the half-width in pixels, so one curve unit is `scale / 16`.
/// Multiplying the unit curve by `scale` directly would span far past the
/// canvas.
fn heart(center: Point, scale: f64) -> Region {
    let unit = scale / 16.0;
    let vertices = (0..360)
        .step_by(HEART_STEP_DEGREES)
        .map(|degrees| {
            let t = f64::from(degrees).to_radians();
            let x = 16.0 * t.sin().powi(3);
            let harmonics =
                5.0f64.mul_add((2.0 * t).cos(), 2.0f64.mul_add((3.0 * t).cos(), (4.0 * t).cos()));
            let y = 13.0f64.mul_add(t.cos(), -harmonics);
            Point::new(unit.mul_add(x, center.x), unit.mul_add(-y, center.y))
        })
        .collect();
    Region::Polygon { vertices }
}

fn cloud(center: Point) -> Vec<Region> {
    let (body_rx, body_ry) = CLOUD_BODY_HALF_EXTENTS;
    vec![
        Region::Ellipse {
            center,
            rx: body_rx,
            ry: body_ry,
        },
        Region::circle(
            Point::new(center.x - CLOUD_LOBE_OFFSET, center.y),
            CLOUD_LOBE_RADIUS,
        ),
        Region::circle(
            Point::new(center.x + CLOUD_LOBE_OFFSET, center.y),
            CLOUD_LOBE_RADIUS,
        ),
    ]
}

fn bulb(center: Point, width: f64, height: f64) -> Vec<Region> {
    let body_rx = width / 4.0;
    let body_top = center.y - height / 2.0;
    let body_bottom = (BULB_BOTTOM_COMPRESSION * height).mul_add(0.5, center.y);
    let body_ry = (body_bottom - body_top) / 2.0;

    let mut regions = vec![Region::Ellipse {
        center: Point::new(center.x, body_top + body_ry),
        rx: body_rx,
        ry: body_ry,
    }];

    let step = BULB_BASE_STEP * height;
    let mut top = BULB_BASE_OVERLAP.mul_add(-height, body_bottom);
    for ratio in BULB_BASE_WIDTHS {
        let half_width = body_rx * ratio;
        regions.push(Region::Rectangle {
            min: Point::new(center.x - half_width, top),
            max: Point::new(center.x + half_width, top + step),
        });
        top += step;
    }
    regions
}

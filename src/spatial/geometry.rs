//! Filled planar regions in canvas coordinates
//!
//! Origin top-left, x to the right, y down. Containment is closed: points
//! on the boundary are inside.

/// Point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle` (radians)
    pub fn polar(self, radius: f64, angle: f64) -> Self {
        Self::new(
            radius.mul_add(angle.cos(), self.x),
            radius.mul_add(angle.sin(), self.y),
        )
    }

    /// Rotate about `center` by `angle` radians
    #[must_use]
    pub fn rotate_about(self, center: Self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Self::new(
            dx.mul_add(cos, -dy * sin) + center.x,
            dx.mul_add(sin, dy * cos) + center.y,
        )
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner (inclusive)
    pub min: Point,
    /// Maximum corner (inclusive)
    pub max: Point,
}

/// A filled geometric region
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// Axis-aligned ellipse
    Ellipse {
        /// Centre of the ellipse
        center: Point,
        /// Horizontal half-extent
        rx: f64,
        /// Vertical half-extent
        ry: f64,
    },
    /// Axis-aligned rectangle
    Rectangle {
        /// Top-left corner
        min: Point,
        /// Bottom-right corner
        max: Point,
    },
    /// Simple or self-intersecting polygon, filled with the even-odd rule
    Polygon {
        /// Vertices in drawing order; the polygon closes implicitly
        vertices: Vec<Point>,
    },
}

impl Region {
    /// Circle with the given centre and radius
    pub const fn circle(center: Point, radius: f64) -> Self {
        Self::Ellipse {
            center,
            rx: radius,
            ry: radius,
        }
    }

    /// Rectangle centred on `center`
    pub fn centered_rect(center: Point, half_width: f64, half_height: f64) -> Self {
        Self::Rectangle {
            min: Point::new(center.x - half_width, center.y - half_height),
            max: Point::new(center.x + half_width, center.y + half_height),
        }
    }

    /// Test whether `p` lies inside the region
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Ellipse { center, rx, ry } => {
                if *rx <= 0.0 || *ry <= 0.0 {
                    return false;
                }
                let nx = (p.x - center.x) / rx;
                let ny = (p.y - center.y) / ry;
                nx.mul_add(nx, ny * ny) <= 1.0
            }
            Self::Rectangle { min, max } => {
                p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
            }
            Self::Polygon { vertices } => polygon_contains(vertices, p),
        }
    }

    /// Bounding box of the region
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Ellipse { center, rx, ry } => Bounds {
                min: Point::new(center.x - rx, center.y - ry),
                max: Point::new(center.x + rx, center.y + ry),
            },
            Self::Rectangle { min, max } => Bounds {
                min: *min,
                max: *max,
            },
            Self::Polygon { vertices } => {
                let mut min = Point::new(f64::INFINITY, f64::INFINITY);
                let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
                for v in vertices {
                    min.x = min.x.min(v.x);
                    min.y = min.y.min(v.y);
                    max.x = max.x.max(v.x);
                    max.y = max.y.max(v.y);
                }
                Bounds { min, max }
            }
        }
    }
}

// Even-odd ray casting towards +x
fn polygon_contains(vertices: &[Point], p: Point) -> bool {
    let Some(&last) = vertices.last() else {
        return false;
    };

    let mut inside = false;
    let mut previous = last;
    for &current in vertices {
        if (current.y > p.y) != (previous.y > p.y) {
            let t = (p.y - current.y) / (previous.y - current.y);
            let crossing = t.mul_add(previous.x - current.x, current.x);
            if p.x < crossing {
                inside = !inside;
            }
        }
        previous = current;
    }
    inside
}

//! Immutable render configuration passed to the renderer boundary

use crate::io::configuration::{
    DEFAULT_MAX_FONT, DEFAULT_MAX_WORDS, DEFAULT_MIN_FONT, DEFAULT_SEED, HD_SCALE,
    MAX_FONT_RANGE, MAX_WORDS_RANGE, MIN_FONT_RANGE, RELATIVE_SCALING, STANDARD_HEIGHT,
    STANDARD_WIDTH,
};
use crate::io::error::{CloudError, Result, configuration_error};
use crate::render::palette::Palette;
use crate::spatial::canvas::Canvas;
use image::Rgba;
use std::fmt;
use std::str::FromStr;

/// Preferred word orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Every word horizontal
    #[default]
    Horizontal,
    /// Mostly horizontal with some vertical words
    Mixed,
    /// Every word vertical
    Vertical,
}

impl Orientation {
    /// Probability that a word is laid out horizontally
    pub const fn prefer_horizontal(self) -> f64 {
        match self {
            Self::Horizontal => 1.0,
            Self::Mixed => 0.7,
            Self::Vertical => 0.0,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontal",
            Self::Mixed => "mixed",
            Self::Vertical => "vertical",
        })
    }
}

impl FromStr for Orientation {
    type Err = CloudError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "mixed" => Ok(Self::Mixed),
            "vertical" => Ok(Self::Vertical),
            _ => Err(configuration_error(
                "orientation",
                &s,
                &"expected one of: horizontal, mixed, vertical",
            )),
        }
    }
}

/// Output resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Canvas as configured
    Standard,
    /// Canvas and font sizes doubled
    HighDefinition,
}

impl Resolution {
    /// Multiplier applied to canvas and font sizes
    pub const fn scale(self) -> u32 {
        match self {
            Self::Standard => 1,
            Self::HighDefinition => HD_SCALE,
        }
    }
}

/// Settings consumed by the renderer
///
/// Built once and passed by reference; nothing here is mutated during a
/// render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Canvas of the standard resolution output
    pub canvas: Canvas,
    /// Maximum number of words handed to the renderer
    pub max_words: usize,
    /// Smallest font size in pixels
    pub min_font_size: u32,
    /// Largest font size in pixels
    pub max_font_size: u32,
    /// Probability that a word is horizontal, in `[0, 1]`
    pub prefer_horizontal: f64,
    /// Weight of relative frequency when sizing words, in `[0, 1]`
    pub relative_scaling: f64,
    /// Background colour
    pub background: Rgba<u8>,
    /// Colour ramp for words
    pub palette: Palette,
    /// Seed for reproducible layout
    pub seed: u64,
}

impl RenderConfig {
    /// Standard configuration with the given canvas
    pub const fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            max_words: DEFAULT_MAX_WORDS,
            min_font_size: DEFAULT_MIN_FONT,
            max_font_size: DEFAULT_MAX_FONT,
            prefer_horizontal: Orientation::Horizontal.prefer_horizontal(),
            relative_scaling: RELATIVE_SCALING,
            background: Rgba([255, 255, 255, 255]),
            palette: Palette::Viridis,
            seed: DEFAULT_SEED,
        }
    }

    /// Default configuration on the standard canvas
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the standard canvas is invalid.
    pub fn standard() -> Result<Self> {
        Ok(Self::with_canvas(Canvas::new(STANDARD_WIDTH, STANDARD_HEIGHT)?))
    }

    /// Check every numeric range
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        check_range("max_words", self.max_words, MAX_WORDS_RANGE)?;
        check_range("min_font_size", self.min_font_size, MIN_FONT_RANGE)?;
        check_range("max_font_size", self.max_font_size, MAX_FONT_RANGE)?;
        if self.min_font_size > self.max_font_size {
            return Err(configuration_error(
                "min_font_size",
                &self.min_font_size,
                &format!("must not exceed max_font_size {}", self.max_font_size),
            ));
        }
        check_unit("prefer_horizontal", self.prefer_horizontal)?;
        check_unit("relative_scaling", self.relative_scaling)?;
        Ok(())
    }

    /// Configuration for `resolution`, scaling canvas and font bounds
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the scaled canvas is out of range.
    pub fn at_resolution(&self, resolution: Resolution) -> Result<Self> {
        let scale = resolution.scale();
        Ok(Self {
            canvas: self.canvas.scaled(scale)?,
            min_font_size: self.min_font_size.saturating_mul(scale),
            max_font_size: self.max_font_size.saturating_mul(scale),
            ..self.clone()
        })
    }
}

fn check_range<T>(parameter: &'static str, value: T, (low, high): (T, T)) -> Result<()>
where
    T: PartialOrd + fmt::Display,
{
    if value < low || value > high {
        return Err(configuration_error(
            parameter,
            &value,
            &format!("must be between {low} and {high}"),
        ));
    }
    Ok(())
}

fn check_unit(parameter: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(configuration_error(
            parameter,
            &value,
            &"must be between 0 and 1",
        ))
    }
}

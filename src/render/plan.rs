//! Per-word styling derived from normalised frequencies
//!
//! Font sizes follow the relative-scaling recurrence: the heaviest word gets
//! the maximum size and each following word is scaled by its weight ratio to
//! the previous one, blended by `relative_scaling`. Words that would fall
//! below the minimum size are dropped. Colours and orientations are drawn
//! from a generator seeded by the configuration.

use crate::io::error::{Result, computation_error};
use crate::render::config::{RenderConfig, Resolution};
use crate::text::frequency::FrequencyMapping;
use image::Rgba;
use num_traits::ToPrimitive;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Direction a word is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOrientation {
    /// Left to right
    Horizontal,
    /// Rotated a quarter turn
    Vertical,
}

/// Styling of one word handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct WordStyle {
    /// Surface form
    pub text: String,
    /// Weight relative to the heaviest word, in `(0, 1]`
    pub weight: f64,
    /// Font size in pixels
    pub font_size: u32,
    /// Fill colour
    pub color: Rgba<u8>,
    /// Drawing direction
    pub orientation: WordOrientation,
}

/// Style the heaviest words of `frequencies` according to `config`
///
/// # Errors
///
/// Returns a configuration error if `config` is out of range, or a
/// computation error if the palette ramp cannot be built.
pub fn plan_words(frequencies: &FrequencyMapping, config: &RenderConfig) -> Result<Vec<WordStyle>> {
    plan_words_at(frequencies, config, Resolution::Standard)
}

/// Style words for `resolution`, with font bounds scaled from `config`
///
/// Ranges are checked on the unscaled `config`; scaled bounds may exceed
/// the standard limits.
///
/// # Errors
///
/// Returns a configuration error if `config` is out of range or the scaled
/// canvas is too large, or a computation error if the palette ramp cannot
/// be built.
pub fn plan_words_at(
    frequencies: &FrequencyMapping,
    config: &RenderConfig,
    resolution: Resolution,
) -> Result<Vec<WordStyle>> {
    config.validate()?;
    style_words(frequencies, &config.at_resolution(resolution)?)
}

fn style_words(frequencies: &FrequencyMapping, config: &RenderConfig) -> Result<Vec<WordStyle>> {
    let ramp = config.palette.ramp()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let scaling = config.relative_scaling;
    let min_size = f64::from(config.min_font_size);

    let mut size = f64::from(config.max_font_size);
    let mut last_weight: Option<f64> = None;
    let mut styles = Vec::new();

    for (text, weight) in frequencies.normalized(config.max_words) {
        if let Some(previous) = last_weight {
            size = (scaling.mul_add(weight / previous, 1.0 - scaling) * size).round();
        }
        if size < min_size {
            break;
        }

        let font_size = size
            .to_u32()
            .ok_or_else(|| computation_error("font sizing", &format!("size {size} for '{text}'")))?;

        let orientation = if rng.random::<f64>() < config.prefer_horizontal {
            WordOrientation::Horizontal
        } else {
            WordOrientation::Vertical
        };
        let color = ramp.color_at(rng.random::<f64>());

        styles.push(WordStyle {
            text,
            weight,
            font_size,
            color,
            orientation,
        });
        last_weight = Some(weight);
    }

    Ok(styles)
}

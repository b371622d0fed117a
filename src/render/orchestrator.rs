//! Renderer boundary and multi-resolution driver
//!
//! Word placement is delegated to a [`Renderer`]. Each request owns a mask
//! built fresh for its canvas and borrows the shared, read-only frequency
//! mapping, so resolutions are independent of one another.

use crate::io::configuration::PREVIEW_TINT_ALPHA;
use crate::io::error::{Result, computation_error};
use crate::io::silhouette::load_mask;
use crate::render::config::{RenderConfig, Resolution};
use crate::render::font::FontResource;
use crate::render::plan::{WordStyle, plan_words_at};
use crate::spatial::canvas::Canvas;
use crate::spatial::mask::Mask;
use crate::spatial::shapes::Shape;
use crate::text::frequency::FrequencyMapping;
use image::{Rgba, RgbaImage};
use std::path::PathBuf;

/// Where the mask of a render comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskSource {
    /// A catalog shape
    Shape(Shape),
    /// An arbitrary silhouette image
    Silhouette(PathBuf),
}

impl MaskSource {
    /// Build the mask for `canvas`, `None` meaning the full canvas
    ///
    /// # Errors
    ///
    /// Propagates shape configuration errors and silhouette loading errors.
    pub fn build(&self, canvas: Canvas) -> Result<Option<Mask>> {
        match self {
            Self::Shape(shape) => shape.mask(canvas),
            Self::Silhouette(path) => load_mask(path, canvas).map(Some),
        }
    }
}

/// Everything a renderer needs for one output
#[derive(Debug)]
pub struct RenderRequest<'a> {
    /// Frequencies the words were derived from
    pub frequencies: &'a FrequencyMapping,
    /// Styled words, heaviest first
    pub words: Vec<WordStyle>,
    /// Placement constraint, `None` for the full canvas
    pub mask: Option<Mask>,
    /// Settings scaled for this resolution
    pub config: RenderConfig,
    /// Font to draw with
    pub font: &'a FontResource,
    /// Resolution being produced
    pub resolution: Resolution,
}

/// Produces a raster image from a render request
pub trait Renderer {
    /// Render one output
    ///
    /// # Errors
    ///
    /// Implementations return an error if the image cannot be produced.
    fn render(&self, request: RenderRequest<'_>) -> Result<RgbaImage>;
}

/// One finished output
#[derive(Debug, Clone)]
pub struct RenderedImage {
    /// Resolution of the output
    pub resolution: Resolution,
    /// Rendered pixels
    pub image: RgbaImage,
}

/// Render every requested resolution
///
/// # Errors
///
/// Returns the first configuration, mask or renderer error, or a
/// computation error if a renderer returns an image of the wrong size.
pub fn render_resolutions(
    renderer: &impl Renderer,
    frequencies: &FrequencyMapping,
    source: &MaskSource,
    config: &RenderConfig,
    font: &FontResource,
    resolutions: &[Resolution],
) -> Result<Vec<RenderedImage>> {
    config.validate()?;

    let mut outputs = Vec::with_capacity(resolutions.len());
    for &resolution in resolutions {
        let scaled = config.at_resolution(resolution)?;
        let canvas = scaled.canvas;
        let mask = source.build(canvas)?;
        let words = plan_words_at(frequencies, config, resolution)?;

        log::debug!(
            "Rendering {} words at {}x{} ({resolution:?})",
            words.len(),
            canvas.width(),
            canvas.height()
        );

        let image = renderer.render(RenderRequest {
            frequencies,
            words,
            mask,
            config: scaled,
            font,
            resolution,
        })?;

        if image.dimensions() != (canvas.width(), canvas.height()) {
            return Err(computation_error(
                "render",
                &format!(
                    "renderer produced {}x{} for a {}x{} canvas",
                    image.width(),
                    image.height(),
                    canvas.width(),
                    canvas.height()
                ),
            ));
        }

        outputs.push(RenderedImage { resolution, image });
    }

    Ok(outputs)
}

/// Renderer showing the silhouette without placing words
///
/// Excluded pixels take the background colour; paintable pixels are tinted
/// with the colour of the heaviest word.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilhouettePreview;

impl Renderer for SilhouettePreview {
    fn render(&self, request: RenderRequest<'_>) -> Result<RgbaImage> {
        let background = request.config.background;
        let tint = match request.words.first() {
            Some(word) => word.color,
            None => request.config.palette.ramp()?.color_at(0.5),
        };
        let fill = blend(background, tint, PREVIEW_TINT_ALPHA);

        let canvas = request.config.canvas;
        let image = RgbaImage::from_fn(canvas.width(), canvas.height(), |x, y| {
            let paintable = request
                .mask
                .as_ref()
                .is_none_or(|mask| mask.is_paintable(x, y));
            if paintable { fill } else { background }
        });
        Ok(image)
    }
}

fn blend(base: Rgba<u8>, over: Rgba<u8>, alpha: f64) -> Rgba<u8> {
    let mix = |a: u8, b: u8| {
        (f64::from(b) - f64::from(a))
            .mul_add(alpha, f64::from(a))
            .round()
            .clamp(0.0, 255.0) as u8
    };
    let [r0, g0, b0, a0] = base.0;
    let [r1, g1, b1, _] = over.0;
    Rgba([mix(r0, r1), mix(g0, g1), mix(b0, b1), a0])
}

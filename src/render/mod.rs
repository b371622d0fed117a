//! Render boundary: configuration, word styling and the renderer interface

/// Render settings, orientation and resolutions
pub mod config;
/// Font resolution with fallback
pub mod font;
/// Renderer trait and multi-resolution driver
pub mod orchestrator;
/// Colour ramps and colour parsing
pub mod palette;
/// Word sizing, colouring and orientation
pub mod plan;

pub use config::{Orientation, RenderConfig, Resolution};
pub use font::FontResource;
pub use orchestrator::{
    MaskSource, RenderRequest, RenderedImage, Renderer, SilhouettePreview, render_resolutions,
};
pub use palette::Palette;

//! Arbitrary silhouettes loaded from images
//!
//! The image is stretched to the canvas and thresholded on luminance: dark
//! opaque pixels become paintable, light or fully transparent pixels stay
//! excluded.

use crate::io::configuration::SILHOUETTE_THRESHOLD;
use crate::io::error::{CloudError, Result, configuration_error};
use crate::spatial::canvas::Canvas;
use crate::spatial::mask::{Mask, Occupancy};
use image::imageops::FilterType;
use std::path::Path;

/// Load a silhouette image as a mask covering `canvas`
///
/// # Errors
///
/// Returns an error if:
/// - The image cannot be loaded
/// - No pixel of the resized image is dark enough to be paintable
pub fn load_mask(path: &Path, canvas: Canvas) -> Result<Mask> {
    let img = image::open(path).map_err(|e| CloudError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let resized = img
        .resize_exact(canvas.width(), canvas.height(), FilterType::Nearest)
        .to_luma_alpha8();

    let mut mask = Mask::excluded(canvas);
    for (x, y, pixel) in resized.enumerate_pixels() {
        let [luma, alpha] = pixel.0;
        if alpha > 0 && luma < SILHOUETTE_THRESHOLD {
            mask.set(x, y, Occupancy::Paintable);
        }
    }

    if mask.paintable_count() == 0 {
        return Err(configuration_error(
            "mask_image",
            &path.display(),
            &"silhouette has no dark pixels to paint",
        ));
    }

    log::debug!(
        "Loaded silhouette '{}' with {} paintable pixels",
        path.display(),
        mask.paintable_count()
    );

    Ok(mask)
}

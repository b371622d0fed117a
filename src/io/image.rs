//! Export of masks, rendered images and frequency tables

use crate::io::error::{CloudError, Result};
use crate::spatial::mask::Mask;
use crate::text::frequency::FrequencyMapping;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CloudError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Export a mask as an 8-bit grayscale PNG
///
/// Paintable pixels are black and excluded pixels white.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved.
pub fn export_mask_png(mask: &Mask, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;
    mask.to_luma_image()
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| CloudError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Export a rendered image as PNG or JPEG
///
/// JPEG output drops the alpha channel.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or encoding
/// fails.
pub fn export_image(image: &RgbaImage, output_path: &Path, format: ImageFormat) -> Result<()> {
    ensure_parent(output_path)?;
    let result = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(output_path, format)
    } else {
        image.save_with_format(output_path, format)
    };

    result.map_err(|e| CloudError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}

/// Format a mapping as `term<TAB>weight` lines, heaviest first
pub fn frequency_table(frequencies: &FrequencyMapping) -> String {
    let mut table = String::new();
    for (term, weight) in frequencies.ranked() {
        table.push_str(term);
        table.push('\t');
        table.push_str(&weight.to_string());
        table.push('\n');
    }
    table
}

/// Write the frequency table to disk
///
/// # Errors
///
/// Returns a file system error if the file cannot be written.
pub fn export_frequencies(frequencies: &FrequencyMapping, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;
    std::fs::write(output_path, frequency_table(frequencies)).map_err(|e| {
        CloudError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "write frequencies",
            source: e,
        }
    })
}

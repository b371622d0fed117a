//! Tests for mask, image and frequency table export

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgba, RgbaImage};
    use tempfile::TempDir;
    use wordshape::io::image::{
        export_frequencies, export_image, export_mask_png, frequency_table,
    };
    use wordshape::{FrequencyMapping, build_mask};

    // Tests masks export as grayscale with paintable pixels black
    // Verified by exporting the inverted convention
    #[test]
    fn test_export_mask_png() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("circle_mask.png");
        let mask = build_mask("circle", 200, 120)
            .expect("circle fits")
            .expect("circle has a mask");

        export_mask_png(&mask, &path).expect("Failed to export mask");

        let loaded = image::open(&path).expect("Failed to reopen mask").to_luma8();
        assert_eq!(loaded.dimensions(), (200, 120));
        assert_eq!(loaded.get_pixel(100, 60).0, [0]);
        assert_eq!(loaded.get_pixel(0, 0).0, [255]);
    }

    // Tests PNG export keeps pixels and JPEG export succeeds without alpha
    // Verified by saving JPEG with an alpha channel
    #[test]
    fn test_export_image_formats() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let image = RgbaImage::from_pixel(32, 16, Rgba([10, 200, 30, 255]));

        let png = dir.path().join("cloud.png");
        export_image(&image, &png, ImageFormat::Png).expect("Failed to export PNG");
        let reloaded = image::open(&png).expect("Failed to reopen PNG").to_rgba8();
        assert_eq!(reloaded, image);

        let jpg = dir.path().join("cloud.jpg");
        export_image(&image, &jpg, ImageFormat::Jpeg).expect("Failed to export JPEG");
        let reloaded = image::open(&jpg).expect("Failed to reopen JPEG");
        assert_eq!((reloaded.width(), reloaded.height()), (32, 16));
    }

    // Tests the table is ranked heaviest first with tab separators
    // Verified by emitting arbitrary order
    #[test]
    fn test_frequency_table() {
        let mapping = FrequencyMapping::from_weights([("veri", 2), ("bilim", 3), ("alan", 2)]);
        assert_eq!(frequency_table(&mapping), "bilim\t3\nalan\t2\nveri\t2\n");
        assert_eq!(frequency_table(&FrequencyMapping::default()), "");
    }

    // Tests the table is written to disk
    // Verified by writing to the parent directory
    #[test]
    fn test_export_frequencies() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("notes_frequencies.tsv");
        let mapping = FrequencyMapping::from_weights([("river", 1)]);

        export_frequencies(&mapping, &path).expect("Failed to export table");

        let written = std::fs::read_to_string(&path).expect("Failed to read table");
        assert_eq!(written, "river\t1\n");
    }
}

//! Tests for the renderer boundary and multi-resolution rendering

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, RgbaImage};
    use std::cell::RefCell;
    use tempfile::TempDir;
    use wordshape::render::{
        FontResource, MaskSource, RenderConfig, RenderRequest, Renderer, Resolution,
        SilhouettePreview, render_resolutions,
    };
    use wordshape::spatial::{Canvas, Shape};
    use wordshape::{ErrorKind, FrequencyMapping, Result};

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<(Resolution, (u32, u32), Option<(u32, u32)>, u32)>>,
    }

    impl Renderer for Recorder {
        fn render(&self, request: RenderRequest<'_>) -> Result<RgbaImage> {
            let canvas = request.config.canvas;
            let largest = request.words.first().map_or(0, |w| w.font_size);
            self.seen.borrow_mut().push((
                request.resolution,
                (canvas.width(), canvas.height()),
                request.mask.as_ref().map(|m| (m.width(), m.height())),
                largest,
            ));
            Ok(RgbaImage::new(canvas.width(), canvas.height()))
        }
    }

    struct WrongSize;

    impl Renderer for WrongSize {
        fn render(&self, _request: RenderRequest<'_>) -> Result<RgbaImage> {
            Ok(RgbaImage::new(1, 1))
        }
    }

    fn frequencies() -> FrequencyMapping {
        FrequencyMapping::from_weights([("ocean", 4), ("river", 2), ("lake", 1)])
    }

    fn config(width: u32, height: u32) -> RenderConfig {
        RenderConfig::with_canvas(Canvas::new(width, height).expect("valid canvas"))
    }

    // Tests each resolution gets a mask and font sizes matching its canvas
    // Verified by reusing the standard mask for high definition
    #[test]
    fn test_resolutions_scaled_independently() {
        let recorder = Recorder::default();
        let outputs = render_resolutions(
            &recorder,
            &frequencies(),
            &MaskSource::Shape(Shape::Circle),
            &config(400, 200),
            &FontResource::Default,
            &[Resolution::Standard, Resolution::HighDefinition],
        )
        .expect("Failed to render");

        assert_eq!(outputs.len(), 2);
        let seen = recorder.seen.borrow();
        assert_eq!(
            *seen,
            vec![
                (Resolution::Standard, (400, 200), Some((400, 200)), 100),
                (Resolution::HighDefinition, (800, 400), Some((800, 400)), 200),
            ]
        );
    }

    // Tests the largest standard font bounds still render in high definition
    // Verified by checking the doubled bounds against the standard ranges
    #[test]
    fn test_high_definition_at_font_limits() {
        let settings = RenderConfig {
            min_font_size: 50,
            max_font_size: 300,
            ..config(400, 200)
        };
        let recorder = Recorder::default();
        let outputs = render_resolutions(
            &recorder,
            &frequencies(),
            &MaskSource::Shape(Shape::Circle),
            &settings,
            &FontResource::Default,
            &[Resolution::Standard, Resolution::HighDefinition],
        )
        .expect("Failed to render");

        assert_eq!(outputs.len(), 2);
        let largest: Vec<u32> = recorder.seen.borrow().iter().map(|entry| entry.3).collect();
        assert_eq!(largest, vec![300, 600]);
    }

    // Tests the rectangle hands no mask to the renderer
    // Verified by building a full mask for rectangles
    #[test]
    fn test_rectangle_without_mask() {
        let recorder = Recorder::default();
        render_resolutions(
            &recorder,
            &frequencies(),
            &MaskSource::Shape(Shape::Rectangle),
            &config(300, 300),
            &FontResource::Default,
            &[Resolution::Standard],
        )
        .expect("Failed to render");

        assert!(recorder.seen.borrow().iter().all(|entry| entry.2.is_none()));
    }

    // Tests images of the wrong size are rejected
    // Verified by skipping the dimension check
    #[test]
    fn test_wrong_size_rejected() {
        let result = render_resolutions(
            &WrongSize,
            &frequencies(),
            &MaskSource::Shape(Shape::Rectangle),
            &config(300, 300),
            &FontResource::Default,
            &[Resolution::Standard],
        );
        assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::Computation));
    }

    // Tests shapes that do not fit surface a configuration error
    // Verified by rendering without a mask on failure
    #[test]
    fn test_shape_too_small() {
        let result = render_resolutions(
            &SilhouettePreview,
            &frequencies(),
            &MaskSource::Shape(Shape::Circle),
            &config(80, 80),
            &FontResource::Default,
            &[Resolution::Standard],
        );
        assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::Configuration));
    }

    // Tests the preview paints only inside the silhouette
    // Verified by tinting excluded pixels
    #[test]
    fn test_preview_follows_mask() {
        let settings = config(400, 200);
        let outputs = render_resolutions(
            &SilhouettePreview,
            &frequencies(),
            &MaskSource::Shape(Shape::Circle),
            &settings,
            &FontResource::Default,
            &[Resolution::Standard],
        )
        .expect("Failed to render");
        let image = &outputs.first().expect("one output").image;

        assert_eq!(image.dimensions(), (400, 200));
        assert_eq!(*image.get_pixel(0, 0), settings.background);
        assert_ne!(*image.get_pixel(200, 100), settings.background);
        assert_eq!(image.get_pixel(200, 100).0[3], 255);
    }

    // Tests the preview tints the whole canvas without a mask
    // Verified by leaving the canvas as background
    #[test]
    fn test_preview_full_canvas() {
        let settings = config(60, 40);
        let outputs = render_resolutions(
            &SilhouettePreview,
            &frequencies(),
            &MaskSource::Shape(Shape::Rectangle),
            &settings,
            &FontResource::Default,
            &[Resolution::Standard],
        )
        .expect("Failed to render");
        let image = &outputs.first().expect("one output").image;

        let fill = *image.get_pixel(0, 0);
        assert_ne!(fill, settings.background);
        assert!(image.pixels().all(|p| *p == fill));
    }

    // Tests silhouette images are resized to every resolution
    // Verified by loading the silhouette at its native size
    #[test]
    fn test_silhouette_source() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("shape.png");
        let silhouette = GrayImage::from_fn(20, 10, |x, _| Luma([if x < 10 { 0 } else { 255 }]));
        silhouette.save(&path).expect("Failed to save silhouette");

        let recorder = Recorder::default();
        render_resolutions(
            &recorder,
            &frequencies(),
            &MaskSource::Silhouette(path),
            &config(200, 100),
            &FontResource::Default,
            &[Resolution::Standard, Resolution::HighDefinition],
        )
        .expect("Failed to render");

        let masks: Vec<_> = recorder.seen.borrow().iter().map(|entry| entry.2).collect();
        assert_eq!(masks, vec![Some((200, 100)), Some((400, 200))]);
    }
}

//! Tests for palette ramps and colour parsing

#[cfg(test)]
mod tests {
    use image::Rgba;
    use wordshape::ErrorKind;
    use wordshape::render::Palette;
    use wordshape::render::palette::parse_hex_color;

    // Tests the ramp reproduces anchor colours at the ends and middle
    // Verified by reversing the anchor order
    #[test]
    fn test_viridis_anchors() {
        let ramp = Palette::Viridis.ramp().expect("Failed to build ramp");

        assert_eq!(ramp.color_at(0.0), Rgba([0x44, 0x01, 0x54, 255]));
        assert_eq!(ramp.color_at(0.5), Rgba([0x21, 0x91, 0x8c, 255]));
        assert_eq!(ramp.color_at(1.0), Rgba([0xfd, 0xe7, 0x25, 255]));
    }

    // Tests positions outside the unit interval clamp
    // Verified by wrapping positions modulo one
    #[test]
    fn test_ramp_clamps() {
        let ramp = Palette::Blues.ramp().expect("Failed to build ramp");

        assert_eq!(ramp.color_at(-3.0), ramp.color_at(0.0));
        assert_eq!(ramp.color_at(7.5), ramp.color_at(1.0));
        assert_eq!(ramp.color_at(f64::NAN), ramp.color_at(0.0));
    }

    // Tests every palette builds an opaque ramp
    // Verified by giving one palette unsorted knots
    #[test]
    fn test_all_palettes_build() {
        for palette in Palette::ALL {
            let ramp = palette.ramp().expect("Failed to build ramp");
            for step in 0..=10 {
                assert_eq!(ramp.color_at(f64::from(step) / 10.0).0[3], 255, "{palette}");
            }
        }
    }

    // Tests palette names parse regardless of case
    // Verified by comparing names case-sensitively
    #[test]
    fn test_palette_from_str() {
        assert_eq!("viridis".parse::<Palette>().ok(), Some(Palette::Viridis));
        assert_eq!("VIRIDIS".parse::<Palette>().ok(), Some(Palette::Viridis));
        assert_eq!("reds".parse::<Palette>().ok(), Some(Palette::Reds));
        assert_eq!(" Oranges ".parse::<Palette>().ok(), Some(Palette::Oranges));
        for palette in Palette::ALL {
            assert_eq!(palette.to_string().parse::<Palette>().ok(), Some(palette));
        }
    }

    // Tests unknown palettes are configuration errors
    // Verified by defaulting to viridis
    #[test]
    fn test_palette_unknown() {
        let result = "rainbow".parse::<Palette>();
        assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::Configuration));
    }

    // Tests long and short hex colours
    // Verified by duplicating the wrong digit in short form
    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ffffff").ok(), Some(Rgba([255, 255, 255, 255])));
        assert_eq!(parse_hex_color("#1A2b3C").ok(), Some(Rgba([0x1a, 0x2b, 0x3c, 255])));
        assert_eq!(parse_hex_color("#0a0").ok(), Some(Rgba([0, 0xaa, 0, 255])));
        assert_eq!(parse_hex_color(" #000000 ").ok(), Some(Rgba([0, 0, 0, 255])));
    }

    // Tests malformed colours are rejected
    // Verified by accepting a missing hash
    #[test]
    fn test_parse_hex_color_invalid() {
        for value in ["ffffff", "#12345", "#gggggg", "#", "", "#1234567", "#ffé"] {
            let result = parse_hex_color(value);
            assert!(
                matches!(result, Err(ref e) if e.kind() == ErrorKind::Configuration),
                "{value:?} should be rejected"
            );
        }
    }
}

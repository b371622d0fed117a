//! Named colour ramps and colour parsing

use crate::io::error::{CloudError, Result, configuration_error};
use crate::math::interpolation::Spline;
use image::Rgba;
use std::fmt;
use std::str::FromStr;

/// Named colour ramp used to colour words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    /// Perceptually uniform purple-green-yellow
    #[default]
    Viridis,
    /// Blue-magenta-yellow
    Plasma,
    /// Black-red-yellow
    Inferno,
    /// Black-purple-cream
    Magma,
    /// Colour-vision-friendly blue-yellow
    Cividis,
    /// Sequential reds
    Reds,
    /// Sequential blues
    Blues,
    /// Sequential greens
    Greens,
    /// Sequential purples
    Purples,
    /// Sequential oranges
    Oranges,
}

impl Palette {
    /// Every supported palette
    pub const ALL: [Self; 10] = [
        Self::Viridis,
        Self::Plasma,
        Self::Inferno,
        Self::Magma,
        Self::Cividis,
        Self::Reds,
        Self::Blues,
        Self::Greens,
        Self::Purples,
        Self::Oranges,
    ];

    /// Canonical name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Cividis => "cividis",
            Self::Reds => "Reds",
            Self::Blues => "Blues",
            Self::Greens => "Greens",
            Self::Purples => "Purples",
            Self::Oranges => "Oranges",
        }
    }

    // Evenly spaced anchor colours from low to high
    const fn anchors(self) -> [[u8; 3]; 5] {
        match self {
            Self::Viridis => [
                [0x44, 0x01, 0x54],
                [0x3b, 0x52, 0x8b],
                [0x21, 0x91, 0x8c],
                [0x5e, 0xc9, 0x62],
                [0xfd, 0xe7, 0x25],
            ],
            Self::Plasma => [
                [0x0d, 0x08, 0x87],
                [0x7e, 0x03, 0xa8],
                [0xcc, 0x47, 0x78],
                [0xf8, 0x95, 0x40],
                [0xf0, 0xf9, 0x21],
            ],
            Self::Inferno => [
                [0x00, 0x00, 0x04],
                [0x57, 0x10, 0x6e],
                [0xbc, 0x37, 0x54],
                [0xf9, 0x8e, 0x09],
                [0xfc, 0xff, 0xa4],
            ],
            Self::Magma => [
                [0x00, 0x00, 0x04],
                [0x51, 0x12, 0x7c],
                [0xb7, 0x37, 0x79],
                [0xfc, 0x89, 0x61],
                [0xfc, 0xfd, 0xbf],
            ],
            Self::Cividis => [
                [0x00, 0x22, 0x4e],
                [0x35, 0x45, 0x6c],
                [0x66, 0x69, 0x70],
                [0x94, 0x8e, 0x77],
                [0xfe, 0xe8, 0x38],
            ],
            Self::Reds => [
                [0xff, 0xf5, 0xf0],
                [0xfc, 0xbb, 0xa1],
                [0xfb, 0x6a, 0x4a],
                [0xcb, 0x18, 0x1d],
                [0x67, 0x00, 0x0d],
            ],
            Self::Blues => [
                [0xf7, 0xfb, 0xff],
                [0xc6, 0xdb, 0xef],
                [0x6b, 0xae, 0xd6],
                [0x21, 0x71, 0xb5],
                [0x08, 0x30, 0x6b],
            ],
            Self::Greens => [
                [0xf7, 0xfc, 0xf5],
                [0xc7, 0xe9, 0xc0],
                [0x74, 0xc4, 0x76],
                [0x23, 0x8b, 0x45],
                [0x00, 0x44, 0x1b],
            ],
            Self::Purples => [
                [0xfc, 0xfb, 0xfd],
                [0xda, 0xda, 0xeb],
                [0x9e, 0x9a, 0xc8],
                [0x6a, 0x51, 0xa3],
                [0x3f, 0x00, 0x7d],
            ],
            Self::Oranges => [
                [0xff, 0xf5, 0xeb],
                [0xfd, 0xd0, 0xa2],
                [0xfd, 0x8d, 0x3c],
                [0xd9, 0x48, 0x01],
                [0x7f, 0x27, 0x04],
            ],
        }
    }

    /// Build the continuous ramp for this palette
    ///
    /// # Errors
    ///
    /// Returns a computation error if a channel spline cannot be fitted.
    pub fn ramp(self) -> Result<ColorRamp> {
        let anchors = self.anchors();
        let last = (anchors.len() - 1) as f64;
        let channel = |c: usize| {
            let knots = anchors
                .iter()
                .enumerate()
                .map(|(i, rgb)| (i as f64 / last, f64::from(rgb.get(c).copied().unwrap_or(0))))
                .collect();
            Spline::natural(knots)
        };

        Ok(ColorRamp {
            channels: [channel(0)?, channel(1)?, channel(2)?],
        })
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Palette {
    type Err = CloudError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|palette| palette.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                configuration_error(
                    "palette",
                    &s,
                    &format!(
                        "unknown palette, expected one of: {}",
                        Self::ALL.map(Self::as_str).join(", ")
                    ),
                )
            })
    }
}

/// Continuous colour ramp over `[0, 1]`
#[derive(Debug, Clone)]
pub struct ColorRamp {
    channels: [Spline; 3],
}

impl ColorRamp {
    /// Opaque colour at position `t`, clamped to `[0, 1]`
    pub fn color_at(&self, t: f64) -> Rgba<u8> {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let [r, g, b] = self
            .channels
            .each_ref()
            .map(|spline| spline.evaluate(t).round().clamp(0.0, 255.0) as u8);
        Rgba([r, g, b, 255])
    }
}

/// Parse `#rgb` or `#rrggbb` into an opaque colour
///
/// # Errors
///
/// Returns a configuration error if the string is not a hex colour.
pub fn parse_hex_color(value: &str) -> Result<Rgba<u8>> {
    let invalid = || configuration_error("background", &value, &"expected #rgb or #rrggbb");

    let digits = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |range: std::ops::Range<usize>| {
        expanded
            .get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .ok_or_else(invalid)
    };

    Ok(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255]))
}

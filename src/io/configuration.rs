//! Constants and runtime configuration defaults

// Input validation
/// Minimum number of characters a usable input must contain
pub const MIN_INPUT_CHARS: usize = 10;

/// Character substituted for separators inside a phrase in phrase mode
pub const PHRASE_JOIN_MARKER: char = '_';

// Canvas sizes used by the standard and high definition outputs
/// Width of the standard output
pub const STANDARD_WIDTH: u32 = 1600;
/// Height of the standard output
pub const STANDARD_HEIGHT: u32 = 800;
/// Font size multiplier and canvas multiplier for high definition output
pub const HD_SCALE: u32 = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 10_000;

// Shape geometry margins in pixels
/// Margin subtracted from the radius of round shapes and the star
pub const SHAPE_MARGIN: f64 = 50.0;
/// Margin subtracted from the heart scale
pub const HEART_MARGIN: f64 = 30.0;
/// Ratio of outer to inner star radius
pub const STAR_INNER_RATIO: f64 = 2.5;
/// Number of star points
pub const STAR_POINTS: usize = 5;
/// Sampling step of the heart curve in degrees
pub const HEART_STEP_DEGREES: usize = 2;

// Render settings
/// Fixed seed for reproducible layout
pub const DEFAULT_SEED: u64 = 42;
/// Default number of words handed to the renderer
pub const DEFAULT_MAX_WORDS: usize = 200;
/// Accepted range for the word limit
pub const MAX_WORDS_RANGE: (usize, usize) = (50, 500);
/// Default smallest font size
pub const DEFAULT_MIN_FONT: u32 = 15;
/// Accepted range for the smallest font size
pub const MIN_FONT_RANGE: (u32, u32) = (10, 50);
/// Default largest font size
pub const DEFAULT_MAX_FONT: u32 = 100;
/// Accepted range for the largest font size
pub const MAX_FONT_RANGE: (u32, u32) = (50, 300);
/// Weight of relative frequency when deriving font sizes
pub const RELATIVE_SCALING: f64 = 0.5;
/// Default palette name
pub const DEFAULT_PALETTE: &str = "viridis";
/// Default background colour
pub const DEFAULT_BACKGROUND: &str = "#ffffff";
/// Opacity of the palette tint inside the silhouette preview
pub const PREVIEW_TINT_ALPHA: f64 = 0.35;

// Mask import
/// Luminance below which an imported silhouette pixel is paintable
pub const SILHOUETTE_THRESHOLD: u8 = 128;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix of the frequency table
pub const FREQUENCIES_SUFFIX: &str = "_frequencies";
/// Suffix of the exported mask
pub const MASK_SUFFIX: &str = "_mask";
/// Suffix of the rendered cloud
pub const CLOUD_SUFFIX: &str = "_cloud";
/// Suffix of the high definition cloud
pub const CLOUD_HD_SUFFIX: &str = "_cloud_hd";

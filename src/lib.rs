//! Shape-constrained word clouds: term frequency extraction and silhouette masks
//!
//! Text is turned into a mapping from token to weight with stop-word
//! filtering and an optional phrase mode. Independently, a named shape and a
//! canvas size produce a binary occupancy mask. Both are handed to a
//! renderer that places the words.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for colour interpolation
pub mod math;
/// Render configuration, word styling and the renderer boundary
pub mod render;
/// Canvas, geometry, masks and the shape catalog
pub mod spatial;
/// Tokenization, stop-words and frequency extraction
pub mod text;

pub use io::error::{CloudError, ErrorKind, Result};
pub use spatial::{Mask, Occupancy, Shape, build_mask};
pub use text::{FrequencyMapping, RawInput, StopwordSet, extract};

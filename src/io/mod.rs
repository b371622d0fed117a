//! Input/output operations, configuration and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image and frequency table export
pub mod image;
/// Reading text input files
pub mod input;
/// Progress display
pub mod progress;
/// Loading silhouette images as masks
pub mod silhouette;

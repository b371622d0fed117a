//! Error types shared by extraction, mask generation and rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all word-cloud operations
#[derive(Debug)]
pub enum CloudError {
    /// Input text or phrase set is absent or unusable
    ///
    /// The caller should request new input rather than render an empty cloud.
    Validation {
        /// Name of the offending input field
        field: &'static str,
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Configuration value rejected
    ///
    /// Raised for unknown shape identifiers, out-of-range canvas dimensions,
    /// negative computed geometry and out-of-range render settings.
    Configuration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Non-essential external resource unavailable
    ///
    /// Only surfaced as a warning alongside a substitute default.
    Resource {
        /// Path of the missing resource
        path: PathBuf,
        /// Description of the problem
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

/// Coarse classification used by callers to decide how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Ask the user for new input
    Validation,
    /// Ask the user to correct the configuration
    Configuration,
    /// Recoverable with a default
    Resource,
    /// Filesystem or codec failure
    Io,
    /// Internal numeric failure
    Computation,
}

impl CloudError {
    /// Classify the error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Resource { .. } => ErrorKind::Resource,
            Self::ImageLoad { .. } | Self::ImageExport { .. } | Self::FileSystem { .. } => {
                ErrorKind::Io
            }
            Self::Computation { .. } => ErrorKind::Computation,
        }
    }
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { field, reason } => {
                write!(f, "Invalid input '{field}': {reason}")
            }
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::Resource { path, reason } => {
                write!(f, "Resource '{}' unavailable: {reason}", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for CloudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for word-cloud results
pub type Result<T> = std::result::Result<T, CloudError>;

impl From<std::io::Error> for CloudError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an input validation error
pub fn validation_error(field: &'static str, reason: &impl ToString) -> CloudError {
    CloudError::Validation {
        field,
        reason: reason.to_string(),
    }
}

/// Create a configuration error
pub fn configuration_error(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CloudError {
    CloudError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> CloudError {
    CloudError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

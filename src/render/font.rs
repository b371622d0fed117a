//! Font lookup with graceful fallback
//!
//! A missing font never aborts a render: the renderer receives a fallback
//! marker carrying the warning so the caller can surface it.

use crate::io::error::CloudError;
use std::path::{Path, PathBuf};

/// Font the renderer should use
#[derive(Debug)]
pub enum FontResource {
    /// Requested font file exists
    Resolved(PathBuf),
    /// No font requested, renderer default applies
    Default,
    /// Requested font missing, renderer default applies
    Fallback {
        /// Resource error describing the missing font
        warning: CloudError,
    },
}

impl FontResource {
    /// Resolve an optional font path
    pub fn resolve(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::Default;
        };

        if path.is_file() {
            Self::Resolved(path.to_path_buf())
        } else {
            let warning = CloudError::Resource {
                path: path.to_path_buf(),
                reason: "font file not found, using the default font".to_string(),
            };
            log::warn!("{warning}");
            Self::Fallback { warning }
        }
    }

    /// Path of the resolved font, `None` when the default applies
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Resolved(path) => Some(path),
            Self::Default | Self::Fallback { .. } => None,
        }
    }

    /// Warning to surface, if the font fell back
    pub const fn warning(&self) -> Option<&CloudError> {
        match self {
            Self::Fallback { warning } => Some(warning),
            Self::Resolved(_) | Self::Default => None,
        }
    }
}

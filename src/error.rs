//! Error type shared by the builder, the catalog loader and the renderers.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Structurally invalid input: empty catalog, duplicate keys, bad argument combinations
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A catalog file could not be read or parsed
    #[error("failed to load catalog {}: {message}", path.display())]
    Catalog { path: PathBuf, message: String },

    /// A rendering backend (document library, browser process, output file) failed
    #[error("rendering failed: {0}")]
    RenderingFailed(String),
}

impl ReportError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ReportError::InvalidInput(msg.into())
    }

    pub fn rendering(msg: impl Into<String>) -> Self {
        ReportError::RenderingFailed(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

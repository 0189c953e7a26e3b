//! Error types for the image to ascii pipeline.

use std::path::PathBuf;

/// Errors that can occur while turning an image into ascii art.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// The source image could not be read or decoded.
    #[error("failed to decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The requested output size cannot be produced from the source grid.
    #[error("invalid dimensions: {reason}")]
    InvalidDimensions { reason: String },

    /// A brightness value outside 0-255 was handed to the pipeline.
    #[error("brightness {value} at ({x}, {y}) is outside 0-255")]
    OutOfRange { x: usize, y: usize, value: i64 },

    /// The rendered art could not be written to its destination.
    #[error("failed to write ascii art to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AsciiError {
    pub(crate) fn invalid_dimensions(reason: impl Into<String>) -> Self {
        AsciiError::InvalidDimensions {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AsciiError>;

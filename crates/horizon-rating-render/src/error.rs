//! Error types for the render crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading images or writing rendered output.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Image data could not be decoded or encoded.
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An image file was not found in a bundle directory.
    #[error("image not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An image name that would leave the bundle directory.
    #[error("invalid image name: {0:?}")]
    InvalidName(String),

    /// Invalid surface or image dimensions (zero width or height).
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

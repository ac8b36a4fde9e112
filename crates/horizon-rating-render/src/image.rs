//! Image handles.
//!
//! An [`Image`] is a cheaply cloneable, immutable handle to decoded RGBA
//! pixel data. Widgets hold images by handle; two handles compare equal only
//! when they refer to the same decoded image.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use image::{Rgba, RgbaImage};

use crate::error::{RenderError, RenderResult};
use crate::types::Size;

static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// A decoded image that can be drawn by a [`Renderer`](crate::Renderer).
#[derive(Clone)]
pub struct Image {
    /// Process-unique identifier of the decoded pixels.
    id: u64,
    /// The pixel data.
    pixels: Arc<RgbaImage>,
}

impl Image {
    /// Wrap already decoded RGBA pixels.
    ///
    /// Returns [`RenderError::InvalidDimensions`] for zero-sized images.
    pub fn from_rgba(pixels: RgbaImage) -> RenderResult<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            id: NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed),
            pixels: Arc::new(pixels),
        })
    }

    /// Create an image filled with a single RGBA color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RenderResult<Self> {
        Self::from_rgba(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    /// Decode an image from encoded bytes (PNG).
    pub fn from_bytes(bytes: &[u8]) -> RenderResult<Self> {
        let decoded = image::load_from_memory(bytes)?;
        Self::from_rgba(decoded.into_rgba8())
    }

    /// Load and decode an image file.
    pub fn open(path: impl AsRef<Path>) -> RenderResult<Self> {
        let decoded = image::open(path.as_ref())?;
        Self::from_rgba(decoded.into_rgba8())
    }

    /// Get the process-unique identifier of this image.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the width of the image in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Get the height of the image in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Get the size of the image.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    /// Access the decoded pixels.
    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Check whether two handles refer to the same decoded image.
    #[inline]
    pub fn ptr_eq(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Image {}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("id", &self.id)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

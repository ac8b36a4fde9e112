//! Named image resolution.
//!
//! Widgets that accept image *names* look them up through an
//! [`ImageResolver`] injected by the host. [`ImageBundle`] is the stock
//! implementation: an in-memory name table backed by an optional directory
//! of image files.
//!
//! # Example
//!
//! ```
//! use horizon_rating_render::{Image, ImageBundle, ImageResolver};
//!
//! let bundle = ImageBundle::new();
//! bundle.insert("star", Image::solid(24, 24, [255, 200, 0, 255]).unwrap());
//!
//! assert!(bundle.resolve("star").is_some());
//! assert!(bundle.resolve("missing").is_none());
//! ```

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use horizon_rating_core::logging::{PerfSpan, span_names, targets};
use parking_lot::Mutex;

use crate::error::{RenderError, RenderResult};
use crate::image::Image;

/// Resolves an image name to an image handle.
///
/// Returning `None` means the name is unknown; callers keep whatever image
/// they held before.
pub trait ImageResolver: Send + Sync {
    /// Look up the image registered under `name`.
    fn resolve(&self, name: &str) -> Option<Image>;
}

impl<F> ImageResolver for F
where
    F: Fn(&str) -> Option<Image> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<Image> {
        self(name)
    }
}

/// A named collection of images, optionally backed by a directory.
///
/// Lookups check the in-memory table first. On a miss, and when a root
/// directory is configured, `root/name` is loaded; names without an
/// extension fall back to `root/name.png`. Successfully loaded files are
/// cached.
#[derive(Debug, Default)]
pub struct ImageBundle {
    root: Option<PathBuf>,
    images: Mutex<HashMap<String, Image>>,
}

impl ImageBundle {
    /// Create an empty in-memory bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bundle that loads images from `root` on demand.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            images: Mutex::new(HashMap::new()),
        }
    }

    /// The directory images are loaded from, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Register an image under `name`, replacing any previous entry.
    pub fn insert(&self, name: impl Into<String>, image: Image) -> Option<Image> {
        self.images.lock().insert(name.into(), image)
    }

    /// Remove an image from the in-memory table.
    pub fn remove(&self, name: &str) -> Option<Image> {
        self.images.lock().remove(name)
    }

    /// Check whether `name` is already in the in-memory table.
    pub fn contains(&self, name: &str) -> bool {
        self.images.lock().contains_key(name)
    }

    /// Number of images currently held in memory.
    pub fn len(&self) -> usize {
        self.images.lock().len()
    }

    /// Whether no images are held in memory.
    pub fn is_empty(&self) -> bool {
        self.images.lock().is_empty()
    }

    /// Load `name` from the root directory, bypassing the cache.
    ///
    /// Names must be relative paths made of plain components; `..`, `.` and
    /// absolute names are rejected.
    pub fn load(&self, name: &str) -> RenderResult<Image> {
        let Some(root) = &self.root else {
            return Err(RenderError::NotFound(PathBuf::from(name)));
        };

        let relative = Path::new(name);
        let contained = relative.components().next().is_some()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !contained {
            return Err(RenderError::InvalidName(name.to_owned()));
        }

        let direct = root.join(name);
        if direct.is_file() {
            return Image::open(&direct);
        }

        if Path::new(name).extension().is_none() {
            let png = root.join(format!("{name}.png"));
            if png.is_file() {
                return Image::open(&png);
            }
        }

        Err(RenderError::NotFound(direct))
    }
}

impl ImageResolver for ImageBundle {
    fn resolve(&self, name: &str) -> Option<Image> {
        let _span = PerfSpan::new(span_names::RESOLVE);
        if let Some(image) = self.images.lock().get(name) {
            return Some(image.clone());
        }

        if self.root.is_none() {
            tracing::debug!(target: targets::RESOURCES, name, "image not in bundle");
            return None;
        }

        match self.load(name) {
            Ok(image) => {
                tracing::debug!(
                    target: targets::RESOURCES,
                    name,
                    width = image.width(),
                    height = image.height(),
                    "loaded bundle image"
                );
                self.images.lock().insert(name.to_owned(), image.clone());
                Some(image)
            }
            Err(err) => {
                tracing::debug!(target: targets::RESOURCES, name, error = %err, "failed to load bundle image");
                None
            }
        }
    }
}

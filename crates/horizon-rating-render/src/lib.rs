//! Graphics support for Horizon Rating.
//!
//! This crate provides:
//!
//! - **Geometry**: [`Point`], [`Size`] and [`Rect`]
//! - **Images**: the shared [`Image`] handle and named lookup through
//!   [`ImageResolver`] / [`ImageBundle`]
//! - **Drawing**: the [`Renderer`] trait with a [`RecordingRenderer`] for
//!   tests and a CPU [`SoftwareRenderer`] for headless output
//!
//! # Example
//!
//! ```
//! use horizon_rating_render::{Image, Rect, Renderer, SoftwareRenderer};
//!
//! let star = Image::solid(16, 16, [255, 200, 0, 255]).unwrap();
//! let mut renderer = SoftwareRenderer::new(64, 16, [255, 255, 255, 255]).unwrap();
//! renderer.draw_image(&star, Rect::new(0.0, 0.0, 16.0, 16.0));
//! ```

mod error;
mod image;
mod renderer;
pub mod resources;
mod software;
mod types;

pub use error::{RenderError, RenderResult};
pub use image::Image;
pub use renderer::{DrawCommand, RecordingRenderer, Renderer};
pub use resources::{ImageBundle, ImageResolver};
pub use software::SoftwareRenderer;
pub use types::{Point, Rect, Size};

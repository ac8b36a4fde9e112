//! CPU rendering into an RGBA canvas.
//!
//! [`SoftwareRenderer`] is useful for headless hosts, snapshot tests and
//! generating preview images without a GPU.

use std::path::Path;

use horizon_rating_core::logging::targets;
use image::{Rgba, RgbaImage};

use crate::error::{RenderError, RenderResult};
use crate::image::Image;
use crate::renderer::Renderer;
use crate::types::{Point, Rect};

/// A renderer that composites images into an in-memory RGBA canvas.
///
/// Images are scaled with nearest-neighbour sampling and blended with
/// straight-alpha source-over compositing.
#[derive(Debug)]
pub struct SoftwareRenderer {
    canvas: RgbaImage,
    offset: Point,
    stack: Vec<Point>,
}

impl SoftwareRenderer {
    /// Create a renderer with a canvas of the given size, cleared to `clear`.
    pub fn new(width: u32, height: u32, clear: [u8; 4]) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            canvas: RgbaImage::from_pixel(width, height, Rgba(clear)),
            offset: Point::ZERO,
            stack: Vec::new(),
        })
    }

    /// The rendered canvas.
    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Consume the renderer and return the canvas.
    pub fn into_canvas(self) -> RgbaImage {
        self.canvas
    }

    /// Encode the canvas as PNG and write it to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.canvas
            .save_with_format(path, image::ImageFormat::Png)?;
        tracing::debug!(target: targets::RENDER, path = %path.display(), "saved canvas");
        Ok(())
    }
}

fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src[3] as f32 / 255.0;
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for channel in 0..3 {
        let sc = src[channel] as f32;
        let dc = dst[channel] as f32;
        let out = (sc * sa + dc * da * (1.0 - sa)) / out_a;
        dst[channel] = out.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

impl Renderer for SoftwareRenderer {
    fn save(&mut self) {
        self.stack.push(self.offset);
    }

    fn restore(&mut self) {
        if let Some(offset) = self.stack.pop() {
            self.offset = offset;
        }
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.offset.x += tx;
        self.offset.y += ty;
    }

    fn draw_image(&mut self, image: &Image, dest: Rect) {
        let dest = dest.offset(self.offset.x, self.offset.y);
        if dest.is_empty() {
            return;
        }
        let bounds = Rect::new(
            0.0,
            0.0,
            self.canvas.width() as f32,
            self.canvas.height() as f32,
        );
        let Some(visible) = dest.intersect(&bounds) else {
            return;
        };

        let src = image.pixels();
        let scale_x = src.width() as f32 / dest.width();
        let scale_y = src.height() as f32 / dest.height();

        let x0 = visible.left().floor() as u32;
        let y0 = visible.top().floor() as u32;
        let x1 = (visible.right().ceil() as u32).min(self.canvas.width());
        let y1 = (visible.bottom().ceil() as u32).min(self.canvas.height());

        for y in y0..y1 {
            let sy = (((y as f32 + 0.5) - dest.top()) * scale_y).floor();
            if sy < 0.0 || sy >= src.height() as f32 {
                continue;
            }
            for x in x0..x1 {
                let sx = (((x as f32 + 0.5) - dest.left()) * scale_x).floor();
                if sx < 0.0 || sx >= src.width() as f32 {
                    continue;
                }
                let pixel = *src.get_pixel(sx as u32, sy as u32);
                blend(self.canvas.get_pixel_mut(x, y), pixel);
            }
        }
    }
}

//! Core renderer trait defining the 2D drawing interface.
//!
//! Widgets draw through [`Renderer`] only, so any backend (a GPU surface,
//! the CPU [`SoftwareRenderer`](crate::SoftwareRenderer), or the
//! [`RecordingRenderer`] used in tests) can host them.

use crate::image::Image;
use crate::types::{Point, Rect};

/// The core 2D rendering trait.
///
/// # State Stack
///
/// The renderer maintains a translation stack that can be saved and restored.
/// Hosts translate into a widget's coordinate space before asking it to paint.
///
/// ```ignore
/// renderer.save();
/// renderer.translate(widget.geometry().left(), widget.geometry().top());
/// widget.paint(&mut PaintContext::new(&mut renderer, widget.rect()));
/// renderer.restore();
/// ```
pub trait Renderer {
    /// Save the current render state.
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    /// Apply a translation to the current transform.
    fn translate(&mut self, tx: f32, ty: f32);

    /// Draw an image stretched into a destination rectangle.
    ///
    /// `dest` is in the current (translated) coordinate space.
    fn draw_image(&mut self, image: &Image, dest: Rect);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// An image drawn to a rectangle in root coordinates.
    Image {
        /// The drawn image.
        image: Image,
        /// Destination rectangle with the active translation applied.
        dest: Rect,
    },
}

/// A renderer that records what it is asked to draw.
///
/// Used for headless testing of widget painting.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    offset: Point,
    stack: Vec<Point>,
}

impl RecordingRenderer {
    /// Create an empty recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Images recorded so far, in draw order.
    pub fn images(&self) -> impl Iterator<Item = (&Image, Rect)> + '_ {
        self.commands.iter().map(|command| match command {
            DrawCommand::Image { image, dest } => (image, *dest),
        })
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
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
        self.commands.push(DrawCommand::Image {
            image: image.clone(),
            dest: dest.offset(self.offset.x, self.offset.y),
        });
    }
}

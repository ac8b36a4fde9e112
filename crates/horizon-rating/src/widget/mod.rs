//! Widget system for Horizon Rating.
//!
//! This module provides the widget architecture the rating control is built
//! on:
//!
//! - [`Widget`] trait: The capability interface a host drives
//! - [`WidgetBase`]: Common implementation of geometry, visibility and
//!   repaint tracking
//! - [`WidgetEvent`]: Mouse and touch input delivered in local coordinates
//! - [`paint_widget`]: Paints a widget at its geometry
//!
//! # Embedding a Widget
//!
//! ```ignore
//! use horizon_rating::widget::*;
//! use horizon_rating::widget::widgets::RatingControl;
//! use horizon_rating_render::{Point, Rect, RecordingRenderer};
//!
//! let mut control = RatingControl::new(Rect::new(0.0, 0.0, 300.0, 60.0));
//!
//! // Deliver input in widget-local coordinates.
//! let pos = control.widget_base().map_from_parent(Point::new(120.0, 30.0));
//! control.event(&mut WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left, pos)));
//!
//! // Repaint when requested.
//! let mut renderer = RecordingRenderer::new();
//! paint_if_needed(&mut control, &mut renderer);
//! ```

mod base;
mod events;
mod geometry;
mod painting;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EventBase, MouseButton, MouseCancelEvent, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, ResizeEvent, TouchEvent, TouchPhase, TouchPoint, WidgetEvent,
};
pub use geometry::SizeHint;
pub use painting::{paint_if_needed, paint_widget};
pub use traits::{PaintContext, Widget};

//! Prelude module for Horizon Rating.
//!
//! ```ignore
//! use horizon_rating::prelude::*;
//! ```

// ============================================================================
// Signal/Slot
// ============================================================================

pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    MouseButton, MouseCancelEvent, MouseMoveEvent, MousePressEvent, MouseReleaseEvent,
    PaintContext, SizeHint, TouchEvent, TouchPhase, Widget, WidgetBase, WidgetEvent,
    paint_if_needed, paint_widget,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{ITEM_COUNT, ItemState, RatingControl};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::{FrameConfig, RatingControlConfig};

// ============================================================================
// Graphics
// ============================================================================

pub use crate::render::{
    Image, ImageBundle, ImageResolver, Point, RecordingRenderer, Rect, Renderer, Size,
    SoftwareRenderer,
};

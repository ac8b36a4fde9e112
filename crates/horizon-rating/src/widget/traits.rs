//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait, the capability interface every
//! UI element in Horizon Rating implements, and the [`PaintContext`] passed
//! to [`Widget::paint`].

use horizon_rating_render::{Rect, Renderer, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::SizeHint;

/// Context provided during widget painting.
///
/// This wraps a renderer and provides the widget's geometry information
/// for convenient access during the paint operation.
pub struct PaintContext<'a> {
    /// The renderer to draw with.
    renderer: &'a mut dyn Renderer,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
        }
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }
}

/// The core trait for all widgets.
///
/// A host embeds a widget by:
///
/// - assigning its geometry ([`set_geometry`](Self::set_geometry)),
/// - delivering pointer input through [`event`](Self::event),
/// - calling [`paint`](Self::paint) whenever
///   [`needs_repaint`](Self::needs_repaint) reports pending changes,
/// - connecting to the widget's public signals for change notification.
///
/// # Required Methods
///
/// - [`widget_base`](Self::widget_base) / [`widget_base_mut`](Self::widget_base_mut)
/// - [`size_hint`](Self::size_hint)
/// - [`paint`](Self::paint)
pub trait Widget: Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's preferred size for layout.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget in local coordinates.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle an event.
    ///
    /// Returns `true` if the event was handled.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    /// Get the widget's geometry.
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Get the widget's local rectangle.
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    /// Request a repaint.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }

    /// Check whether a repaint has been requested since the last paint.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }
}

//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common implementation details
//! for all widgets. It handles geometry, visibility, enabled state and the
//! repaint flag.

use horizon_rating_core::Signal;
use horizon_rating_render::{Point, Rect, Size};

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
///
/// # Example
///
/// ```ignore
/// use horizon_rating::widget::{Widget, WidgetBase, SizeHint, PaintContext};
///
/// struct Swatch {
///     base: WidgetBase,
/// }
///
/// impl Widget for Swatch {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///
///     fn size_hint(&self) -> SizeHint {
///         SizeHint::new(Size::new(24.0, 24.0))
///     }
///
///     fn paint(&self, _ctx: &mut PaintContext<'_>) {}
/// }
/// ```
#[derive(Debug)]
pub struct WidgetBase {
    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// Create a new widget base with zero geometry.
    pub fn new() -> Self {
        Self {
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            needs_repaint: true,
            geometry_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// This will emit `geometry_changed` if the geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Get a rectangle representing the widget's local coordinate space.
    ///
    /// This is always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_size(self.geometry.size)
    }

    /// Check if a point (in local coordinates) is inside the widget.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    /// Map a point from parent coordinates to widget-local coordinates.
    #[inline]
    pub fn map_from_parent(&self, point: Point) -> Point {
        Point::new(
            point.x - self.geometry.origin.x,
            point.y - self.geometry.origin.y,
        )
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
        }
    }

    /// Check whether the widget currently accepts input.
    #[inline]
    pub fn accepts_input(&self) -> bool {
        self.visible && self.enabled
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag (called after painting).
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_geometry_changed_only_on_change() {
        let mut base = WidgetBase::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        base.geometry_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        base.set_geometry(Rect::new(0.0, 0.0, 10.0, 10.0));
        base.set_geometry(Rect::new(0.0, 0.0, 10.0, 10.0));
        base.set_geometry(Rect::new(0.0, 0.0, 20.0, 10.0));

        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(base.size(), Size::new(20.0, 10.0));
    }

    #[test]
    fn test_local_rect_is_at_origin() {
        let mut base = WidgetBase::new();
        base.set_geometry(Rect::new(15.0, 25.0, 100.0, 50.0));
        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(base.map_from_parent(Point::new(20.0, 30.0)), Point::new(5.0, 5.0));
        assert!(base.contains_point(Point::new(99.0, 49.0)));
        assert!(!base.contains_point(Point::new(100.0, 0.0)));
    }

    #[test]
    fn test_repaint_flag() {
        let mut base = WidgetBase::new();
        assert!(base.needs_repaint());

        base.clear_repaint_flag();
        assert!(!base.needs_repaint());

        base.update();
        assert!(base.needs_repaint());
    }

    #[test]
    fn test_accepts_input() {
        let mut base = WidgetBase::new();
        assert!(base.accepts_input());

        base.set_enabled(false);
        assert!(!base.accepts_input());

        base.set_enabled(true);
        base.set_visible(false);
        assert!(!base.accepts_input());
    }
}

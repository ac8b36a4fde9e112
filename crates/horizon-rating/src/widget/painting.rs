//! Painting widgets into a renderer.
//!
//! [`paint_widget`] is the host-side entry point: it translates the renderer
//! into the widget's coordinate space, invokes [`Widget::paint`] and clears
//! the repaint flag.

use horizon_rating_core::logging::{PerfSpan, span_names, targets};
use horizon_rating_render::Renderer;

use super::traits::{PaintContext, Widget};

/// Paint a widget at its geometry.
///
/// Hidden widgets are skipped. Returns `true` if the widget was painted.
pub fn paint_widget(widget: &mut dyn Widget, renderer: &mut dyn Renderer) -> bool {
    if !widget.is_visible() {
        tracing::trace!(target: targets::WIDGET, "skipping paint of hidden widget");
        return false;
    }

    let _span = PerfSpan::new(span_names::PAINT);
    let geometry = widget.geometry();

    renderer.save();
    renderer.translate(geometry.left(), geometry.top());
    {
        let mut ctx = PaintContext::new(renderer, widget.rect());
        widget.paint(&mut ctx);
    }
    renderer.restore();

    widget.widget_base_mut().clear_repaint_flag();
    true
}

/// Paint a widget only if it has requested a repaint.
///
/// Returns `true` if the widget was painted.
pub fn paint_if_needed(widget: &mut dyn Widget, renderer: &mut dyn Renderer) -> bool {
    if widget.needs_repaint() {
        paint_widget(widget, renderer)
    } else {
        false
    }
}

//! Rating control implementation.
//!
//! This module provides [`RatingControl`], a horizontal row of five item
//! indicators (typically stars) that the user sets by pressing and dragging,
//! and that the host can also set programmatically.
//!
//! # Example
//!
//! ```ignore
//! use horizon_rating::widget::widgets::RatingControl;
//! use horizon_rating_render::{Image, Rect};
//!
//! let mut control = RatingControl::new(Rect::new(0.0, 0.0, 300.0, 60.0))
//!     .with_spacing(10.0)
//!     .with_selected_item_image(Some(star_full))
//!     .with_unselected_item_image(Some(star_empty))
//!     .with_unrated_item_image(Some(star_grey));
//!
//! control.value_changed.connect(|&rating| {
//!     println!("Rating: {}", rating);
//! });
//! ```

use std::sync::Arc;

use horizon_rating_core::Signal;
use horizon_rating_core::logging::targets;
use horizon_rating_render::{Image, ImageResolver, Point, Rect, Size};

use crate::config::RatingControlConfig;
use crate::widget::{
    MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, PaintContext, SizeHint,
    TouchEvent, TouchPhase, Widget, WidgetBase, WidgetEvent,
};

/// Number of items in a rating control.
pub const ITEM_COUNT: usize = 5;

/// Highest rating a control can hold.
pub const MAX_RATING: i32 = ITEM_COUNT as i32;

/// Default distance between adjacent items.
pub const DEFAULT_SPACING: f32 = 10.0;

/// How a single item is drawn, and which image slot supplies its image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemState {
    /// Shown on every item while the committed rating is zero and no
    /// interaction is in progress.
    Unrated,
    /// Item above the current rating.
    Unselected,
    /// Item at or below the current rating.
    Selected,
}

impl ItemState {
    /// All states, in image slot and item size precedence order.
    pub const ALL: [ItemState; 3] = [Self::Unselected, Self::Selected, Self::Unrated];

    fn slot(self) -> usize {
        match self {
            Self::Unselected => 0,
            Self::Selected => 1,
            Self::Unrated => 2,
        }
    }
}

/// Geometry of the item row for a given control size.
///
/// Items are laid out left to right, each at its natural image size,
/// separated by the spacing, with the whole row centered in the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    origin: Point,
    item_size: Size,
    spacing: f32,
}

impl ItemLayout {
    /// Lay out the row inside `bounds`.
    pub fn new(bounds: Size, item_size: Size, spacing: f32) -> Self {
        let row_width =
            ITEM_COUNT as f32 * item_size.width + (ITEM_COUNT - 1) as f32 * spacing;
        Self {
            origin: Point::new(
                (bounds.width - row_width) / 2.0,
                (bounds.height - item_size.height) / 2.0,
            ),
            item_size,
            spacing,
        }
    }

    /// Size of a single item.
    #[inline]
    pub fn item_size(&self) -> Size {
        self.item_size
    }

    /// The rectangle enclosing all items.
    pub fn row_rect(&self) -> Rect {
        let width =
            ITEM_COUNT as f32 * self.item_size.width + (ITEM_COUNT - 1) as f32 * self.spacing;
        Rect::new(self.origin.x, self.origin.y, width, self.item_size.height)
    }

    /// Rectangle of item `index`. Indices past the last item extend the row.
    pub fn item_rect(&self, index: usize) -> Rect {
        let pitch = self.item_size.width + self.spacing;
        Rect::new(
            self.origin.x + index as f32 * pitch,
            self.origin.y,
            self.item_size.width,
            self.item_size.height,
        )
    }

    /// The rating selected by a pointer at horizontal position `x`.
    ///
    /// An item's left edge is its selection threshold: the result is the
    /// number of items whose left edge lies at or before `x`, which is zero
    /// left of the first item and never exceeds [`MAX_RATING`].
    pub fn rating_at(&self, x: f32) -> i32 {
        let count = (0..ITEM_COUNT)
            .take_while(|&index| self.item_rect(index).left() <= x)
            .count();
        (count as i32).clamp(0, MAX_RATING)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interaction {
    Idle,
    Tracking {
        /// Committed rating when the gesture began.
        start_rating: i32,
        /// Rating under the pointer.
        tracking_rating: i32,
        /// Touch driving the gesture; `None` for mouse input.
        touch_id: Option<u64>,
    },
}

#[derive(Debug, Clone, Default)]
struct ImageSlot {
    image: Option<Image>,
    name: Option<String>,
}

/// A star-style rating widget.
///
/// The control holds an integer rating in `0..=5`. Pressing inside the
/// control starts a gesture that previews the rating under the pointer;
/// dragging updates the rating live; releasing commits it; cancelling
/// restores the rating held before the gesture.
///
/// Three images drive the look of each item, see [`ItemState`]. Images may
/// be assigned directly or by name through an injected [`ImageResolver`].
///
/// # Signals
///
/// - `value_changed(i32)`: Emitted when a user gesture changes the rating,
///   once per distinct value while dragging. Programmatic
///   [`set_rating`](Self::set_rating) never emits.
pub struct RatingControl {
    /// Widget base.
    base: WidgetBase,

    /// Committed rating.
    rating: i32,

    /// Distance between adjacent items.
    spacing: f32,

    /// Unselected, selected and unrated images, indexed by `ItemState::slot`.
    images: [ImageSlot; 3],

    /// Lookup for image names.
    resolver: Option<Arc<dyn ImageResolver>>,

    /// Pointer interaction state.
    interaction: Interaction,

    /// Signal emitted when a user gesture changes the rating.
    pub value_changed: Signal<i32>,
}

impl RatingControl {
    /// Create a control occupying `frame`.
    ///
    /// The rating starts at zero, spacing at [`DEFAULT_SPACING`], and no
    /// images are set.
    pub fn new(frame: Rect) -> Self {
        let mut base = WidgetBase::new();
        base.set_geometry(frame);

        Self {
            base,
            rating: 0,
            spacing: DEFAULT_SPACING,
            images: Default::default(),
            resolver: None,
            interaction: Interaction::Idle,
            value_changed: Signal::new(),
        }
    }

    /// Create a control from a declarative configuration.
    ///
    /// Image names in the configuration are looked up through `resolver`.
    pub fn from_config(config: &RatingControlConfig, resolver: Arc<dyn ImageResolver>) -> Self {
        let mut control = Self::new(config.frame.into()).with_image_resolver(resolver);
        control.apply_config(config);
        control
    }

    /// Apply a configuration to an existing control.
    ///
    /// Every field is applied; image names that do not resolve leave the
    /// corresponding image unchanged.
    pub fn apply_config(&mut self, config: &RatingControlConfig) {
        self.base.set_geometry(config.frame.into());
        self.set_spacing(config.spacing);
        if let Some(name) = &config.unselected_image_name {
            self.set_unselected_item_image_name(name.clone());
        }
        if let Some(name) = &config.selected_image_name {
            self.set_selected_item_image_name(name.clone());
        }
        if let Some(name) = &config.unrated_image_name {
            self.set_unrated_item_image_name(name.clone());
        }
        self.set_rating(config.initial_rating);
    }

    // =========================================================================
    // Rating
    // =========================================================================

    /// Number of items in the control.
    #[inline]
    pub fn item_count(&self) -> usize {
        ITEM_COUNT
    }

    /// Get the committed rating.
    #[inline]
    pub fn rating(&self) -> i32 {
        self.rating
    }

    /// Set the rating.
    ///
    /// The value is clamped to `[0, 5]`. This does not emit `value_changed`.
    /// During a gesture the previewed rating is overwritten as well, so the
    /// display matches the assigned value until the pointer moves again, and
    /// a later cancel restores the assigned value rather than the rating held
    /// when the gesture began.
    pub fn set_rating(&mut self, rating: i32) {
        let clamped = rating.clamp(0, MAX_RATING);
        if let Interaction::Tracking {
            start_rating,
            tracking_rating,
            ..
        } = &mut self.interaction
        {
            *start_rating = clamped;
            *tracking_rating = clamped;
        }
        if self.rating != clamped {
            tracing::debug!(target: targets::RATING, from = self.rating, to = clamped, "rating assigned");
            self.rating = clamped;
        }
        self.base.update();
    }

    /// Set rating using builder pattern.
    pub fn with_rating(mut self, rating: i32) -> Self {
        self.set_rating(rating);
        self
    }

    // =========================================================================
    // Spacing
    // =========================================================================

    /// Get the spacing between items.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Set the spacing between items. Negative values are treated as zero.
    pub fn set_spacing(&mut self, spacing: f32) {
        let new_spacing = spacing.max(0.0);
        if (self.spacing - new_spacing).abs() > f32::EPSILON {
            self.spacing = new_spacing;
            self.base.update();
        }
    }

    /// Set spacing using builder pattern.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.set_spacing(spacing);
        self
    }

    // =========================================================================
    // Images
    // =========================================================================

    /// Get the image used for items in `state`.
    pub fn item_image(&self, state: ItemState) -> Option<&Image> {
        self.images[state.slot()].image.as_ref()
    }

    /// Set the image used for items in `state`.
    pub fn set_item_image(&mut self, state: ItemState, image: Option<Image>) {
        let slot = &mut self.images[state.slot()];
        if slot.image != image {
            slot.image = image;
            self.base.update();
        }
    }

    /// Get the last image name assigned for items in `state`.
    pub fn item_image_name(&self, state: ItemState) -> Option<&str> {
        self.images[state.slot()].name.as_deref()
    }

    /// Look up `name` through the image resolver and use the result for
    /// items in `state`.
    ///
    /// When no resolver is installed or the name is unknown, a warning is
    /// logged and the current image is kept.
    pub fn set_item_image_name(&mut self, state: ItemState, name: impl Into<String>) {
        let name = name.into();
        let resolved = match &self.resolver {
            Some(resolver) => resolver.resolve(&name),
            None => {
                tracing::warn!(target: targets::RESOURCES, name = %name, ?state, "no image resolver installed");
                None
            }
        };

        match resolved {
            Some(image) => self.set_item_image(state, Some(image)),
            None if self.resolver.is_some() => {
                tracing::warn!(target: targets::RESOURCES, name = %name, ?state, "image name did not resolve, keeping current image");
            }
            None => {}
        }
        self.images[state.slot()].name = Some(name);
    }

    /// Get the image for items above the rating.
    pub fn unselected_item_image(&self) -> Option<&Image> {
        self.item_image(ItemState::Unselected)
    }

    /// Set the image for items above the rating.
    pub fn set_unselected_item_image(&mut self, image: Option<Image>) {
        self.set_item_image(ItemState::Unselected, image);
    }

    /// Set the unselected image using builder pattern.
    pub fn with_unselected_item_image(mut self, image: Option<Image>) -> Self {
        self.set_unselected_item_image(image);
        self
    }

    /// Get the image for items at or below the rating.
    pub fn selected_item_image(&self) -> Option<&Image> {
        self.item_image(ItemState::Selected)
    }

    /// Set the image for items at or below the rating.
    pub fn set_selected_item_image(&mut self, image: Option<Image>) {
        self.set_item_image(ItemState::Selected, image);
    }

    /// Set the selected image using builder pattern.
    pub fn with_selected_item_image(mut self, image: Option<Image>) -> Self {
        self.set_selected_item_image(image);
        self
    }

    /// Get the image shown on every item while the control is unrated.
    pub fn unrated_item_image(&self) -> Option<&Image> {
        self.item_image(ItemState::Unrated)
    }

    /// Set the image shown on every item while the control is unrated.
    pub fn set_unrated_item_image(&mut self, image: Option<Image>) {
        self.set_item_image(ItemState::Unrated, image);
    }

    /// Set the unrated image using builder pattern.
    pub fn with_unrated_item_image(mut self, image: Option<Image>) -> Self {
        self.set_unrated_item_image(image);
        self
    }

    /// Get the name last assigned to the unselected image.
    pub fn unselected_item_image_name(&self) -> Option<&str> {
        self.item_image_name(ItemState::Unselected)
    }

    /// Resolve and assign the unselected image by name.
    pub fn set_unselected_item_image_name(&mut self, name: impl Into<String>) {
        self.set_item_image_name(ItemState::Unselected, name);
    }

    /// Get the name last assigned to the selected image.
    pub fn selected_item_image_name(&self) -> Option<&str> {
        self.item_image_name(ItemState::Selected)
    }

    /// Resolve and assign the selected image by name.
    pub fn set_selected_item_image_name(&mut self, name: impl Into<String>) {
        self.set_item_image_name(ItemState::Selected, name);
    }

    /// Get the name last assigned to the unrated image.
    pub fn unrated_item_image_name(&self) -> Option<&str> {
        self.item_image_name(ItemState::Unrated)
    }

    /// Resolve and assign the unrated image by name.
    pub fn set_unrated_item_image_name(&mut self, name: impl Into<String>) {
        self.set_item_image_name(ItemState::Unrated, name);
    }

    /// Install the resolver used by the `*_image_name` setters.
    pub fn set_image_resolver(&mut self, resolver: Arc<dyn ImageResolver>) {
        self.resolver = Some(resolver);
    }

    /// Set the image resolver using builder pattern.
    pub fn with_image_resolver(mut self, resolver: Arc<dyn ImageResolver>) -> Self {
        self.set_image_resolver(resolver);
        self
    }

    // =========================================================================
    // Layout and Hit-Testing
    // =========================================================================

    /// Size of one item.
    ///
    /// Taken from the unselected image, falling back to the selected and then
    /// the unrated image. Zero when no image is set.
    pub fn item_size(&self) -> Size {
        ItemState::ALL
            .into_iter()
            .find_map(|state| self.item_image(state).map(Image::size))
            .unwrap_or(Size::ZERO)
    }

    /// Current item layout in widget-local coordinates.
    pub fn layout(&self) -> ItemLayout {
        ItemLayout::new(self.base.size(), self.item_size(), self.spacing)
    }

    /// Rectangle of item `index` in widget-local coordinates.
    pub fn item_rect(&self, index: usize) -> Option<Rect> {
        (index < ITEM_COUNT).then(|| self.layout().item_rect(index))
    }

    /// The rating a pointer at local horizontal position `x` would select.
    pub fn rating_at(&self, x: f32) -> i32 {
        self.layout().rating_at(x)
    }

    // =========================================================================
    // Item State
    // =========================================================================

    /// Whether a pointer gesture is in progress.
    pub fn is_tracking(&self) -> bool {
        matches!(self.interaction, Interaction::Tracking { .. })
    }

    /// The rating under the pointer during a gesture.
    pub fn tracking_rating(&self) -> Option<i32> {
        match self.interaction {
            Interaction::Tracking {
                tracking_rating, ..
            } => Some(tracking_rating),
            Interaction::Idle => None,
        }
    }

    /// How item `index` is currently drawn. `None` for out-of-range indices.
    pub fn item_state(&self, index: usize) -> Option<ItemState> {
        if index >= ITEM_COUNT {
            return None;
        }
        let shown = match self.interaction {
            Interaction::Tracking {
                tracking_rating, ..
            } => tracking_rating,
            Interaction::Idle if self.rating == 0 => return Some(ItemState::Unrated),
            Interaction::Idle => self.rating,
        };
        Some(if (index as i32) < shown {
            ItemState::Selected
        } else {
            ItemState::Unselected
        })
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    fn begin_tracking(&mut self, pos: Point, touch_id: Option<u64>) -> bool {
        if !self.base.accepts_input() || self.is_tracking() || !self.base.contains_point(pos) {
            return false;
        }

        let tracking_rating = self.rating_at(pos.x);
        tracing::trace!(target: targets::RATING, x = pos.x, tracking_rating, "tracking started");
        self.interaction = Interaction::Tracking {
            start_rating: self.rating,
            tracking_rating,
            touch_id,
        };
        self.base.update();
        true
    }

    fn continue_tracking(&mut self, pos: Point, touch: Option<u64>) -> bool {
        let candidate = self.rating_at(pos.x);
        let Interaction::Tracking {
            tracking_rating,
            touch_id,
            ..
        } = &mut self.interaction
        else {
            return false;
        };
        if *touch_id != touch {
            return false;
        }

        if *tracking_rating != candidate {
            *tracking_rating = candidate;
            tracing::trace!(target: targets::RATING, x = pos.x, rating = candidate, "tracking rating changed");
            self.rating = candidate;
            self.base.update();
            self.value_changed.emit(candidate);
        }
        true
    }

    fn end_tracking(&mut self, touch: Option<u64>) -> bool {
        let Interaction::Tracking {
            tracking_rating,
            touch_id,
            ..
        } = self.interaction
        else {
            return false;
        };
        if touch_id != touch {
            return false;
        }

        self.interaction = Interaction::Idle;
        self.base.update();
        if self.rating != tracking_rating {
            self.rating = tracking_rating;
            self.value_changed.emit(tracking_rating);
        }
        tracing::debug!(target: targets::RATING, rating = self.rating, "rating committed");
        true
    }

    fn cancel_tracking(&mut self, touch: Option<u64>) -> bool {
        let Interaction::Tracking {
            start_rating,
            touch_id,
            ..
        } = self.interaction
        else {
            return false;
        };
        if touch_id != touch {
            return false;
        }

        self.interaction = Interaction::Idle;
        self.base.update();
        if self.rating != start_rating {
            self.rating = start_rating;
            self.value_changed.emit(start_rating);
        }
        tracing::debug!(target: targets::RATING, rating = self.rating, "tracking cancelled, rating restored");
        true
    }

    /// Abort any gesture in progress, restoring the pre-gesture rating.
    pub fn cancel_interaction(&mut self) {
        let touch = match self.interaction {
            Interaction::Tracking { touch_id, .. } => touch_id,
            Interaction::Idle => return,
        };
        self.cancel_tracking(touch);
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        self.begin_tracking(event.local_pos, None)
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        // The release was lost: the button is already up, so commit instead
        // of letting a hover steer the rating.
        if !event.is_button_pressed(MouseButton::Left) {
            return self.end_tracking(None);
        }
        self.continue_tracking(event.local_pos, None)
    }

    fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        self.end_tracking(None)
    }

    fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        let id = Some(event.point.id);
        match event.phase {
            TouchPhase::Started => self.begin_tracking(event.point.local_pos, id),
            TouchPhase::Moved => self.continue_tracking(event.point.local_pos, id),
            TouchPhase::Ended => self.end_tracking(id),
            TouchPhase::Cancelled => self.cancel_tracking(id),
        }
    }
}

impl Default for RatingControl {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

impl std::fmt::Debug for RatingControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingControl")
            .field("geometry", &self.base.geometry())
            .field("rating", &self.rating)
            .field("spacing", &self.spacing)
            .field("interaction", &self.interaction)
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

impl Widget for RatingControl {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let row = self.layout().row_rect().size;
        SizeHint::new(row).with_minimum(row)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let layout = ItemLayout::new(ctx.size(), self.item_size(), self.spacing);
        for index in 0..ITEM_COUNT {
            let Some(state) = self.item_state(index) else {
                continue;
            };
            if let Some(image) = self.item_image(state) {
                ctx.renderer().draw_image(image, layout.item_rect(index));
            }
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            WidgetEvent::MouseRelease(e) => self.handle_mouse_release(e),
            WidgetEvent::MouseCancel(_) => self.cancel_tracking(None),
            WidgetEvent::Touch(e) => self.handle_touch(e),
            WidgetEvent::Resize(_) => {
                self.base.update();
                false
            }
        };
        if handled {
            event.accept();
        }
        handled
    }

    fn set_visible(&mut self, visible: bool) {
        if !visible {
            self.cancel_interaction();
        }
        self.base.set_visible(visible);
    }

    fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.cancel_interaction();
        }
        self.base.set_enabled(enabled);
    }
}

// Ensure RatingControl is Send + Sync
static_assertions::assert_impl_all!(RatingControl: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::MouseCancelEvent;
    use std::sync::atomic::{AtomicI32, Ordering};

    fn star(rgba: [u8; 4]) -> Image {
        Image::solid(40, 40, rgba).unwrap()
    }

    fn control() -> RatingControl {
        RatingControl::new(Rect::new(0.0, 0.0, 300.0, 60.0))
            .with_spacing(10.0)
            .with_unselected_item_image(Some(star([128, 128, 128, 255])))
            .with_selected_item_image(Some(star([255, 200, 0, 255])))
            .with_unrated_item_image(Some(star([220, 220, 220, 255])))
    }

    fn press(control: &mut RatingControl, x: f32) -> bool {
        control.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(x, 30.0),
        )))
    }

    fn drag(control: &mut RatingControl, x: f32) -> bool {
        control.event(&mut WidgetEvent::MouseMove(MouseMoveEvent::dragging(
            Point::new(x, 30.0),
        )))
    }

    fn release(control: &mut RatingControl, x: f32) -> bool {
        control.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            Point::new(x, 30.0),
        )))
    }

    fn counter(control: &RatingControl) -> Arc<AtomicI32> {
        let count = Arc::new(AtomicI32::new(0));
        let count_clone = count.clone();
        control.value_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_rating_control_creation() {
        let control = RatingControl::new(Rect::new(5.0, 5.0, 200.0, 40.0));
        assert_eq!(control.rating(), 0);
        assert_eq!(control.spacing(), DEFAULT_SPACING);
        assert_eq!(control.item_count(), 5);
        assert!(control.unselected_item_image().is_none());
        assert!(control.selected_item_image().is_none());
        assert!(control.unrated_item_image().is_none());
        assert_eq!(control.geometry(), Rect::new(5.0, 5.0, 200.0, 40.0));
        assert!(!control.is_tracking());
    }

    #[test]
    fn test_rating_clamping() {
        let mut control = control();
        for (input, expected) in [(-3, 0), (0, 0), (3, 3), (5, 5), (7, 5), (i32::MAX, 5)] {
            control.set_rating(input);
            assert_eq!(control.rating(), expected, "set_rating({input})");
        }
    }

    #[test]
    fn test_programmatic_rating_does_not_notify() {
        let mut control = control();
        let count = counter(&control);

        control.set_rating(7);
        control.set_rating(2);

        assert_eq!(control.rating(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_negative_spacing_clamped() {
        let control = control().with_spacing(-4.0);
        assert_eq!(control.spacing(), 0.0);
    }

    #[test]
    fn test_layout_is_centered() {
        let control = control();
        let expected_lefts = [30.0, 80.0, 130.0, 180.0, 230.0];
        for (index, left) in expected_lefts.into_iter().enumerate() {
            let rect = control.item_rect(index).unwrap();
            assert_eq!(rect, Rect::new(left, 10.0, 40.0, 40.0));
        }
        assert_eq!(control.item_rect(5), None);
        assert_eq!(control.layout().row_rect(), Rect::new(30.0, 10.0, 240.0, 40.0));
    }

    #[test]
    fn test_item_size_prefers_unselected_image() {
        let control = RatingControl::new(Rect::new(0.0, 0.0, 100.0, 100.0))
            .with_unrated_item_image(Some(Image::solid(10, 10, [0, 0, 0, 255]).unwrap()));
        assert_eq!(control.item_size(), Size::new(10.0, 10.0));

        let control = control
            .with_selected_item_image(Some(Image::solid(20, 20, [0, 0, 0, 255]).unwrap()));
        assert_eq!(control.item_size(), Size::new(20.0, 20.0));

        let control = control
            .with_unselected_item_image(Some(Image::solid(30, 12, [0, 0, 0, 255]).unwrap()));
        assert_eq!(control.item_size(), Size::new(30.0, 12.0));
    }

    #[test]
    fn test_rating_at_thresholds() {
        let control = control();
        assert_eq!(control.rating_at(0.0), 0);
        assert_eq!(control.rating_at(29.9), 0);
        assert_eq!(control.rating_at(30.0), 1);
        assert_eq!(control.rating_at(75.0), 1);
        assert_eq!(control.rating_at(80.0), 2);
        assert_eq!(control.rating_at(229.0), 4);
        assert_eq!(control.rating_at(230.0), 5);
        assert_eq!(control.rating_at(10_000.0), 5);
        assert_eq!(control.rating_at(-10_000.0), 0);
    }

    #[test]
    fn test_rating_at_is_monotonic() {
        let control = control();
        let mut previous = control.rating_at(-50.0);
        let mut x = -50.0;
        while x < 350.0 {
            let current = control.rating_at(x);
            assert!(current >= previous, "rating_at({x}) decreased");
            previous = current;
            x += 0.5;
        }
    }

    #[test]
    fn test_press_at_item_center_selects_item() {
        for index in 0..ITEM_COUNT {
            let mut control = control();
            let center = control.item_rect(index).unwrap().center();
            assert!(press(&mut control, center.x));
            assert_eq!(control.tracking_rating(), Some(index as i32 + 1));
        }
    }

    #[test]
    fn test_unrated_state() {
        let control = control();
        for index in 0..ITEM_COUNT {
            assert_eq!(control.item_state(index), Some(ItemState::Unrated));
        }
        assert_eq!(control.item_state(ITEM_COUNT), None);
    }

    #[test]
    fn test_selected_and_unselected_states() {
        let mut control = control();
        for rating in 1..=MAX_RATING {
            control.set_rating(rating);
            for index in 0..ITEM_COUNT {
                let expected = if (index as i32) < rating {
                    ItemState::Selected
                } else {
                    ItemState::Unselected
                };
                assert_eq!(control.item_state(index), Some(expected));
            }
        }
    }

    #[test]
    fn test_tracking_never_shows_unrated() {
        let mut control = control();
        // Press in the left margin: tracking rating zero.
        assert!(press(&mut control, 5.0));
        assert_eq!(control.tracking_rating(), Some(0));
        for index in 0..ITEM_COUNT {
            assert_eq!(control.item_state(index), Some(ItemState::Unselected));
        }
    }

    #[test]
    fn test_press_does_not_change_committed_rating() {
        let mut control = control();
        let count = counter(&control);

        press(&mut control, 150.0);
        assert_eq!(control.rating(), 0);
        assert_eq!(control.tracking_rating(), Some(3));
        assert_eq!(control.item_state(2), Some(ItemState::Selected));
        assert_eq!(control.item_state(3), Some(ItemState::Unselected));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_tap_commits_on_release() {
        let mut control = control();
        let count = counter(&control);

        press(&mut control, 50.0);
        assert!(release(&mut control, 50.0));

        assert_eq!(control.rating(), 1);
        assert!(!control.is_tracking());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_tap_on_current_rating_does_not_notify() {
        let mut control = control().with_rating(3);
        let count = counter(&control);

        press(&mut control, 150.0);
        release(&mut control, 150.0);

        assert_eq!(control.rating(), 3);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drag_notifies_once_per_value() {
        let mut control = control();
        let values = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let values_clone = values.clone();
        control.value_changed.connect(move |&value| values_clone.lock().push(value));

        press(&mut control, 50.0);
        for x in [55.0, 60.0, 100.0, 110.0, 150.0, 200.0, 205.0] {
            drag(&mut control, x);
        }
        assert_eq!(control.rating(), 4);
        release(&mut control, 205.0);

        assert_eq!(control.rating(), 4);
        assert_eq!(*values.lock(), vec![2, 3, 4]);
    }

    #[test]
    fn test_drag_back_and_forth() {
        let mut control = control();
        let values = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let values_clone = values.clone();
        control.value_changed.connect(move |&value| values_clone.lock().push(value));

        press(&mut control, 150.0);
        drag(&mut control, 250.0);
        drag(&mut control, 50.0);
        drag(&mut control, 0.0);
        release(&mut control, 0.0);

        assert_eq!(control.rating(), 0);
        assert_eq!(*values.lock(), vec![5, 1, 0]);
    }

    #[test]
    fn test_drag_outside_bounds_keeps_tracking() {
        let mut control = control();
        press(&mut control, 50.0);
        drag(&mut control, 900.0);
        assert_eq!(control.rating(), 5);
        release(&mut control, 900.0);
        assert_eq!(control.rating(), 5);
    }

    #[test]
    fn test_press_outside_bounds_is_ignored() {
        let mut control = control();
        assert!(!press(&mut control, 400.0));
        assert!(!control.is_tracking());
        assert!(!drag(&mut control, 100.0));
        assert!(!release(&mut control, 100.0));
        assert_eq!(control.rating(), 0);
    }

    #[test]
    fn test_right_button_is_ignored() {
        let mut control = control();
        let handled = control.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Right,
            Point::new(100.0, 30.0),
        )));
        assert!(!handled);
        assert!(!control.is_tracking());
    }

    #[test]
    fn test_cancel_restores_previous_rating() {
        let mut control = control().with_rating(2);
        let values = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let values_clone = values.clone();
        control.value_changed.connect(move |&value| values_clone.lock().push(value));

        press(&mut control, 100.0);
        drag(&mut control, 200.0);
        assert_eq!(control.rating(), 4);

        let mut cancel = WidgetEvent::MouseCancel(MouseCancelEvent::new());
        assert!(control.event(&mut cancel));
        assert!(cancel.is_accepted());

        assert_eq!(control.rating(), 2);
        assert!(!control.is_tracking());
        assert_eq!(*values.lock(), vec![4, 2]);
    }

    #[test]
    fn test_cancel_without_change_is_silent() {
        let mut control = control().with_rating(2);
        let count = counter(&control);

        press(&mut control, 200.0);
        control.cancel_interaction();

        assert_eq!(control.rating(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_programmatic_rating_during_tracking() {
        let mut control = control();
        let count = counter(&control);

        press(&mut control, 150.0);
        control.set_rating(5);
        assert_eq!(control.rating(), 5);
        assert_eq!(control.tracking_rating(), Some(5));

        release(&mut control, 150.0);
        assert_eq!(control.rating(), 5);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_cancel_after_programmatic_rating() {
        let mut control = control().with_rating(2);
        let count = counter(&control);

        press(&mut control, 200.0);
        control.set_rating(5);
        control.cancel_interaction();

        assert_eq!(control.rating(), 5);
        assert!(!control.is_tracking());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_hover_after_lost_release_commits() {
        let mut control = control();
        let count = counter(&control);

        press(&mut control, 50.0);
        drag(&mut control, 150.0);
        assert_eq!(control.rating(), 3);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // No button held: the gesture ends at the last tracked value.
        let hover = MouseMoveEvent::new(Point::new(250.0, 30.0), 0);
        assert!(control.event(&mut WidgetEvent::MouseMove(hover)));
        assert!(!control.is_tracking());
        assert_eq!(control.rating(), 3);

        let hover = MouseMoveEvent::new(Point::new(100.0, 30.0), 0);
        assert!(!control.event(&mut WidgetEvent::MouseMove(hover)));
        assert_eq!(control.rating(), 3);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_control_ignores_input() {
        let mut control = control();
        control.set_enabled(false);
        assert!(!press(&mut control, 100.0));
        assert_eq!(control.rating(), 0);
    }

    #[test]
    fn test_disabling_cancels_gesture() {
        let mut control = control().with_rating(1);
        press(&mut control, 100.0);
        drag(&mut control, 200.0);

        control.set_enabled(false);
        assert!(!control.is_tracking());
        assert_eq!(control.rating(), 1);
    }

    #[test]
    fn test_touch_gesture() {
        let mut control = control();
        let count = counter(&control);

        let mut start = WidgetEvent::Touch(TouchEvent::new(
            TouchPhase::Started,
            9,
            Point::new(50.0, 30.0),
        ));
        assert!(control.event(&mut start));

        // A different finger does not steer the gesture.
        let mut other = WidgetEvent::Touch(TouchEvent::new(
            TouchPhase::Moved,
            10,
            Point::new(250.0, 30.0),
        ));
        assert!(!control.event(&mut other));

        // Mouse input does not steer a touch gesture either.
        assert!(!drag(&mut control, 250.0));

        let mut moved = WidgetEvent::Touch(TouchEvent::new(
            TouchPhase::Moved,
            9,
            Point::new(150.0, 30.0),
        ));
        assert!(control.event(&mut moved));
        assert_eq!(control.rating(), 3);

        let mut ended = WidgetEvent::Touch(TouchEvent::new(
            TouchPhase::Ended,
            9,
            Point::new(150.0, 30.0),
        ));
        assert!(control.event(&mut ended));
        assert_eq!(control.rating(), 3);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_touch_cancel_rolls_back() {
        let mut control = control().with_rating(1);
        control.event(&mut WidgetEvent::Touch(TouchEvent::new(
            TouchPhase::Started,
            1,
            Point::new(200.0, 30.0),
        )));
        control.event(&mut WidgetEvent::Touch(TouchEvent::new(
            TouchPhase::Cancelled,
            1,
            Point::new(200.0, 30.0),
        )));
        assert_eq!(control.rating(), 1);
        assert!(!control.is_tracking());
    }

    #[test]
    fn test_name_without_resolver_keeps_image() {
        let mut control = control();
        let before = control.selected_item_image().cloned();

        control.set_selected_item_image_name("gold_star");

        assert_eq!(control.selected_item_image().cloned(), before);
        assert_eq!(control.selected_item_image_name(), Some("gold_star"));
    }

    #[test]
    fn test_name_resolution() {
        let gold = star([255, 215, 0, 255]);
        let gold_clone = gold.clone();
        let resolver: Arc<dyn ImageResolver> =
            Arc::new(move |name: &str| (name == "gold_star").then(|| gold_clone.clone()));

        let mut control = control().with_image_resolver(resolver);
        let before = control.selected_item_image().cloned();

        control.set_selected_item_image_name("missing");
        assert_eq!(control.selected_item_image().cloned(), before);

        control.set_selected_item_image_name("gold_star");
        assert_eq!(control.selected_item_image(), Some(&gold));
        assert_eq!(control.selected_item_image_name(), Some("gold_star"));
    }

    #[test]
    fn test_state_changes_request_repaint() {
        let mut control = control();
        control.widget_base_mut().clear_repaint_flag();

        control.set_rating(2);
        assert!(control.needs_repaint());
        control.widget_base_mut().clear_repaint_flag();

        control.set_spacing(4.0);
        assert!(control.needs_repaint());
        control.widget_base_mut().clear_repaint_flag();

        press(&mut control, 50.0);
        assert!(control.needs_repaint());
    }

    #[test]
    fn test_size_hint_matches_row() {
        let control = control();
        let hint = control.size_hint();
        assert_eq!(hint.preferred, Size::new(240.0, 40.0));
        assert_eq!(hint.minimum, Some(Size::new(240.0, 40.0)));
    }

    #[test]
    fn test_paint_lays_out_in_context_rect() {
        let control = control().with_rating(2);
        let mut renderer = horizon_rating_render::RecordingRenderer::new();
        {
            let mut ctx = PaintContext::new(&mut renderer, control.rect());
            control.paint(&mut ctx);
        }

        let dests: Vec<Rect> = renderer.images().map(|(_, dest)| dest).collect();
        let expected: Vec<Rect> = (0..ITEM_COUNT)
            .map(|index| control.item_rect(index).unwrap())
            .collect();
        assert_eq!(dests, expected);
        let first = renderer.images().next().map(|(image, _)| image.clone());
        assert_eq!(first.as_ref(), control.selected_item_image());
    }

    #[test]
    fn test_layout_follows_geometry() {
        let mut control = control();
        control.set_geometry(Rect::new(0.0, 0.0, 400.0, 100.0));
        assert_eq!(control.item_rect(0), Some(Rect::new(80.0, 30.0, 40.0, 40.0)));
    }
}

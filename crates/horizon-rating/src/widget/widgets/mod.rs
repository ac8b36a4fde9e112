//! Standard widgets for Horizon Rating.
//!
//! - [`RatingControl`]: Five-item star rating input

mod rating_control;

pub use rating_control::{
    DEFAULT_SPACING, ITEM_COUNT, ItemLayout, ItemState, MAX_RATING, RatingControl,
};

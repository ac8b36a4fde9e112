//! Horizon Rating - a star-style rating control for Rust UIs.
//!
//! This is the main crate. It provides the widget layer and the
//! [`RatingControl`](widget::widgets::RatingControl) widget, and re-exports
//! the core and render crates.
//!
//! # Example
//!
//! ```
//! use horizon_rating::prelude::*;
//!
//! let star = Image::solid(24, 24, [255, 200, 0, 255]).unwrap();
//! let mut control = RatingControl::new(Rect::new(0.0, 0.0, 200.0, 40.0))
//!     .with_selected_item_image(Some(star.clone()))
//!     .with_unselected_item_image(Some(star));
//!
//! control.value_changed.connect(|&rating| println!("rated {rating}"));
//! control.set_rating(4);
//! assert_eq!(control.rating(), 4);
//! ```

pub use horizon_rating_core::*;

/// Graphics module.
pub mod render {
    pub use horizon_rating_render::*;
}

pub mod config;
pub mod prelude;
pub mod widget;

pub use config::{ConfigError, ConfigResult, FrameConfig, RatingControlConfig};

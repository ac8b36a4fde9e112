//! Declarative configuration for rating controls.
//!
//! A [`RatingControlConfig`] describes a control's frame, spacing, image
//! names and initial rating. It is usually stored as TOML:
//!
//! ```toml
//! spacing = 8.0
//! selected_image_name = "star_full"
//! unselected_image_name = "star_empty"
//! unrated_image_name = "star_grey"
//! initial_rating = 3
//!
//! [frame]
//! x = 20.0
//! y = 20.0
//! width = 260.0
//! height = 48.0
//! ```
//!
//! Construct the control with
//! [`RatingControl::from_config`](crate::widget::widgets::RatingControl::from_config).

use std::path::Path;

use horizon_rating_core::logging::targets;
use horizon_rating_render::Rect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::widget::widgets::DEFAULT_SPACING;

/// Errors raised while loading or saving a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML text could not be parsed into a configuration.
    #[error("invalid rating control config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize rating control config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A frame in parent coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<FrameConfig> for Rect {
    fn from(frame: FrameConfig) -> Self {
        Rect::new(frame.x, frame.y, frame.width, frame.height)
    }
}

impl From<Rect> for FrameConfig {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.left(),
            y: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Declarative description of a rating control.
///
/// Missing fields take their defaults: a zero frame, spacing 10, no image
/// names and a rating of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingControlConfig {
    /// Distance between items.
    pub spacing: f32,
    /// Image name for items above the rating.
    pub unselected_image_name: Option<String>,
    /// Image name for items at or below the rating.
    pub selected_image_name: Option<String>,
    /// Image name shown on every item while unrated.
    pub unrated_image_name: Option<String>,
    /// Rating applied after construction. Clamped to `[0, 5]`.
    pub initial_rating: i32,
    /// Control frame.
    pub frame: FrameConfig,
}

impl Default for RatingControlConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            unselected_image_name: None,
            selected_image_name: None,
            unrated_image_name: None,
            initial_rating: 0,
            frame: FrameConfig::default(),
        }
    }
}

impl RatingControlConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration as pretty-printed TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded rating control config");
        Self::from_toml_str(&text)
    }

    /// Write the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

//! Annotator configuration.

use crate::drag::DRAG_OFFSET;
use crate::hit::{HIT_HALF_HEIGHT, HIT_HALF_WIDTH};
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// How the surface is updated after a new entry is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddRedraw {
    /// Draw only the new entry on top of what is already there (default).
    #[default]
    Incremental,
    /// Clear and redraw every entry, like undo/redo/drag do.
    Full,
}

/// Tunables for placement, hit-testing and drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Drawing surface size in pixels.
    pub canvas_size: Size,
    /// Where every newly added entry is anchored.
    pub default_position: Point,
    /// Half width and half height of the hit box around an entry's anchor.
    pub hit_half_extents: Vec2,
    /// Offset applied to the pointer to get a dragged entry's new anchor.
    pub drag_offset: Vec2,
    /// Font family used in the CSS font shorthand.
    pub font_family: String,
    pub add_redraw: AddRedraw,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            canvas_size: Size::new(400.0, 600.0),
            default_position: Point::new(50.0, 100.0),
            hit_half_extents: Vec2::new(HIT_HALF_WIDTH, HIT_HALF_HEIGHT),
            drag_offset: DRAG_OFFSET,
            font_family: "Arial".to_string(),
            add_redraw: AddRedraw::Incremental,
        }
    }
}

impl AnnotatorConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every geometric setting is usable.
    ///
    /// Hit half-extents must be finite and positive, the canvas must be a
    /// whole-pixel size in `1..=u32::MAX` on both axes, and positions and
    /// offsets must be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extents = self.hit_half_extents;
        if !(extents.x.is_finite() && extents.y.is_finite() && extents.x > 0.0 && extents.y > 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "hit_half_extents must be positive, got ({}, {})",
                extents.x, extents.y
            )));
        }
        for (axis, value) in [
            ("width", self.canvas_size.width),
            ("height", self.canvas_size.height),
        ] {
            if !(1.0..=f64::from(u32::MAX)).contains(&value) || value.fract() != 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "canvas_size.{axis} must be a pixel count in 1..={}, got {value}",
                    u32::MAX
                )));
            }
        }
        if !self.default_position.is_finite() {
            return Err(ConfigError::Invalid("default_position must be finite".into()));
        }
        if !self.drag_offset.is_finite() {
            return Err(ConfigError::Invalid("drag_offset must be finite".into()));
        }
        Ok(())
    }

    /// Canvas backing-store size in whole pixels.
    pub fn canvas_pixels(&self) -> (u32, u32) {
        (
            self.canvas_size.width as u32,
            self.canvas_size.height as u32,
        )
    }

    /// Serialize the config to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

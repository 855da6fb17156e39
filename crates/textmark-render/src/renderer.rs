//! Drawing surface trait abstraction.

use kurbo::Point;
use peniko::Color;
use textmark_core::{AnnotatorConfig, FontStyle};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Drawing context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("Draw failed: {0}")]
    Draw(String),
}

/// Result type for surface operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Font used to draw one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size: f64,
    pub style: FontStyle,
    pub family: String,
}

impl FontSpec {
    pub fn new(size: f64, style: FontStyle, family: impl Into<String>) -> Self {
        Self {
            size,
            style,
            family: family.into(),
        }
    }

    /// CSS font shorthand, e.g. `bold italic 16px Arial`.
    pub fn css(&self) -> String {
        format!("{} {}px {}", self.style.css(), self.size, self.family)
    }
}

/// Format a color as a CSS `rgba()` string.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!(
        "rgba({}, {}, {}, {})",
        rgba.r,
        rgba.g,
        rgba.b,
        f64::from(rgba.a) / 255.0
    )
}

/// Settings shared by every entry drawn in a frame.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Font family for all entries.
    pub font_family: String,
    /// Text fill color.
    pub text_color: Color,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::from_config(&AnnotatorConfig::default())
    }
}

impl RenderContext {
    /// Create a render context from annotator configuration.
    pub fn from_config(config: &AnnotatorConfig) -> Self {
        Self {
            font_family: config.font_family.clone(),
            text_color: Color::from_rgba8(0, 0, 0, 255),
        }
    }

    /// Font for an entry of the given size and style.
    pub fn font(&self, size: f64, style: FontStyle) -> FontSpec {
        FontSpec::new(size, style, self.font_family.as_str())
    }
}

/// Trait for drawing backends.
///
/// A surface only knows how to wipe itself and paint a string. What is on it
/// is decided entirely by the caller.
pub trait Surface {
    /// Clear the whole surface.
    fn clear(&mut self) -> RenderResult<()>;

    /// Draw `content` with its baseline origin at `position`.
    fn draw_text(
        &mut self,
        content: &str,
        position: Point,
        font: &FontSpec,
        color: Color,
    ) -> RenderResult<()>;
}

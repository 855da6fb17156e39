//! Placed text entries.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Font style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    /// Upright, regular weight (default).
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "italic")]
    Italic,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "bold italic", alias = "bold-italic")]
    BoldItalic,
}

impl FontStyle {
    /// Get the style as used in a CSS font shorthand.
    pub fn css(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Bold => "bold",
            FontStyle::BoldItalic => "bold italic",
        }
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            FontStyle::Normal => "Normal",
            FontStyle::Italic => "Italic",
            FontStyle::Bold => "Bold",
            FontStyle::BoldItalic => "Bold Italic",
        }
    }

    /// Get all available font styles.
    pub fn all() -> &'static [FontStyle] {
        &[
            FontStyle::Normal,
            FontStyle::Italic,
            FontStyle::Bold,
            FontStyle::BoldItalic,
        ]
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

/// Error returned when a string names no known font style.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown font style: {0:?}")]
pub struct ParseFontStyleError(pub String);

impl FromStr for FontStyle {
    type Err = ParseFontStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(FontStyle::Normal),
            "italic" => Ok(FontStyle::Italic),
            "bold" => Ok(FontStyle::Bold),
            "bold italic" | "bold-italic" => Ok(FontStyle::BoldItalic),
            _ => Err(ParseFontStyleError(s.to_string())),
        }
    }
}

/// A piece of text placed on the canvas.
///
/// Content, size and style never change after creation. Moving an entry
/// produces a new value via [`TextEntry::moved_to`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEntry {
    /// The text content (may be empty).
    pub content: String,
    /// Anchor point, used as the text baseline origin when drawing.
    pub position: Point,
    /// Font size in pixels. Not validated.
    pub font_size: f64,
    pub font_style: FontStyle,
}

impl TextEntry {
    /// Create a new entry.
    pub fn new(
        content: impl Into<String>,
        position: Point,
        font_size: f64,
        font_style: FontStyle,
    ) -> Self {
        Self {
            content: content.into(),
            position,
            font_size,
            font_style,
        }
    }

    /// Copy of this entry anchored at `position`.
    pub fn moved_to(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Whether the font size is something a renderer can reasonably draw.
    pub fn has_drawable_size(&self) -> bool {
        self.font_size.is_finite() && self.font_size > 0.0
    }
}

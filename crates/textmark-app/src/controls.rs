//! Pending form input: the text, size and style the next add will use.

use std::num::ParseFloatError;
use textmark_core::{FontStyle, ParseFontStyleError};

/// Default font size in the size field.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// State of the input controls next to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsState {
    /// Text field contents.
    pub text: String,
    /// Font size field. Not validated.
    pub font_size: f64,
    /// Font style selector.
    pub font_style: FontStyle,
}

impl Default for ControlsState {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            font_style: FontStyle::default(),
        }
    }
}

impl ControlsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    /// Set the font size from the raw field value.
    pub fn set_font_size_str(&mut self, value: &str) -> Result<(), ParseFloatError> {
        self.font_size = value.trim().parse()?;
        Ok(())
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
    }

    /// Set the font style from a selector value such as `bold italic`.
    pub fn set_font_style_str(&mut self, value: &str) -> Result<(), ParseFontStyleError> {
        self.font_style = value.parse()?;
        Ok(())
    }
}

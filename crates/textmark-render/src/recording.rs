//! In-memory surface that records draw calls.

use crate::renderer::{FontSpec, RenderError, RenderResult, Surface, css_color};
use kurbo::Point;
use peniko::Color;

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Text {
        content: String,
        position: Point,
        /// CSS font shorthand.
        font: String,
        /// CSS fill color.
        fill: String,
    },
}

/// Surface that keeps a log of every draw call instead of producing pixels.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    /// Number of further text draws allowed before failing (for tests).
    remaining_draws: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `draw_text` fail once `n` more draws have succeeded.
    pub fn fail_after(&mut self, n: usize) {
        self.remaining_draws = Some(n);
    }

    /// Every recorded call, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded calls.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Text draws since the most recent clear, i.e. what is on screen.
    pub fn visible(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    /// Content strings of [`RecordingSurface::visible`].
    pub fn visible_contents(&self) -> Vec<&str> {
        self.visible()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                DrawCommand::Clear => None,
            })
            .collect()
    }

    /// Number of clears recorded.
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> RenderResult<()> {
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn draw_text(
        &mut self,
        content: &str,
        position: Point,
        font: &FontSpec,
        color: Color,
    ) -> RenderResult<()> {
        if let Some(remaining) = self.remaining_draws.as_mut() {
            if *remaining == 0 {
                return Err(RenderError::Draw(format!("refused to draw {content:?}")));
            }
            *remaining -= 1;
        }
        self.commands.push(DrawCommand::Text {
            content: content.to_string(),
            position,
            font: font.css(),
            fill: css_color(color),
        });
        Ok(())
    }
}

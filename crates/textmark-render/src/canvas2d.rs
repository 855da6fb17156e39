//! Canvas2D surface.
//!
//! Draws to an HTML `<canvas>` via `CanvasRenderingContext2d`.

use crate::renderer::{FontSpec, RenderError, RenderResult, Surface, css_color};
use kurbo::Point;
use peniko::Color;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Surface backed by a browser canvas element.
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Acquire the 2D context of `canvas`.
    pub fn new(canvas: HtmlCanvasElement) -> RenderResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| RenderError::ContextUnavailable(format!("{e:?}")))?
            .ok_or_else(|| RenderError::ContextUnavailable("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::ContextUnavailable("not a 2d context".to_string()))?;
        log::debug!("Acquired 2d context ({}x{})", canvas.width(), canvas.height());
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Set the canvas backing-store size in pixels.
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for Canvas2dSurface {
    fn clear(&mut self) -> RenderResult<()> {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn draw_text(
        &mut self,
        content: &str,
        position: Point,
        font: &FontSpec,
        color: Color,
    ) -> RenderResult<()> {
        self.ctx.set_font(&font.css());
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx
            .fill_text(content, position.x, position.y)
            .map_err(|e| RenderError::Draw(format!("{e:?}")))
    }
}

//! textmark Render Library
//!
//! Drawing-surface abstraction and implementations for textmark.
//! In the browser the surface is a Canvas2D context; elsewhere a recording
//! surface stands in.

mod projection;
mod recording;
mod renderer;

#[cfg(target_arch = "wasm32")]
mod canvas2d;

pub use projection::{draw_entry, project_to_surface};
pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{FontSpec, RenderContext, RenderError, RenderResult, Surface, css_color};

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2dSurface;

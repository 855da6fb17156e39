//! Projection of history entries onto a drawing surface.

use crate::renderer::{RenderContext, RenderResult, Surface};
use textmark_core::TextEntry;

/// Draw one entry on top of whatever the surface already shows.
pub fn draw_entry<S: Surface + ?Sized>(
    surface: &mut S,
    entry: &TextEntry,
    ctx: &RenderContext,
) -> RenderResult<()> {
    let font = ctx.font(entry.font_size, entry.font_style);
    surface.draw_text(&entry.content, entry.position, &font, ctx.text_color)
}

/// Clear the surface, then draw every entry in order (back to front).
///
/// Stops at the first surface error.
pub fn project_to_surface<S: Surface + ?Sized>(
    surface: &mut S,
    entries: &[TextEntry],
    ctx: &RenderContext,
) -> RenderResult<()> {
    surface.clear()?;
    for entry in entries {
        draw_entry(surface, entry, ctx)?;
    }
    Ok(())
}

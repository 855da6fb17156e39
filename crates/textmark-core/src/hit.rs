//! Hit-testing pointer positions against placed entries.
//!
//! Every entry gets the same fixed-size box centred on its anchor, no matter
//! how long the text is or how large the font. This is an approximation; the
//! renderer is never asked for text metrics.

use crate::entry::TextEntry;
use kurbo::{Point, Rect, Vec2};

/// Default half width of an entry's hit box.
pub const HIT_HALF_WIDTH: f64 = 50.0;
/// Default half height of an entry's hit box.
pub const HIT_HALF_HEIGHT: f64 = 20.0;

/// Hit box of an entry for the given half extents.
pub fn hit_box(entry: &TextEntry, half_extents: Vec2) -> Rect {
    Rect::from_center_size(entry.position, (half_extents.x * 2.0, half_extents.y * 2.0))
}

/// Edge-inclusive containment. `Rect::contains` excludes the far edges.
fn contains_inclusive(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Index of the topmost entry whose hit box contains `point`.
///
/// Scans the whole slice without stopping early, so later (higher-index)
/// matches win. Since entries are drawn in index order, this is the entry
/// drawn on top.
pub fn hit_test_with(point: Point, entries: &[TextEntry], half_extents: Vec2) -> Option<usize> {
    let mut hit = None;
    for (index, entry) in entries.iter().enumerate() {
        if contains_inclusive(hit_box(entry, half_extents), point) {
            hit = Some(index);
        }
    }
    hit
}

/// [`hit_test_with`] using the default 100x40 box.
pub fn hit_test(point: Point, entries: &[TextEntry]) -> Option<usize> {
    hit_test_with(point, entries, Vec2::new(HIT_HALF_WIDTH, HIT_HALF_HEIGHT))
}

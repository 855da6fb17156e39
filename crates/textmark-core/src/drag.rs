//! Drag state machine for repositioning placed entries.

use kurbo::{Point, Vec2};

/// Default offset from the pointer to a dragged entry's new anchor.
pub const DRAG_OFFSET: Vec2 = Vec2::new(-25.0, 10.0);

/// Current drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No entry is being dragged.
    #[default]
    Idle,
    /// An entry is being dragged.
    Dragging {
        /// Index of the dragged entry in the history.
        index: usize,
        /// Pointer position when the drag started.
        grab: Point,
    },
}

impl DragState {
    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Index of the dragged entry, if any.
    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            Self::Dragging { index, .. } => Some(*index),
            Self::Idle => None,
        }
    }

    /// Start dragging `hit`, or go idle when nothing was hit.
    /// Returns true if a drag started.
    pub fn begin(&mut self, hit: Option<usize>, pointer: Point) -> bool {
        *self = match hit {
            Some(index) => Self::Dragging {
                index,
                grab: pointer,
            },
            None => Self::Idle,
        };
        self.is_dragging()
    }

    /// Stop dragging. Always ends idle.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }
}

/// New anchor for a dragged entry.
///
/// The anchor follows the pointer at a fixed offset; it does not preserve
/// where inside the entry the drag was grabbed.
pub fn drag_anchor(pointer: Point, offset: Vec2) -> Point {
    pointer + offset
}

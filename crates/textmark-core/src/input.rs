//! Pointer and keyboard input forwarded by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer event with surface-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        PointerEvent::Down {
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        PointerEvent::Up {
            position: Point::new(x, y),
        }
    }

    /// Pointer position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => position,
        }
    }

    /// Convert client (page) coordinates to surface-relative ones, given the
    /// surface's top-left corner in client space.
    pub fn relative_to(self, origin: Point) -> Self {
        let offset = origin.to_vec2();
        match self {
            PointerEvent::Down { position } => PointerEvent::Down {
                position: position - offset,
            },
            PointerEvent::Move { position } => PointerEvent::Move {
                position: position - offset,
            },
            PointerEvent::Up { position } => PointerEvent::Up {
                position: position - offset,
            },
        }
    }
}

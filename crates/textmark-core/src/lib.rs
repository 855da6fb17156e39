//! textmark Core Library
//!
//! Platform-agnostic data structures and logic for the textmark canvas
//! annotator: placed text entries, undo/redo history, hit-testing and drag.

pub mod config;
pub mod drag;
pub mod entry;
pub mod hit;
pub mod history;
pub mod input;

pub use config::{AddRedraw, AnnotatorConfig, ConfigError};
pub use drag::{DRAG_OFFSET, DragState, drag_anchor};
pub use entry::{FontStyle, ParseFontStyleError, TextEntry};
pub use hit::{HIT_HALF_HEIGHT, HIT_HALF_WIDTH, hit_box, hit_test, hit_test_with};
pub use history::AnnotationHistory;
pub use input::{Modifiers, PointerEvent};

//! textmark Application
//!
//! The annotation history manager plus the shells that feed it input:
//! a WASM bridge for the browser and a line-command harness for native use.

mod annotator;
mod controls;
pub mod script;
mod shortcuts;

pub use annotator::Annotator;
pub use controls::{ControlsState, DEFAULT_FONT_SIZE};
pub use shortcuts::{Action, Shortcut, ShortcutRegistry};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{AnnotationCanvas, start};

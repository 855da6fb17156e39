//! The annotation history manager.
//!
//! Owns the entry history, the redo stack, the drag state and the drawing
//! surface. Every operation runs to completion on the caller's thread.

use crate::controls::ControlsState;
use crate::shortcuts::Action;
use kurbo::Point;
use textmark_core::{
    AddRedraw, AnnotationHistory, AnnotatorConfig, DragState, FontStyle, PointerEvent, TextEntry,
    drag_anchor, hit_test_with,
};
use textmark_render::{RenderContext, RenderResult, Surface, draw_entry, project_to_surface};

/// Records placed text, manages undo/redo and drag, and keeps the surface
/// showing exactly the current history.
pub struct Annotator<S: Surface> {
    config: AnnotatorConfig,
    render_ctx: RenderContext,
    history: AnnotationHistory,
    drag: DragState,
    surface: S,
}

impl<S: Surface> Annotator<S> {
    /// Create an annotator with default configuration.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, AnnotatorConfig::default())
    }

    /// Create an annotator with custom configuration.
    pub fn with_config(surface: S, config: AnnotatorConfig) -> Self {
        Self {
            render_ctx: RenderContext::from_config(&config),
            config,
            history: AnnotationHistory::new(),
            drag: DragState::Idle,
            surface,
        }
    }

    /// Add a new entry at the configured default position.
    ///
    /// Clears the redo stack. By default only the new entry is drawn, on top
    /// of the current surface contents.
    pub fn add(&mut self, content: impl Into<String>, font_size: f64, font_style: FontStyle) {
        let entry = TextEntry::new(content, self.config.default_position, font_size, font_style);
        if !entry.has_drawable_size() {
            log::warn!("Adding text with undrawable font size {}", entry.font_size);
        }
        log::debug!("Add {:?} at {:?}", entry.content, entry.position);

        self.history.push(entry);
        self.cancel_drag();
        match self.config.add_redraw {
            AddRedraw::Incremental => {
                let result = match self.history.entries().last() {
                    Some(entry) => draw_entry(&mut self.surface, entry, &self.render_ctx),
                    None => Ok(()),
                };
                report(result);
            }
            AddRedraw::Full => self.redraw(),
        }
    }

    /// Add an entry from the current form controls.
    pub fn add_from(&mut self, controls: &ControlsState) {
        self.add(controls.text.clone(), controls.font_size, controls.font_style);
    }

    /// Undo the most recent entry and redraw.
    /// Returns false (and does nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        log::debug!("Undo: {} entries remain", self.history.len());
        self.cancel_drag();
        self.redraw();
        true
    }

    /// Redo the most recently undone entry and redraw.
    /// Returns false (and does nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        log::debug!("Redo: {} entries visible", self.history.len());
        self.cancel_drag();
        self.redraw();
        true
    }

    /// Clear the surface and draw every entry of `entries` in order.
    pub fn project_to_surface(&mut self, entries: &[TextEntry]) {
        report(project_to_surface(&mut self.surface, entries, &self.render_ctx));
    }

    /// Re-project the current history onto the surface.
    pub fn redraw(&mut self) {
        report(project_to_surface(
            &mut self.surface,
            self.history.entries(),
            &self.render_ctx,
        ));
    }

    /// Index of the topmost entry under `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        hit_test_with(point, self.history.entries(), self.config.hit_half_extents)
    }

    /// Start dragging the entry under `point`, if any.
    /// Returns true if a drag started. A miss leaves the annotator idle.
    pub fn begin_drag(&mut self, point: Point) -> bool {
        let hit = self.hit_test(point);
        let started = self.drag.begin(hit, point);
        if let Some(index) = hit {
            log::debug!("Begin drag of entry {index}");
        }
        started
    }

    /// Move the dragged entry so its anchor sits at the pointer plus the drag
    /// offset, then redraw. No-op when idle.
    /// Returns true if an entry moved.
    pub fn update_drag(&mut self, point: Point) -> bool {
        let Some(index) = self.drag.dragged_index() else {
            return false;
        };
        let anchor = drag_anchor(point, self.config.drag_offset);
        let Some(moved) = self.history.get(index).map(|e| e.moved_to(anchor)) else {
            log::debug!("Dragged entry {index} no longer visible");
            return false;
        };
        self.history.replace(index, moved);
        self.redraw();
        true
    }

    /// Stop dragging.
    pub fn end_drag(&mut self) {
        if self.drag.is_dragging() {
            log::debug!("End drag");
        }
        self.drag.end();
    }

    /// Drop an in-progress drag once history membership changes, so a stale
    /// index never lands on a different entry.
    fn cancel_drag(&mut self) {
        if self.drag.is_dragging() {
            log::debug!("Drag cancelled by history change");
            self.drag.end();
        }
    }

    /// Route a pointer event to the drag state machine.
    /// Returns true if the history or drag state changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position } => self.begin_drag(position),
            PointerEvent::Move { position } => self.update_drag(position),
            PointerEvent::Up { .. } => {
                let was_dragging = self.drag.is_dragging();
                self.end_drag();
                was_dragging
            }
        }
    }

    /// Perform a discrete action. Returns true if anything changed.
    pub fn apply(&mut self, action: Action, controls: &ControlsState) -> bool {
        match action {
            Action::AddText => {
                self.add_from(controls);
                true
            }
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Visible entries in z-order.
    pub fn entries(&self) -> &[TextEntry] {
        self.history.entries()
    }

    /// Undone entries, most recently undone last.
    pub fn redo_stack(&self) -> &[TextEntry] {
        self.history.redo_stack()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// Surface failures never fail an operation; the history is already updated.
fn report(result: RenderResult<()>) {
    if let Err(e) = result {
        log::warn!("Surface update failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use textmark_render::{DrawCommand, RecordingSurface};

    fn annotator() -> Annotator<RecordingSurface> {
        Annotator::new(RecordingSurface::new())
    }

    #[test]
    fn test_add_lands_at_default_position() {
        let mut annotator = annotator();
        annotator.add("Hello", 16.0, FontStyle::Normal);
        annotator.add("World", 20.0, FontStyle::Bold);

        assert_eq!(annotator.entries().len(), 2);
        for entry in annotator.entries() {
            assert_eq!(entry.position, Point::new(50.0, 100.0));
        }
        assert!(annotator.redo_stack().is_empty());
    }

    #[test]
    fn test_add_draws_incrementally() {
        let mut annotator = annotator();
        annotator.add("a", 16.0, FontStyle::Normal);
        annotator.add("b", 16.0, FontStyle::Italic);

        let surface = annotator.surface();
        assert_eq!(surface.clear_count(), 0);
        assert_eq!(surface.visible_contents(), vec!["a", "b"]);
    }

    #[test]
    fn test_add_full_redraw_policy() {
        let config = AnnotatorConfig {
            add_redraw: AddRedraw::Full,
            ..Default::default()
        };
        let mut annotator = Annotator::with_config(RecordingSurface::new(), config);
        annotator.add("a", 16.0, FontStyle::Normal);
        annotator.add("b", 16.0, FontStyle::Normal);

        assert_eq!(annotator.surface().clear_count(), 2);
        assert_eq!(annotator.surface().visible_contents(), vec!["a", "b"]);
    }

    #[test]
    fn test_undo_redraws_remaining() {
        let mut annotator = annotator();
        annotator.add("a", 16.0, FontStyle::Normal);
        annotator.add("b", 16.0, FontStyle::Normal);

        assert!(annotator.undo());
        assert_eq!(annotator.surface().clear_count(), 1);
        assert_eq!(annotator.surface().visible_contents(), vec!["a"]);

        assert!(annotator.redo());
        assert_eq!(annotator.surface().clear_count(), 2);
        assert_eq!(annotator.surface().visible_contents(), vec!["a", "b"]);
    }

    #[test]
    fn test_noop_undo_redo_do_not_touch_surface() {
        let mut annotator = annotator();
        assert!(!annotator.undo());
        assert!(!annotator.redo());
        assert!(annotator.surface().commands().is_empty());
    }

    #[test]
    fn test_drag_moves_with_fixed_offset() {
        let mut annotator = annotator();
        annotator.add("Hello", 16.0, FontStyle::Normal);

        assert!(annotator.begin_drag(Point::new(60.0, 95.0)));
        assert!(annotator.update_drag(Point::new(200.0, 300.0)));
        assert_eq!(annotator.entries()[0].position, Point::new(175.0, 310.0));

        // Drag redraws the whole history
        let visible = annotator.surface().visible();
        assert_eq!(visible.len(), 1);
        match &visible[0] {
            DrawCommand::Text { position, .. } => assert_eq!(*position, Point::new(175.0, 310.0)),
            other => panic!("expected text, got {other:?}"),
        }

        annotator.end_drag();
        assert_eq!(annotator.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_update_without_drag_is_noop() {
        let mut annotator = annotator();
        annotator.add("Hello", 16.0, FontStyle::Normal);
        assert!(!annotator.begin_drag(Point::new(300.0, 300.0)));
        assert!(!annotator.update_drag(Point::new(10.0, 10.0)));
        assert_eq!(annotator.entries()[0].position, Point::new(50.0, 100.0));
    }

    #[test]
    fn test_drag_of_undone_entry_is_noop() {
        let mut annotator = annotator();
        annotator.add("Hello", 16.0, FontStyle::Normal);
        assert!(annotator.begin_drag(Point::new(50.0, 100.0)));
        annotator.undo();
        assert_eq!(annotator.drag_state(), DragState::Idle);
        assert!(!annotator.update_drag(Point::new(10.0, 10.0)));
        assert!(annotator.entries().is_empty());
    }

    #[test]
    fn test_history_change_cancels_drag() {
        let mut annotator = annotator();
        annotator.add("A", 16.0, FontStyle::Normal);
        annotator.add("B", 16.0, FontStyle::Normal);
        assert!(annotator.begin_drag(Point::new(50.0, 100.0)));
        assert_eq!(annotator.drag_state().dragged_index(), Some(1));

        annotator.undo();
        annotator.add("C", 16.0, FontStyle::Normal);

        // C reuses B's slot but was never grabbed
        assert!(!annotator.update_drag(Point::new(225.0, 290.0)));
        let positions: Vec<_> = annotator.entries().iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![Point::new(50.0, 100.0), Point::new(50.0, 100.0)]);
    }

    #[test]
    fn test_redo_cancels_drag() {
        let mut annotator = annotator();
        annotator.add("A", 16.0, FontStyle::Normal);
        annotator.add("B", 16.0, FontStyle::Normal);
        annotator.undo();
        assert!(annotator.begin_drag(Point::new(50.0, 100.0)));

        assert!(annotator.redo());
        assert!(!annotator.drag_state().is_dragging());
        assert!(!annotator.update_drag(Point::new(125.0, 190.0)));
        assert_eq!(annotator.entries()[0].position, Point::new(50.0, 100.0));
    }

    #[test]
    fn test_handle_pointer_routes_events() {
        let mut annotator = annotator();
        annotator.add("Hello", 16.0, FontStyle::Normal);

        assert!(annotator.handle_pointer(PointerEvent::down(60.0, 95.0)));
        assert!(annotator.handle_pointer(PointerEvent::moved(100.0, 100.0)));
        assert_eq!(annotator.entries()[0].position, Point::new(75.0, 110.0));
        assert!(annotator.handle_pointer(PointerEvent::up(100.0, 100.0)));
        assert!(!annotator.handle_pointer(PointerEvent::moved(0.0, 0.0)));
        assert!(!annotator.handle_pointer(PointerEvent::up(0.0, 0.0)));
    }

    #[test]
    fn test_surface_failure_still_updates_history() {
        let mut annotator = annotator();
        annotator.surface_mut().fail_after(0);
        annotator.add("a", 16.0, FontStyle::Normal);
        assert_eq!(annotator.entries().len(), 1);
        assert!(annotator.undo());
        assert!(annotator.entries().is_empty());
        assert_eq!(annotator.redo_stack().len(), 1);
    }

    #[test]
    fn test_apply_actions() {
        let mut annotator = annotator();
        let mut controls = ControlsState::new();
        controls.set_text("typed");
        controls.set_font_style(FontStyle::Italic);

        assert!(annotator.apply(Action::AddText, &controls));
        assert_eq!(annotator.entries()[0].content, "typed");
        assert_eq!(annotator.entries()[0].font_style, FontStyle::Italic);
        assert!(annotator.apply(Action::Undo, &controls));
        assert!(!annotator.apply(Action::Undo, &controls));
        assert!(annotator.apply(Action::Redo, &controls));
        assert!(annotator.can_undo());
        assert!(!annotator.can_redo());
    }

    #[test]
    fn test_project_to_surface_leaves_history() {
        let mut annotator = annotator();
        annotator.add("kept", 16.0, FontStyle::Normal);
        let other = vec![TextEntry::new("preview", Point::ZERO, 12.0, FontStyle::Normal)];
        annotator.project_to_surface(&other);
        assert_eq!(annotator.surface().visible_contents(), vec!["preview"]);
        assert_eq!(annotator.entries()[0].content, "kept");

        annotator.redraw();
        assert_eq!(annotator.surface().visible_contents(), vec!["kept"]);
    }
}

//! Placed-text history and undo/redo stacks.

use crate::entry::TextEntry;

/// The list of visible entries plus the stack of undone ones.
///
/// `entries` is back to front: index order is draw order and hit-test
/// precedence. Undo moves the last entry onto the redo stack; redo moves it
/// back to the end of `entries`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationHistory {
    /// Visible entries, in z-order.
    entries: Vec<TextEntry>,
    /// Undone entries, most recently undone last.
    redo_stack: Vec<TextEntry>,
}

impl AnnotationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry. Clears the redo stack.
    pub fn push(&mut self, entry: TextEntry) {
        self.entries.push(entry);
        self.redo_stack.clear();
    }

    /// Undo the last entry.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(entry) = self.entries.pop() {
            self.redo_stack.push(entry);
            true
        } else {
            false
        }
    }

    /// Redo the last undone entry, appending it to the end.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(entry) = self.redo_stack.pop() {
            self.entries.push(entry);
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Replace the entry at `index` in place, keeping its z-order slot.
    /// Returns the previous entry, or None if the index is out of range.
    /// The redo stack is left alone.
    pub fn replace(&mut self, index: usize, entry: TextEntry) -> Option<TextEntry> {
        let slot = self.entries.get_mut(index)?;
        Some(std::mem::replace(slot, entry))
    }

    pub fn get(&self, index: usize) -> Option<&TextEntry> {
        self.entries.get(index)
    }

    /// Visible entries in z-order (back to front).
    pub fn entries(&self) -> &[TextEntry] {
        &self.entries
    }

    /// Undone entries, bottom of the stack first.
    pub fn redo_stack(&self) -> &[TextEntry] {
        &self.redo_stack
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

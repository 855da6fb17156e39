//! Keyboard shortcut registry.

use textmark_core::Modifiers;

/// A discrete trigger the host can forward to the annotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddText,
    Undo,
    Redo,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub action: Action,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        action: Action,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            action,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == modifiers.command()
            && self.shift == modifiers.shift
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Enter", false, false, Action::AddText, "Add text"),
            Shortcut::new("Z", true, false, Action::Undo, "Undo"),
            Shortcut::new("Z", true, true, Action::Redo, "Redo"),
            Shortcut::new("Y", true, false, Action::Redo, "Redo"),
        ]
    }

    /// Find the action bound to `key` with the given modifiers.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<Action> {
        Self::all()
            .into_iter()
            .find(|s| s.matches(key, modifiers))
            .map(|s| s.action)
    }

    /// One line per shortcut, for help output.
    pub fn help_text() -> String {
        Self::all()
            .iter()
            .map(|s| format!("  {:20} {}", s.format(), s.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

//! Line-oriented command harness for driving an annotator without a browser.
//!
//! Each line is one command, e.g. `text Hello`, `style bold italic`, `add`,
//! `down 60 95`, `move 200 300`, `up`, `undo`, `key ctrl+shift+z`, `list`.

use crate::annotator::Annotator;
use crate::controls::ControlsState;
use crate::shortcuts::ShortcutRegistry;
use kurbo::Point;
use std::fmt::Write as _;
use std::num::ParseFloatError;
use textmark_core::{Modifiers, ParseFontStyleError, PointerEvent, TextEntry};
use textmark_render::Surface;
use thiserror::Error;

/// Script errors. Reported per line; the session keeps going.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] ParseFloatError),
    #[error(transparent)]
    InvalidStyle(#[from] ParseFontStyleError),
}

/// A parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Text(String),
    Size(f64),
    Style(String),
    Add,
    Undo,
    Redo,
    Pointer(PointerEvent),
    Key(String, Modifiers),
    List,
    Help,
}

impl Command {
    /// Parse one line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ScriptError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest),
            None => (trimmed, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            // Text is taken verbatim so leading/trailing spaces survive
            "text" => Command::Text(rest.to_string()),
            "size" => Command::Size(rest.trim().parse()?),
            "style" => Command::Style(rest.to_string()),
            "add" => Command::Add,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "down" => {
                let p = parse_point("down", rest)?;
                Command::Pointer(PointerEvent::Down { position: p })
            }
            "move" => {
                let p = parse_point("move", rest)?;
                Command::Pointer(PointerEvent::Move { position: p })
            }
            // Coordinates are optional; release does not depend on them
            "up" => {
                let p = if rest.trim().is_empty() {
                    Point::ZERO
                } else {
                    parse_point("up", rest)?
                };
                Command::Pointer(PointerEvent::Up { position: p })
            }
            "key" => parse_key(rest)?,
            "list" => Command::List,
            "help" => Command::Help,
            other => return Err(ScriptError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_point(command: &'static str, args: &str) -> Result<Point, ScriptError> {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => Ok(Point::new(x.parse()?, y.parse()?)),
        _ => Err(ScriptError::MissingArgument {
            command,
            expected: "exactly two coordinates",
        }),
    }
}

/// Parse `ctrl+shift+z` style chords.
fn parse_key(args: &str) -> Result<Command, ScriptError> {
    let chord = args.trim();
    let mut parts: Vec<&str> = chord.split('+').map(str::trim).collect();
    let key = match parts.pop() {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => {
            return Err(ScriptError::MissingArgument {
                command: "key",
                expected: "a key such as ctrl+z",
            });
        }
    };
    let mut modifiers = Modifiers::default();
    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "cmd" | "meta" => modifiers.meta = true,
            "shift" => modifiers.shift = true,
            "alt" => modifiers.alt = true,
            other => return Err(ScriptError::UnknownCommand(format!("modifier {other}"))),
        }
    }
    Ok(Command::Key(key, modifiers))
}

/// An annotator plus the form controls feeding it.
pub struct Session<S: Surface> {
    pub annotator: Annotator<S>,
    pub controls: ControlsState,
}

impl<S: Surface> Session<S> {
    pub fn new(annotator: Annotator<S>) -> Self {
        Self {
            annotator,
            controls: ControlsState::new(),
        }
    }

    /// Parse and run one line. Returns text to show the user, if any.
    pub fn run_line(&mut self, line: &str) -> Result<Option<String>, ScriptError> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(None),
        }
    }

    /// Run a parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>, ScriptError> {
        match command {
            Command::Text(text) => self.controls.set_text(text),
            Command::Size(size) => self.controls.set_font_size(size),
            Command::Style(style) => self.controls.set_font_style_str(&style)?,
            Command::Add => self.annotator.add_from(&self.controls),
            Command::Undo => {
                if !self.annotator.undo() {
                    return Ok(Some("nothing to undo".to_string()));
                }
            }
            Command::Redo => {
                if !self.annotator.redo() {
                    return Ok(Some("nothing to redo".to_string()));
                }
            }
            Command::Pointer(event) => {
                self.annotator.handle_pointer(event);
            }
            Command::Key(key, modifiers) => match ShortcutRegistry::resolve(&key, modifiers) {
                Some(action) => {
                    self.annotator.apply(action, &self.controls);
                }
                None => return Ok(Some(format!("no shortcut bound to {key}"))),
            },
            Command::List => return Ok(Some(self.listing())),
            Command::Help => return Ok(Some(ShortcutRegistry::help_text())),
        }
        Ok(None)
    }

    /// Human-readable dump of history and redo stack.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "history ({}):", self.annotator.entries().len());
        for (i, entry) in self.annotator.entries().iter().enumerate() {
            let _ = writeln!(out, "  [{i}] {}", describe(entry));
        }
        let _ = write!(out, "redo stack ({})", self.annotator.redo_stack().len());
        for entry in self.annotator.redo_stack() {
            let _ = write!(out, "\n  {}", describe(entry));
        }
        out
    }
}

fn describe(entry: &TextEntry) -> String {
    format!(
        "{:?} at ({}, {}) {}px {}",
        entry.content,
        entry.x(),
        entry.y(),
        entry.font_size,
        entry.font_style
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use textmark_core::FontStyle;
    use textmark_render::RecordingSurface;

    fn session() -> Session<RecordingSurface> {
        Session::new(Annotator::new(RecordingSurface::new()))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("add").unwrap(), Some(Command::Add));
        assert_eq!(Command::parse("  # comment").unwrap(), None);
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(
            Command::parse("text  two spaces").unwrap(),
            Some(Command::Text(" two spaces".to_string()))
        );
        assert_eq!(Command::parse("size 24").unwrap(), Some(Command::Size(24.0)));
        assert_eq!(
            Command::parse("down 60 95").unwrap(),
            Some(Command::Pointer(PointerEvent::down(60.0, 95.0)))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Command::parse("jump"),
            Err(ScriptError::UnknownCommand(_))
        ));
        assert!(matches!(
            Command::parse("size big"),
            Err(ScriptError::InvalidNumber(_))
        ));
        assert!(matches!(
            Command::parse("move 10"),
            Err(ScriptError::MissingArgument { command: "move", .. })
        ));
        assert!(matches!(
            Command::parse("key ctrl+"),
            Err(ScriptError::MissingArgument { command: "key", .. })
        ));
    }

    #[test]
    fn test_parse_up_coordinates() {
        assert_eq!(
            Command::parse("up").unwrap(),
            Some(Command::Pointer(PointerEvent::up(0.0, 0.0)))
        );
        assert_eq!(
            Command::parse("up 10 20").unwrap(),
            Some(Command::Pointer(PointerEvent::up(10.0, 20.0)))
        );
        assert!(matches!(
            Command::parse("up 10"),
            Err(ScriptError::MissingArgument { command: "up", .. })
        ));
        assert!(matches!(
            Command::parse("down 1 2 3"),
            Err(ScriptError::MissingArgument { command: "down", .. })
        ));
    }

    #[test]
    fn test_parse_tab_separated() {
        assert_eq!(
            Command::parse("move\t200\t300").unwrap(),
            Some(Command::Pointer(PointerEvent::moved(200.0, 300.0)))
        );
        assert_eq!(
            Command::parse("text\tHello").unwrap(),
            Some(Command::Text("Hello".to_string()))
        );
    }

    #[test]
    fn test_parse_key_chord() {
        let command = Command::parse("key Ctrl+Shift+Z").unwrap();
        let expected = Modifiers {
            ctrl: true,
            shift: true,
            ..Default::default()
        };
        assert_eq!(command, Some(Command::Key("Z".to_string(), expected)));
    }

    #[test]
    fn test_script_session() {
        let mut session = session();
        for line in ["text Hello", "style bold italic", "size 20", "add", "down 60 95", "move 200 300", "up"] {
            assert_eq!(session.run_line(line).unwrap(), None);
        }
        let entry = &session.annotator.entries()[0];
        assert_eq!(entry.content, "Hello");
        assert_eq!(entry.font_style, FontStyle::BoldItalic);
        assert_eq!(entry.position, Point::new(175.0, 310.0));
        assert!(!session.annotator.drag_state().is_dragging());
    }

    #[test]
    fn test_noop_messages() {
        let mut session = session();
        assert_eq!(session.run_line("undo").unwrap().as_deref(), Some("nothing to undo"));
        assert_eq!(session.run_line("redo").unwrap().as_deref(), Some("nothing to redo"));
    }

    #[test]
    fn test_keys_drive_actions() {
        let mut session = session();
        session.run_line("text a").unwrap();
        session.run_line("key enter").unwrap();
        session.run_line("key ctrl+z").unwrap();
        assert!(session.annotator.entries().is_empty());
        session.run_line("key ctrl+y").unwrap();
        assert_eq!(session.annotator.entries().len(), 1);
        assert_eq!(
            session.run_line("key ctrl+q").unwrap().as_deref(),
            Some("no shortcut bound to q")
        );
    }

    #[test]
    fn test_bad_style_reports_and_keeps_going() {
        let mut session = session();
        assert!(matches!(
            session.run_line("style wavy"),
            Err(ScriptError::InvalidStyle(_))
        ));
        session.run_line("add").unwrap();
        assert_eq!(session.annotator.entries()[0].font_style, FontStyle::Normal);
    }

    #[test]
    fn test_listing() {
        let mut session = session();
        session.run_line("text A").unwrap();
        session.run_line("add").unwrap();
        session.run_line("text B").unwrap();
        session.run_line("add").unwrap();
        session.run_line("undo").unwrap();

        let listing = session.run_line("list").unwrap().unwrap();
        assert_eq!(
            listing,
            "history (1):\n  [0] \"A\" at (50, 100) 16px normal\nredo stack (1)\n  \"B\" at (50, 100) 16px normal"
        );
    }
}

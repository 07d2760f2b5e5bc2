//! Platform-aware undo/redo key chords.
//!
//! The primary modifier is Cmd on macOS and Ctrl everywhere else. Chords
//! are resolved only while focus is on the graph canvas; inside dialog text
//! fields the browser's native text undo must keep working, so resolution
//! is suppressed there.

/// Host platform, as far as modifier conventions go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    /// The platform this build runs on.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// A pressed key plus modifier state, as reported by the UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    /// Lowercase key character.
    pub key: char,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    fn primary(&self, platform: Platform) -> bool {
        match platform {
            Platform::MacOs => self.meta,
            Platform::Other => self.ctrl,
        }
    }
}

/// Where keyboard focus currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Canvas,
    /// A text input inside a dialog; chords are left to the native handler.
    DialogField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
}

/// Maps a chord to a history action, or `None` when the chord is not an
/// undo/redo chord or focus is not on the canvas.
pub fn resolve(chord: KeyChord, platform: Platform, focus: FocusTarget) -> Option<ShortcutAction> {
    if focus != FocusTarget::Canvas {
        return None;
    }
    match chord.key {
        'z' if chord.primary(platform) && chord.shift => Some(ShortcutAction::Redo),
        'z' if chord.primary(platform) => Some(ShortcutAction::Undo),
        // Ctrl+Y redo is a Windows/Linux convention only.
        'y' if platform == Platform::Other && chord.ctrl && !chord.shift => {
            Some(ShortcutAction::Redo)
        }
        _ => None,
    }
}

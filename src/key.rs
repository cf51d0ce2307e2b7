use crate::types::{Action, Operator};

/// Key codes representing individual keys on the keyboard.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key, as produced by the layout (`+` rather than `Shift+=`).
    Char(char),
    /// The Escape key, clears the calculator.
    Esc,
    /// The Enter/Return key, evaluates like `=`.
    Enter,
    /// The Backspace key, removes the last displayed character.
    Backspace,
    /// The Delete key, clears the calculator.
    Delete,
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A key press event with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            mods: Modifiers::empty(),
        }
    }

    /// The calculator action bound to this key, if any.
    ///
    /// Chords with CTRL, ALT or META are left to the host. SHIFT is ignored
    /// since most layouts need it to type `+`, `*` or `%`.
    pub fn action(&self) -> Option<Action> {
        if self
            .mods
            .intersects(Modifiers::CTRL | Modifiers::ALT | Modifiers::META)
        {
            return None;
        }

        match self.code {
            KeyCode::Char(c @ '0'..='9') => Some(Action::Digit(c as u8 - b'0')),
            KeyCode::Char('.' | ',') => Some(Action::Dot),
            KeyCode::Char('%') => Some(Action::Percent),
            KeyCode::Char('=') | KeyCode::Enter => Some(Action::Equals),
            KeyCode::Char(c @ ('+' | '-' | '*' | '/')) => {
                Operator::from_char(c).map(Action::Operator)
            }
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Esc | KeyCode::Delete => Some(Action::Clear),
            KeyCode::Char(_) => None,
        }
    }
}

/// Input events that can be processed by the calculator engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A keyboard press, resolved through [`KeyEvent::action`].
    Key(KeyEvent),
    /// A keypad button press (mouse click or touch) carrying its action directly.
    Press(Action),
}

impl InputEvent {
    pub fn action(&self) -> Option<Action> {
        match self {
            InputEvent::Key(ke) => ke.action(),
            InputEvent::Press(action) => Some(*action),
        }
    }
}

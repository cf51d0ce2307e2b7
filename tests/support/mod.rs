#![allow(dead_code)]

pub mod mock_clipboard;

use calc_mini::{Action, Engine, InputEvent, KeyCode, KeyEvent};

pub fn key(c: char) -> InputEvent {
    InputEvent::Key(KeyEvent::new(KeyCode::Char(c)))
}

/// Type `keys` one character at a time, as if on a keyboard.
pub fn type_keys(eng: &mut Engine, keys: &str) {
    for c in keys.chars() {
        let _ = eng.handle_event(key(c));
    }
}

/// Press keypad buttons in order.
pub fn press(eng: &mut Engine, actions: &[Action]) {
    for action in actions {
        let _ = eng.handle_event(InputEvent::Press(*action));
    }
}

//! Keypad layout and display rendering.
//!
//! Drawing and mouse hit-testing share [`Keypad::buttons`], so a click always
//! lands on the button that was drawn under it.

use ratatui::layout::Rect;

use crate::types::{Action, DisplayMode, Operator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
    /// Width in keypad columns.
    pub span: u16,
}

const fn button(label: &'static str, action: Action) -> Button {
    Button {
        label,
        action,
        span: 1,
    }
}

const fn digit(label: &'static str, d: u8) -> Button {
    button(label, Action::Digit(d))
}

const fn operator(op: Operator) -> Button {
    button(op.symbol(), Action::Operator(op))
}

pub const COLUMNS: u16 = 4;

/// The clear button's label is replaced at draw time with `AC` or `C`.
pub const KEYPAD: [&[Button]; 5] = [
    &[
        button("AC", Action::Clear),
        button("±", Action::ToggleSign),
        button("%", Action::Percent),
        operator(Operator::Divide),
    ],
    &[digit("7", 7), digit("8", 8), digit("9", 9), operator(Operator::Multiply)],
    &[digit("4", 4), digit("5", 5), digit("6", 6), operator(Operator::Subtract)],
    &[digit("1", 1), digit("2", 2), digit("3", 3), operator(Operator::Add)],
    &[
        Button {
            label: "0",
            action: Action::Digit(0),
            span: 2,
        },
        button(".", Action::Dot),
        button("=", Action::Equals),
    ],
];

pub struct Keypad;

impl Keypad {
    /// Every button with the cell it occupies inside `area`.
    pub fn buttons(area: Rect) -> Vec<(Rect, Button)> {
        let row_height = area.height / KEYPAD.len() as u16;
        let col_width = area.width / COLUMNS;

        let mut out = Vec::with_capacity(19);
        for (row, buttons) in KEYPAD.iter().enumerate() {
            let y = area.y + row as u16 * row_height;
            let mut col = 0;
            for b in buttons.iter() {
                let cell = Rect::new(area.x + col * col_width, y, col_width * b.span, row_height);
                out.push((cell, *b));
                col += b.span;
            }
        }
        out
    }

    /// The action of the button under terminal cell (`column`, `row`).
    pub fn hit(area: Rect, column: u16, row: u16) -> Option<Action> {
        Self::buttons(area)
            .into_iter()
            .find(|(cell, _)| {
                column >= cell.x
                    && column < cell.x + cell.width
                    && row >= cell.y
                    && row < cell.y + cell.height
            })
            .map(|(_, b)| b.action)
    }
}

/// Text for the display surface.
///
/// `Truncate` keeps only the integer part, the way `parseInt` reads the
/// display. `Full` shows the fraction too. Both drop redundant leading zeros
/// (`"07"` shows as `7`). Text without a leading digit (`Infinity`, `NaN`)
/// and exponent forms are shown verbatim in either mode.
pub fn render_display(value: &str, mode: DisplayMode) -> String {
    let (sign, rest) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let int_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if int_len == 0 || rest.contains('e') {
        return value.to_string();
    }

    let (int_part, tail) = rest.split_at(int_len);
    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };

    match mode {
        // parseInt("-0.5") is negative zero, which renders as 0
        DisplayMode::Truncate if int_part == "0" => "0".to_string(),
        DisplayMode::Truncate => format!("{sign}{int_part}"),
        DisplayMode::Full => format!("{sign}{int_part}{tail}"),
    }
}

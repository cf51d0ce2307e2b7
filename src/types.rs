use serde::Deserialize;

/// A binary arithmetic operator.
///
/// Operators chain strictly left to right; there is no precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The glyph shown on the keypad.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Parse an operator from a typed or displayed character.
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | 'x' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// A single user action forwarded to the engine.
///
/// The presentation layer produces these from key presses and keypad clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal point.
    Dot,
    /// Remove the last character of the display.
    Backspace,
    /// Negate the displayed value.
    ToggleSign,
    /// Divide the displayed value by 100.
    Percent,
    /// Choose the next binary operator.
    Operator(Operator),
    Equals,
    /// Reset to the initial state.
    Clear,
}

/// How the display surface renders the display value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Show only the integer part of finite values.
    #[default]
    Truncate,
    /// Show the display value exactly as entered or computed.
    Full,
}

/// A read-only copy of the calculator state.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSnapshot {
    /// The text currently shown.
    pub display_value: String,
    /// The pending binary operator, if one has been chosen.
    pub operator: Option<Operator>,
    /// The left-hand operand captured when the operator was chosen.
    pub pending_operand: Option<f64>,
    /// True right after an operator or equals; the next digit starts a fresh number.
    pub waiting_for_operand: bool,
}

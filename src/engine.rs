use tracing::{trace, warn};

use crate::error::CalcError;
use crate::format::{format_fixed, format_number, fraction_len, parse_display};
use crate::key::InputEvent;
use crate::types::{Action, EngineSnapshot, Operator};

/// Apply a binary operator.
///
/// Division by zero is not special-cased: it yields `inf`, `-inf` or `NaN`.
pub fn compute(left: f64, right: f64, op: Operator) -> f64 {
    match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => left / right,
    }
}

/// The left operand and operator captured by an operator press.
///
/// Kept together so an operand can never be pending without an operator.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    operand: f64,
    operator: Operator,
}

#[derive(Debug, Clone)]
pub struct Engine {
    display_value: String,
    pending: Option<Pending>,
    waiting_for_operand: bool,
}

#[derive(Default)]
pub struct EngineBuilder {
    value: Option<f64>,
}

impl EngineBuilder {
    /// Start with `value` on the display instead of `0`.
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            display_value: self
                .value
                .map(format_number)
                .unwrap_or_else(|| "0".to_string()),
            pending: None,
            waiting_for_operand: false,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text currently shown.
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display_value: self.display_value.clone(),
            operator: self.pending.map(|p| p.operator),
            pending_operand: self.pending.map(|p| p.operand),
            waiting_for_operand: self.waiting_for_operand,
        }
    }

    /// Label for the clear button: `AC` on a blank display, `C` otherwise.
    pub fn clear_label(&self) -> &'static str {
        if self.display_value == "0" { "AC" } else { "C" }
    }

    /// Resolve an input event and apply its action.
    ///
    /// Returns the action that ran, or `None` for keys with no binding.
    pub fn handle_event(&mut self, input: InputEvent) -> Option<Action> {
        let action = input.action()?;
        self.apply(action);
        Some(action)
    }

    /// Apply one action and return the new display value.
    ///
    /// Errors are logged and dropped; a failed action leaves the state untouched.
    pub fn apply(&mut self, action: Action) -> &str {
        let result = match action {
            Action::Digit(d) => self.input_digit(d),
            Action::Dot => {
                self.input_dot();
                Ok(())
            }
            Action::Backspace => {
                self.clear_last_char();
                Ok(())
            }
            Action::ToggleSign => self.toggle_sign(),
            Action::Percent => self.input_percent(),
            Action::Operator(op) => self.handle_operator(op),
            Action::Equals => self.handle_equals(),
            Action::Clear => {
                self.handle_clear();
                Ok(())
            }
        };

        match result {
            Ok(()) => trace!(?action, display = %self.display_value, "applied"),
            Err(e) => warn!(?action, "action ignored: {e}"),
        }

        &self.display_value
    }

    pub fn input_digit(&mut self, digit: u8) -> Result<(), CalcError> {
        if digit > 9 {
            return Err(CalcError::InvalidDigit(digit));
        }
        let ch = char::from(b'0' + digit);
        if self.waiting_for_operand {
            self.display_value = ch.to_string();
        } else {
            self.display_value.push(ch);
        }
        self.waiting_for_operand = false;
        Ok(())
    }

    pub fn input_dot(&mut self) {
        if self.waiting_for_operand {
            self.display_value = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display_value.contains('.') {
            self.display_value.push('.');
        }
    }

    /// Backspace. An emptied display falls back to `0`.
    pub fn clear_last_char(&mut self) {
        self.display_value.pop();
        if self.display_value.is_empty() {
            self.display_value.push('0');
        }
    }

    pub fn toggle_sign(&mut self) -> Result<(), CalcError> {
        let value = parse_display(&self.display_value)?;
        self.display_value = format_number(value * -1.0);
        Ok(())
    }

    /// Divide by 100, keeping two more fractional digits than were shown.
    ///
    /// A zero value is left alone.
    pub fn input_percent(&mut self) -> Result<(), CalcError> {
        let value = parse_display(&self.display_value)?;
        if value == 0.0 {
            return Ok(());
        }
        let digits = fraction_len(&self.display_value) + 2;
        self.display_value = format_fixed(value / 100.0, digits);
        Ok(())
    }

    /// Choose the next operator, folding any pending one into the display first.
    pub fn handle_operator(&mut self, next: Operator) -> Result<(), CalcError> {
        let next_value = parse_display(&self.display_value)?;

        let operand = match self.pending {
            None => next_value,
            Some(pending) => {
                // A NaN left operand restarts from zero
                let left = if pending.operand.is_nan() {
                    0.0
                } else {
                    pending.operand
                };
                let result = compute(left, next_value, pending.operator);
                self.display_value = format_number(result);
                result
            }
        };

        self.pending = Some(Pending {
            operand,
            operator: next,
        });
        self.waiting_for_operand = true;
        Ok(())
    }

    /// Evaluate the pending operation, if any. Never repeats the last operation.
    pub fn handle_equals(&mut self) -> Result<(), CalcError> {
        let value = parse_display(&self.display_value)?;

        let result = match self.pending.take() {
            None => value,
            Some(pending) => compute(pending.operand, value, pending.operator),
        };

        self.display_value = format_number(result);
        self.waiting_for_operand = true;
        Ok(())
    }

    pub fn handle_clear(&mut self) {
        *self = Engine::new();
    }
}

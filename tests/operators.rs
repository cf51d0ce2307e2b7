use calc_mini::{Action, Engine, EngineBuilder, Operator, compute};

mod support;
use support::{press, type_keys};

#[test]
fn compute_four_functions() {
    assert_eq!(compute(5.0, 3.0, Operator::Add), 8.0);
    assert_eq!(compute(5.0, 3.0, Operator::Subtract), 2.0);
    assert_eq!(compute(5.0, 3.0, Operator::Multiply), 15.0);
    assert_eq!(compute(6.0, 3.0, Operator::Divide), 2.0);
}

#[test]
fn simple_addition() {
    let mut eng = Engine::new();
    type_keys(&mut eng, "5+3=");
    assert_eq!(eng.display_value(), "8");
}

#[test]
fn operators_chain_left_to_right() {
    let mut eng = Engine::new();
    type_keys(&mut eng, "2+3*4=");
    assert_eq!(eng.display_value(), "20");
}

#[test]
fn operator_press_shows_running_total() {
    let mut eng = Engine::new();
    type_keys(&mut eng, "10-4");
    assert_eq!(eng.display_value(), "4");

    type_keys(&mut eng, "/");
    let snap = eng.snapshot();
    assert_eq!(snap.display_value, "6");
    assert_eq!(snap.pending_operand, Some(6.0));
    assert_eq!(snap.operator, Some(Operator::Divide));
    assert!(snap.waiting_for_operand);

    type_keys(&mut eng, "4=");
    assert_eq!(eng.display_value(), "1.5");
}

#[test]
fn repeated_operator_press_folds_display_into_total() {
    // With no new operand the display value is used again: 5 + 5
    let mut eng = Engine::new();
    type_keys(&mut eng, "5+*");
    let snap = eng.snapshot();
    assert_eq!(snap.display_value, "10");
    assert_eq!(snap.operator, Some(Operator::Multiply));
}

#[test]
fn equals_without_operator_echoes_value() {
    let mut eng = Engine::new();
    type_keys(&mut eng, "7.50=");
    let snap = eng.snapshot();
    assert_eq!(snap.display_value, "7.5");
    assert!(snap.waiting_for_operand);
    assert_eq!(snap.operator, None);
}

#[test]
fn repeated_equals_does_not_repeat_operation() {
    let mut eng = Engine::new();
    type_keys(&mut eng, "2*3=");
    assert_eq!(eng.display_value(), "6");
    type_keys(&mut eng, "===");
    assert_eq!(eng.display_value(), "6");
}

#[test]
fn result_feeds_next_operation() {
    let mut eng = Engine::new();
    type_keys(&mut eng, "9-2=*3=");
    assert_eq!(eng.display_value(), "21");
}

#[test]
fn float_results_use_shortest_form() {
    let mut eng = Engine::new();
    type_keys(&mut eng, ".1+.2=");
    assert_eq!(eng.display_value(), "0.30000000000000004");
}

#[test]
fn division_by_zero_propagates() {
    let mut eng = Engine::new();
    type_keys(&mut eng, "1/0=");
    assert_eq!(eng.display_value(), "Infinity");

    type_keys(&mut eng, "-");
    press(&mut eng, &[Action::Digit(1), Action::Equals]);
    assert_eq!(eng.display_value(), "Infinity");

    let mut eng = Engine::new();
    type_keys(&mut eng, "0/0=");
    assert_eq!(eng.display_value(), "NaN");

    let mut eng = Engine::new();
    type_keys(&mut eng, "1");
    press(&mut eng, &[Action::ToggleSign]);
    type_keys(&mut eng, "/0=");
    assert_eq!(eng.display_value(), "-Infinity");
}

#[test]
fn nan_running_total_restarts_from_zero() {
    let mut eng = Engine::new();
    type_keys(&mut eng, "0/0+");
    assert_eq!(eng.display_value(), "NaN");

    type_keys(&mut eng, "4+");
    assert_eq!(eng.display_value(), "4");
}

#[test]
fn large_results_use_exponent_form() {
    let mut eng = EngineBuilder::default().value(1e20).build();
    type_keys(&mut eng, "*10=");
    assert_eq!(eng.display_value(), "1e+21");

    type_keys(&mut eng, "/");
    press(&mut eng, &[Action::Digit(1), Action::Digit(0), Action::Equals]);
    assert_eq!(eng.display_value(), "100000000000000000000");
}

//! Tests for operand entry: digits, decimal point, sign.

use super::*;
use crate::model::{Action, BinaryOp};

fn typed(digits: &[u8]) -> EngineState {
    let mut state = EngineState::new();
    for &d in digits {
        state = state.apply(Action::Digit(d));
    }
    state
}

// ===== Digit entry =====

#[test]
fn first_digit_replaces_the_idle_zero() {
    let state = typed(&[7]);
    assert_eq!(state.display(), "7");
    assert!(!state.result_just_shown, "typing should clear the result flag");
}

#[test]
fn digits_accumulate_in_order() {
    let state = typed(&[1, 2, 3]);
    assert_eq!(state.display(), "123");
}

#[test]
fn leading_zero_is_replaced_not_appended() {
    let state = typed(&[0, 0, 5]);
    assert_eq!(state.display(), "5", "leading zeros should collapse");
}

#[test]
fn negative_zero_keeps_sign_when_digit_arrives() {
    let mut state = typed(&[0]);
    state = state.apply(Action::Sign);
    assert_eq!(state.display(), "-0");
    state = state.apply(Action::Digit(4));
    assert_eq!(state.display(), "-4");
}

#[test]
fn digit_count_caps_at_fifteen() {
    let mut state = EngineState::new();
    for _ in 0..20 {
        state = state.apply(Action::Digit(9));
    }
    assert_eq!(state.display().len(), MAX_INPUT_DIGITS);
}

#[test]
fn sign_and_decimal_do_not_count_toward_the_cap() {
    let mut state = typed(&[0]);
    state = state.apply(Action::Sign); // "-0"
    state = state.apply(Action::Decimal); // "-0."
    for _ in 0..20 {
        state = state.apply(Action::Digit(9));
    }
    let digits = state.display().chars().filter(char::is_ascii_digit).count();
    assert_eq!(digits, MAX_INPUT_DIGITS);
    assert!(state.display().starts_with("-0."));
}

#[test]
fn out_of_range_digit_is_ignored() {
    let state = EngineState::new().apply(Action::Digit(11));
    assert_eq!(state, EngineState::new());
}

#[test]
fn digit_after_result_starts_a_new_expression() {
    let mut state = typed(&[5]);
    state = state.apply(Action::Equals); // history "5 ="
    state = state.apply(Action::Digit(8));
    assert_eq!(state.display(), "8");
    assert_eq!(state.history(), "", "new expression should drop old history");
}

#[test]
fn digit_after_operator_starts_second_operand_keeping_history() {
    let mut state = typed(&[5]);
    state = state.apply(Action::Operator(BinaryOp::Add));
    state = state.apply(Action::Digit(3));
    assert_eq!(state.display(), "3");
    assert_eq!(state.history(), "5 +", "operator history must survive");
}

// ===== Decimal point =====

#[test]
fn decimal_on_idle_state_starts_zero_point() {
    let state = EngineState::new().apply(Action::Decimal);
    assert_eq!(state.display(), "0.");
}

#[test]
fn decimal_appends_once() {
    let mut state = typed(&[3]);
    state = state.apply(Action::Decimal);
    state = state.apply(Action::Digit(5));
    assert_eq!(state.display(), "3.5");
}

#[test]
fn second_decimal_is_ignored() {
    let mut state = typed(&[3]);
    state = state.apply(Action::Decimal);
    state = state.apply(Action::Decimal);
    state = state.apply(Action::Digit(5));
    assert_eq!(state.display(), "3.5");
}

#[test]
fn decimal_after_result_starts_new_entry() {
    let mut state = typed(&[5]);
    state = state.apply(Action::Equals);
    state = state.apply(Action::Decimal);
    assert_eq!(state.display(), "0.");
    assert_eq!(state.history(), "");
}

// ===== Sign toggle =====

#[test]
fn sign_toggles_back_and_forth() {
    let mut state = typed(&[4, 2]);
    state = state.apply(Action::Sign);
    assert_eq!(state.display(), "-42");
    state = state.apply(Action::Sign);
    assert_eq!(state.display(), "42");
}

#[test]
fn sign_on_standalone_result_updates_first_operand() {
    let mut state = typed(&[5]);
    state = state.apply(Action::Operator(BinaryOp::Add));
    state = state.apply(Action::Digit(3));
    state = state.apply(Action::Equals); // display "8", first_operand 8
    state = state.apply(Action::Sign);
    assert_eq!(state.display(), "-8");
    assert_eq!(
        state.first_operand, -8.0,
        "sign flip on a result must carry into the next chained operation"
    );
}

#[test]
fn sign_while_typing_second_operand_leaves_first_operand_alone() {
    let mut state = typed(&[5]);
    state = state.apply(Action::Operator(BinaryOp::Add));
    state = state.apply(Action::Digit(3));
    state = state.apply(Action::Sign);
    assert_eq!(state.display(), "-3");
    assert_eq!(state.first_operand, 5.0);
}

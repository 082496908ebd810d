//! Tests for percent, reciprocal, square, and square root.

use super::*;
use crate::model::Action;

fn run(actions: &[Action]) -> EngineState {
    actions
        .iter()
        .fold(EngineState::new(), |state, &action| state.apply(action))
}

// ===== Percent =====

#[test]
fn percent_standalone_commits_value_over_hundred() {
    let state = run(&[Action::Digit(5), Action::Digit(0), Action::Percent]);
    assert_eq!(state.display(), "0.5");
    assert_eq!(state.history(), "50% =");
    assert!(state.result_just_shown);
}

#[test]
fn percent_standalone_leaves_first_operand_alone() {
    let state = run(&[Action::Digit(5), Action::Digit(0), Action::Percent]);
    assert_eq!(
        state.first_operand, 0.0,
        "standalone percent is display-only"
    );
}

#[test]
fn percent_in_additive_context_scales_by_first_operand() {
    let state = run(&[
        Action::Digit(2),
        Action::Digit(0),
        Action::Digit(0),
        Action::Operator(BinaryOp::Add),
        Action::Digit(1),
        Action::Digit(0),
        Action::Percent,
    ]);
    assert_eq!(state.display(), "20", "10% of 200 is 20");
    assert_eq!(state.history(), "200 + 10%");
    assert!(
        state.awaiting_second_operand,
        "percent must not auto-evaluate the pending operation"
    );
}

#[test]
fn percent_then_equals_uses_the_scaled_value() {
    let state = run(&[
        Action::Digit(2),
        Action::Digit(0),
        Action::Digit(0),
        Action::Operator(BinaryOp::Add),
        Action::Digit(1),
        Action::Digit(0),
        Action::Percent,
        Action::Equals,
    ]);
    assert_eq!(state.display(), "220");
    assert_eq!(state.history(), "200 + 20 =");
}

#[test]
fn percent_in_multiplicative_context_is_plain_scaling() {
    let state = run(&[
        Action::Digit(2),
        Action::Digit(0),
        Action::Digit(0),
        Action::Operator(BinaryOp::Multiply),
        Action::Digit(1),
        Action::Digit(0),
        Action::Percent,
    ]);
    assert_eq!(state.display(), "0.1", "10% under × is just 10/100");
    assert_eq!(state.history(), "200 × 10%");
}

#[test]
fn percent_under_pending_modulo_takes_the_generic_branch() {
    let state = run(&[
        Action::Digit(2),
        Action::Digit(0),
        Action::Operator(BinaryOp::Modulo),
        Action::Digit(5),
        Action::Digit(0),
        Action::Percent,
    ]);
    assert_eq!(state.display(), "0.5", "pending % scales by value/100");
    assert_eq!(state.history(), "20 % 50%");
}

#[test]
fn percent_on_bare_sign_is_a_no_op() {
    let mut state = run(&[Action::Digit(5)]);
    state.current_input = "-".to_string();
    let state = handle_percent(state);
    assert_eq!(state.current_input, "-");
    assert!(state.error.is_none());
}

// ===== Reciprocal =====

#[test]
fn reciprocal_commits_one_over_value() {
    let state = run(&[Action::Digit(8), Action::Reciprocal]);
    assert_eq!(state.display(), "0.125");
    assert_eq!(state.history(), "1/(8) =");
    assert_eq!(state.first_operand, 0.125);
    assert_eq!(state.pending_operator, None);
}

#[test]
fn reciprocal_of_zero_is_division_by_zero() {
    let state = run(&[Action::Digit(0), Action::Reciprocal]);
    assert_eq!(state.display(), "division-by-zero");
}

#[test]
fn reciprocal_clears_a_pending_operation() {
    let state = run(&[
        Action::Digit(5),
        Action::Operator(BinaryOp::Add),
        Action::Digit(4),
        Action::Reciprocal,
    ]);
    assert_eq!(state.display(), "0.25");
    assert_eq!(state.history(), "1/(4) =");
    assert_eq!(state.pending_operator, None);
    assert!(!state.awaiting_second_operand);
}

// ===== Square =====

#[test]
fn square_commits_the_product() {
    let state = run(&[Action::Digit(9), Action::Square]);
    assert_eq!(state.display(), "81");
    assert_eq!(state.history(), "sqr(9) =");
    assert_eq!(state.first_operand, 81.0);
}

#[test]
fn square_of_negative_is_positive() {
    let state = run(&[Action::Digit(3), Action::Sign, Action::Square]);
    assert_eq!(state.display(), "9");
    assert_eq!(state.history(), "sqr(-3) =");
}

#[test]
fn squared_results_chain_into_binary_operations() {
    let state = run(&[
        Action::Digit(4),
        Action::Square,
        Action::Operator(BinaryOp::Subtract),
        Action::Digit(6),
        Action::Equals,
    ]);
    assert_eq!(state.display(), "10");
    assert_eq!(state.history(), "16 - 6 =");
}

// ===== Square root =====

#[test]
fn square_root_commits_the_root() {
    let state = run(&[Action::Digit(8), Action::Digit(1), Action::SquareRoot]);
    assert_eq!(state.display(), "9");
    assert_eq!(state.history(), "sqrt(81) =");
}

#[test]
fn square_root_of_negative_is_invalid_input() {
    let state = run(&[Action::Digit(4), Action::Sign, Action::SquareRoot]);
    assert_eq!(state.display(), "invalid-input");
    assert_eq!(state.history(), "");
}

#[test]
fn square_root_error_then_digits_start_clean() {
    let mut state = run(&[Action::Digit(4), Action::Sign, Action::SquareRoot]);
    state = state.apply(Action::Digit(7));
    assert_eq!(
        state.display(),
        "invalid-input",
        "digits are gated until a clear"
    );
    state = state.apply(Action::Clear);
    state = state.apply(Action::Digit(7));
    assert_eq!(state.display(), "7");
    assert_eq!(state.history(), "");
}

#[test]
fn square_root_of_non_perfect_square_uses_fractional_render() {
    let state = run(&[Action::Digit(2), Action::SquareRoot]);
    assert_eq!(state.display(), "1.4142135624");
    assert_eq!(state.history(), "sqrt(2) =");
}

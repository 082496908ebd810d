//! Operator selection, equals, and the binary evaluator.
//!
//! Pure functions that drive the two-operand cycle: adopting a pending
//! operator (with chained evaluation), committing a result on equals, and
//! the repeated-equals semantics.

use crate::model::{BinaryOp, EngineError};
use crate::state::{format::format_value, EngineState};

/// Handle a binary operator press.
///
/// A pending operation with a typed second operand is evaluated first
/// (`5 + 3 -` commits `8` before adopting `-`); if that evaluation fails
/// the engine stays in the error state and the new operator is not
/// adopted. Otherwise the current operand becomes `first_operand`, the
/// operator becomes pending, and history shows `"a op"`.
pub fn handle_operator(mut state: EngineState, op: BinaryOp) -> EngineState {
    if !state.result_just_shown
        && state.awaiting_second_operand
        && parses_as_number(&state.current_input)
    {
        state = calculate(state);
        if state.error.is_some() {
            return state;
        }
    }

    if state.current_input == "-" {
        state.fail(EngineError::InvalidInput);
        return state;
    }
    state.first_operand = match state.current_input.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            state.fail(EngineError::InvalidNumber);
            return state;
        }
    };

    state.pending_operator = Some(op);
    state.history_log = format!("{} {}", format_value(state.first_operand), op);
    state.awaiting_second_operand = true;
    state.result_just_shown = true;
    state
}

/// Handle the equals press.
///
/// With no pending operator a bare operand is echoed into history
/// (`"5 ="`) without computing. With one, the pending operation is
/// evaluated and committed.
pub fn handle_equals(mut state: EngineState) -> EngineState {
    if state.pending_operator.is_none() {
        state.history_log = format!("{} =", state.current_input);
        state.result_just_shown = true;
        return state;
    }
    if state.current_input == "-" {
        state.fail(EngineError::InvalidInput);
        return state;
    }
    calculate(state)
}

/// Evaluate the pending binary operation and commit the result.
///
/// The second operand is `first_operand` itself when a result was just
/// shown while still awaiting one — this is what makes `5 + =` evaluate
/// `5 + 5`, and each further `=` reapply the same right-hand side.
/// On success history becomes `"a op b ="`, the result lands in both
/// `current_input` (formatted) and `first_operand`, and a non-finite
/// result raises the matching error gate.
pub(crate) fn calculate(mut state: EngineState) -> EngineState {
    let Some(op) = state.pending_operator else {
        return state;
    };

    let (second_operand, second_text) = if state.result_just_shown && state.awaiting_second_operand
    {
        (state.first_operand, format_value(state.first_operand))
    } else {
        if state.current_input == "-" {
            state.fail(EngineError::InvalidInput);
            return state;
        }
        match state.current_input.parse::<f64>() {
            Ok(value) => (value, state.current_input.clone()),
            Err(_) => {
                state.fail(EngineError::InvalidNumber);
                return state;
            }
        }
    };

    state.history_log = format!(
        "{} {} {} =",
        format_value(state.first_operand),
        op,
        second_text
    );

    let result = match op.apply(state.first_operand, second_operand) {
        Ok(result) => result,
        Err(err) => {
            state.fail(err);
            return state;
        }
    };

    state.current_input = format_value(result);
    state.first_operand = result;
    state.result_just_shown = true;
    state.awaiting_second_operand = false;
    state.tag_non_finite(result);
    state
}

fn parses_as_number(input: &str) -> bool {
    !input.is_empty() && input.parse::<f64>().is_ok()
}

// ===== Tests =====

#[cfg(test)]
#[path = "operator_handler_tests.rs"]
mod tests;

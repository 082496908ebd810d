//! Immediate unary operations: percent, reciprocal, square, square root.
//!
//! Pure functions that transform EngineState. Except for contextual
//! percent, these commit a finished result outside the two-operand cycle.

use crate::model::{BinaryOp, EngineError};
use crate::state::{format::format_value, EngineState};

/// Handle the percent press. Context-sensitive:
///
/// - With a pending operator and a second operand being entered, the value
///   is scaled relative to the operation: for `+`/`-` it becomes
///   `first_operand × value/100` (percentage *of* the first operand), for
///   every other operator plain `value/100`. The scaled value replaces the
///   entry (`history "a op v%"`) and nothing is auto-evaluated.
/// - Otherwise it is a standalone operation committing `value/100` with
///   history `"v% ="`. The standalone branch leaves `first_operand` and
///   any leftover pending operator untouched.
pub fn handle_percent(mut state: EngineState) -> EngineState {
    if state.current_input.is_empty() || state.current_input == "-" {
        return state;
    }
    let value = match state.current_input.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            state.fail(EngineError::InvalidNumber);
            return state;
        }
    };

    match state.pending_operator {
        Some(op) if state.awaiting_second_operand => {
            let scaled = match op {
                BinaryOp::Add | BinaryOp::Subtract => state.first_operand * (value / 100.0),
                _ => value / 100.0,
            };
            let entered = state.current_input.clone();
            state.history_log = format!(
                "{} {} {}%",
                format_value(state.first_operand),
                op,
                entered
            );
            state.current_input = format_value(scaled);
            state.tag_non_finite(scaled);
        }
        _ => {
            state.history_log = format!("{}% =", state.current_input);
            state.current_input = format_value(value / 100.0);
            state.result_just_shown = true;
        }
    }
    state
}

/// Handle the reciprocal press: `1/value`, rejecting zero.
pub fn handle_reciprocal(mut state: EngineState) -> EngineState {
    let Some(value) = parse_operand(&mut state) else {
        return state;
    };
    if value == 0.0 {
        state.fail(EngineError::DivisionByZero);
        return state;
    }
    let history = format!("1/({}) =", format_value(value));
    commit(state, history, 1.0 / value)
}

/// Handle the square press: `value × value`. Always succeeds.
pub fn handle_square(mut state: EngineState) -> EngineState {
    let Some(value) = parse_operand(&mut state) else {
        return state;
    };
    let history = format!("sqr({}) =", format_value(value));
    commit(state, history, value * value)
}

/// Handle the square-root press: `sqrt(value)`, rejecting negatives.
pub fn handle_square_root(mut state: EngineState) -> EngineState {
    let Some(value) = parse_operand(&mut state) else {
        return state;
    };
    if value < 0.0 {
        state.fail(EngineError::InvalidInput);
        return state;
    }
    let history = format!("sqrt({}) =", format_value(value));
    commit(state, history, value.sqrt())
}

/// Shared guard for the unary operations: no-op on an empty or bare-sign
/// entry, error state on an unparseable one.
fn parse_operand(state: &mut EngineState) -> Option<f64> {
    if state.current_input.is_empty() || state.current_input == "-" {
        return None;
    }
    match state.current_input.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            state.fail(EngineError::InvalidNumber);
            None
        }
    }
}

/// Commit a unary result: formatted into the entry, saved as the first
/// operand for chaining, pending operation cleared.
fn commit(mut state: EngineState, history: String, result: f64) -> EngineState {
    state.history_log = history;
    state.current_input = format_value(result);
    state.first_operand = result;
    state.result_just_shown = true;
    state.pending_operator = None;
    state.awaiting_second_operand = false;
    state.tag_non_finite(result);
    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "unary_handler_tests.rs"]
mod tests;

//! Backspace: best-effort undo driven by the history string.
//!
//! Pure functions that transform EngineState. Backspace has no undo stack
//! to consult; the serialized history is the single record of the last
//! committed step, and undoing a completed computation means parsing it
//! back. Four regimes are tried in order:
//!
//! 1. Undo a completed computation (history is `"a op b ="` or `"v ="`).
//! 2. Undo an operator selection (history is `"a op"`, nothing typed yet).
//! 3. Plain character deletion while an entry is being typed.
//! 4. Fallback: reset the entry.

use crate::model::BinaryOp;
use crate::state::{format::format_value, EngineState};

/// Handle the backspace press.
pub fn handle_backspace(mut state: EngineState) -> EngineState {
    // Regime 1: a result is on display and the history holds the completed
    // step that produced it.
    if state.result_just_shown && !state.awaiting_second_operand {
        if let Some(op) = state.pending_operator {
            if !state.history_log.ends_with(op.symbol()) {
                return undo_completed_computation(state);
            }
        }
    }

    // Regime 2: an operator was just chosen and nothing has been typed for
    // the second operand; drop the operator and surface the first operand.
    if state.awaiting_second_operand && state.result_just_shown {
        let ends_with_pending = state
            .pending_operator
            .is_some_and(|op| state.history_log.ends_with(op.symbol()));
        if ends_with_pending {
            state.current_input = format_value(state.first_operand);
            state.history_log.clear();
            state.pending_operator = None;
            state.awaiting_second_operand = false;
            state.result_just_shown = false;
            return state;
        }
    }

    // Regime 3: actively typing; delete one character.
    if !state.result_just_shown {
        delete_last_char(&mut state);
        return state;
    }

    // Regime 4: nothing recoverable; reset the entry.
    state.current_input = "0".to_string();
    if !state.awaiting_second_operand {
        state.history_log.clear();
    }
    state
}

/// Restore the state from a completed history step.
///
/// `"a op b ="` (4+ tokens) rewinds to just before the equals: `a` and
/// `op` become pending again and `b` returns to the entry, editable.
/// `"v ="` (2 tokens) returns the echoed text to the entry. Anything
/// unparseable falls back to an entry reset.
fn undo_completed_computation(mut state: EngineState) -> EngineState {
    let history = std::mem::take(&mut state.history_log);
    let tokens: Vec<&str> = history.split(' ').collect();

    if tokens.len() >= 4 && tokens.last() == Some(&"=") {
        let first = tokens[0].parse::<f64>();
        let op = BinaryOp::from_symbol(tokens[1]);
        if let (Ok(first), Ok(op)) = (first, op) {
            let second = tokens[2].to_string();
            state.history_log = format!("{} {} {}", format_value(first), op, second);
            state.first_operand = first;
            state.pending_operator = Some(op);
            state.current_input = second;
            state.awaiting_second_operand = true;
            state.result_just_shown = false;
        } else {
            state.current_input = "0".to_string();
            state.result_just_shown = true;
        }
        return state;
    }

    if tokens.len() == 2 && tokens[1] == "=" {
        state.current_input = tokens[0].to_string();
        state.pending_operator = None;
        state.result_just_shown = false;
        return state;
    }

    state.current_input = "0".to_string();
    state
}

/// Delete the trailing character of the entry being typed.
///
/// Deleting the sole digit of a second operand keeps the entry as `"0"`
/// (the `"a op"` history stays pending); deleting down to nothing or to a
/// bare sign also collapses to `"0"`.
fn delete_last_char(state: &mut EngineState) {
    if state.current_input.is_empty() || state.current_input == "0" {
        state.current_input = "0".to_string();
        return;
    }

    let sole_second_operand_digit = state.awaiting_second_operand
        && state
            .pending_operator
            .is_some_and(|op| state.history_log.ends_with(op.symbol()))
        && state.current_input.len() == 1;

    if sole_second_operand_digit {
        state.current_input = "0".to_string();
        return;
    }

    state.current_input.pop();
    if state.current_input.is_empty() || state.current_input == "-" {
        state.current_input = "0".to_string();
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "backspace_handler_tests.rs"]
mod tests;

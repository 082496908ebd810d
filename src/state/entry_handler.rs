//! Operand entry handlers: digits, decimal point, sign toggle.
//!
//! Pure functions that transform EngineState in response to entry actions.
//! These build `current_input` as text; nothing here evaluates.

use crate::model::EngineError;
use crate::state::EngineState;

/// Maximum number of digits in a typed operand, sign and decimal point
/// excluded.
pub const MAX_INPUT_DIGITS: usize = 15;

/// Handle a digit press.
///
/// After a result (or a freshly chosen operator) the digit starts a new
/// number, clearing the history unless a second operand is being started.
/// While typing, a leading `"0"`/`"-0"` is replaced rather than appended
/// to, and input stops growing at [`MAX_INPUT_DIGITS`].
///
/// Digit values above 9 are ignored.
pub fn handle_digit(mut state: EngineState, digit: u8) -> EngineState {
    if digit > 9 {
        return state;
    }
    let d = char::from(b'0' + digit);

    if state.result_just_shown {
        state.current_input = d.to_string();
        state.result_just_shown = false;
        if !state.awaiting_second_operand {
            state.history_log.clear();
        }
        return state;
    }

    if state.current_input == "0" {
        state.current_input = d.to_string();
    } else if state.current_input == "-0" {
        state.current_input = format!("-{d}");
    } else if digit_count(&state.current_input) < MAX_INPUT_DIGITS {
        state.current_input.push(d);
    }
    state
}

/// Handle the decimal point press.
///
/// After a result the press starts a new `"0."` entry; otherwise at most
/// one decimal point is inserted, and a bare `"-"` becomes `"-0."`.
pub fn handle_decimal(mut state: EngineState) -> EngineState {
    if state.result_just_shown {
        state.current_input = "0.".to_string();
        state.result_just_shown = false;
        if !state.awaiting_second_operand {
            state.history_log.clear();
        }
        return state;
    }

    if !state.current_input.contains('.') {
        if state.current_input.is_empty() || state.current_input == "-" {
            state.current_input.push_str("0.");
        } else {
            state.current_input.push('.');
        }
    }
    state
}

/// Handle the sign toggle.
///
/// Toggles a leading `-` on the current operand. When the operand is a
/// standalone just-committed result, the new value is also re-parsed into
/// `first_operand` so the sign change carries into a chained operation.
pub fn handle_sign(mut state: EngineState) -> EngineState {
    if let Some(stripped) = state.current_input.strip_prefix('-') {
        state.current_input = stripped.to_string();
    } else {
        state.current_input.insert(0, '-');
    }

    if state.result_just_shown && !state.awaiting_second_operand {
        match state.current_input.parse::<f64>() {
            Ok(value) => state.first_operand = value,
            Err(_) => state.fail(EngineError::InvalidNumber),
        }
    }
    state
}

fn digit_count(input: &str) -> usize {
    input.chars().filter(char::is_ascii_digit).count()
}

// ===== Tests =====

#[cfg(test)]
#[path = "entry_handler_tests.rs"]
mod tests;

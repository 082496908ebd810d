//! Engine state and action dispatch.
//!
//! EngineState is the root state type for the calculator. All transitions
//! are pure: `apply` consumes the state and returns the successor.

use crate::model::{Action, BinaryOp, EngineError};
use crate::state::{backspace_handler, entry_handler, operator_handler, unary_handler};

// ===== EngineState =====

/// Calculator engine state. Pure data, no side effects.
///
/// One `EngineState` holds everything the calculator knows: the operand
/// being typed, the history trace, the pending operation, and the flags
/// describing where in the two-operand cycle the machine currently is.
/// Front ends feed [`Action`]s through [`EngineState::apply`] and read back
/// [`EngineState::display`] and [`EngineState::history`] after each one.
///
/// # State Machine
///
/// The two-operand cycle moves through three positions:
///
/// - **Entering the first operand**: no pending operator, digits accumulate
///   into `current_input`.
/// - **Operator chosen**: `pending_operator` set, `awaiting_second_operand`
///   and `result_just_shown` both true; the next digit starts the second
///   operand.
/// - **Result committed**: `result_just_shown` true, awaiting flag false;
///   the next digit starts a fresh expression, while `=` or an operator
///   chains off the result.
///
/// Unary operations (`Percent` standalone, `Reciprocal`, `Square`,
/// `SquareRoot`) commit a result immediately without touching the cycle's
/// pending slot (percent) or after clearing it (the other three).
///
/// # Invariants
///
/// - `current_input` is never empty; it is `"0"` in the idle/cleared state.
/// - `pending_operator == None` implies `history_log` has no trailing
///   operator and `awaiting_second_operand == false`.
/// - At most one operation is pending; a new operator press first evaluates
///   the pending one when a valid second operand exists.
/// - `history_log` is a re-parseable serialization of the last committed
///   step and is the only channel through which backspace recovers prior
///   numeric state. There is no separate undo stack.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    /// Textual operand currently being edited or displayed.
    pub current_input: String,

    /// Human-readable trace of the expression built so far.
    pub history_log: String,

    /// Left operand of the pending or last-committed operation.
    pub first_operand: f64,

    /// Operator awaiting a second operand. Deliberately retained across an
    /// `Equals` commit: backspace uses it to recognize a completed
    /// computation, and typing a fresh digit over a result re-enters the
    /// cycle with it.
    pub pending_operator: Option<BinaryOp>,

    /// True between choosing an operator and supplying/confirming the next
    /// operand.
    pub awaiting_second_operand: bool,

    /// True when `current_input` reflects a just-committed result or a
    /// freshly chosen operator, so the next digit starts a new number.
    pub result_just_shown: bool,

    /// Active error state, if any. While set, the display shows the error
    /// marker and every action except `Clear`/`ClearEntry` is a no-op.
    pub error: Option<EngineError>,
}

impl EngineState {
    /// Create the initial (idle/cleared) state.
    pub fn new() -> Self {
        Self {
            current_input: "0".to_string(),
            history_log: String::new(),
            first_operand: 0.0,
            pending_operator: None,
            awaiting_second_operand: false,
            result_just_shown: true,
            error: None,
        }
    }

    /// Apply one action and return the successor state.
    ///
    /// Total: never panics, never returns an error. Failure modes are
    /// expressed as the error state (see [`EngineState::fail`]).
    pub fn apply(mut self, action: Action) -> Self {
        // Error state gates everything except the two clears; ClearEntry
        // widens to a full Clear while an error is active.
        if self.error.is_some() {
            return match action {
                Action::Clear | Action::ClearEntry => Self::new(),
                _ => self,
            };
        }

        match action {
            Action::Digit(d) => entry_handler::handle_digit(self, d),
            Action::Decimal => entry_handler::handle_decimal(self),
            Action::Sign => entry_handler::handle_sign(self),
            Action::Operator(op) => operator_handler::handle_operator(self, op),
            Action::Equals => operator_handler::handle_equals(self),
            Action::Percent => unary_handler::handle_percent(self),
            Action::Reciprocal => unary_handler::handle_reciprocal(self),
            Action::Square => unary_handler::handle_square(self),
            Action::SquareRoot => unary_handler::handle_square_root(self),
            Action::Backspace => backspace_handler::handle_backspace(self),
            Action::Clear => Self::new(),
            Action::ClearEntry => {
                self.clear_entry();
                self
            }
        }
    }

    /// The main display string: the error marker while an error is active,
    /// otherwise the current operand.
    pub fn display(&self) -> &str {
        match self.error {
            Some(err) => err.marker(),
            None => &self.current_input,
        }
    }

    /// The history trace string.
    pub fn history(&self) -> &str {
        &self.history_log
    }

    /// Enter the error state.
    ///
    /// Drops the half-built expression: input back to `"0"`, history and
    /// pending operation cleared, result flag set so the first digit after
    /// a clear starts a fresh entry.
    pub(crate) fn fail(&mut self, err: EngineError) {
        self.current_input = "0".to_string();
        self.history_log.clear();
        self.first_operand = 0.0;
        self.pending_operator = None;
        self.awaiting_second_operand = false;
        self.result_just_shown = true;
        self.error = Some(err);
    }

    /// Tag the error state for a committed non-finite result.
    ///
    /// Unlike [`EngineState::fail`], the committed history and operands are
    /// left in place; only the gate is raised. The formatter has already
    /// rendered the matching marker into `current_input`.
    pub(crate) fn tag_non_finite(&mut self, result: f64) {
        if result.is_nan() {
            self.error = Some(EngineError::UndefinedResult);
        } else if result.is_infinite() {
            self.error = Some(EngineError::Overflow);
        }
    }

    /// Clear the in-progress entry (`ClearEntry` outside an error state).
    ///
    /// When no second operand is awaited the half-built expression is
    /// abandoned wholesale; when one is awaited, the `"a op"` history and
    /// pending operator survive and only the entry resets.
    fn clear_entry(&mut self) {
        self.current_input = "0".to_string();
        if !self.awaiting_second_operand {
            self.history_log.clear();
            self.pending_operator = None;
        }
        self.result_just_shown = true;
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "engine_state_tests.rs"]
mod tests;

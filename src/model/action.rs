//! Domain-level calculator actions independent of input bindings.

use crate::model::BinaryOp;

/// Domain-level actions a user can perform on the calculator.
///
/// These represent user intent, not physical keys. The mapping from
/// typed tokens to `Action` is handled by the REPL layer; any other
/// front end can produce the same actions from its own bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Operand entry
    /// Enter a single digit (0–9) of the current operand. REPL tokens: `0`–`9`
    Digit(u8),
    /// Insert the decimal point into the current operand. REPL token: `.`
    Decimal,
    /// Toggle the sign of the current operand. REPL token: `neg`
    Sign,

    // Two-operand cycle
    /// Select a binary operator, evaluating any pending operation first.
    /// REPL tokens: `+`, `-`, `x`/`*`, `/`, `mod`
    Operator(BinaryOp),
    /// Evaluate the pending operation, or echo a bare operand. REPL token: `=`
    Equals,

    // Immediate unary operations
    /// Context-sensitive percent (see the unary handler). REPL token: `%`
    Percent,
    /// Replace the current operand with its reciprocal. REPL token: `inv`
    Reciprocal,
    /// Replace the current operand with its square. REPL token: `sqr`
    Square,
    /// Replace the current operand with its square root. REPL token: `sqrt`
    SquareRoot,

    // Editing
    /// Best-effort undo of the last step (see the backspace handler).
    /// REPL tokens: `<`, `bs`
    Backspace,
    /// Reset the whole engine to its initial state. REPL token: `c`
    Clear,
    /// Clear the in-progress entry, keeping a pending operation if one
    /// exists. Acts as `Clear` while in an error state. REPL token: `ce`
    ClearEntry,
}

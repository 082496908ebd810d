//! Engine error states and their display markers.
//!
//! Errors here are calculator states, not control flow: raising one puts the
//! engine into a gated error state (see `EngineState::fail`) from which only
//! `Clear`/`ClearEntry` recover. The marker string is what the display shows
//! while the error is active.
//!
//! The error is an explicit tagged field on the state, never recovered by
//! scanning display text: the markers remain the display vocabulary, but
//! nothing ever parses them back.

use thiserror::Error;

/// Error states the calculator engine can enter.
///
/// All variants are non-fatal and locally recovered: the engine never
/// panics or returns a `Result` from `apply`. While an error is active,
/// every action except `Clear`/`ClearEntry` is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EngineError {
    /// A bare `-` was used where an operand was required.
    #[error("invalid-input")]
    InvalidInput,

    /// The current operand string failed to parse as a number.
    ///
    /// Not reachable through ordinary keypad entry (the accumulator only
    /// builds parseable strings), but the engine stays total if an undo
    /// restores a non-numeric entry and it is then used as an operand.
    #[error("invalid-number")]
    InvalidNumber,

    /// Division with a second operand of exactly zero.
    ///
    /// Also raised by `Reciprocal` on a zero operand.
    #[error("division-by-zero")]
    DivisionByZero,

    /// Modulo with a second operand of exactly zero.
    #[error("modulo-by-zero")]
    ModuloByZero,

    /// A committed result was ±∞.
    ///
    /// Tagged at commit time, after the formatter has rendered the marker
    /// into the operand; history and operands are left as committed.
    #[error("overflow")]
    Overflow,

    /// A committed result was NaN.
    ///
    /// Tagged at commit time, like [`EngineError::Overflow`].
    #[error("undefined-result")]
    UndefinedResult,
}

impl EngineError {
    /// The marker string shown on the display while this error is active.
    pub fn marker(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid-input",
            Self::InvalidNumber => "invalid-number",
            Self::DivisionByZero => "division-by-zero",
            Self::ModuloByZero => "modulo-by-zero",
            Self::Overflow => "overflow",
            Self::UndefinedResult => "undefined-result",
        }
    }
}

//! Binary operators and their evaluation semantics.

use crate::model::EngineError;
use std::fmt;

/// A binary operator awaiting (or applied to) a second operand.
///
/// The display symbol is also the history serialization: history strings
/// like `"5 + 3 ="` embed [`BinaryOp::symbol`], and the backspace undo
/// recovers the operator from a history token via [`BinaryOp::from_symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Multiplication (`×`).
    Multiply,
    /// Division (`÷`). Fails on a zero second operand.
    Divide,
    /// Modulo (`%`). Fails on a zero second operand.
    Modulo,
}

impl BinaryOp {
    /// Parse a history/display symbol back into an operator.
    pub fn from_symbol(symbol: &str) -> Result<Self, UnknownOperator> {
        match symbol {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "×" => Ok(Self::Multiply),
            "÷" => Ok(Self::Divide),
            "%" => Ok(Self::Modulo),
            other => Err(UnknownOperator(other.to_string())),
        }
    }

    /// The display/history symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Modulo => "%",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// `÷` and `%` reject a second operand of exactly zero. Overflow to
    /// ±∞ and NaN are not errors here; the formatter renders them and the
    /// engine tags the error state at commit time.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EngineError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(EngineError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            Self::Modulo => {
                if rhs == 0.0 {
                    Err(EngineError::ModuloByZero)
                } else {
                    Ok(lhs % rhs)
                }
            }
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ===== Error Types =====

/// A symbol that does not name a binary operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator symbol '{0}'")]
pub struct UnknownOperator(
    /// The offending symbol.
    pub String,
);

// ===== Tests =====

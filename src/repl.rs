//! Line-oriented terminal front end.
//!
//! A thin binding layer: tokens typed on a line are mapped onto engine
//! [`Action`]s, and the two observable strings are printed back after each
//! line. No calculator logic lives here.

use crate::config::ResolvedConfig;
use crate::model::{Action, BinaryOp};
use crate::state::EngineState;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Error type for REPL failures.
#[derive(Debug, Error)]
pub enum ReplError {
    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed REPL token: either an engine action or a loop directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Feed this action to the engine.
    Engine(Action),
    /// Exit the loop.
    Quit,
}

/// A token that names no command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token '{0}'")]
pub struct UnknownToken(
    /// The offending token.
    pub String,
);

/// Map one whitespace-separated token onto a [`Command`].
///
/// Tokens are matched case-insensitively. `%` is the percent action; the
/// modulo operator is spelled `mod`.
pub fn parse_token(token: &str) -> Result<Command, UnknownToken> {
    let lowered = token.to_lowercase();

    if lowered.len() == 1 {
        if let Some(digit) = lowered.chars().next().and_then(|c| c.to_digit(10)) {
            return Ok(Command::Engine(Action::Digit(digit as u8)));
        }
    }

    let action = match lowered.as_str() {
        "." => Action::Decimal,
        "+" => Action::Operator(BinaryOp::Add),
        "-" => Action::Operator(BinaryOp::Subtract),
        "x" | "*" | "×" => Action::Operator(BinaryOp::Multiply),
        "/" | "÷" => Action::Operator(BinaryOp::Divide),
        "mod" => Action::Operator(BinaryOp::Modulo),
        "%" => Action::Percent,
        "=" => Action::Equals,
        "c" => Action::Clear,
        "ce" => Action::ClearEntry,
        "<" | "bs" => Action::Backspace,
        "neg" => Action::Sign,
        "inv" => Action::Reciprocal,
        "sqr" => Action::Square,
        "sqrt" => Action::SquareRoot,
        "q" | "quit" => return Ok(Command::Quit),
        _ => return Err(UnknownToken(token.to_string())),
    };
    Ok(Command::Engine(action))
}

/// Run the read-dispatch-print loop until quit or end of input.
///
/// Each input line is split on whitespace; every token dispatches one
/// action, and the history and display strings are printed once per line.
/// Unknown tokens are reported and skipped.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &ResolvedConfig,
) -> Result<(), ReplError> {
    let mut state = EngineState::new();

    write!(output, "{}", config.prompt)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            match parse_token(token) {
                Ok(Command::Engine(action)) => {
                    debug!(?action, "dispatching action");
                    state = state.apply(action);
                }
                Ok(Command::Quit) => return Ok(()),
                Err(unknown) => writeln!(output, "{unknown}")?,
            }
        }
        render(&mut output, &state, config.echo_history)?;
        write!(output, "{}", config.prompt)?;
        output.flush()?;
    }

    Ok(())
}

fn render<W: Write>(output: &mut W, state: &EngineState, echo_history: bool) -> std::io::Result<()> {
    if echo_history && !state.history().is_empty() {
        writeln!(output, "{}", state.history())?;
    }
    writeln!(output, "{}", state.display())
}

// ===== Tests =====

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;

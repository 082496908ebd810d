//! Criterion benchmarks for action dispatch and result formatting.

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use padcalc::model::{Action, BinaryOp};
use padcalc::state::{format_value, EngineState};

/// A mixed stream touching every handler: entry, chaining, percent,
/// unary commits, undo, and the clears.
fn mixed_stream() -> Vec<Action> {
    vec![
        Action::Digit(1),
        Action::Digit(2),
        Action::Decimal,
        Action::Digit(5),
        Action::Operator(BinaryOp::Multiply),
        Action::Digit(4),
        Action::Equals,
        Action::Operator(BinaryOp::Subtract),
        Action::Digit(8),
        Action::Equals,
        Action::Backspace,
        Action::Backspace,
        Action::Digit(9),
        Action::Equals,
        Action::Sign,
        Action::Square,
        Action::SquareRoot,
        Action::Reciprocal,
        Action::Operator(BinaryOp::Add),
        Action::Digit(1),
        Action::Digit(0),
        Action::Percent,
        Action::Equals,
        Action::ClearEntry,
        Action::Clear,
    ]
}

fn bench_dispatch(c: &mut Criterion) {
    let stream = mixed_stream();
    c.bench_function("apply_mixed_stream", |b| {
        b.iter(|| {
            let mut state = EngineState::new();
            for &action in &stream {
                state = state.apply(black_box(action));
            }
            black_box(state)
        })
    });
}

fn bench_format(c: &mut Criterion) {
    let values = [0.0, 5.0, -0.5, 1.0 / 3.0, 1.0e12, 4.999_999_999_99];
    c.bench_function("format_value", |b| {
        b.iter(|| {
            for &value in &values {
                black_box(format_value(black_box(value)));
            }
        })
    });
}

criterion_group!(benches, bench_dispatch, bench_format);
criterion_main!(benches);

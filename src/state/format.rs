//! Result formatting: f64 to canonical display string.

use crate::model::EngineError;

/// Tolerance for snapping a result to the nearest integer (or to zero).
pub(crate) const EPSILON: f64 = 1e-10;

/// Render a computed value as the canonical display string.
///
/// Policy, in order:
/// 1. NaN renders as the `undefined-result` marker.
/// 2. ±∞ renders as the `overflow` marker.
/// 3. A value within `1e-10` of a nonzero integer renders as that integer,
///    with no decimal point.
/// 4. A nonzero value within `1e-10` of zero snaps to `"0"`.
/// 5. Anything else renders with up to 10 fractional digits, trailing
///    zeros trimmed, no thousands separators; `"-0"` normalizes to `"0"`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return EngineError::UndefinedResult.marker().to_string();
    }
    if value.is_infinite() {
        return EngineError::Overflow.marker().to_string();
    }

    let rounded = value.round();
    if (value - rounded).abs() < EPSILON && value != 0.0 {
        return format!("{rounded:.0}");
    }
    if value.abs() < EPSILON && value != 0.0 {
        return "0".to_string();
    }

    let mut rendered = format!("{value:.10}");
    if rendered.contains('.') {
        rendered.truncate(rendered.trim_end_matches('0').len());
        rendered.truncate(rendered.trim_end_matches('.').len());
    }
    if rendered == "-0" {
        "0".to_string()
    } else {
        rendered
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;

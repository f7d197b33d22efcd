//! Lenient numeric coercion applied to every external numeric input.
//!
//! Inputs are converted, never rejected: empty input is zero, anything
//! unparsable becomes `NaN` and is left to propagate through geometry
//! untouched.

/// Coerces a raw string to a number.
///
/// The value is trimmed first; an empty result is `0.0`, an unparsable one
/// is `NaN`.
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Coerces an optional attribute value; an absent attribute is `0.0`.
#[must_use]
pub fn attr_number(value: Option<&str>) -> f64 {
    match value {
        None => 0.0,
        Some(raw) => coerce_number(raw),
    }
}

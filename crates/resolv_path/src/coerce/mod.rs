//! Typed comparison for filter segments.
//!
//! The value in `[field=value]` arrives as text. [`coerce`] turns it into the
//! most specific scalar it spells, and [`equal_coerced`] compares that scalar
//! against tree values with rules that tolerate adapters disagreeing on
//! numeric representation (an `id: 1` read back as `1.0` still matches `[id=1]`).

use resolv_ir::Value;

/// Convert raw filter text into a scalar.
///
/// Tried in order: integer, float (scientific notation included), the words
/// `true`/`false` in any case, and finally the text itself. Integers go first
/// so `"1"` and `"0"` stay numbers and never become booleans.
pub fn coerce(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Int(n);
    }
    if let Ok(x) = raw.parse::<f64>() {
        return Value::Float(x);
    }
    if raw.eq_ignore_ascii_case("true") {
        Value::Bool(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Value::Bool(false)
    } else {
        Value::String(raw.to_owned())
    }
}

/// Compare a tree value against a coerced filter value.
///
/// | tree    | want   | rule                                   |
/// |---------|--------|----------------------------------------|
/// | bool    | bool   | equal                                  |
/// | int     | int    | equal                                  |
/// | float   | int    | float has no fraction and equals `want` |
/// | float   | float  | exactly equal                          |
/// | string  | string | equal                                  |
///
/// Any other scalar pairing compares the textual renderings, so a string
/// `"8080"` in the tree matches `[port=8080]`. Containers never match.
#[allow(clippy::float_cmp, reason = "filters match on exact equality")]
pub fn equal_coerced(tree: &Value, want: &Value) -> bool {
    match (tree, want) {
        (Value::Bool(t), Value::Bool(w)) => t == w,
        (Value::Int(t), Value::Int(w)) => t == w,
        (Value::Float(t), Value::Int(w)) => float_equals_int(*t, *w),
        (Value::Float(t), Value::Float(w)) => t == w,
        (Value::String(t), Value::String(w)) => t == w,
        (Value::Mapping(_) | Value::Sequence(_), _) => false,
        _ => fallback_text(tree) == fallback_text(want),
    }
}

/// Scalar text for the fallback comparison. Floats switch to exponent form
/// outside `1e-4 <= |x| < 1e21`, so `"1e-05"` in a tree matches `[x=1e-05]`.
fn fallback_text(value: &Value) -> String {
    match value {
        Value::Float(x) if x.is_finite() && *x != 0.0 => {
            let sci = format!("{x:e}");
            match sci.split_once('e') {
                Some((mantissa, exp)) => match exp.parse::<i32>() {
                    Ok(exp) if !(-4..21).contains(&exp) => {
                        let sign = if exp < 0 { '-' } else { '+' };
                        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
                    }
                    _ => value.to_string(),
                },
                None => value.to_string(),
            }
        }
        _ => value.to_string(),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp,
    reason = "round-trip through i64 detects fractional or out-of-range floats"
)]
fn float_equals_int(float: f64, int: i64) -> bool {
    float.fract() == 0.0 && float as i64 == int && int as f64 == float
}

#[cfg(test)]
mod tests;

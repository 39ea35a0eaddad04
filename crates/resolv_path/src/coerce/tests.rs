use super::*;

// === coerce ===

#[test]
fn integers() {
    assert_eq!(coerce("42"), Value::Int(42));
    assert_eq!(coerce("-7"), Value::Int(-7));
}

#[test]
fn one_and_zero_stay_numbers() {
    assert_eq!(coerce("1"), Value::Int(1));
    assert_eq!(coerce("0"), Value::Int(0));
}

#[test]
#[allow(clippy::approx_constant, reason = "3.14 is filter text, not pi")]
fn floats() {
    assert_eq!(coerce("3.14"), Value::Float(3.14));
    assert_eq!(coerce("1.2e3"), Value::Float(1200.0));
}

#[test]
fn integer_overflow_falls_back_to_float() {
    assert_eq!(coerce("9223372036854775808"), Value::Float(9.223_372_036_854_776e18));
}

#[test]
fn booleans_any_case() {
    assert_eq!(coerce("true"), Value::Bool(true));
    assert_eq!(coerce("false"), Value::Bool(false));
    assert_eq!(coerce("TRUE"), Value::Bool(true));
    assert_eq!(coerce("tRuE"), Value::Bool(true));
    assert_eq!(coerce("False"), Value::Bool(false));
}

#[test]
fn everything_else_is_text() {
    assert_eq!(coerce("hello"), Value::from("hello"));
    assert_eq!(coerce(""), Value::from(""));
    assert_eq!(coerce("yes"), Value::from("yes"));
    assert_eq!(coerce("1.2.3"), Value::from("1.2.3"));
}

// === equal_coerced: typed pairings ===

#[test]
fn bool_pairing() {
    assert!(equal_coerced(&Value::Bool(true), &Value::Bool(true)));
    assert!(!equal_coerced(&Value::Bool(false), &Value::Bool(true)));
}

#[test]
fn int_pairing() {
    assert!(equal_coerced(&Value::Int(5), &Value::Int(5)));
    assert!(!equal_coerced(&Value::Int(5), &Value::Int(6)));
}

#[test]
fn integral_float_matches_int() {
    assert!(equal_coerced(&Value::Float(1.0), &Value::Int(1)));
    assert!(equal_coerced(&Value::Float(-3.0), &Value::Int(-3)));
}

#[test]
fn fractional_float_does_not_match_int() {
    assert!(!equal_coerced(&Value::Float(5.1), &Value::Int(5)));
}

#[test]
fn non_finite_float_does_not_match_int() {
    assert!(!equal_coerced(&Value::Float(f64::INFINITY), &Value::Int(i64::MAX)));
    assert!(!equal_coerced(&Value::Float(f64::NAN), &Value::Int(0)));
}

#[test]
fn float_pairing_is_exact() {
    assert!(equal_coerced(&Value::Float(0.5), &Value::Float(0.5)));
    assert!(!equal_coerced(&Value::Float(0.1 + 0.2), &Value::Float(0.3)));
    assert!(!equal_coerced(&Value::Float(f64::NAN), &Value::Float(f64::NAN)));
}

#[test]
fn string_pairing() {
    assert!(equal_coerced(&Value::from("x"), &Value::from("x")));
    assert!(!equal_coerced(&Value::from("x"), &Value::from("y")));
}

// === equal_coerced: textual fallback ===

#[test]
fn numeric_string_in_tree_matches_int() {
    assert!(equal_coerced(&Value::from("8080"), &coerce("8080")));
}

#[test]
fn int_in_tree_matches_integral_float() {
    assert!(equal_coerced(&Value::Int(5), &Value::Float(5.0)));
}

#[test]
fn bool_string_in_tree_matches_bool() {
    assert!(equal_coerced(&Value::from("true"), &coerce("true")));
    assert!(!equal_coerced(&Value::from("TRUE"), &coerce("TRUE")));
}

#[test]
fn exponent_string_in_tree_matches_small_float() {
    assert!(equal_coerced(&Value::from("1e-05"), &coerce("1e-05")));
    assert!(equal_coerced(&Value::from("1.5e+21"), &coerce("1.5e21")));
    assert!(!equal_coerced(&Value::from("0.00001"), &coerce("1e-05")));
}

#[test]
fn plain_string_in_tree_matches_mid_range_float() {
    assert!(equal_coerced(&Value::from("0.0001"), &coerce("1e-4")));
    assert!(equal_coerced(&Value::from("2.5"), &coerce("2.5")));
    assert!(equal_coerced(
        &Value::from("100000000000000000000"),
        &coerce("1e20")
    ));
}

#[test]
fn null_never_matches_other_text() {
    assert!(!equal_coerced(&Value::Null, &coerce("x")));
}

#[test]
fn containers_never_match() {
    let list = Value::from(vec![Value::Int(1), Value::Int(2)]);
    assert!(!equal_coerced(&list, &coerce("[1,2]")));
}

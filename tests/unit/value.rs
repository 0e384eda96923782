//! Unit tests for scalar values and kinds.

use ordlist::{ScalarKind, ScalarValue};

#[test]
fn conversions_pick_the_right_variant() {
    assert_eq!(ScalarValue::from(42), ScalarValue::Int(42));
    assert_eq!(
        ScalarValue::from("hello"),
        ScalarValue::Text("hello".to_string())
    );
    assert_eq!(
        ScalarValue::from("owned".to_string()),
        ScalarValue::Text("owned".to_string())
    );
}

#[test]
fn integer_and_its_text_spelling_are_distinct() {
    // 20 and "20" share a spelling but never compare equal
    assert_ne!(ScalarValue::Int(20), ScalarValue::from("20"));
}

#[test]
fn negative_integers_order_numerically() {
    assert!(ScalarValue::Int(-5) < ScalarValue::Int(-1));
    assert!(ScalarValue::Int(-1) < ScalarValue::Int(0));
}

#[test]
fn text_ordering_ignores_numeric_meaning() {
    // Byte-lexicographic, so "10" sorts before "9"
    assert!(ScalarValue::from("10") < ScalarValue::from("9"));
}

#[test]
fn display_renders_the_bare_value() {
    assert_eq!(ScalarValue::Int(7).to_string(), "7");
    assert_eq!(ScalarValue::from("seven").to_string(), "seven");
}

#[test]
fn kinds_are_copyable_tags() {
    let kind = ScalarValue::Int(1).kind();
    let copy = kind;
    assert_eq!(kind, copy);
    assert_eq!(copy, ScalarKind::Int);
}

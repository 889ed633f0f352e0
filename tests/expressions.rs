use basil::{eval_expression, interpreter::value::Value};

fn assert_value(src: &str, expected: Value) {
    match eval_expression(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if eval_expression(src).is_ok() {
        panic!("Expression {src:?} succeeded but was expected to fail")
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 7 * 4", Value::Integer(30));
    assert_value("7 - 8 / 4", Value::Real(5.0));
    assert_value("(2 + 3) * 4", Value::Integer(20));
    assert_value("5 * ((1 + (1 + 1)) + (1 + 1))", Value::Integer(25));
}

#[test]
fn same_precedence_associates_left() {
    assert_value("10 - 3 - 4", Value::Integer(3));
    assert_value("100 / 5 / 2", Value::Real(10.0));
}

#[test]
fn unary_signs() {
    assert_value("+ 7", Value::Integer(7));
    assert_value("- - 4", Value::Integer(4));
    assert_value("5 - - 2", Value::Integer(7));
    assert_value("5 - - - 2", Value::Integer(3));
    assert_value("-2.5", Value::Real(-2.5));
}

#[test]
fn division_always_produces_a_real() {
    assert_value("10 / 2", Value::Real(5.0));
    assert_value("7 / 2", Value::Real(3.5));
    assert_value("1 / 3", Value::Real(1.0 / 3.0));
}

#[test]
fn integers_promote_next_to_reals() {
    assert_value("1 + 2.5", Value::Real(3.5));
    assert_value("2 * 1.5", Value::Real(3.0));
    assert_value("2.5 - 1", Value::Real(1.5));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("1 / 0");
    assert_failure("1 / 0.0");
    assert_failure("1 / (2 - 2)");

    let e = eval_expression("1 / 0").unwrap_err();
    assert_eq!(e.to_string(), "Error on line 1: Division by zero.");
}

#[test]
fn integer_overflow_is_an_error() {
    assert_failure("9223372036854775807 + 1");
    assert_failure("-9223372036854775807 - 2");
    assert_failure("9223372036854775807 * 2");
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_failure("1 + 2 3");
    assert_failure("1 + 2 )");
    assert_failure("");
}

#[test]
fn no_variables_are_in_scope() {
    assert_failure("x + 1");

    let e = eval_expression("x + 1").unwrap_err();
    assert_eq!(e.to_string(),
               "Error on line 1: Variable 'x' referenced before assignment.");
}

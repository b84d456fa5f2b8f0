//! Literal disambiguation

use filter_syntax::{
    ast::{Expression, Literal, NumberValue},
    parse,
};

fn right_literal(input: &str) -> Literal {
    match parse(input).expect("parse failed") {
        Expression::Comparison(cmp) => cmp.right().as_literal().cloned().expect("literal"),
        other => panic!("expected comparison, got {other:?}"),
    }
}

#[test]
fn test_integer_literal() {
    let Literal::Number(n) = right_literal("x=10") else {
        panic!("expected number");
    };
    assert_eq!(n.value(), &NumberValue::Integer(10));
}

#[test]
fn test_float_literal() {
    let Literal::Number(n) = right_literal("x=10.5") else {
        panic!("expected number");
    };
    assert_eq!(n.value(), &NumberValue::Float(10.5));
}

#[test]
fn test_big_integer_literal() {
    super::init_tracing();
    let Literal::Number(n) = right_literal("x=99999999999999999999") else {
        panic!("expected number");
    };
    assert!(n.is_big_int());
    assert_eq!(n.to_string(), "99999999999999999999");
}

#[test]
fn test_negative_numbers() {
    let Literal::Number(n) = right_literal("x=-3") else {
        panic!("expected number");
    };
    assert_eq!(n.as_i64(), Some(-3));
}

#[test]
fn test_keyword_literals() {
    assert_eq!(right_literal("x=true"), Literal::Boolean(true));
    assert_eq!(right_literal("x=false"), Literal::Boolean(false));
    assert_eq!(right_literal("x=null"), Literal::Null);
}

#[test]
fn test_string_literals() {
    let Literal::String(s) = right_literal(r"name='O\'Brien'") else {
        panic!("expected string");
    };
    assert_eq!(s.value(), "O'Brien");

    let Literal::String(s) = right_literal(r#"city="Antalya""#) else {
        panic!("expected string");
    };
    assert_eq!(s.value(), "Antalya");
}

#[test]
fn test_date_literals() {
    let Literal::Date(d) = right_literal("d='2021-01-05'") else {
        panic!("expected date");
    };
    assert_eq!(d.value(), "2021-01-05");

    let Literal::Date(d) = right_literal("d=2021-01-05") else {
        panic!("expected bare date");
    };
    assert_eq!(d.value(), "2021-01-05");

    let Literal::DateTime(d) = right_literal("d='2021-01-05T10:30:00Z'") else {
        panic!("expected date-time");
    };
    assert_eq!(d.value(), "2021-01-05T10:30:00Z");
}

#[test]
fn test_date_time_with_hour_only_offset() {
    for input in ["ts='2021-05-03T10:30:00+03'", "ts=2021-05-03T10:30-11"] {
        let Literal::DateTime(d) = right_literal(input) else {
            panic!("expected date-time in {input}");
        };
        assert!(d.to_date_time().is_some(), "{input}");
    }
}

#[test]
fn test_date_like_text_with_suffix_stays_string() {
    let Literal::String(s) = right_literal("d='2021-01-05 or later'") else {
        panic!("expected string");
    };
    assert_eq!(s.value(), "2021-01-05 or later");
}

#[test]
fn test_qualified_identifier_on_right_side() {
    let literal = right_literal("a.b=c.d.e");
    assert_eq!(literal.as_identifier().unwrap().path(), "c.d.e");
}

#[test]
fn test_dollar_identifiers() {
    let expr = parse("$id=1 and a.$b!=null").unwrap();
    assert_eq!(expr.to_string(), "$id=1 and a.$b!=null");

    let literal = right_literal("a=$ref.x");
    assert_eq!(literal.as_identifier().unwrap().path(), "$ref.x");
}

#[test]
fn test_keyword_prefixed_paths() {
    let literal = right_literal("a=true.x");
    assert_eq!(literal.as_identifier().unwrap().path(), "true.x");

    let literal = right_literal("a=null.y");
    assert_eq!(literal.as_identifier().unwrap().path(), "null.y");

    assert_eq!(right_literal("a=true"), Literal::Boolean(true));
}

//! Parse and validation failures

use filter_syntax::{FilterError, ValidationErrorKind, ast::LiteralKind, parse};

#[test]
fn test_invalid_date_is_validation_error() {
    let err = parse("d='2021-13-40'").unwrap_err();
    let FilterError::Validation(err) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert!(matches!(
        err.kind,
        ValidationErrorKind::InvalidLiteral {
            kind: LiteralKind::Date,
            ..
        }
    ));
    assert_eq!(err.offending_text(), "2021-13-40");
    assert!(err.to_string().contains("date literal"));
}

#[test]
fn test_invalid_date_time_is_validation_error() {
    let err = parse("ts='2021-02-30T10:00'").unwrap_err();
    let err = err.as_validation().expect("validation error");
    assert!(matches!(
        err.kind,
        ValidationErrorKind::InvalidLiteral {
            kind: LiteralKind::DateTime,
            ..
        }
    ));
}

#[test]
fn test_float_beyond_f64_range_is_validation_error() {
    let text = format!("{}.5", "9".repeat(400));
    let err = parse(&format!("x={text}")).unwrap_err();
    let err = err.as_validation().expect("validation error");
    assert!(matches!(
        err.kind,
        ValidationErrorKind::InvalidLiteral {
            kind: LiteralKind::Number,
            ..
        }
    ));
    assert_eq!(err.offending_text(), text);

    // integers of any size fall back to big integers instead
    assert!(parse(&format!("x={}", "9".repeat(400))).is_ok());
}

#[test]
fn test_syntax_errors_are_parse_errors() {
    for input in ["", "a=", "(a=1", "a=1 and", "a ==1", "a in [1,", "'open"] {
        let err = parse(input).unwrap_err();
        assert!(err.is_parse(), "expected parse error for {input:?}, got {err:?}");
    }
}

#[test]
fn test_parse_error_position() {
    let err = parse("a=1\nand b=)").unwrap_err();
    let err = err.as_parse().expect("parse error");
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 7);
    assert_eq!(err.offending_symbol.as_deref(), Some(")"));
    assert!(err.format_error().contains("and b=)"));
}

#[test]
fn test_parse_error_at_end_of_input() {
    let err = parse("a=").unwrap_err();
    let err = err.as_parse().expect("parse error");
    assert_eq!(err.offending_symbol, None);
}

//! Expression shapes produced by the builder

use filter_syntax::{
    ast::{
        ArithmeticOperator, ComparisonOperator, Expression, LogicalOperator, NodeKind,
        NumberLiteral, QualifiedIdentifier, StringLiteral,
    },
    parse,
};

fn ident(path: &str) -> Expression {
    QualifiedIdentifier::new(path).into()
}

#[test]
fn test_end_to_end_example() {
    let expr = parse(r#"address.city="Antalya" and age>=18"#).expect("parse failed");

    let expected = Expression::logical(
        LogicalOperator::And,
        vec![
            Expression::comparison(
                ident("address.city"),
                ComparisonOperator::Equal,
                StringLiteral::new("Antalya"),
            ),
            Expression::comparison(
                ident("age"),
                ComparisonOperator::GreaterOrEqual,
                NumberLiteral::from(18),
            ),
        ],
    );

    assert_eq!(expr, expected);
    assert_eq!(expr.to_string(), "address.city='Antalya' and age>=18");
}

#[test]
fn test_alias_normalization() {
    assert_eq!(parse("a=1 && b=2").unwrap(), parse("a=1 and b=2").unwrap());
    assert_eq!(parse("a=1 || b=2").unwrap(), parse("a=1 or b=2").unwrap());
    assert_eq!(
        parse("a=1 && b=2 or c=3").unwrap().to_string(),
        "a=1 and b=2 or c=3"
    );
}

#[test]
fn test_logical_chain_is_flat() {
    let Expression::Logical(logical) = parse("a=1 and b=2 and c=3").unwrap() else {
        panic!("expected logical expression");
    };
    assert_eq!(logical.items().len(), 3);
}

#[test]
fn test_all_comparison_operators() {
    for op in ComparisonOperator::ALL {
        let input = if op.is_word() {
            format!("a {op} b")
        } else {
            format!("a{op}b")
        };
        let Expression::Comparison(cmp) = parse(&input).unwrap() else {
            panic!("expected comparison for {input}");
        };
        assert_eq!(cmp.op(), op, "operator mismatch for {input}");
    }
}

#[test]
fn test_in_with_array() {
    let Expression::Comparison(cmp) = parse("status in ['active', 'pending']").unwrap() else {
        panic!("expected comparison");
    };
    assert_eq!(cmp.op(), ComparisonOperator::In);
    let Expression::Array(array) = cmp.right() else {
        panic!("expected array");
    };
    assert_eq!(array.items().len(), 2);
}

#[test]
fn test_arithmetic_is_left_to_right() {
    let Expression::Comparison(cmp) = parse("a+b*c>10").unwrap() else {
        panic!("expected comparison");
    };
    let Expression::Arithmetic(arith) = cmp.left() else {
        panic!("expected arithmetic");
    };
    let ops: Vec<_> = arith.items().iter().map(|item| item.op).collect();
    assert_eq!(
        ops,
        vec![
            ArithmeticOperator::Add,
            ArithmeticOperator::Add,
            ArithmeticOperator::Multiply
        ]
    );
}

#[test]
fn test_grouping_and_negative() {
    let expr = parse("(a=1 or b=2) and x=-(y)").unwrap();
    let Expression::Logical(logical) = &expr else {
        panic!("expected logical expression");
    };
    assert_eq!(logical.items()[0].kind(), NodeKind::ParenthesizedExpression);

    let Expression::Comparison(cmp) = &logical.items()[1] else {
        panic!("expected comparison");
    };
    assert_eq!(cmp.right().kind(), NodeKind::NegativeExpression);
}

#[test]
fn test_field_to_field_comparison() {
    let Expression::Comparison(cmp) = parse("start_date<end_date").unwrap() else {
        panic!("expected comparison");
    };
    assert_eq!(cmp.left().kind(), NodeKind::QualifiedIdentifier);
    assert_eq!(cmp.right().kind(), NodeKind::QualifiedIdentifier);
}

#[test]
fn test_tree_serializes_for_executors() {
    let expr = parse("a=1").unwrap();
    let json = serde_json::to_value(&expr).unwrap();
    assert_eq!(json["Comparison"]["op"], "Equal");
    assert_eq!(
        json["Comparison"]["left"]["Literal"]["QualifiedIdentifier"]["value"],
        "a"
    );
}

#[test]
fn test_tree_json_round_trip() {
    for input in [
        "address.city='Antalya' and age>=18",
        "(a=1 or b!=null) and c in [1,2.5,99999999999999999999]",
        "price*2-discount>=-(tax/4)",
        "d='2021-01-05' or t>'2021-05-03T10:30:00+03' or flag=true",
        "name !ilike 'it\\'s%'",
    ] {
        let expr = parse(input).unwrap();
        let json = serde_json::to_string(&expr).unwrap();
        let back: Expression = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr, "{input}");
        assert_eq!(back.to_string(), expr.to_string());
    }
}

#[test]
fn test_deserialize_rejects_invalid_nodes() {
    // date that is not on the calendar
    let json = r#"{"Literal":{"Date":{"value":"2021-13-40"}}}"#;
    let err = serde_json::from_str::<Expression>(json).unwrap_err();
    assert!(err.to_string().contains("invalid date literal"), "{err}");

    // logical chain with one item
    let json = r#"{"Logical":{"op":"And","items":[{"Literal":"Null"}]}}"#;
    let err = serde_json::from_str::<Expression>(json).unwrap_err();
    assert!(err.to_string().contains("at least two items"), "{err}");

    // first arithmetic item must be the implicit '+'
    let json = r#"{"Arithmetic":{"items":[
        {"op":"Multiply","expression":{"Literal":{"Number":{"value":{"Integer":1}}}}},
        {"op":"Add","expression":{"Literal":{"Number":{"value":{"Integer":2}}}}}
    ]}}"#;
    let err = serde_json::from_str::<Expression>(json).unwrap_err();
    assert!(err.to_string().contains("first arithmetic item"), "{err}");
}

use crate::customer_schema;
use filter_codec::FilterCodec;
use filter_syntax::ast::{
    ComparisonOperator, Expression, LogicalOperator, QualifiedIdentifier, StringLiteral,
};

#[test]
fn test_end_to_end_example() {
    let codec = FilterCodec::new(customer_schema());
    let decoded = codec
        .decode("address.city=\"Antalya\" and age>=18")
        .unwrap();

    let Expression::Logical(root) = &decoded.expression else {
        panic!("expected logical root, got {:?}", decoded.expression);
    };
    assert_eq!(root.op(), LogicalOperator::And);
    assert_eq!(root.items().len(), 2);

    assert_eq!(
        codec.encode(&decoded.expression),
        "address.city='Antalya' and age>=18"
    );
}

#[test]
fn test_canonicalize() {
    let codec = FilterCodec::new(customer_schema());

    assert_eq!(
        codec.canonicalize("age >= 18 && name like \"A%\"").unwrap(),
        "age>=18 and name like 'A%'"
    );
    assert_eq!(
        codec.canonicalize("status in [ 'a' , 'b' ] || age=1.50").unwrap(),
        "status in ['a','b'] or age=1.5"
    );
    assert!(codec.canonicalize("unknown=1").is_err());
}

#[test]
fn test_canonical_text_is_stable() {
    let codec = FilterCodec::new(customer_schema());
    for input in [
        "address.city='Antalya' and age>=18",
        "created_at>='2021-01-05T10:30:00Z' or name !ilike 'x\\'y'",
        "(age<18 or age>65) and status!=null",
    ] {
        let once = codec.canonicalize(input).unwrap();
        assert_eq!(once, input);
        assert_eq!(codec.canonicalize(&once).unwrap(), once);
    }
}

#[test]
fn test_encode_built_tree() {
    let codec = FilterCodec::new(customer_schema());
    let expr = Expression::comparison(
        QualifiedIdentifier::new("name"),
        ComparisonOperator::Equal,
        StringLiteral::new("O'Brien"),
    );

    let text = codec.encode(&expr);
    assert_eq!(text, r"name='O\'Brien'");
    assert_eq!(codec.decode(&text).unwrap().expression, expr);
}

use crate::{
    ast::{
        expr::{ArithmeticExpression, ArrayExpression, ComparisonExpression, Expression},
        literal::{
            DateLiteral, DateTimeLiteral, Literal, NumberLiteral, QualifiedIdentifier,
            StringLiteral,
        },
        operator::{ArithmeticOperator, ComparisonOperator, LogicalOperator},
        span::Span,
    },
    errors::{FilterError, FilterParseError, FilterValidationError, Result},
    grammar::{Rule, parse_tree},
    quote::unquote,
};
use pest::iterators::{Pair, Pairs};
use std::str::FromStr;
use tracing::debug;

/// Parse filter text into a validated expression tree.
pub fn parse(input: &str) -> Result<Expression> {
    debug!(filter = input, "building filter expression");
    let tree = parse_tree(input)?;
    build(tree)
}

/// Build an expression from a tree produced by the filter grammar.
///
/// Accepts the `filter` root or any expression-level rule below it.
pub fn build(pair: Pair<Rule>) -> Result<Expression> {
    match pair.as_rule() {
        Rule::filter => {
            let span = pair_to_span(&pair);
            let expression = pair
                .into_inner()
                .find(|p| p.as_rule() == Rule::expression)
                .ok_or_else(|| malformed("Empty input", span))?;
            build_expression(expression)
        }
        _ => build_expression(pair),
    }
}

fn pair_to_span(pair: &Pair<Rule>) -> Span {
    let (line, col) = pair.line_col();
    let span_pest = pair.as_span();
    Span::new(span_pest.start(), span_pest.end(), line, col)
}

fn malformed(message: &str, span: Span) -> FilterError {
    FilterParseError::new(message, span.line, span.column).into()
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, span: Span) -> Result<Pair<'i, Rule>> {
    pairs
        .next()
        .ok_or_else(|| malformed("Unexpected end of parse tree", span))
}

fn parse_operator<T: FromStr>(pair: &Pair<Rule>) -> Result<T> {
    pair.as_str().parse::<T>().map_err(|_| {
        let span = pair_to_span(pair);
        malformed(&format!("Unknown operator: {}", pair.as_str()), span)
    })
}

fn build_expression(pair: Pair<Rule>) -> Result<Expression> {
    let span = pair_to_span(&pair);

    match pair.as_rule() {
        Rule::expression => {
            // Unwrap the top-level expression rule
            let inner = next_pair(&mut pair.into_inner(), span)?;
            build_expression(inner)
        }
        Rule::logical_or | Rule::logical_and => build_logical(pair, span),
        Rule::comparison => build_comparison(pair, span),
        Rule::arithmetic => build_arithmetic(pair, span),
        Rule::parenthesized => {
            let inner = next_pair(&mut pair.into_inner(), span)?;
            Ok(Expression::parenthesized(build_expression(inner)?))
        }
        Rule::negative => {
            let inner = next_pair(&mut pair.into_inner(), span)?;
            Ok(Expression::negative(build_expression(inner)?))
        }
        Rule::array => {
            let items = pair
                .into_inner()
                .map(build_expression)
                .collect::<Result<Vec<_>>>()?;
            Ok(Expression::Array(ArrayExpression::new(items)))
        }
        _ => build_literal(pair, span).map(Expression::Literal),
    }
}

/// Both logical levels share one shape: `item (op item)*`.
fn build_logical(pair: Pair<Rule>, span: Span) -> Result<Expression> {
    let mut inner = pair.into_inner();
    let first = build_expression(next_pair(&mut inner, span)?)?;

    let mut op = None;
    let mut items = vec![first];
    while let Some(op_pair) = inner.next() {
        op.get_or_insert(parse_operator::<LogicalOperator>(&op_pair)?);
        items.push(build_expression(next_pair(&mut inner, span)?)?);
    }

    match op {
        Some(op) => Ok(Expression::logical(op, items)),
        None => Ok(items.remove(0)),
    }
}

fn build_comparison(pair: Pair<Rule>, span: Span) -> Result<Expression> {
    let mut inner = pair.into_inner();
    let left = build_expression(next_pair(&mut inner, span)?)?;

    // Check if there's an operator
    let Some(op_pair) = inner.next() else {
        return Ok(left);
    };
    let op = parse_operator::<ComparisonOperator>(&op_pair)?;
    let right = build_expression(next_pair(&mut inner, span)?)?;

    Ok(Expression::Comparison(ComparisonExpression::new(
        left, op, right,
    )))
}

fn build_arithmetic(pair: Pair<Rule>, span: Span) -> Result<Expression> {
    let mut inner = pair.into_inner();
    let first = build_expression(next_pair(&mut inner, span)?)?;

    let mut rest = Vec::new();
    while let Some(op_pair) = inner.next() {
        let op = parse_operator::<ArithmeticOperator>(&op_pair)?;
        rest.push((op, build_expression(next_pair(&mut inner, span)?)?));
    }

    if rest.is_empty() {
        Ok(first)
    } else {
        Ok(Expression::Arithmetic(ArithmeticExpression::new(first, rest)))
    }
}

fn build_literal(pair: Pair<Rule>, span: Span) -> Result<Literal> {
    let text = pair.as_str();
    let with_span = |err: FilterValidationError| FilterError::from(err.with_span(span));

    let literal = match pair.as_rule() {
        Rule::string => Literal::String(StringLiteral::new(unquote(text))),
        Rule::number => Literal::Number(NumberLiteral::parse(text).map_err(with_span)?),
        Rule::boolean => Literal::Boolean(text == "true"),
        Rule::null => Literal::Null,
        Rule::date => Literal::Date(DateLiteral::parse(strip_quotes(text)).map_err(with_span)?),
        Rule::date_time => {
            Literal::DateTime(DateTimeLiteral::parse(strip_quotes(text)).map_err(with_span)?)
        }
        Rule::qualified_identifier => {
            Literal::QualifiedIdentifier(QualifiedIdentifier::new(text))
        }
        rule => {
            return Err(malformed(
                &format!("Unexpected rule in expression: {rule:?}"),
                span,
            ));
        }
    };

    Ok(literal)
}

/// Date bodies never contain quotes or backslashes, so no unescaping is needed.
fn strip_quotes(text: &str) -> &str {
    text.trim_matches(|c| c == '\'' || c == '"')
}

use crate::ast::{
    literal::{
        DateLiteral, DateTimeLiteral, Literal, LiteralKind, NumberLiteral, QualifiedIdentifier,
        StringLiteral,
    },
    operator::{ArithmeticOperator, ComparisonOperator, LogicalOperator},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag shared by every node of a filter tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    StringLiteral,
    NumberLiteral,
    BooleanLiteral,
    NullLiteral,
    DateLiteral,
    DateTimeLiteral,
    QualifiedIdentifier,
    ComparisonExpression,
    LogicalExpression,
    ArithmeticExpression,
    ArrayExpression,
    ParenthesizedExpression,
    NegativeExpression,
}

impl From<LiteralKind> for NodeKind {
    fn from(kind: LiteralKind) -> Self {
        match kind {
            LiteralKind::String => NodeKind::StringLiteral,
            LiteralKind::Number => NodeKind::NumberLiteral,
            LiteralKind::Boolean => NodeKind::BooleanLiteral,
            LiteralKind::Null => NodeKind::NullLiteral,
            LiteralKind::Date => NodeKind::DateLiteral,
            LiteralKind::DateTime => NodeKind::DateTimeLiteral,
            LiteralKind::QualifiedIdentifier => NodeKind::QualifiedIdentifier,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Expression types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Literal(Literal),
    Comparison(ComparisonExpression),
    Logical(LogicalExpression),
    Arithmetic(ArithmeticExpression),
    Array(ArrayExpression),
    Parenthesized(ParenthesizedExpression),
    Negative(NegativeExpression),
}

impl Expression {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Literal(lit) => lit.kind().into(),
            Expression::Comparison(_) => NodeKind::ComparisonExpression,
            Expression::Logical(_) => NodeKind::LogicalExpression,
            Expression::Arithmetic(_) => NodeKind::ArithmeticExpression,
            Expression::Array(_) => NodeKind::ArrayExpression,
            Expression::Parenthesized(_) => NodeKind::ParenthesizedExpression,
            Expression::Negative(_) => NodeKind::NegativeExpression,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> Option<&QualifiedIdentifier> {
        self.as_literal().and_then(Literal::as_identifier)
    }

    pub fn comparison(
        left: impl Into<Expression>,
        op: ComparisonOperator,
        right: impl Into<Expression>,
    ) -> Self {
        Expression::Comparison(ComparisonExpression::new(left.into(), op, right.into()))
    }

    pub fn logical(op: LogicalOperator, items: Vec<Expression>) -> Self {
        Expression::Logical(LogicalExpression::new(op, items))
    }

    pub fn parenthesized(inner: impl Into<Expression>) -> Self {
        Expression::Parenthesized(ParenthesizedExpression::new(inner.into()))
    }

    pub fn negative(inner: impl Into<Expression>) -> Self {
        Expression::Negative(NegativeExpression::new(inner.into()))
    }

    pub fn array(items: Vec<Expression>) -> Self {
        Expression::Array(ArrayExpression::new(items))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(e) => write!(f, "{e}"),
            Expression::Comparison(e) => write!(f, "{e}"),
            Expression::Logical(e) => write!(f, "{e}"),
            Expression::Arithmetic(e) => write!(f, "{e}"),
            Expression::Array(e) => write!(f, "{e}"),
            Expression::Parenthesized(e) => write!(f, "{e}"),
            Expression::Negative(e) => write!(f, "{e}"),
        }
    }
}

impl From<Literal> for Expression {
    fn from(value: Literal) -> Self {
        Expression::Literal(value)
    }
}

macro_rules! literal_into_expression {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Expression {
                fn from(value: $ty) -> Self {
                    Expression::Literal(value.into())
                }
            }
        )*
    };
}

literal_into_expression!(
    StringLiteral,
    NumberLiteral,
    bool,
    DateLiteral,
    DateTimeLiteral,
    QualifiedIdentifier,
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonExpression {
    left: Box<Expression>,
    op: ComparisonOperator,
    right: Box<Expression>,
}

impl ComparisonExpression {
    pub fn new(left: Expression, op: ComparisonOperator, right: Expression) -> Self {
        Self {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn op(&self) -> ComparisonOperator {
        self.op
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl fmt::Display for ComparisonExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.op.is_word() {
            write!(f, "{} {} {}", self.left, self.op, self.right)
        } else {
            write!(f, "{}{}{}", self.left, self.op, self.right)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LogicalParts")]
pub struct LogicalExpression {
    op: LogicalOperator,
    items: Vec<Expression>,
}

impl LogicalExpression {
    /// Panics with fewer than two items.
    pub fn new(op: LogicalOperator, items: Vec<Expression>) -> Self {
        assert!(
            items.len() >= 2,
            "logical expression needs at least two items, got {}",
            items.len()
        );
        Self { op, items }
    }

    pub fn op(&self) -> LogicalOperator {
        self.op
    }

    pub fn items(&self) -> &[Expression] {
        &self.items
    }
}

#[derive(Deserialize)]
struct LogicalParts {
    op: LogicalOperator,
    items: Vec<Expression>,
}

impl TryFrom<LogicalParts> for LogicalExpression {
    type Error = String;

    fn try_from(parts: LogicalParts) -> Result<Self, Self::Error> {
        if parts.items.len() < 2 {
            return Err(format!(
                "logical expression needs at least two items, got {}",
                parts.items.len()
            ));
        }
        Ok(Self {
            op: parts.op,
            items: parts.items,
        })
    }
}

impl fmt::Display for LogicalExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.op)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// One step of an arithmetic chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticItem {
    pub op: ArithmeticOperator,
    pub expression: Expression,
}

/// Flat arithmetic chain applied left to right. The first item always carries
/// `Add` and its operator is never written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArithmeticParts")]
pub struct ArithmeticExpression {
    items: Vec<ArithmeticItem>,
}

impl ArithmeticExpression {
    /// Panics when `rest` is empty.
    pub fn new(
        first: Expression,
        rest: impl IntoIterator<Item = (ArithmeticOperator, Expression)>,
    ) -> Self {
        let mut items = vec![ArithmeticItem {
            op: ArithmeticOperator::Add,
            expression: first,
        }];
        items.extend(
            rest.into_iter()
                .map(|(op, expression)| ArithmeticItem { op, expression }),
        );
        assert!(
            items.len() >= 2,
            "arithmetic expression needs at least two items"
        );
        Self { items }
    }

    pub fn items(&self) -> &[ArithmeticItem] {
        &self.items
    }
}

#[derive(Deserialize)]
struct ArithmeticParts {
    items: Vec<ArithmeticItem>,
}

impl TryFrom<ArithmeticParts> for ArithmeticExpression {
    type Error = String;

    fn try_from(parts: ArithmeticParts) -> Result<Self, Self::Error> {
        if parts.items.len() < 2 {
            return Err("arithmetic expression needs at least two items".to_string());
        }
        if let Some(first) = parts.items.first().filter(|item| item.op != ArithmeticOperator::Add) {
            return Err(format!(
                "first arithmetic item must carry '+', got '{}'",
                first.op
            ));
        }
        Ok(Self { items: parts.items })
    }
}

impl fmt::Display for ArithmeticExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", item.op)?;
            }
            write!(f, "{}", item.expression)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpression {
    items: Vec<Expression>,
}

impl ArrayExpression {
    pub fn new(items: Vec<Expression>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Expression] {
        &self.items
    }
}

impl fmt::Display for ArrayExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesizedExpression {
    expression: Box<Expression>,
}

impl ParenthesizedExpression {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression: Box::new(expression),
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl fmt::Display for ParenthesizedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.expression)
    }
}

/// Arithmetic negation of a grouped expression, written `-(...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegativeExpression {
    expression: Box<Expression>,
}

impl NegativeExpression {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression: Box::new(expression),
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl fmt::Display for NegativeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-({})", self.expression)
    }
}

//! Filter expression tree.
//!
//! Nodes are immutable values without parent links. Every node renders back
//! to canonical filter text through `Display`, and parsing that text again
//! yields an equal tree. The one intended exception is `&&`/`||`, which are
//! normalized to `and`/`or` when the tree is built.

pub mod expr;
pub mod literal;
pub mod operator;
pub mod span;
pub mod visitor;

pub use expr::{
    ArithmeticExpression, ArithmeticItem, ArrayExpression, ComparisonExpression, Expression,
    LogicalExpression, NegativeExpression, NodeKind, ParenthesizedExpression,
};
pub use literal::{
    DateLiteral, DateTimeLiteral, Literal, LiteralKind, NumberLiteral, NumberValue,
    QualifiedIdentifier, StringLiteral,
};
pub use operator::{ArithmeticOperator, ComparisonOperator, LogicalOperator, UnknownOperator};
pub use span::Span;
pub use visitor::{ExpressionVisitor, walk_comparison, walk_expression};

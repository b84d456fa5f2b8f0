use crate::ast::{
    expr::{ComparisonExpression, Expression},
    literal::{Literal, QualifiedIdentifier},
};

/// Visitor trait for filter tree traversal.
///
/// Default methods walk the whole tree pre-order, left to right. Override a
/// method and call the matching `walk_*` function to keep descending.
pub trait ExpressionVisitor<'ast> {
    fn visit_expression(&mut self, expr: &'ast Expression) {
        walk_expression(self, expr);
    }

    fn visit_comparison(&mut self, comparison: &'ast ComparisonExpression) {
        walk_comparison(self, comparison);
    }

    fn visit_literal(&mut self, literal: &'ast Literal) {
        if let Literal::QualifiedIdentifier(ident) = literal {
            self.visit_identifier(ident);
        }
    }

    fn visit_identifier(&mut self, _ident: &'ast QualifiedIdentifier) {}
}

pub fn walk_expression<'ast, V>(visitor: &mut V, expr: &'ast Expression)
where
    V: ExpressionVisitor<'ast> + ?Sized,
{
    match expr {
        Expression::Literal(literal) => visitor.visit_literal(literal),
        Expression::Comparison(comparison) => visitor.visit_comparison(comparison),
        Expression::Logical(logical) => {
            for item in logical.items() {
                visitor.visit_expression(item);
            }
        }
        Expression::Arithmetic(arithmetic) => {
            for item in arithmetic.items() {
                visitor.visit_expression(&item.expression);
            }
        }
        Expression::Array(array) => {
            for item in array.items() {
                visitor.visit_expression(item);
            }
        }
        Expression::Parenthesized(inner) => visitor.visit_expression(inner.expression()),
        Expression::Negative(inner) => visitor.visit_expression(inner.expression()),
    }
}

pub fn walk_comparison<'ast, V>(visitor: &mut V, comparison: &'ast ComparisonExpression)
where
    V: ExpressionVisitor<'ast> + ?Sized,
{
    visitor.visit_expression(comparison.left());
    visitor.visit_expression(comparison.right());
}

use crate::{
    options::CodecOptions,
    resolver::{FieldResolutions, FieldResolver},
};
use filter_syntax::{
    ast::{ComparisonExpression, ComparisonOperator, Expression, ExpressionVisitor, QualifiedIdentifier},
    errors::{FilterValidationError, Result},
    parse,
};
use tracing::debug;

/// Decoded tree together with the fields its identifiers resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFilter<F> {
    pub expression: Expression,
    pub fields: FieldResolutions<F>,
}

impl<F> DecodedFilter<F> {
    pub fn into_expression(self) -> Expression {
        self.expression
    }
}

/// Couples the schema-agnostic filter syntax to one schema.
#[derive(Debug, Clone)]
pub struct FilterCodec<R> {
    resolver: R,
    options: CodecOptions,
}

impl<R: FieldResolver> FilterCodec<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_options(resolver, CodecOptions::default())
    }

    pub fn with_options(resolver: R, options: CodecOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Parse `text` and check every field path it references against the schema.
    pub fn decode(&self, text: &str) -> Result<DecodedFilter<R::Field>> {
        if let Some(limit) = self.options.max_length {
            let length = text.chars().count();
            if length > limit {
                return Err(FilterValidationError::input_too_long(length, limit).into());
            }
        }

        let expression = parse(text)?;
        let fields = self.resolve_fields(&expression)?;

        debug!(
            filter = %expression,
            fields = fields.len(),
            "decoded filter"
        );
        Ok(DecodedFilter { expression, fields })
    }

    /// Canonical text of `expression`.
    pub fn encode(&self, expression: &Expression) -> String {
        expression.to_string()
    }

    /// Decode `text` and return its canonical form.
    pub fn canonicalize(&self, text: &str) -> Result<String> {
        self.decode(text)
            .map(|decoded| self.encode(&decoded.expression))
    }

    /// Resolve every qualified identifier in an already built tree.
    pub fn resolve_fields(&self, expression: &Expression) -> Result<FieldResolutions<R::Field>> {
        let mut sites = FieldSites::default();
        sites.visit_expression(expression);

        let context_type = self.options.context_type.as_deref();
        let mut fields = FieldResolutions::new();

        for (ident, operator) in sites.sites {
            let path = ident.path();
            if !fields.contains(path) {
                let Some(field) = self.resolver.resolve(path, context_type) else {
                    debug!(path, ?context_type, "rejected unknown field");
                    return Err(FilterValidationError::unknown_field(path).into());
                };
                fields.insert(path, field);
            }

            let Some(operator) = operator.filter(|_| self.options.check_operators) else {
                continue;
            };
            let allowed = fields
                .get_path(path)
                .is_some_and(|field| self.resolver.is_operator_allowed(field, operator));
            if !allowed {
                debug!(path, %operator, "rejected operator for field");
                return Err(FilterValidationError::operator_not_allowed(path, operator).into());
            }
        }

        Ok(fields)
    }
}

/// Decode `text` with default options.
pub fn decode<R: FieldResolver>(text: &str, resolver: &R) -> Result<DecodedFilter<R::Field>> {
    FilterCodec::new(resolver).decode(text)
}

/// Every identifier in visit order, paired with the comparison operator when
/// it is a comparison operand, bare or parenthesized.
#[derive(Default)]
struct FieldSites<'ast> {
    sites: Vec<(&'ast QualifiedIdentifier, Option<ComparisonOperator>)>,
}

impl<'ast> ExpressionVisitor<'ast> for FieldSites<'ast> {
    fn visit_comparison(&mut self, comparison: &'ast ComparisonExpression) {
        for operand in [comparison.left(), comparison.right()] {
            match operand_identifier(operand) {
                Some(ident) => self.sites.push((ident, Some(comparison.op()))),
                None => self.visit_expression(operand),
            }
        }
    }

    fn visit_identifier(&mut self, ident: &'ast QualifiedIdentifier) {
        self.sites.push((ident, None));
    }
}

/// Identifier compared directly, looking through any grouping parentheses.
fn operand_identifier(mut operand: &Expression) -> Option<&QualifiedIdentifier> {
    while let Expression::Parenthesized(inner) = operand {
        operand = inner.expression();
    }
    operand.as_identifier()
}

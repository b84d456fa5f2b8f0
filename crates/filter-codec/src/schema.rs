use crate::{operators::OperatorSet, resolver::FieldResolver};
use filter_syntax::ast::ComparisonOperator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declared field of a [`SchemaFields`] table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(default)]
    pub data_type: Option<String>,

    /// Operators the field accepts; every operator when omitted.
    #[serde(default)]
    pub operators: OperatorSet,
}

impl FieldSpec {
    pub fn new(data_type: impl Into<String>) -> Self {
        Self {
            data_type: Some(data_type.into()),
            operators: OperatorSet::all(),
        }
    }

    pub fn with_operators(mut self, operators: OperatorSet) -> Self {
        self.operators = operators;
        self
    }
}

/// Field resolved against a [`SchemaFields`] table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub path: String,
    pub spec: FieldSpec,
}

/// In-memory schema for a single document type, keyed by dotted field path.
///
/// Ignores the context type passed by the codec. Deserializes from a JSON map
/// of `path -> FieldSpec`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaFields {
    fields: HashMap<String, FieldSpec>,
}

impl SchemaFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field(&mut self, path: impl Into<String>, spec: FieldSpec) -> Option<FieldSpec> {
        self.fields.insert(path.into(), spec)
    }

    pub fn with_field(mut self, path: impl Into<String>, spec: FieldSpec) -> Self {
        self.add_field(path, spec);
        self
    }

    pub fn get(&self, path: &str) -> Option<&FieldSpec> {
        self.fields.get(path)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<P: Into<String>> FromIterator<(P, FieldSpec)> for SchemaFields {
    fn from_iter<I: IntoIterator<Item = (P, FieldSpec)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(path, spec)| (path.into(), spec))
                .collect(),
        }
    }
}

impl FieldResolver for SchemaFields {
    type Field = SchemaField;

    fn resolve(&self, path: &str, _context_type: Option<&str>) -> Option<SchemaField> {
        self.fields.get(path).map(|spec| SchemaField {
            path: path.to_string(),
            spec: spec.clone(),
        })
    }

    fn is_operator_allowed(&self, field: &SchemaField, operator: ComparisonOperator) -> bool {
        field.spec.operators.allows(operator)
    }
}

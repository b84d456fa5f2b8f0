use filter_syntax::ast::{ComparisonOperator, QualifiedIdentifier};
use std::collections::{HashMap, hash_map};

/// Schema collaborator consulted while decoding.
///
/// Implementations must be safe to share for concurrent reads if the codec is
/// shared across threads.
pub trait FieldResolver {
    /// Lookup handle for a resolved field.
    type Field: Clone;

    fn resolve(&self, path: &str, context_type: Option<&str>) -> Option<Self::Field>;

    fn is_operator_allowed(&self, _field: &Self::Field, _operator: ComparisonOperator) -> bool {
        true
    }
}

impl<R: FieldResolver + ?Sized> FieldResolver for &R {
    type Field = R::Field;

    fn resolve(&self, path: &str, context_type: Option<&str>) -> Option<Self::Field> {
        (**self).resolve(path, context_type)
    }

    fn is_operator_allowed(&self, field: &Self::Field, operator: ComparisonOperator) -> bool {
        (**self).is_operator_allowed(field, operator)
    }
}

/// Resolved fields of one decoded tree, keyed by field path.
///
/// Kept beside the tree so the tree itself stays immutable and schema-free.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldResolutions<F> {
    entries: HashMap<String, F>,
}

impl<F> FieldResolutions<F> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, ident: &QualifiedIdentifier) -> Option<&F> {
        self.get_path(ident.path())
    }

    pub fn get_path(&self, path: &str) -> Option<&F> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, F> {
        self.entries.iter()
    }

    pub(crate) fn insert(&mut self, path: &str, field: F) {
        self.entries.insert(path.to_string(), field);
    }
}

impl<F> Default for FieldResolutions<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, F> IntoIterator for &'a FieldResolutions<F> {
    type Item = (&'a String, &'a F);
    type IntoIter = hash_map::Iter<'a, String, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_LENGTH: usize = 4096;

/// Decoder settings. Missing keys take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Inputs longer than this many characters are rejected before parsing.
    pub max_length: Option<usize>,
    pub check_operators: bool,
    /// Type name handed to [`FieldResolver::resolve`](crate::FieldResolver::resolve).
    pub context_type: Option<String>,
}

impl CodecOptions {
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_operator_checks(mut self, check_operators: bool) -> Self {
        self.check_operators = check_operators;
        self
    }

    pub fn with_context_type(mut self, context_type: impl Into<String>) -> Self {
        self.context_type = Some(context_type.into());
        self
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_length: Some(DEFAULT_MAX_LENGTH),
            check_operators: true,
            context_type: None,
        }
    }
}

use crate::{
    ast::{literal::LiteralKind, operator::ComparisonOperator, span::Span},
    grammar::Rule,
};
use pest::error::{Error as PestError, InputLocation, LineColLocation};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilterError>;

/// Failure of a decode call. Parse and validation failures are never merged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error(transparent)]
    Parse(#[from] FilterParseError),

    #[error(transparent)]
    Validation(#[from] FilterValidationError),
}

impl FilterError {
    pub fn is_parse(&self) -> bool {
        matches!(self, FilterError::Parse(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FilterError::Validation(_))
    }

    pub fn as_validation(&self) -> Option<&FilterValidationError> {
        match self {
            FilterError::Validation(err) => Some(err),
            FilterError::Parse(_) => None,
        }
    }

    pub fn as_parse(&self) -> Option<&FilterParseError> {
        match self {
            FilterError::Parse(err) => Some(err),
            FilterError::Validation(_) => None,
        }
    }
}

/// Grammar-level syntax failure.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("parse error at line {line}, column {column}: {message}")]
pub struct FilterParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    /// Token or character at the failure point, `None` at end of input.
    pub offending_symbol: Option<String>,
    pub source_snippet: String,
    #[source]
    pub grammar: Option<Box<PestError<Rule>>>,
}

impl FilterParseError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            offending_symbol: None,
            source_snippet: String::new(),
            grammar: None,
        }
    }

    pub fn from_pest_error(err: PestError<Rule>, input: &str) -> Self {
        let (line, column) = match err.line_col {
            LineColLocation::Pos((l, c)) => (l, c),
            LineColLocation::Span((l, c), _) => (l, c),
        };
        let offset = match err.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };

        Self {
            message: format!("{}", err.variant),
            line,
            column,
            offending_symbol: offending_symbol(input, offset),
            source_snippet: err.line().to_string(),
            grammar: Some(Box::new(err)),
        }
    }

    /// Format error with context for display
    pub fn format_error(&self) -> String {
        format!(
            "Parse Error at line {}, column {}:\n{}\n{}^\n{}",
            self.line,
            self.column,
            self.source_snippet,
            " ".repeat(self.column.saturating_sub(1)),
            self.message
        )
    }
}

/// Whole word when the failure starts on an identifier character, otherwise
/// the single character at `offset`.
fn offending_symbol(input: &str, offset: usize) -> Option<String> {
    let rest = input.get(offset..)?;
    let first = rest.chars().next()?;

    if is_word_char(first) {
        Some(rest.chars().take_while(|c| is_word_char(*c)).collect())
    } else {
        Some(first.to_string())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Type of semantic validation failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationErrorKind {
    #[error("invalid {kind} literal '{text}': {reason}")]
    InvalidLiteral {
        kind: LiteralKind,
        text: String,
        reason: String,
    },

    #[error("Unknown field '{path}'")]
    UnknownField { path: String },

    #[error("operator '{operator}' is not allowed for field '{path}'")]
    OperatorNotAllowed {
        path: String,
        operator: ComparisonOperator,
    },

    #[error("filter is {length} characters long, the limit is {limit}")]
    InputTooLong { length: usize, limit: usize },
}

/// Semantically invalid but syntactically well-formed input.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterValidationError {
    pub kind: ValidationErrorKind,
    pub span: Option<Span>,
    pub message: String,
}

impl FilterValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span: None,
            message,
        }
    }

    pub fn invalid_literal(kind: LiteralKind, text: &str, reason: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::InvalidLiteral {
            kind,
            text: text.to_string(),
            reason: reason.into(),
        })
    }

    pub fn unknown_field(path: &str) -> Self {
        Self::new(ValidationErrorKind::UnknownField {
            path: path.to_string(),
        })
    }

    pub fn operator_not_allowed(path: &str, operator: ComparisonOperator) -> Self {
        Self::new(ValidationErrorKind::OperatorNotAllowed {
            path: path.to_string(),
            operator,
        })
    }

    pub fn input_too_long(length: usize, limit: usize) -> Self {
        Self::new(ValidationErrorKind::InputTooLong { length, limit })
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// The raw literal text or field path that failed validation.
    pub fn offending_text(&self) -> &str {
        match &self.kind {
            ValidationErrorKind::InvalidLiteral { text, .. } => text,
            ValidationErrorKind::UnknownField { path }
            | ValidationErrorKind::OperatorNotAllowed { path, .. } => path,
            ValidationErrorKind::InputTooLong { .. } => "",
        }
    }
}

impl fmt::Display for FilterValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "validation error at {}: {}", span, self.message),
            None => write!(f, "validation error: {}", self.message),
        }
    }
}

impl std::error::Error for FilterValidationError {}

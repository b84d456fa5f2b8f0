use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Error returned when operator text is not part of the filter language.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {family} operator '{text}'")]
pub struct UnknownOperator {
    pub family: &'static str,
    pub text: String,
}

impl UnknownOperator {
    fn new(family: &'static str, text: &str) -> Self {
        Self {
            family,
            text: text.to_string(),
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    Equal,
    NotEqual,
    In,
    NotIn,
    Like,
    NotLike,
    ILike,
    NotILike,
}

impl ComparisonOperator {
    pub const ALL: [ComparisonOperator; 12] = [
        ComparisonOperator::LessThan,
        ComparisonOperator::LessOrEqual,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::GreaterOrEqual,
        ComparisonOperator::Equal,
        ComparisonOperator::NotEqual,
        ComparisonOperator::In,
        ComparisonOperator::NotIn,
        ComparisonOperator::Like,
        ComparisonOperator::NotLike,
        ComparisonOperator::ILike,
        ComparisonOperator::NotILike,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterOrEqual => ">=",
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::In => "in",
            ComparisonOperator::NotIn => "!in",
            ComparisonOperator::Like => "like",
            ComparisonOperator::NotLike => "!like",
            ComparisonOperator::ILike => "ilike",
            ComparisonOperator::NotILike => "!ilike",
        }
    }

    /// Word operators (`in`, `!like`, ...) are written with a space on each side.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            ComparisonOperator::In
                | ComparisonOperator::NotIn
                | ComparisonOperator::Like
                | ComparisonOperator::NotLike
                | ComparisonOperator::ILike
                | ComparisonOperator::NotILike
        )
    }

    pub fn is_negated(&self) -> bool {
        matches!(
            self,
            ComparisonOperator::NotEqual
                | ComparisonOperator::NotIn
                | ComparisonOperator::NotLike
                | ComparisonOperator::NotILike
        )
    }
}

impl FromStr for ComparisonOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparisonOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperator::new("comparison", s))
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical operators. The symbolic spellings `&&` and `||` are accepted
/// when parsing but never kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
        }
    }
}

impl FromStr for LogicalOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" | "&&" => Ok(LogicalOperator::And),
            "or" | "||" => Ok(LogicalOperator::Or),
            other => Err(UnknownOperator::new("logical", other)),
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Subtract => "-",
            ArithmeticOperator::Multiply => "*",
            ArithmeticOperator::Divide => "/",
        }
    }
}

impl FromStr for ArithmeticOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(ArithmeticOperator::Add),
            "-" => Ok(ArithmeticOperator::Subtract),
            "*" => Ok(ArithmeticOperator::Multiply),
            "/" => Ok(ArithmeticOperator::Divide),
            other => Err(UnknownOperator::new("arithmetic", other)),
        }
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
